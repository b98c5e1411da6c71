//! App shell state: active language, active page and the session auth flag.
//!
//! All transitions go through [`AppShell::dispatch`] so routing and gating can
//! be tested without rendering anything. There is no history stack; `Back`
//! always lands on [`PageKey::Home`].

use crate::i18n::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PageKey {
    #[default]
    Home,
    Prediction,
    Comparison,
    Trends,
    Login,
    Register,
    Valuation,
    Forecasting,
    Map,
    Consultant,
    Subscription,
}

impl PageKey {
    pub const ALL: [PageKey; 11] = [
        PageKey::Home,
        PageKey::Prediction,
        PageKey::Comparison,
        PageKey::Trends,
        PageKey::Login,
        PageKey::Register,
        PageKey::Valuation,
        PageKey::Forecasting,
        PageKey::Map,
        PageKey::Consultant,
        PageKey::Subscription,
    ];

    /// Pages that show the login form until the session is authenticated.
    pub const fn requires_auth(self) -> bool {
        matches!(
            self,
            PageKey::Prediction
                | PageKey::Comparison
                | PageKey::Trends
                | PageKey::Valuation
                | PageKey::Forecasting
        )
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            PageKey::Home => "home",
            PageKey::Prediction => "prediction",
            PageKey::Comparison => "comparison",
            PageKey::Trends => "trends",
            PageKey::Login => "login",
            PageKey::Register => "register",
            PageKey::Valuation => "valuation",
            PageKey::Forecasting => "forecasting",
            PageKey::Map => "map",
            PageKey::Consultant => "consultant",
            PageKey::Subscription => "subscription",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellAction {
    SetLanguage(Language),
    Navigate(PageKey),
    LoginSucceeded,
    RegistrationCompleted,
    Back,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppShell {
    pub language: Language,
    /// Requested page. May be gated; see [`AppShell::visible_page`].
    pub page: PageKey,
    pub authenticated: bool,
}

impl AppShell {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            page: PageKey::Home,
            authenticated: false,
        }
    }

    /// Page actually mounted: gated pages resolve to `Login` until authenticated.
    pub fn visible_page(&self) -> PageKey {
        if self.page.requires_auth() && !self.authenticated {
            PageKey::Login
        } else {
            self.page
        }
    }

    pub fn dispatch(&mut self, action: ShellAction) {
        match action {
            ShellAction::SetLanguage(language) => self.language = language,
            ShellAction::Navigate(page) => self.page = page,
            ShellAction::LoginSucceeded => {
                self.authenticated = true;
                // A gated request stays put and now renders; a direct login goes home.
                if !self.page.requires_auth() {
                    self.page = PageKey::Home;
                }
            }
            ShellAction::RegistrationCompleted | ShellAction::Back => self.page = PageKey::Home,
        }
        tracing::debug!(
            ?action,
            page = self.page.as_str(),
            visible = self.visible_page().as_str(),
            authenticated = self.authenticated,
            language = %self.language,
            "shell transition"
        );
    }
}

impl Default for AppShell {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gated() -> impl Iterator<Item = PageKey> {
        PageKey::ALL.into_iter().filter(|p| p.requires_auth())
    }

    #[test]
    fn starts_home_and_signed_out() {
        let shell = AppShell::new(Language::Th);
        assert_eq!(shell.visible_page(), PageKey::Home);
        assert!(!shell.authenticated);
        assert_eq!(shell.language, Language::Th);
    }

    #[test]
    fn exactly_five_pages_are_gated() {
        let gated: Vec<_> = gated().collect();
        assert_eq!(
            gated,
            vec![
                PageKey::Prediction,
                PageKey::Comparison,
                PageKey::Trends,
                PageKey::Valuation,
                PageKey::Forecasting
            ]
        );
    }

    #[test]
    fn gated_pages_show_login_while_signed_out() {
        for page in gated() {
            let mut shell = AppShell::default();
            shell.dispatch(ShellAction::Navigate(page));
            assert_eq!(shell.visible_page(), PageKey::Login, "{page:?}");
        }
    }

    #[test]
    fn login_reveals_the_originally_requested_page() {
        for page in gated() {
            let mut shell = AppShell::default();
            shell.dispatch(ShellAction::Navigate(page));
            shell.dispatch(ShellAction::LoginSucceeded);
            assert!(shell.authenticated);
            assert_eq!(shell.visible_page(), page);
        }
    }

    #[test]
    fn login_from_header_returns_home() {
        let mut shell = AppShell::default();
        shell.dispatch(ShellAction::Navigate(PageKey::Login));
        shell.dispatch(ShellAction::LoginSucceeded);
        assert_eq!(shell.visible_page(), PageKey::Home);
    }

    #[test]
    fn open_pages_never_require_login() {
        for page in [PageKey::Map, PageKey::Consultant, PageKey::Subscription] {
            let mut shell = AppShell::default();
            shell.dispatch(ShellAction::Navigate(page));
            assert_eq!(shell.visible_page(), page);
        }
    }

    #[test]
    fn registration_returns_home_without_signing_in() {
        let mut shell = AppShell::default();
        shell.dispatch(ShellAction::Navigate(PageKey::Register));
        shell.dispatch(ShellAction::RegistrationCompleted);
        assert_eq!(shell.visible_page(), PageKey::Home);
        assert!(!shell.authenticated);
    }

    #[test]
    fn back_always_lands_home() {
        for page in PageKey::ALL {
            for authenticated in [false, true] {
                let mut shell = AppShell {
                    language: Language::En,
                    page,
                    authenticated,
                };
                shell.dispatch(ShellAction::Back);
                assert_eq!(shell.visible_page(), PageKey::Home);
                assert_eq!(shell.authenticated, authenticated);
            }
        }
    }

    #[test]
    fn language_switch_keeps_page_and_auth() {
        let mut shell = AppShell::default();
        shell.dispatch(ShellAction::Navigate(PageKey::Map));
        shell.dispatch(ShellAction::SetLanguage(Language::Th));
        assert_eq!(shell.language, Language::Th);
        assert_eq!(shell.visible_page(), PageKey::Map);
    }
}
