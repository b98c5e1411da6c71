//! Demo registration. Submission requires the terms checkbox; nothing else
//! is validated and the account is not stored.

use rand::Rng;

use crate::core::draft::{DraftError, FormDraft};
use crate::core::estimation::MockEstimator;
use crate::core::timing::Latency;

pub const TERMS_FIELD: &str = "terms";

#[derive(Clone, PartialEq, Eq)]
pub struct RegistrationRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl std::fmt::Debug for RegistrationRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationRequest")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

impl TryFrom<&FormDraft> for RegistrationRequest {
    type Error = DraftError;

    fn try_from(draft: &FormDraft) -> Result<Self, Self::Error> {
        if !draft.is_checked(TERMS_FIELD) {
            return Err(DraftError::Missing(TERMS_FIELD));
        }
        Ok(Self {
            first_name: draft.required_text("first_name")?,
            last_name: draft.required_text("last_name")?,
            email: draft.required_text("email")?,
            password: draft.required_text("password")?,
            confirm_password: draft.required_text("confirm_password")?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registered;

#[derive(Debug, Clone, Copy)]
pub struct Registrar {
    latency: Latency,
}

impl Registrar {
    pub fn new(latency: Latency) -> Self {
        Self { latency }
    }
}

impl MockEstimator for Registrar {
    type Request = RegistrationRequest;
    type Output = Registered;
    const NAME: &'static str = "register";

    fn latency(&self) -> Latency {
        self.latency
    }

    fn estimate<R: Rng + ?Sized>(&self, _request: &RegistrationRequest, _rng: &mut R) -> Registered {
        Registered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormDraft {
        FormDraft::with_values([
            ("first_name", "Malee"),
            ("last_name", "Srisuk"),
            ("email", "malee@example.com"),
            ("password", "one"),
            ("confirm_password", "two"),
        ])
    }

    #[test]
    fn unchecked_terms_make_submission_inert() {
        assert_eq!(
            RegistrationRequest::try_from(&filled()),
            Err(DraftError::Missing(TERMS_FIELD))
        );
    }

    #[test]
    fn mismatched_passwords_are_not_checked() {
        let mut draft = filled();
        draft.set_checked(TERMS_FIELD, true);
        let request = RegistrationRequest::try_from(&draft).unwrap();
        assert_ne!(request.password, request.confirm_password);
    }

    #[test]
    fn names_are_required() {
        let mut draft = filled();
        draft.set_checked(TERMS_FIELD, true);
        draft.set("last_name", "");
        assert_eq!(
            RegistrationRequest::try_from(&draft),
            Err(DraftError::Missing("last_name"))
        );
    }
}
