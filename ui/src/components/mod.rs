//! Shared building blocks for the page views.

pub mod app_navbar;
pub mod form;
pub mod page;

pub use app_navbar::AppNavbar;
pub use form::{
    checkbox_choices, choices, Checkbox, CheckboxGroup, NumberInput, PasswordInput, SelectInput,
    TextInput,
};
pub use page::{BackButton, LoadingIndicator, MeterBar, PageHeader, ResultPlaceholder, StatCard};
