//! Shared UI crate for ThaiPropertyAI. Views, page logic, localization and
//! configuration live here; the platform crates only launch [`App`].

pub mod catalog;
pub mod components;
pub mod config;
pub mod core;
pub mod i18n;
pub mod pages;
pub mod shell;
pub mod views;

pub use views::{App, MAIN_CSS};
