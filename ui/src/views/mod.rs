pub mod home;
pub mod shell;

pub use home::Home;
pub use shell::{App, MAIN_CSS};
