pub mod draft;
pub mod estimation;
pub mod format;
pub mod platform;
pub mod timing;
