#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::tao::dpi::LogicalSize;
#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
#[cfg(feature = "desktop")]
use dioxus::prelude::*;

#[cfg(feature = "desktop")]
fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("ThaiPropertyAI – v{}", env!("CARGO_PKG_VERSION")))
                    .with_inner_size(LogicalSize::new(1280.0, 860.0))
                    .with_min_inner_size(LogicalSize::new(480.0, 640.0)),
            ),
        )
        .launch(ui::App);
}

// Built without a renderer: hand the app to whatever platform dioxus was compiled for.
#[cfg(not(feature = "desktop"))]
fn main() {
    dioxus::launch(ui::App);
}
