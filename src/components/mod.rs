pub mod app;
pub mod reset_button;
pub mod settings_modal;
pub mod status_hint;
pub mod touch_area;

pub use app::{App, AppProps};
