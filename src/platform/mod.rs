//! Browser integration
//!
//! DOM-backed implementations of the tracker's collaborators plus the
//! small amount of storage and URL access the app needs.

pub mod renderer;
pub mod scheduler;
pub mod storage;

pub use renderer::DomRenderer;
pub use scheduler::DomScheduler;

use crate::error::DomError;
use web_sys::{Document, Window};

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}
