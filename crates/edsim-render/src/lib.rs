//! edsim-render
//!
//! Terminal text for every screen, laid out with Tera templates.

pub mod error;
pub mod render;
pub mod styles;
mod templates;
pub mod views;

pub use error::RenderError;
pub use render::{FormScreen, Renderer};
pub use styles::RenderStyle;
