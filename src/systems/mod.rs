//! Application systems
//!
//! Window and rendering systems kept out of main.rs for testability.

mod render;
mod window;

pub use render::{RenderError, RenderSystem};
pub use window::{WindowError, WindowSystem};
