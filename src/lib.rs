//! triorbit - a small scene renderer
//!
//! Opens a window, uploads one of three fixed triangle scenes, and redraws
//! it with a time-driven camera orbit until the window is closed or Escape
//! is pressed.

pub mod config;
pub mod input;
pub mod systems;
