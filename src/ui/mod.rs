//! UI module
//!
//! Contains all terminal UI components:
//! - Styles for consistent theming
//! - The session view (staged files, type list, message input, confirmation)
//! - The text input widget
//! - Footer with key hints

mod styles;
mod footer;
mod render;
mod text_input;

pub use styles::{layout, Styles};
pub use footer::render_footer;
pub use render::{render, NOTHING_STAGED};
pub use text_input::{TextEntry, TextInput};
