//! UI styles
//!
//! Defines consistent styling for the entire application.
//! The palette follows the green title bar / magenta selection look
//! of the classic charm-style list.

use ratatui::style::{Color, Modifier, Style};

/// Color palette
pub mod colors {
    use ratatui::style::Color;

    // Base colors
    pub const FG: Color = Color::Reset;
    pub const DIM: Color = Color::DarkGray;

    // Section titles
    pub const TITLE_FG: Color = Color::Rgb(0xFF, 0xFD, 0xF5);
    pub const TITLE_BG: Color = Color::Rgb(0x25, 0xA0, 0x65);

    // List selection
    pub const SELECTED: Color = Color::Indexed(170);
    pub const SELECTED_DESC: Color = Color::Indexed(240);
    pub const DESC: Color = Color::Indexed(245);

    // Page indicator
    pub const PAGE: Color = Color::Rgb(0x88, 0x88, 0x88);

    // Text input
    pub const PROMPT: Color = Color::Indexed(170);
    pub const PLACEHOLDER: Color = Color::Indexed(240);

    // Footer
    pub const FOOTER_FG: Color = Color::DarkGray;

    // Errors
    pub const ERROR: Color = Color::Red;
}

/// Layout constants shared by the renderer and the widgets
pub mod layout {
    /// Padding around the whole view (vertical, horizontal)
    pub const APP_PADDING: (u16, u16) = (1, 2);
    /// Indent of staged file entries
    pub const ITEM_INDENT: usize = 4;
    /// Indent of the page indicator
    pub const PAGE_INDENT: usize = 2;
    /// Width of the category list
    pub const LIST_WIDTH: usize = 60;
    /// Display width of the text input
    pub const INPUT_WIDTH: usize = 60;
    /// Maximum characters accepted by the text input
    pub const INPUT_CHAR_LIMIT: usize = 80;
}

/// Collection of styles used throughout the UI
#[derive(Clone)]
pub struct Styles {
    // Titles
    pub title: Style,

    // Staged files
    pub file: Style,

    // Category list
    pub item_title: Style,
    pub item_desc: Style,
    pub selected_title: Style,
    pub selected_desc: Style,
    pub selected_bar: Style,

    // Page indicator
    pub page: Style,

    // Text input
    pub prompt: Style,
    pub input: Style,
    pub placeholder: Style,
    pub cursor: Style,

    // Confirmation
    pub label: Style,
    pub hint: Style,

    // Footer
    pub footer: Style,
    pub footer_key: Style,

    // Errors
    pub error: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self::new()
    }
}

impl Styles {
    /// Create a new Styles instance with default values
    pub fn new() -> Self {
        Self {
            title: Style::default()
                .fg(colors::TITLE_FG)
                .bg(colors::TITLE_BG),

            file: Style::default().fg(colors::FG),

            item_title: Style::default().fg(colors::FG),
            item_desc: Style::default().fg(colors::DESC),
            selected_title: Style::default()
                .fg(colors::SELECTED)
                .add_modifier(Modifier::BOLD),
            selected_desc: Style::default().fg(colors::SELECTED_DESC),
            selected_bar: Style::default().fg(colors::SELECTED),

            page: Style::default().fg(colors::PAGE),

            prompt: Style::default().fg(colors::PROMPT),
            input: Style::default().fg(colors::FG),
            placeholder: Style::default().fg(colors::PLACEHOLDER),
            cursor: Style::default().add_modifier(Modifier::REVERSED),

            label: Style::default().add_modifier(Modifier::BOLD),
            hint: Style::default().fg(colors::DIM),

            footer: Style::default().fg(colors::FOOTER_FG),
            footer_key: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),

            error: Style::default()
                .fg(colors::ERROR)
                .add_modifier(Modifier::BOLD),
        }
    }
}
