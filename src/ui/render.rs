//! Session view
//!
//! Turns a [`SessionState`] into styled text. Rendering has no side effects,
//! so the same state always produces the same text.

use ratatui::text::{Line, Span, Text};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::catalog::CategoryItem;
use crate::state::{Outcome, Phase, SessionState};

use super::styles::layout::{ITEM_INDENT, LIST_WIDTH, PAGE_INDENT};
use super::{Styles, TextEntry};

/// Shown when nothing is staged
pub const NOTHING_STAGED: &str = "No files staged for commit. Use 'git add' to stage files.";

/// Render the whole session view
pub fn render(state: &SessionState, entry: &dyn TextEntry, styles: &Styles) -> Text<'static> {
    let mut lines = staged_files(&state.staged_files, styles);
    lines.push(Line::default());

    match state.phase {
        Phase::SelectingCategory => {
            lines.push(title("Select commit type", styles));
            lines.push(Line::default());
            lines.extend(category_list(state.page_items(), state.highlight, styles));
            lines.push(Line::default());
            lines.push(Line::styled(
                format!(
                    "{}Page {}/{} (Press Tab to switch pages)",
                    " ".repeat(PAGE_INDENT),
                    state.current_page + 1,
                    state.total_pages()
                ),
                styles.page,
            ));
        }
        Phase::EnteringMessage => {
            lines.push(title("Commit Message", styles));
            lines.push(field("Type", selected(state), styles));
            lines.push(Line::default());
            lines.push(entry.view(styles));
        }
        Phase::Confirming => {
            lines.push(title("Confirm Commit", styles));
            lines.push(field("Type", selected(state), styles));
            lines.push(field("Message", &state.draft_message, styles));
            lines.push(Line::default());
            lines.push(Line::styled("Press Enter to commit or q to quit", styles.hint));
        }
        Phase::Terminated(outcome) => {
            if let Some(err) = &state.last_error {
                lines.push(Line::styled(format!("Error: {}", err), styles.error));
            } else if outcome == Outcome::Success {
                lines.push(Line::styled("Commit successful!", styles.label));
            }
        }
    }

    Text::from(lines)
}

fn selected(state: &SessionState) -> &str {
    state.selected_category.as_deref().unwrap_or_default()
}

fn title(text: &str, styles: &Styles) -> Line<'static> {
    Line::from(Span::styled(format!(" {} ", text), styles.title))
}

fn field(name: &str, value: &str, styles: &Styles) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", name), styles.label),
        Span::raw(value.to_string()),
    ])
}

fn staged_files(files: &[String], styles: &Styles) -> Vec<Line<'static>> {
    if files.is_empty() {
        return vec![Line::styled(NOTHING_STAGED, styles.hint)];
    }

    let mut lines = vec![title("Staged Files", styles)];
    let indent = " ".repeat(ITEM_INDENT);
    lines.extend(
        files
            .iter()
            .map(|file| Line::styled(format!("{}{}", indent, file), styles.file)),
    );
    lines
}

/// Two lines per item (label, description) with a blank line between items
fn category_list(items: &[CategoryItem], highlight: usize, styles: &Styles) -> Vec<Line<'static>> {
    let text_width = LIST_WIDTH.saturating_sub(2);
    let mut lines = Vec::with_capacity(items.len() * 3);

    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }

        let (bar, title_style, desc_style) = if i == highlight {
            (Span::styled("│ ", styles.selected_bar), styles.selected_title, styles.selected_desc)
        } else {
            (Span::raw("  "), styles.item_title, styles.item_desc)
        };

        lines.push(Line::from(vec![
            bar.clone(),
            Span::styled(truncate(item.label, text_width), title_style),
        ]));
        lines.push(Line::from(vec![
            bar,
            Span::styled(truncate(item.description, text_width), desc_style),
        ]));
    }

    lines
}

/// Truncate to a display width, ending in an ellipsis when cut
fn truncate(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}
