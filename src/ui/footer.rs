//! Footer rendering
//!
//! Displays keybinding hints for the current phase.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::state::Phase;

use super::Styles;

/// Footer widget showing keybinding hints
pub struct Footer<'a> {
    /// Current phase
    pub phase: Phase,
    /// Styles
    pub styles: &'a Styles,
}

impl Footer<'_> {
    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.phase {
            Phase::SelectingCategory => &[
                ("↑/k ↓/j", "move"),
                ("tab", "next page"),
                ("enter", "select"),
                ("q", "quit"),
            ],
            Phase::EnteringMessage => &[("enter", "continue"), ("ctrl+u", "clear"), ("esc", "quit")],
            Phase::Confirming => &[("enter", "commit"), ("q", "quit")],
            Phase::Terminated(_) => &[],
        }
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let mut spans = Vec::new();
        spans.push(Span::styled(" ", self.styles.footer));

        for (i, (key, desc)) in self.hints().iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", self.styles.footer));
            }
            spans.push(Span::styled(*key, self.styles.footer_key));
            spans.push(Span::styled(format!(" {}", desc), self.styles.footer));
        }

        let line = Line::from(spans);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}

/// Render the footer bar
pub fn render_footer(buf: &mut Buffer, area: Rect, phase: Phase, styles: &Styles) {
    let footer = Footer { phase, styles };
    footer.render(area, buf);
}
