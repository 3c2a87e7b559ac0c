use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const KEY_HINTS: &str = " f: Follow │ r: Refresh │ q: Quit";

/// Bottom bar: key hints, or the last failed command, plus the version.
pub struct Footer<'a> {
    error: Option<&'a str>,
}

impl<'a> Footer<'a> {
    pub fn new(error: Option<&'a str>) -> Self {
        Self { error }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'a> {
        let version = format!("v{} ", VERSION);
        let muted = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let (status, status_style) = match self.error {
            Some(error) => (format!(" {}", error), Style::default().fg(STATUS_ERROR)),
            None => (KEY_HINTS.to_string(), muted),
        };

        // Char count, not bytes: the hints contain box-drawing separators.
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(status.chars().count())
            .saturating_sub(version.chars().count());

        let line = Line::from(vec![
            Span::styled(status, status_style),
            Span::styled(" ".repeat(padding), muted),
            Span::styled(version, muted),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
