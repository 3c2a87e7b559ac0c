use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Back arrow and the profile's username.
pub struct TopBar<'a> {
    title: &'a str,
}

impl<'a> TopBar<'a> {
    pub fn new(title: &'a str) -> Self {
        Self { title }
    }

    pub fn widget(&self) -> Paragraph<'a> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let line = Line::from(vec![
            Span::styled("  ←", text_style),
            Span::styled("    ", text_style),
            Span::styled(self.title, text_style.add_modifier(Modifier::BOLD)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
