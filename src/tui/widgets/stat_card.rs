//! Small bordered card: label, big figure, caption.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::theme;

pub struct StatCard<'a> {
    pub label: &'a str,
    pub value: String,
    pub caption: Line<'a>,
}

impl<'a> StatCard<'a> {
    pub fn new(label: &'a str, value: String) -> Self {
        Self {
            label,
            value,
            caption: Line::default(),
        }
    }

    pub fn caption(mut self, text: impl Into<String>, style: Style) -> Self {
        self.caption = Line::from(Span::styled(text.into(), style));
        self
    }

    pub fn caption_line(mut self, line: Line<'a>) -> Self {
        self.caption = line;
        self
    }

    pub fn render(self, frame: &mut Frame, area: Rect) {
        let block = theme::block_default(self.label);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = vec![
            Line::from(Span::styled(format!(" {}", self.value), theme::figure())),
            self.caption,
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }
}
