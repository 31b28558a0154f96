//! Landing placeholder shown until a wallet is connected.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_default());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let top_pad = inner.height.saturating_sub(7) / 2;
    let mut lines: Vec<Line> = (0..top_pad).map(|_| Line::raw("")).collect();
    lines.extend([
        Line::from(Span::styled(
            "Welcome to AGYAL Platform",
            Style::default()
                .fg(theme::TEXT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from(Span::styled(
            "Connect your wallet to access the multi-profile dashboard system",
            theme::muted(),
        )),
        Line::from(Span::styled("for fixed-income opportunities.", theme::muted())),
        Line::raw(""),
        Line::from(vec![
            Span::styled("Press ", theme::dim()),
            Span::styled("c", theme::highlight()),
            Span::styled(" to connect", theme::dim()),
        ]),
    ]);

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        inner,
    );
}
