//! Holdings overview: total portfolio card plus one card per holding.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
    Frame,
};

use crate::core::format::{self, Trend};
use crate::core::models::{Holding, PortfolioSummary};
use crate::tui::layout::NARROW_THRESHOLD;
use crate::tui::theme;
use crate::tui::widgets::stat_card::StatCard;

/// Height of one holding card: border, value, gauge, APY/change line.
const CARD_HEIGHT: u16 = 5;

pub fn render(frame: &mut Frame, area: Rect, portfolio: &PortfolioSummary) {
    let columns: usize = if area.width < NARROW_THRESHOLD { 1 } else { 2 };
    let cards = 1 + portfolio.holdings.len();
    let rows = cards.div_ceil(columns);

    let row_areas = Layout::vertical(
        std::iter::repeat(Constraint::Length(CARD_HEIGHT))
            .take(rows)
            .chain(std::iter::once(Constraint::Min(0))),
    )
    .split(area);

    let mut cells = Vec::with_capacity(rows * columns);
    for row in row_areas.iter().take(rows) {
        let split = Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns]).split(*row);
        cells.extend(split.iter().copied());
    }

    if let Some(first) = cells.first() {
        render_total(frame, *first, portfolio);
    }
    for (holding, cell) in portfolio.holdings.iter().zip(cells.iter().skip(1)) {
        if cell.height == 0 {
            break;
        }
        render_holding(frame, *cell, holding);
    }
}

fn trend_line(change: f64, suffix: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::raw(" "),
        Span::styled(format::change(change), theme::trend(Trend::of(change))),
        Span::styled(suffix, theme::muted()),
    ])
}

fn render_total(frame: &mut Frame, area: Rect, portfolio: &PortfolioSummary) {
    StatCard::new("Total Portfolio Value", format::currency(portfolio.total_value))
        .caption_line(trend_line(portfolio.total_change_pct, " from last month"))
        .render(frame, area);
}

fn render_holding(frame: &mut Frame, area: Rect, holding: &Holding) {
    let block = theme::block_default(&holding.name);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(format!(" {}", format::currency(holding.value)), theme::figure())),
        rows[0],
    );

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(theme::PRIMARY_LIGHT).bg(theme::BG_SURFACE))
        .percent(format::apy_gauge_percent(holding.apy))
        .label("");
    frame.render_widget(gauge, rows[1]);

    let change = holding.change_pct;
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(" APY: ", theme::muted()),
            Span::styled(format::percent(holding.apy), Style::default().fg(theme::PRIMARY_LIGHT)),
            Span::raw("   "),
            Span::styled(format::change(change), theme::trend(Trend::of(change))),
        ])),
        rows[2],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::DashboardData;
    use crate::tui::test_support::render_to_string;

    #[test]
    fn test_renders_every_holding() {
        let data = DashboardData::sample();
        let text = render_to_string(120, 20, |f| render(f, f.area(), &data.portfolio));
        assert!(text.contains("Total Portfolio Value"));
        assert!(text.contains("$150,000"));
        assert!(text.contains("Sukuk Portfolio B"));
        assert!(text.contains("2.1%"));
    }

    #[test]
    fn test_narrow_and_empty_portfolio() {
        let portfolio = PortfolioSummary {
            total_value: 0.0,
            total_change_pct: -1.5,
            holdings: Vec::new(),
        };
        let text = render_to_string(40, 10, |f| render(f, f.area(), &portfolio));
        assert!(text.contains("$0"));
        assert!(text.contains("1.5%"));
    }
}
