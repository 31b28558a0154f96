//! Investor listings grid with search, risk/duration filters and sort.
//!
//! The listings themselves are read-only; only the controls and the
//! selection cursor live here.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::core::format;
use crate::core::listing_filter::ListingFilter;
use crate::core::models::MarketListing;
use crate::tui::events::{Action, ViewInput};
use crate::tui::layout::NARROW_THRESHOLD;
use crate::tui::theme;
use crate::tui::widgets::input_buffer::InputBuffer;

const CARD_HEIGHT: u16 = 7;

#[derive(Debug, Default)]
pub struct ListingsGridState {
    filter: ListingFilter,
    search: InputBuffer,
    searching: bool,
    selected: usize,
}

impl ListingsGridState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(&self) -> &ListingFilter {
        &self.filter
    }

    /// True while the search box captures keystrokes.
    pub fn is_searching(&self) -> bool {
        self.searching
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn handle_input(&mut self, event: &Event, listings: &[MarketListing]) -> ViewInput {
        let Event::Key(key) = event else {
            return ViewInput::Ignored;
        };
        if key.kind != KeyEventKind::Press {
            return ViewInput::Ignored;
        }

        if self.searching {
            return self.handle_search_key(key);
        }

        let visible_len = self.filter.apply(listings).len();
        match (key.modifiers, key.code) {
            (KeyModifiers::NONE, KeyCode::Char('/')) => {
                self.searching = true;
                ViewInput::Consumed
            }
            (KeyModifiers::NONE, KeyCode::Char('f')) => {
                self.filter.risk = self.filter.risk.next();
                self.selected = 0;
                ViewInput::Consumed
            }
            (KeyModifiers::NONE, KeyCode::Char('d')) => {
                self.filter.duration = self.filter.duration.next();
                self.selected = 0;
                ViewInput::Consumed
            }
            (KeyModifiers::NONE, KeyCode::Char('s')) => {
                self.filter.sort = self.filter.sort.toggle();
                ViewInput::Consumed
            }
            (KeyModifiers::NONE, KeyCode::Char('x')) if self.filter.is_active() => {
                self.filter = ListingFilter {
                    sort: self.filter.sort,
                    ..ListingFilter::default()
                };
                self.search.clear();
                self.selected = 0;
                ViewInput::Consumed
            }
            (KeyModifiers::NONE, KeyCode::Char('j') | KeyCode::Down | KeyCode::Right) => {
                if self.selected + 1 < visible_len {
                    self.selected += 1;
                }
                ViewInput::Consumed
            }
            (KeyModifiers::NONE, KeyCode::Char('k') | KeyCode::Up | KeyCode::Left) => {
                self.selected = self.selected.saturating_sub(1);
                ViewInput::Consumed
            }
            (KeyModifiers::NONE, KeyCode::Enter) => {
                match self.filter.apply(listings).get(self.selected) {
                    Some(listing) => ViewInput::Action(Action::ListingOpened {
                        id: listing.id.clone(),
                        title: listing.title.clone(),
                    }),
                    None => ViewInput::Consumed,
                }
            }
            _ => ViewInput::Ignored,
        }
    }

    fn handle_search_key(&mut self, key: &KeyEvent) -> ViewInput {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => {
                self.searching = false;
            }
            _ => {
                if self.search.handle_key(key) {
                    self.filter.query = self.search.text().to_string();
                    self.selected = 0;
                }
            }
        }
        // The search box swallows everything while open.
        ViewInput::Consumed
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, listings: &[MarketListing]) {
        let chunks = Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).split(area);
        self.render_controls(frame, chunks[0]);

        let visible = self.filter.apply(listings);
        if visible.is_empty() {
            let message = if listings.is_empty() {
                " No listings available"
            } else {
                " No listings match the current filters  [x] clear"
            };
            frame.render_widget(Paragraph::new(Span::styled(message, theme::muted())), chunks[1]);
            return;
        }

        let columns: usize = if chunks[1].width < NARROW_THRESHOLD { 1 } else { 3 };
        let max_rows = (chunks[1].height / CARD_HEIGHT).max(1) as usize;
        // Scroll by whole rows so the selected card stays visible.
        let selected_row = self.selected / columns;
        let first_row = selected_row.saturating_sub(max_rows - 1);

        let row_areas = Layout::vertical(
            std::iter::repeat(Constraint::Length(CARD_HEIGHT))
                .take(max_rows)
                .chain(std::iter::once(Constraint::Min(0))),
        )
        .split(chunks[1]);

        for (row_idx, row_area) in row_areas.iter().take(max_rows).enumerate() {
            let cells =
                Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns]).split(*row_area);
            for (col, cell) in cells.iter().enumerate() {
                let index = (first_row + row_idx) * columns + col;
                let Some(listing) = visible.get(index) else {
                    return;
                };
                render_card(frame, *cell, listing, index == self.selected);
            }
        }
    }

    fn render_controls(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(if self.searching {
                theme::border_focused()
            } else {
                theme::border_default()
            });
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut spans = vec![Span::styled(" ⌕ ", theme::muted())];
        spans.extend(self.search.spans("Search listings...", self.searching));
        spans.extend([
            Span::raw("  │ "),
            Span::styled(self.filter.risk.label(), Style::default().fg(theme::TEXT)),
            Span::raw(" │ "),
            Span::styled(self.filter.duration.label(), Style::default().fg(theme::TEXT)),
            Span::raw(" │ "),
            Span::styled(format!("Sort: {}", self.filter.sort.label()), Style::default().fg(theme::TEXT)),
            Span::styled("   [/] search [f] risk [d] duration [s] sort", theme::key_hint()),
        ]);
        frame.render_widget(Paragraph::new(Line::from(spans)), inner);
    }
}

fn render_card(frame: &mut Frame, area: Rect, listing: &MarketListing, selected: bool) {
    let border_style = if selected {
        theme::highlight()
    } else {
        theme::border_default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Line::from(vec![
            Span::raw(" "),
            Span::styled(
                listing.title.clone(),
                Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(
                format!(" {} ", listing.status.label()),
                theme::market_status_badge(listing.status),
            ),
        ]));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let label = |text: &'static str| Span::styled(format!(" {text:<16}"), theme::muted());
    let lines = vec![
        Line::from(vec![
            label("Return Rate"),
            Span::styled(format!("{} p.a.", format::percent(listing.return_rate)), theme::figure()),
        ]),
        Line::from(vec![
            label("Duration"),
            Span::styled(format!("{} months", listing.duration_months), theme::figure()),
        ]),
        Line::from(vec![
            label("Risk Level"),
            Span::styled(format!("[{}]", listing.risk.label()), Style::default().fg(theme::TEXT)),
        ]),
        Line::from(vec![
            label("Min. Investment"),
            Span::styled(format::currency(listing.min_investment), theme::figure()),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::listing_filter::{DurationFilter, RiskFilter, SortOrder};
    use crate::core::models::{DashboardData, RiskLevel};
    use crate::tui::test_support::render_to_string;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_filter_keys_cycle() {
        let data = DashboardData::sample();
        let mut grid = ListingsGridState::new();
        grid.handle_input(&press(KeyCode::Char('f')), &data.market_listings);
        grid.handle_input(&press(KeyCode::Char('d')), &data.market_listings);
        grid.handle_input(&press(KeyCode::Char('s')), &data.market_listings);
        assert_eq!(grid.filter().risk, RiskFilter::Only(RiskLevel::Low));
        assert_eq!(grid.filter().duration, DurationFilter::Short);
        assert_eq!(grid.filter().sort, SortOrder::ReturnDesc);

        grid.handle_input(&press(KeyCode::Char('x')), &data.market_listings);
        assert_eq!(grid.filter().risk, RiskFilter::All);
        assert_eq!(grid.filter().sort, SortOrder::ReturnDesc);
    }

    #[test]
    fn test_search_mode_captures_keys() {
        let data = DashboardData::sample();
        let mut grid = ListingsGridState::new();
        grid.handle_input(&press(KeyCode::Char('/')), &data.market_listings);
        assert!(grid.is_searching());
        for c in "bond".chars() {
            assert_eq!(grid.handle_input(&press(KeyCode::Char(c)), &data.market_listings), ViewInput::Consumed);
        }
        // 'q' is text here, not quit
        assert_eq!(grid.handle_input(&press(KeyCode::Char('q')), &data.market_listings), ViewInput::Consumed);
        grid.handle_input(&press(KeyCode::Backspace), &data.market_listings);
        grid.handle_input(&press(KeyCode::Enter), &data.market_listings);
        assert!(!grid.is_searching());
        assert_eq!(grid.filter().query, "bond");
        assert_eq!(grid.filter().apply(&data.market_listings).len(), 1);
    }

    #[test]
    fn test_enter_opens_selected_listing() {
        let data = DashboardData::sample();
        let mut grid = ListingsGridState::new();
        grid.handle_input(&press(KeyCode::Char('j')), &data.market_listings);
        let result = grid.handle_input(&press(KeyCode::Enter), &data.market_listings);
        assert_eq!(
            result,
            ViewInput::Action(Action::ListingOpened {
                id: "2".into(),
                title: "Corporate Sukuk B".into(),
            })
        );
    }

    #[test]
    fn test_selection_clamped_to_visible() {
        let data = DashboardData::sample();
        let mut grid = ListingsGridState::new();
        for _ in 0..10 {
            grid.handle_input(&press(KeyCode::Down), &data.market_listings);
        }
        assert_eq!(grid.selected(), 2);
    }

    #[test]
    fn test_unhandled_key_falls_through() {
        let data = DashboardData::sample();
        let mut grid = ListingsGridState::new();
        assert_eq!(grid.handle_input(&press(KeyCode::Char('q')), &data.market_listings), ViewInput::Ignored);
    }

    #[test]
    fn test_render_cards() {
        let data = DashboardData::sample();
        let grid = ListingsGridState::new();
        let text = render_to_string(150, 14, |f| grid.render(f, f.area(), &data.market_listings));
        assert!(text.contains("Search listings..."));
        assert!(text.contains("Fixed Income Bond A"));
        assert!(text.contains("5.5% p.a."));
        assert!(text.contains("$50,000"));
        assert!(text.contains("Coming Soon"));
    }

    #[test]
    fn test_render_empty_result() {
        let data = DashboardData::sample();
        let mut grid = ListingsGridState::new();
        grid.filter.query = "zzz".into();
        let text = render_to_string(100, 8, |f| grid.render(f, f.area(), &data.market_listings));
        assert!(text.contains("No listings match"));
    }
}
