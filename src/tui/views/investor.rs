//! Investor dashboard: welcome card, three tabs.

use crossterm::event::{Event, KeyEventKind};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::core::error::Result;
use crate::core::format::{self, Trend};
use crate::core::models::{AccountStats, DashboardData, VirtualCard};
use crate::core::tabs::{InvestorTab, TabState};
use crate::tui::events::ViewInput;
use crate::tui::layout::{card_strip, NARROW_THRESHOLD};
use crate::tui::theme;
use crate::tui::views::{holdings, listings_grid::ListingsGridState};
use crate::tui::widgets::{stat_card::StatCard, tab_strip};

const STAT_CARD_HEIGHT: u16 = 4;

pub struct InvestorDashboard {
    display_name: String,
    tabs: TabState<InvestorTab>,
    grid: ListingsGridState,
}

impl InvestorDashboard {
    pub fn new(display_name: impl Into<String>, initial_tab: InvestorTab) -> Self {
        Self {
            display_name: display_name.into(),
            tabs: TabState::new(initial_tab),
            grid: ListingsGridState::new(),
        }
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn active_tab(&self) -> InvestorTab {
        self.tabs.active()
    }

    pub fn select_tab(&mut self, tab: InvestorTab) {
        self.tabs.select(tab);
    }

    /// Select by key; keys outside the investor set keep the current tab.
    pub fn select_tab_key(&mut self, key: &str) -> Result<InvestorTab> {
        self.tabs.select_key(key)
    }

    /// True while a text field owns the keyboard.
    pub fn captures_text(&self) -> bool {
        self.tabs.active() == InvestorTab::Investments && self.grid.is_searching()
    }

    pub fn handle_input(&mut self, event: &Event, data: &DashboardData) -> ViewInput {
        if self.tabs.active() == InvestorTab::Investments {
            let result = self.grid.handle_input(event, &data.market_listings);
            if result.is_handled() {
                return result;
            }
        }

        let Event::Key(key) = event else {
            return ViewInput::Ignored;
        };
        if key.kind == KeyEventKind::Press && tab_strip::handle_key(&mut self.tabs, key) {
            return ViewInput::Consumed;
        }
        ViewInput::Ignored
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, data: &DashboardData) {
        let narrow = area.width < NARROW_THRESHOLD;
        let cards_height = if narrow { STAT_CARD_HEIGHT * 3 } else { STAT_CARD_HEIGHT };
        let chunks = Layout::vertical([
            Constraint::Length(cards_height + 3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

        self.render_welcome(frame, chunks[0], &data.account);
        tab_strip::render(frame, chunks[1], &self.tabs);

        match self.tabs.active() {
            InvestorTab::Overview => holdings::render(frame, chunks[2], &data.portfolio),
            InvestorTab::Investments => self.grid.render(frame, chunks[2], &data.market_listings),
            InvestorTab::Cards => self.render_cards(frame, chunks[2], &data.virtual_cards),
        }
    }

    fn render_welcome(&self, frame: &mut Frame, area: Rect, account: &AccountStats) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_default());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).split(inner);
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!(" Welcome back, {}", self.display_name),
                theme::title(),
            )),
            rows[0],
        );

        let cells = card_strip(rows[1], 3);
        let change = account.balance_change_pct;
        StatCard::new("Total Balance", format::currency(account.total_balance))
            .caption_line(Line::from(vec![
                Span::raw(" "),
                Span::styled(format::change(change), theme::trend(Trend::of(change))),
                Span::styled(" from last month", theme::muted()),
            ]))
            .render(frame, cells[0]);
        StatCard::new("Active Investments", account.active_investments.to_string())
            .caption(
                format!(" Across {} categories", account.investment_categories),
                theme::muted(),
            )
            .render(frame, cells[1]);
        StatCard::new("Virtual Cards", account.virtual_cards.to_string())
            .caption(" Active cards", theme::muted())
            .render(frame, cells[2]);
    }

    fn render_cards(&self, frame: &mut Frame, area: Rect, cards: &[VirtualCard]) {
        let block = theme::block_default("Virtual Cards");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = Vec::new();
        for card in cards {
            lines.extend([
                Line::raw(""),
                Line::from(vec![
                    Span::styled("  ▣ ", Style::default().fg(theme::ACCENT)),
                    Span::styled(
                        format!("**** **** **** {}", card.last4),
                        Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(vec![
                    Span::styled("    Card Holder  ", theme::muted()),
                    Span::styled(self.display_name.clone(), Style::default().fg(theme::TEXT)),
                    Span::styled("    Expires  ", theme::muted()),
                    Span::styled(card.expires.clone(), Style::default().fg(theme::TEXT)),
                ]),
            ]);
        }
        lines.extend([
            Line::raw(""),
            Line::from(Span::styled("  + Add new virtual card", theme::dim())),
        ]);
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::CoreError;
    use crate::tui::test_support::render_to_string;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn draw(dashboard: &InvestorDashboard, data: &DashboardData) -> String {
        render_to_string(120, 40, |f| dashboard.render(f, f.area(), data))
    }

    #[test]
    fn test_overview_shows_holdings() {
        let data = DashboardData::sample();
        let dashboard = InvestorDashboard::new("Investor Account", InvestorTab::Overview);
        let text = draw(&dashboard, &data);
        assert!(text.contains("Welcome back, Investor Account"));
        assert!(text.contains("Across 3 categories"));
        assert!(text.contains("Total Portfolio Value"));
    }

    #[test]
    fn test_investments_tab_shows_grid_not_holdings() {
        let data = DashboardData::sample();
        let mut dashboard = InvestorDashboard::new("Investor Account", InvestorTab::Overview);
        assert_eq!(dashboard.select_tab_key("investments").unwrap(), InvestorTab::Investments);
        let text = draw(&dashboard, &data);
        assert!(text.contains("Corporate Sukuk B"));
        assert!(!text.contains("Total Portfolio Value"));
    }

    #[test]
    fn test_cards_tab() {
        let data = DashboardData::sample();
        let dashboard = InvestorDashboard::new("Jane", InvestorTab::Cards);
        let text = draw(&dashboard, &data);
        assert!(text.contains("**** **** **** 1234"));
        assert!(text.contains("12/25"));
        assert!(text.contains("Add new virtual card"));
    }

    #[test]
    fn test_unknown_tab_keeps_current() {
        let mut dashboard = InvestorDashboard::new("Investor Account", InvestorTab::Cards);
        let err = dashboard.select_tab_key("settings").unwrap_err();
        assert!(matches!(err, CoreError::UnknownTab { .. }));
        assert_eq!(dashboard.active_tab(), InvestorTab::Cards);
    }

    #[test]
    fn test_search_takes_priority_over_tab_keys() {
        let data = DashboardData::sample();
        let mut dashboard = InvestorDashboard::new("Investor Account", InvestorTab::Investments);
        dashboard.handle_input(&press(KeyCode::Char('/')), &data);
        assert!(dashboard.captures_text());
        dashboard.handle_input(&press(KeyCode::Char('1')), &data);
        assert_eq!(dashboard.active_tab(), InvestorTab::Investments);

        dashboard.handle_input(&press(KeyCode::Esc), &data);
        assert_eq!(dashboard.handle_input(&press(KeyCode::Char('1')), &data), ViewInput::Consumed);
        assert_eq!(dashboard.active_tab(), InvestorTab::Overview);
    }
}
