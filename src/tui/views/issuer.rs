//! Issuer dashboard: organization header, listings/analytics/settings tabs.

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::core::error::Result;
use crate::core::format::{self, Trend};
use crate::core::models::{DashboardData, IssuerAnalytics};
use crate::core::tabs::{IssuerTab, TabState};
use crate::tui::events::ViewInput;
use crate::tui::layout::{card_strip, NARROW_THRESHOLD};
use crate::tui::theme;
use crate::tui::views::listing_management::ListingManagementState;
use crate::tui::widgets::{stat_card::StatCard, tab_strip};

const STAT_CARD_HEIGHT: u16 = 4;

pub struct IssuerDashboard {
    display_name: String,
    organization: String,
    contact_email: String,
    tabs: TabState<IssuerTab>,
    management: ListingManagementState,
}

impl IssuerDashboard {
    pub fn new(
        display_name: impl Into<String>,
        organization: impl Into<String>,
        contact_email: impl Into<String>,
        initial_tab: IssuerTab,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            organization: organization.into(),
            contact_email: contact_email.into(),
            tabs: TabState::new(initial_tab),
            management: ListingManagementState::new(),
        }
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn organization(&self) -> &str {
        &self.organization
    }

    pub fn active_tab(&self) -> IssuerTab {
        self.tabs.active()
    }

    pub fn select_tab(&mut self, tab: IssuerTab) {
        self.tabs.select(tab);
    }

    /// Select by key; keys outside the issuer set keep the current tab.
    pub fn select_tab_key(&mut self, key: &str) -> Result<IssuerTab> {
        self.tabs.select_key(key)
    }

    /// True while the listing dialog owns the keyboard.
    pub fn captures_text(&self) -> bool {
        self.tabs.active() == IssuerTab::Listings && self.management.is_editing()
    }

    pub fn is_dialog_open(&self) -> bool {
        self.management.is_editing()
    }

    pub fn handle_input(&mut self, event: &Event, data: &DashboardData) -> ViewInput {
        if self.tabs.active() == IssuerTab::Listings {
            let result = self.management.handle_input(event, &data.managed_listings);
            if result.is_handled() {
                return result;
            }
        }

        let Event::Key(key) = event else {
            return ViewInput::Ignored;
        };
        if key.kind != KeyEventKind::Press {
            return ViewInput::Ignored;
        }
        if tab_strip::handle_key(&mut self.tabs, key) {
            return ViewInput::Consumed;
        }
        // The create shortcut in the header card works from every tab.
        if key.modifiers == KeyModifiers::NONE && key.code == KeyCode::Char('n') {
            self.tabs.select(IssuerTab::Listings);
            self.management.open_create();
            return ViewInput::Consumed;
        }
        ViewInput::Ignored
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, data: &DashboardData) {
        let chunks = Layout::vertical([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

        self.render_header_card(frame, chunks[0]);
        tab_strip::render(frame, chunks[1], &self.tabs);

        match self.tabs.active() {
            IssuerTab::Listings => self.management.render(frame, chunks[2], &data.managed_listings),
            IssuerTab::Analytics => render_analytics(frame, chunks[2], &data.analytics),
            IssuerTab::Settings => self.render_settings(frame, chunks[2]),
        }
    }

    fn render_header_card(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_default());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let cols = Layout::horizontal([Constraint::Min(0), Constraint::Length(26)]).split(inner);
        frame.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled(
                    format!(" Welcome back, {}", self.display_name),
                    theme::title(),
                )),
                Line::from(Span::styled(
                    format!(" {} - Issuer Dashboard", self.organization),
                    theme::muted(),
                )),
            ]),
            cols[0],
        );
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("[n] ", theme::key_hint()),
                Span::styled("Create New Listing", theme::highlight()),
            ])),
            cols[1],
        );
    }

    fn render_settings(&self, frame: &mut Frame, area: Rect) {
        let block = theme::block_default("Account Settings");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let field = |label: &'static str, value: &str| {
            vec![
                Line::from(Span::styled(format!(" {label}"), theme::muted())),
                Line::from(Span::styled(
                    format!("   {value}"),
                    Style::default().fg(theme::TEXT),
                )),
                Line::raw(""),
            ]
        };

        let mut lines = Vec::new();
        lines.extend(field("Company Name", &self.organization));
        lines.extend(field("Contact Email", &self.contact_email));
        lines.push(Line::from(vec![
            Span::styled(" Update Profile", theme::dim()),
            Span::styled("  (read-only in this build)", theme::key_hint()),
        ]));
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

fn render_analytics(frame: &mut Frame, area: Rect, analytics: &IssuerAnalytics) {
    let narrow = area.width < NARROW_THRESHOLD;
    let cards_height = if narrow { STAT_CARD_HEIGHT * 3 } else { STAT_CARD_HEIGHT };
    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(cards_height),
        Constraint::Min(0),
    ])
    .split(area);

    frame.render_widget(
        Paragraph::new(Span::styled(" Analytics Dashboard", theme::heading())),
        chunks[0],
    );

    let cells = card_strip(chunks[1], 3);
    let change = analytics.raised_change_pct;
    StatCard::new("Total Raised", format::currency(analytics.total_raised))
        .caption_line(Line::from(vec![
            Span::raw(" "),
            Span::styled(format::change(change), theme::trend(Trend::of(change))),
            Span::styled(" from last month", theme::muted()),
        ]))
        .render(frame, cells[0]);
    StatCard::new("Active Listings", analytics.active_listings.to_string())
        .caption(format!(" {} pending approval", analytics.pending_approval), theme::muted())
        .render(frame, cells[1]);
    StatCard::new("Total Investors", analytics.investor_count.to_string())
        .caption(
            format!(" +{} this month", analytics.investors_this_month),
            Style::default().fg(theme::SUCCESS),
        )
        .render(frame, cells[2]);
}
