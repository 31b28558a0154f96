//! Issuer listing management table plus its create/edit dialog.

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::core::format;
use crate::core::models::ManagedListing;
use crate::tui::events::{Action, ViewInput};
use crate::tui::layout::centered_rect;
use crate::tui::theme;
use crate::tui::views::listing_form::{FormResult, ListingFormState};

#[derive(Debug, Default)]
pub struct ListingManagementState {
    selected: usize,
    dialog: Option<ListingFormState>,
}

impl ListingManagementState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn dialog(&self) -> Option<&ListingFormState> {
        self.dialog.as_ref()
    }

    /// True while the dialog is open and owns the keyboard.
    pub fn is_editing(&self) -> bool {
        self.dialog.is_some()
    }

    pub fn open_create(&mut self) {
        self.dialog = Some(ListingFormState::create());
    }

    pub fn handle_input(&mut self, event: &Event, listings: &[ManagedListing]) -> ViewInput {
        if let Some(dialog) = self.dialog.as_mut() {
            return match dialog.handle_input(event) {
                FormResult::Consumed => ViewInput::Consumed,
                FormResult::Cancel => {
                    self.dialog = None;
                    ViewInput::Consumed
                }
                FormResult::Submit(draft) => {
                    let mode = dialog.mode().clone();
                    self.dialog = None;
                    ViewInput::Action(Action::ListingSubmitted { mode, draft })
                }
            };
        }

        let Event::Key(key) = event else {
            return ViewInput::Ignored;
        };
        if key.kind != KeyEventKind::Press || key.modifiers != KeyModifiers::NONE {
            return ViewInput::Ignored;
        }

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if self.selected + 1 < listings.len() {
                    self.selected += 1;
                }
                ViewInput::Consumed
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                ViewInput::Consumed
            }
            KeyCode::Char('n') => {
                self.open_create();
                ViewInput::Consumed
            }
            KeyCode::Char('v') | KeyCode::Enter => self.emit(listings, |id, title| Action::ListingViewed { id, title }),
            KeyCode::Char('e') => {
                let result = self.emit(listings, |id, title| Action::ListingEditRequested { id, title });
                if let Some(listing) = listings.get(self.selected) {
                    self.dialog = Some(ListingFormState::edit(listing));
                }
                result
            }
            KeyCode::Char('x') | KeyCode::Delete => {
                self.emit(listings, |id, title| Action::ListingDeleteRequested { id, title })
            }
            _ => ViewInput::Ignored,
        }
    }

    fn emit(&self, listings: &[ManagedListing], action: impl FnOnce(String, String) -> Action) -> ViewInput {
        match listings.get(self.selected) {
            Some(listing) => ViewInput::Action(action(listing.id.clone(), listing.title.clone())),
            None => ViewInput::Consumed,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, listings: &[ManagedListing]) {
        let chunks = Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).split(area);
        frame.render_widget(
            Paragraph::new(vec![
                Line::from(vec![
                    Span::styled(" Manage Listings", theme::heading()),
                    Span::styled(
                        "   [n] new  [v] view  [e] edit  [x] delete",
                        theme::key_hint(),
                    ),
                ]),
                Line::raw(""),
            ]),
            chunks[0],
        );

        if listings.is_empty() {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(theme::border_default());
            frame.render_widget(
                Paragraph::new(vec![
                    Line::from(Span::styled(" No Listings Found", theme::figure())),
                    Line::from(Span::styled(
                        " Get started by creating your first listing.  [n]",
                        theme::muted(),
                    )),
                ])
                .block(block),
                chunks[1],
            );
        } else {
            self.render_table(frame, chunks[1], listings);
        }

        if let Some(dialog) = &self.dialog {
            dialog.render(frame, centered_rect(60, 90, area));
        }
    }

    fn render_table(&self, frame: &mut Frame, area: Rect, listings: &[ManagedListing]) {
        let header_cells = ["Title", "Status", "Returns", "Duration", "Raised", "Target"]
            .iter()
            .map(|h| {
                Cell::from(*h).style(
                    Style::default()
                        .fg(theme::PRIMARY_LIGHT)
                        .add_modifier(Modifier::BOLD),
                )
            });
        let header = Row::new(header_cells).height(1).bottom_margin(1);

        let rows = listings.iter().map(|listing| {
            Row::new(vec![
                Cell::from(listing.title.clone()),
                Cell::from(format::capitalize(listing.status.key()))
                    .style(theme::managed_status_badge(listing.status)),
                Cell::from(format::percent(listing.returns)),
                Cell::from(listing.duration.clone()),
                Cell::from(format::currency(listing.raised)),
                Cell::from(format::currency(listing.target)),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Percentage(34),
                Constraint::Percentage(12),
                Constraint::Percentage(10),
                Constraint::Percentage(14),
                Constraint::Percentage(15),
                Constraint::Percentage(15),
            ],
        )
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::border_default()),
        )
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

        let mut state = TableState::default().with_selected(Some(self.selected));
        frame.render_stateful_widget(table, area, &mut state);
    }
}
