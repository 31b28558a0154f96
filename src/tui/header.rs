//! Top bar: brand, wallet status and the profile dropdown.

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::core::profile::Profile;
use crate::core::session::SessionSnapshot;
use crate::tui::events::{Action, ViewInput};
use crate::tui::theme;

const MENU_WIDTH: u16 = 34;

pub fn render_header(frame: &mut Frame, area: Rect, snapshot: &SessionSnapshot<'_>, wallet_address: &str) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme::border_default())
        .style(Style::default().bg(theme::BG_SURFACE));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let right = if snapshot.connected {
        let profile = snapshot.active_profile;
        Line::from(vec![
            Span::styled(wallet_address.to_string(), theme::muted()),
            Span::raw("  "),
            Span::styled("🔔", Style::default().fg(theme::TEXT_MUTED)),
            Span::raw("  "),
            Span::styled(format!("({})", profile.initials()), theme::highlight()),
            Span::raw(" "),
            Span::styled(profile.display_name.clone(), Style::default().fg(theme::TEXT)),
            Span::styled(" ▾ ", theme::muted()),
            Span::styled("[p] ", theme::key_hint()),
        ])
    } else {
        Line::from(vec![
            Span::styled("[c]", theme::key_hint()),
            Span::raw(" "),
            Span::styled(
                " Connect Wallet ",
                Style::default()
                    .fg(theme::BG_BASE)
                    .bg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
        ])
    };

    let right_width = right.width() as u16;
    let chunks =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(right_width)]).split(inner);

    let brand = Line::from(vec![
        Span::raw(" "),
        Span::styled(" AGYAL ", theme::brand_badge()),
    ]);
    frame.render_widget(Paragraph::new(brand), chunks[0]);
    frame.render_widget(Paragraph::new(right), chunks[1]);
}

/// Cursor of the open profile dropdown.
#[derive(Debug, Clone, Default)]
pub struct ProfileMenuState {
    selected: usize,
}

impl ProfileMenuState {
    /// Open with the cursor on the currently active profile.
    pub fn open(snapshot: &SessionSnapshot<'_>) -> Self {
        let selected = snapshot
            .known_profiles
            .iter()
            .position(|p| p.id == snapshot.active_profile.id)
            .unwrap_or(0);
        Self { selected }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// The menu is modal: every key is consumed.
    pub fn handle_input(&mut self, event: &Event, profiles: &[Profile]) -> ViewInput {
        let Event::Key(key) = event else {
            return ViewInput::Consumed;
        };
        if key.kind != KeyEventKind::Press {
            return ViewInput::Consumed;
        }

        match (key.modifiers, key.code) {
            (_, KeyCode::Char('j') | KeyCode::Down) => {
                if self.selected + 1 < profiles.len() {
                    self.selected += 1;
                }
                ViewInput::Consumed
            }
            (_, KeyCode::Char('k') | KeyCode::Up) => {
                self.selected = self.selected.saturating_sub(1);
                ViewInput::Consumed
            }
            (_, KeyCode::Enter) => match profiles.get(self.selected) {
                Some(profile) => ViewInput::Action(Action::SelectProfile(profile.id.clone())),
                None => ViewInput::Action(Action::CloseProfileMenu),
            },
            (_, KeyCode::Esc) | (KeyModifiers::NONE, KeyCode::Char('p')) => {
                ViewInput::Action(Action::CloseProfileMenu)
            }
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => ViewInput::Action(Action::Quit),
            _ => ViewInput::Consumed,
        }
    }

    /// Dropdown anchored under the right edge of the header.
    pub fn render(&self, frame: &mut Frame, screen: Rect, snapshot: &SessionSnapshot<'_>) {
        let height = (snapshot.known_profiles.len() as u16 + 2).min(screen.height.saturating_sub(3));
        let width = MENU_WIDTH.min(screen.width);
        let area = Rect {
            x: screen.x + screen.width.saturating_sub(width + 1),
            y: screen.y + 3,
            width,
            height,
        };

        let items: Vec<ListItem> = snapshot
            .known_profiles
            .iter()
            .map(|profile| {
                let marker = if profile.id == snapshot.active_profile.id {
                    "✓ "
                } else {
                    "  "
                };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, Style::default().fg(theme::SUCCESS)),
                    Span::styled(format!("({}) ", profile.initials()), theme::highlight()),
                    Span::styled(profile.display_name.clone(), Style::default().fg(theme::TEXT)),
                    Span::styled(format!("  {}", profile.role.label()), theme::dim()),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                theme::block_focused("Switch Profile")
                    .style(Style::default().bg(theme::BG_SURFACE)),
            )
            .highlight_style(Style::default().bg(theme::PRIMARY).add_modifier(Modifier::BOLD));

        let mut state = ListState::default().with_selected(Some(self.selected));
        frame.render_widget(Clear, area);
        frame.render_stateful_widget(list, area, &mut state);
    }
}
