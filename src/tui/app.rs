use std::io;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};
use tokio::sync::mpsc;

use super::events::{Action, AppEvent, FormMode, Notification, NotificationLevel, ViewInput};
use super::header::{self, ProfileMenuState};
use super::layout::{centered_rect, AppLayout};
use super::theme;
use super::views::investor::InvestorDashboard;
use super::views::issuer::IssuerDashboard;
use super::views::landing;
use crate::config::AppConfig;
use crate::core::error::CoreError;
use crate::core::models::DashboardData;
use crate::core::profile::{ProfileId, Role};
use crate::core::session::SessionController;
use crate::core::tabs::{InvestorTab, IssuerTab};
use crate::core::view::{select_view, RoleView, ViewDefaults};

const MAX_NOTIFICATIONS: usize = 3;
const NOTIFICATION_TTL_TICKS: u32 = 100;

/// The composer mounted for the active profile.
enum Dashboard {
    Investor(InvestorDashboard),
    Issuer(IssuerDashboard),
    Unsupported(Role),
}

/// A composer and the profile it was mounted for. Switching profile remounts.
struct Mounted {
    profile_id: ProfileId,
    dashboard: Dashboard,
}

/// What the main area currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveView {
    Landing,
    Investor {
        display_name: String,
        tab: InvestorTab,
    },
    Issuer {
        display_name: String,
        organization: String,
        tab: IssuerTab,
    },
    Unsupported(Role),
}

/// Central application state (Elm architecture).
pub struct AppState {
    /// Whether the app is still running.
    pub running: bool,
    session: SessionController,
    data: DashboardData,
    view_defaults: ViewDefaults,
    wallet_address: String,
    contact_email: String,
    mounted: Option<Mounted>,
    /// Profile dropdown (Some when open).
    profile_menu: Option<ProfileMenuState>,
    /// Whether the help modal is open.
    pub show_help: bool,
    /// Active notifications (max 3 visible).
    pub notifications: Vec<Notification>,
    /// Monotonic counter for notification IDs.
    notification_counter: u64,
    /// Receiver for host-pushed events.
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl AppState {
    /// Build a disconnected app over `data`. Fails when the profile list is
    /// empty or has duplicate ids.
    pub fn new(data: DashboardData, config: &AppConfig) -> Result<Self, CoreError> {
        let session = SessionController::new(data.profiles.clone())?;
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        Ok(Self {
            running: true,
            session,
            data,
            view_defaults: config.view_defaults(),
            wallet_address: config.wallet.address.clone(),
            contact_email: config.issuer.contact_email.clone(),
            mounted: None,
            profile_menu: None,
            show_help: false,
            notifications: Vec::new(),
            notification_counter: 0,
            event_rx,
            event_tx,
        })
    }

    /// Handle for pushing events from outside the loop, e.g. a wallet
    /// integration sending `Action::Connect`.
    pub fn event_sender(&self) -> mpsc::UnboundedSender<AppEvent> {
        self.event_tx.clone()
    }

    pub fn session(&self) -> &SessionController {
        &self.session
    }

    pub fn is_profile_menu_open(&self) -> bool {
        self.profile_menu.is_some()
    }

    pub fn active_view(&self) -> ActiveView {
        match self.mounted.as_ref().map(|m| &m.dashboard) {
            None => ActiveView::Landing,
            Some(Dashboard::Investor(d)) => ActiveView::Investor {
                display_name: d.display_name().to_string(),
                tab: d.active_tab(),
            },
            Some(Dashboard::Issuer(d)) => ActiveView::Issuer {
                display_name: d.display_name().to_string(),
                organization: d.organization().to_string(),
                tab: d.active_tab(),
            },
            Some(Dashboard::Unsupported(role)) => ActiveView::Unsupported(*role),
        }
    }

    // ── Elm event loop ──────────────────────────────────────────────────

    /// Main event loop: render → select → update → loop.
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        tick_rate: Duration,
    ) -> io::Result<()> {
        let mut tick_interval = tokio::time::interval(tick_rate);
        let mut event_stream = EventStream::new();

        while self.running {
            // Render
            terminal.draw(|frame| self.render(frame))?;

            // Select next event
            tokio::select! {
                _ = tick_interval.tick() => {
                    self.on_tick();
                }
                Some(event) = self.event_rx.recv() => {
                    self.handle_event(event);
                }
                Some(Ok(crossterm_event)) = event_stream.next() => {
                    self.handle_event(AppEvent::Input(crossterm_event));
                }
            }
        }

        Ok(())
    }

    /// Drain events already queued on the channel without waiting.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }
    }

    // ── Event handling ──────────────────────────────────────────────────

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Input(crossterm_event) => {
                // Priority 1: Help modal
                if self.show_help {
                    if let Some(action) = map_help_input(&crossterm_event) {
                        self.handle_action(action);
                    }
                    return;
                }

                // Priority 2: Profile dropdown
                if let Some(menu) = self.profile_menu.as_mut() {
                    let result = menu.handle_input(&crossterm_event, self.session.known_profiles());
                    if let ViewInput::Action(action) = result {
                        self.handle_action(action);
                    }
                    return;
                }

                // Priority 3: Mounted dashboard
                match self.dispatch_view_input(&crossterm_event) {
                    ViewInput::Ignored => {}
                    ViewInput::Consumed => return,
                    ViewInput::Action(action) => {
                        self.handle_action(action);
                        return;
                    }
                }

                // Priority 4: Global keybindings
                if let Some(action) = self.map_input_to_action(&crossterm_event) {
                    self.handle_action(action);
                }
            }
            AppEvent::Action(action) => self.handle_action(action),
            AppEvent::Tick => self.on_tick(),
            AppEvent::Notification(notification) => {
                self.push_notification(notification.message, notification.level);
            }
            AppEvent::Quit => {
                self.running = false;
            }
        }
    }

    fn dispatch_view_input(&mut self, event: &Event) -> ViewInput {
        let Some(mounted) = self.mounted.as_mut() else {
            return ViewInput::Ignored;
        };
        match &mut mounted.dashboard {
            Dashboard::Investor(d) => d.handle_input(event, &self.data),
            Dashboard::Issuer(d) => d.handle_input(event, &self.data),
            Dashboard::Unsupported(_) => ViewInput::Ignored,
        }
    }

    fn map_input_to_action(&self, event: &Event) -> Option<Action> {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return None;
        };

        match (*modifiers, *code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Action::Quit),
            (KeyModifiers::NONE | KeyModifiers::SHIFT, code) => match code {
                KeyCode::Char('q') => Some(Action::Quit),
                KeyCode::Char('?') => Some(Action::ShowHelp),
                KeyCode::Char('c') if !self.session.is_connected() => Some(Action::Connect),
                KeyCode::Char('p') if self.session.is_connected() => Some(Action::OpenProfileMenu),
                _ => None,
            },
            _ => None,
        }
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::Connect => {
                let was_connected = self.session.is_connected();
                self.session.connect();
                self.sync_mount();
                if !was_connected {
                    self.push_notification("Wallet connected".to_string(), NotificationLevel::Success);
                }
            }
            Action::SelectProfile(id) => {
                self.profile_menu = None;
                let previous = self.session.active_profile().id.clone();
                match self.session.select_profile(id.as_str()) {
                    Ok(profile) => {
                        if profile.id != previous {
                            let message = format!("Switched to {}", profile.display_name);
                            self.push_notification(message, NotificationLevel::Info);
                        }
                    }
                    Err(e) => self.push_notification(e.to_string(), NotificationLevel::Warning),
                }
                self.sync_mount();
            }
            Action::SelectTab(key) => {
                let result = match self.mounted.as_mut().map(|m| &mut m.dashboard) {
                    Some(Dashboard::Investor(d)) => d.select_tab_key(&key).map(|_| ()),
                    Some(Dashboard::Issuer(d)) => d.select_tab_key(&key).map(|_| ()),
                    Some(Dashboard::Unsupported(_)) | None => {
                        log::debug!("Ignoring tab selection '{key}' with no dashboard mounted");
                        Ok(())
                    }
                };
                if let Err(e) = result {
                    log::warn!("{e}");
                    self.push_notification(e.to_string(), NotificationLevel::Warning);
                }
            }
            Action::OpenProfileMenu => {
                if self.session.is_connected() {
                    self.profile_menu = Some(ProfileMenuState::open(&self.session.snapshot()));
                }
            }
            Action::CloseProfileMenu => self.profile_menu = None,
            Action::ShowHelp => self.show_help = true,
            Action::CloseHelp => self.show_help = false,
            Action::ListingOpened { id, title } => {
                tracing::info!(listing_id = %id, "listing opened");
                self.push_notification(format!("Opened {title}"), NotificationLevel::Info);
            }
            Action::ListingViewed { id, title } => {
                tracing::info!(listing_id = %id, "listing viewed");
                self.push_notification(format!("Viewing {title}"), NotificationLevel::Info);
            }
            Action::ListingEditRequested { id, title } => {
                tracing::info!(listing_id = %id, "listing edit requested");
                self.push_notification(format!("Editing {title}"), NotificationLevel::Info);
            }
            Action::ListingDeleteRequested { id, title } => {
                tracing::info!(listing_id = %id, "listing delete requested");
                self.push_notification(format!("Delete requested: {title}"), NotificationLevel::Warning);
            }
            Action::ListingSubmitted { mode, draft } => {
                let message = match &mode {
                    FormMode::Create => {
                        tracing::info!(title = %draft.title, "listing created");
                        format!("Listing created: {}", draft.title)
                    }
                    FormMode::Edit { listing_id } => {
                        tracing::info!(listing_id = %listing_id, "listing updated");
                        format!("Listing updated: {}", draft.title)
                    }
                };
                self.push_notification(message, NotificationLevel::Success);
            }
        }
    }

    /// Mount the composer the session currently calls for. A composer
    /// mounted for the active profile is kept along with its tab state.
    fn sync_mount(&mut self) {
        let snapshot = self.session.snapshot();
        let profile_id = &snapshot.active_profile.id;
        let dashboard = match select_view(&snapshot, &self.view_defaults) {
            RoleView::Landing => {
                self.mounted = None;
                return;
            }
            _ if self.mounted.as_ref().is_some_and(|m| &m.profile_id == profile_id) => return,
            RoleView::Investor {
                display_name,
                initial_tab,
            } => Dashboard::Investor(InvestorDashboard::new(display_name, initial_tab)),
            RoleView::Issuer {
                display_name,
                organization,
                initial_tab,
            } => Dashboard::Issuer(IssuerDashboard::new(
                display_name,
                organization,
                self.contact_email.clone(),
                initial_tab,
            )),
            RoleView::Unsupported { role } => {
                log::warn!("No dashboard for role '{}'", role.label());
                Dashboard::Unsupported(role)
            }
        };

        tracing::info!(
            profile_id = %profile_id,
            role = snapshot.active_profile.role.label(),
            "dashboard mounted"
        );
        self.mounted = Some(Mounted {
            profile_id: profile_id.clone(),
            dashboard,
        });
    }

    // ── Notifications ───────────────────────────────────────────────────

    /// Push a notification (dedup by message, max 3).
    pub fn push_notification(&mut self, message: String, level: NotificationLevel) {
        if self.notifications.iter().any(|n| n.message == message) {
            return;
        }

        self.notification_counter += 1;
        self.notifications.push(Notification {
            id: self.notification_counter,
            message,
            level,
            ttl_ticks: NOTIFICATION_TTL_TICKS,
        });

        while self.notifications.len() > MAX_NOTIFICATIONS {
            self.notifications.remove(0);
        }
    }

    /// Tick: decrement notification TTLs, dismiss expired.
    fn on_tick(&mut self) {
        for n in &mut self.notifications {
            n.ttl_ticks = n.ttl_ticks.saturating_sub(1);
        }
        self.notifications.retain(|n| n.ttl_ticks > 0);
    }

    // ── Rendering ───────────────────────────────────────────────────────

    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let layout = AppLayout::compute(area);
        let snapshot = self.session.snapshot();

        header::render_header(frame, layout.header, &snapshot, &self.wallet_address);

        match self.mounted.as_ref().map(|m| &m.dashboard) {
            None => landing::render(frame, layout.main),
            Some(Dashboard::Investor(d)) => d.render(frame, layout.main, &self.data),
            Some(Dashboard::Issuer(d)) => d.render(frame, layout.main, &self.data),
            Some(Dashboard::Unsupported(role)) => render_unsupported(frame, layout.main, *role),
        }

        self.render_status_bar(frame, layout.status);

        // Overlays
        if let Some(menu) = &self.profile_menu {
            menu.render(frame, area, &snapshot);
        }

        self.render_notifications(frame, area);

        if self.show_help {
            render_help_modal(frame, area);
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let session = if self.session.is_connected() {
            let profile = self.session.active_profile();
            Span::styled(
                format!("{} · {}", profile.display_name, profile.role.label()),
                Style::default()
                    .fg(theme::PRIMARY_LIGHT)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled("disconnected", Style::default().fg(theme::TEXT_MUTED))
        };

        let mut spans = vec![
            Span::styled(" AGYAL ", theme::brand_badge()),
            Span::raw(" "),
            session,
            Span::raw(" │ "),
        ];
        if self.session.is_connected() {
            spans.extend([
                Span::styled("Tab", theme::key_hint()),
                Span::raw(":section "),
                Span::styled("p", theme::key_hint()),
                Span::raw(":profile "),
            ]);
        } else {
            spans.extend([Span::styled("c", theme::key_hint()), Span::raw(":connect ")]);
        }
        spans.extend([
            Span::styled("?", theme::key_hint()),
            Span::raw(":help "),
            Span::styled("q", theme::key_hint()),
            Span::raw(":quit"),
        ]);

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_notifications(&self, frame: &mut Frame, area: Rect) {
        if self.notifications.is_empty() {
            return;
        }

        let max_width = 50.min(area.width.saturating_sub(2));
        let height = self.notifications.len() as u16;
        let x = area.width.saturating_sub(max_width + 1);
        let y = area.height.saturating_sub(height + 1);

        let notification_area = Rect::new(x, y, max_width, height);

        let lines: Vec<Line> = self
            .notifications
            .iter()
            .map(|n| {
                let (prefix, color) = match n.level {
                    NotificationLevel::Info => ("ℹ", theme::INFO),
                    NotificationLevel::Success => ("✓", theme::SUCCESS),
                    NotificationLevel::Warning => ("⚠", theme::WARNING),
                    NotificationLevel::Error => ("✗", theme::ERROR),
                };
                Line::from(vec![
                    Span::styled(
                        format!(" {prefix} "),
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(n.message.as_str()),
                ])
            })
            .collect();

        frame.render_widget(Clear, notification_area);
        frame.render_widget(
            Paragraph::new(lines).style(Style::default().bg(theme::BG_SURFACE)),
            notification_area,
        );
    }
}

fn map_help_input(event: &Event) -> Option<Action> {
    let Event::Key(KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        ..
    }) = event
    else {
        return None;
    };
    match (*modifiers, *code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Action::Quit),
        (_, KeyCode::Esc | KeyCode::Char('?')) => Some(Action::CloseHelp),
        _ => None,
    }
}

fn render_unsupported(frame: &mut Frame, area: Rect, role: Role) {
    let block = Block::default()
        .title(format!(" {} ", role.label()))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(theme::border_default());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::raw(""),
        Line::from(Span::styled(format!("{} dashboard", role.label()), theme::title())),
        Line::raw(""),
        Line::from(Span::styled("Not yet supported", theme::muted())),
        Line::raw(""),
        Line::from(Span::styled(
            "Switch to another profile with p.",
            theme::dim(),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

fn render_help_modal(frame: &mut Frame, area: Rect) {
    let modal = centered_rect(60, 80, area);

    let keybindings = [
        ("Global:", ""),
        ("c", "Connect wallet"),
        ("p", "Switch profile"),
        ("?", "Toggle this help"),
        ("q / Ctrl+C", "Quit"),
        ("", ""),
        ("Dashboards:", ""),
        ("Tab / Shift+Tab", "Next / previous section"),
        ("1-3", "Jump to section"),
        ("", ""),
        ("Listings:", ""),
        ("/", "Search"),
        ("f / d / s", "Risk filter / duration / sort"),
        ("x", "Clear filters"),
        ("j/k, Enter", "Select, open"),
        ("", ""),
        ("Manage Listings:", ""),
        ("n", "Create listing"),
        ("v / e / x", "View / edit / delete"),
        ("Tab, Enter, Esc", "Form: next field, submit, cancel"),
    ];

    let mut lines = vec![
        Line::raw(""),
        Line::from(Span::styled(" Keybindings", theme::title())),
        Line::raw(""),
    ];

    for (key, desc) in &keybindings {
        if key.is_empty() {
            lines.push(Line::raw(""));
        } else if desc.is_empty() {
            lines.push(Line::from(Span::styled(format!("  {key}"), theme::title())));
        } else {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    format!("{:<22}", key),
                    Style::default()
                        .fg(theme::PRIMARY_LIGHT)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(*desc),
            ]));
        }
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::raw("  Press "),
        Span::styled("?", theme::heading()),
        Span::raw(" or "),
        Span::styled("Esc", theme::heading()),
        Span::raw(" to close"),
    ]));

    let block = Block::default()
        .title(" Help ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::ACCENT));

    frame.render_widget(Clear, modal);
    frame.render_widget(Paragraph::new(lines).block(block), modal);
}
