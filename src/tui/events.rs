use crate::core::listing_form::ListingDraft;
use crate::core::profile::ProfileId;

/// Events flowing through the Elm-architecture event loop.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Periodic tick for notification TTLs.
    Tick,
    /// Raw terminal input (keyboard/mouse).
    Input(crossterm::event::Event),
    /// A resolved action to execute. Hosts push `Action::Connect` here once
    /// their wallet handshake completes.
    Action(Action),
    /// Notification to display to the user.
    Notification(Notification),
    /// Request to quit the application.
    Quit,
}

/// Whether the listing dialog creates a new listing or edits one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { listing_id: String },
}

/// High-level actions dispatched by the input mapper and the views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Session
    Connect,
    SelectProfile(ProfileId),
    SelectTab(String),

    // Modals
    OpenProfileMenu,
    CloseProfileMenu,
    ShowHelp,
    CloseHelp,

    // Listing widgets (the caller owns the data; these are informational)
    ListingOpened { id: String, title: String },
    ListingViewed { id: String, title: String },
    ListingEditRequested { id: String, title: String },
    ListingDeleteRequested { id: String, title: String },
    ListingSubmitted { mode: FormMode, draft: ListingDraft },

    // Application
    Quit,
}

/// What a view did with an input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewInput {
    /// Not handled; fall through to global keybindings.
    Ignored,
    Consumed,
    /// Handled, and the shell should run this action.
    Action(Action),
}

impl ViewInput {
    pub fn is_handled(&self) -> bool {
        !matches!(self, ViewInput::Ignored)
    }
}

/// Notification level for the overlay system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A timed notification shown in the overlay.
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub level: NotificationLevel,
    /// Ticks remaining before auto-dismiss.
    pub ttl_ticks: u32,
}
