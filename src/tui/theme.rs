//! Navy & gold color theme for the AGYAL TUI.
//!
//! All color constants are RGB truecolor. Views import from here
//! instead of using inline `Color::*` literals.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders};

use crate::core::format::Trend;
use crate::core::models::{ManagedStatus, MarketStatus};

// ── Primary palette ─────────────────────────────────────────────────────────

/// Navy: primary accent, active tabs, focused borders.
pub const PRIMARY: Color = Color::Rgb(0x1E, 0x40, 0xAF);
/// Light navy: highlights, hints, secondary focus.
pub const PRIMARY_LIGHT: Color = Color::Rgb(0x60, 0x8D, 0xF5);

// ── Accent ──────────────────────────────────────────────────────────────────

/// Gold: brand, calls to action, selected items.
pub const ACCENT: Color = Color::Rgb(0xF5, 0xB0, 0x1A);

// ── Backgrounds ─────────────────────────────────────────────────────────────

/// Ink: base background.
pub const BG_BASE: Color = Color::Rgb(0x0B, 0x12, 0x20);
/// Surface: header, dropdowns, dialogs.
pub const BG_SURFACE: Color = Color::Rgb(0x13, 0x1D, 0x33);

// ── Text ────────────────────────────────────────────────────────────────────

pub const TEXT: Color = Color::Rgb(0xE5, 0xE7, 0xEB);
/// Muted text: card captions, labels.
pub const TEXT_MUTED: Color = Color::Rgb(0x9C, 0xA3, 0xAF);
/// Dim text: placeholders, key hints.
pub const TEXT_DIM: Color = Color::Rgb(0x4B, 0x55, 0x63);

// ── Semantic ────────────────────────────────────────────────────────────────

pub const ERROR: Color = Color::Rgb(0xEF, 0x44, 0x44);
pub const SUCCESS: Color = Color::Rgb(0x22, 0xC5, 0x5E);
pub const WARNING: Color = Color::Rgb(0xEA, 0xB3, 0x08);
pub const INFO: Color = Color::Rgb(0x3B, 0x82, 0xF6);

// ── Style helpers ───────────────────────────────────────────────────────────

/// Gold bold text (titles, active items).
pub fn title() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Section header style.
pub fn heading() -> Style {
    Style::default().fg(PRIMARY_LIGHT).add_modifier(Modifier::BOLD)
}

/// Large figure on a stat card.
pub fn figure() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

pub fn border_focused() -> Style {
    Style::default().fg(PRIMARY_LIGHT)
}

pub fn border_default() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Highlighted/selected item.
pub fn highlight() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(TEXT_MUTED)
}

pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Key hint style (e.g., "[q]:quit").
pub fn key_hint() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Status bar brand badge.
pub fn brand_badge() -> Style {
    Style::default()
        .fg(BG_BASE)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Green for gains, red for losses.
pub fn trend(trend: Trend) -> Style {
    match trend {
        Trend::Up => Style::default().fg(SUCCESS),
        Trend::Down => Style::default().fg(ERROR),
    }
}

/// Badge for a listing on the investor grid.
pub fn market_status_badge(status: MarketStatus) -> Style {
    match status {
        MarketStatus::Active => Style::default().fg(BG_BASE).bg(PRIMARY_LIGHT),
        MarketStatus::ComingSoon => Style::default().fg(TEXT).bg(TEXT_DIM),
        MarketStatus::Closed => Style::default().fg(TEXT_MUTED),
    }
}

/// Badge for a listing in the issuer's management table.
pub fn managed_status_badge(status: ManagedStatus) -> Style {
    let color = match status {
        ManagedStatus::Active => SUCCESS,
        ManagedStatus::Pending => WARNING,
        ManagedStatus::Expired => ERROR,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

// ── Block builders ──────────────────────────────────────────────────────────

/// A bordered block with focused styling.
pub fn block_focused(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(border_focused())
}

/// A bordered block with default (unfocused) styling.
pub fn block_default(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(border_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_colors() {
        assert_eq!(trend(Trend::Up).fg, Some(SUCCESS));
        assert_eq!(trend(Trend::Down).fg, Some(ERROR));
    }

    #[test]
    fn test_managed_badges_distinct() {
        let active = managed_status_badge(ManagedStatus::Active);
        let pending = managed_status_badge(ManagedStatus::Pending);
        let expired = managed_status_badge(ManagedStatus::Expired);
        assert_ne!(active, pending);
        assert_ne!(pending, expired);
    }

    #[test]
    fn test_style_helpers_return_non_default() {
        assert_ne!(title(), Style::default());
        assert_ne!(heading(), Style::default());
        assert_ne!(highlight(), Style::default());
        assert_ne!(muted(), Style::default());
    }
}
