//! Root layout computation for header + main content + status bar.

use ratatui::layout::{Constraint, Layout, Rect};

/// Height of the bordered header bar.
pub const HEADER_HEIGHT: u16 = 3;
/// Below this width dashboards stack their stat cards vertically.
pub const NARROW_THRESHOLD: u16 = 80;

/// Computed layout regions for a single frame.
pub struct AppLayout {
    pub header: Rect,
    pub main: Rect,
    /// Status bar (bottom row).
    pub status: Rect,
}

impl AppLayout {
    pub fn compute(area: Rect) -> Self {
        let rows = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

        AppLayout {
            header: rows[0],
            main: rows[1],
            status: rows[2],
        }
    }
}

/// Split `area` into `count` equal columns, or rows when the area is narrow.
pub fn card_strip(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let constraints = vec![Constraint::Ratio(1, count as u32); count];
    let split = if area.width < NARROW_THRESHOLD {
        Layout::vertical(constraints).split(area)
    } else {
        Layout::horizontal(constraints).split(area)
    };
    split.to_vec()
}

/// Calculate a centered rect using percentage of parent area.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}
