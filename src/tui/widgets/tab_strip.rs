//! Tab strip and tab-switching keys shared by both dashboards.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::core::tabs::{TabKey, TabState};
use crate::tui::theme;

pub fn render<K: TabKey>(frame: &mut Frame, area: Rect, tabs: &TabState<K>) {
    let mut spans: Vec<Span> = K::ALL
        .iter()
        .enumerate()
        .flat_map(|(i, t)| {
            let style = if *t == tabs.active() {
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme::TEXT_MUTED)
            };
            vec![
                Span::styled(format!(" {} {} ", i + 1, t.label()), style),
                Span::raw("│"),
            ]
        })
        .collect();
    spans.push(Span::styled("  [Tab] switch", theme::key_hint()));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_default());
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}

/// Tab/Shift+Tab cycle, digits select by position. Returns true if handled.
pub fn handle_key<K: TabKey>(tabs: &mut TabState<K>, key: &KeyEvent) -> bool {
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Tab) => {
            tabs.next();
            true
        }
        (_, KeyCode::BackTab) => {
            tabs.prev();
            true
        }
        (KeyModifiers::NONE, KeyCode::Char(c @ '1'..='9')) => {
            let index = (c as usize) - ('1' as usize);
            tabs.select_index(index).is_some()
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tabs::InvestorTab;

    #[test]
    fn test_digit_and_cycle_keys() {
        let mut tabs = TabState::<InvestorTab>::default();
        assert!(handle_key(&mut tabs, &KeyEvent::new(KeyCode::Char('3'), KeyModifiers::NONE)));
        assert_eq!(tabs.active(), InvestorTab::Cards);
        assert!(handle_key(&mut tabs, &KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)));
        assert_eq!(tabs.active(), InvestorTab::Overview);
        assert!(handle_key(&mut tabs, &KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)));
        assert_eq!(tabs.active(), InvestorTab::Cards);
        // out of range digit is not handled
        assert!(!handle_key(&mut tabs, &KeyEvent::new(KeyCode::Char('7'), KeyModifiers::NONE)));
        assert_eq!(tabs.active(), InvestorTab::Cards);
    }
}
