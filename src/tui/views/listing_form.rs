//! Create/edit listing dialog.

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::core::listing_form::{FieldError, FormField, ListingDraft};
use crate::core::models::ManagedListing;
use crate::tui::events::FormMode;
use crate::tui::theme;
use crate::tui::widgets::input_buffer::InputBuffer;

/// Outcome of one key press inside the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormResult {
    Consumed,
    Cancel,
    /// Validation passed; the dialog should close.
    Submit(ListingDraft),
}

#[derive(Debug, Clone)]
pub struct ListingFormState {
    mode: FormMode,
    fields: [InputBuffer; 5],
    focused: usize,
    errors: Vec<FieldError>,
}

impl ListingFormState {
    pub fn create() -> Self {
        Self::from_draft(FormMode::Create, &ListingDraft::sample())
    }

    pub fn edit(listing: &ManagedListing) -> Self {
        Self::from_draft(
            FormMode::Edit {
                listing_id: listing.id.clone(),
            },
            &ListingDraft::from_listing(listing),
        )
    }

    fn from_draft(mode: FormMode, draft: &ListingDraft) -> Self {
        Self {
            mode,
            fields: FormField::ALL.map(|f| InputBuffer::with_text(draft.get(f))),
            focused: 0,
            errors: Vec::new(),
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn focused_field(&self) -> FormField {
        FormField::ALL[self.focused]
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn draft(&self) -> ListingDraft {
        let mut draft = ListingDraft::default();
        for (field, buffer) in FormField::ALL.iter().zip(&self.fields) {
            draft.set(*field, buffer.text().to_string());
        }
        draft
    }

    pub fn handle_input(&mut self, event: &Event) -> FormResult {
        let Event::Key(key) = event else {
            return FormResult::Consumed;
        };
        if key.kind != KeyEventKind::Press {
            return FormResult::Consumed;
        }

        match (key.modifiers, key.code) {
            (_, KeyCode::Esc) => FormResult::Cancel,
            (_, KeyCode::Tab | KeyCode::Down) => {
                self.focused = (self.focused + 1) % self.fields.len();
                FormResult::Consumed
            }
            (_, KeyCode::BackTab | KeyCode::Up) => {
                self.focused = (self.focused + self.fields.len() - 1) % self.fields.len();
                FormResult::Consumed
            }
            (_, KeyCode::Enter) => self.submit(),
            (KeyModifiers::CONTROL, KeyCode::Char('s')) => self.submit(),
            _ => {
                if self.fields[self.focused].handle_key(key) {
                    let field = self.focused_field();
                    self.errors.retain(|e| e.field != field);
                }
                FormResult::Consumed
            }
        }
    }

    fn submit(&mut self) -> FormResult {
        let draft = self.draft();
        match draft.validate() {
            Ok(()) => {
                self.errors.clear();
                FormResult::Submit(draft)
            }
            Err(errors) => {
                if let Some(first) = errors.first() {
                    self.focused = FormField::ALL
                        .iter()
                        .position(|f| *f == first.field)
                        .unwrap_or(0);
                }
                self.errors = errors;
                FormResult::Consumed
            }
        }
    }

    fn error_for(&self, field: FormField) -> Option<&'static str> {
        self.errors.iter().find(|e| e.field == field).map(|e| e.message)
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let (title, submit) = match self.mode {
            FormMode::Create => ("Create New Listing", "Create Listing"),
            FormMode::Edit { .. } => ("Edit Listing", "Update Listing"),
        };

        frame.render_widget(Clear, area);
        let block = Block::default()
            .title(Span::styled(format!(" {title} "), theme::title()))
            .borders(Borders::ALL)
            .border_style(theme::border_focused())
            .style(Style::default().bg(theme::BG_SURFACE));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // label, input, error per field; then upload hint and buttons
        let mut constraints: Vec<Constraint> = FormField::ALL
            .iter()
            .flat_map(|_| [Constraint::Length(1), Constraint::Length(1), Constraint::Length(1)])
            .collect();
        constraints.extend([Constraint::Length(2), Constraint::Length(1), Constraint::Min(0)]);
        let rows = Layout::vertical(constraints).split(inner);

        for (i, field) in FormField::ALL.iter().enumerate() {
            let focused = i == self.focused;
            let label_style = if focused { theme::heading() } else { theme::muted() };
            frame.render_widget(
                Paragraph::new(Span::styled(format!(" {}", field.label()), label_style)),
                rows[i * 3],
            );

            let marker = if focused {
                Span::styled(" ▸ ", theme::highlight())
            } else {
                Span::raw("   ")
            };
            let mut spans = vec![marker];
            spans.extend(self.fields[i].spans(field.placeholder(), focused));
            frame.render_widget(Paragraph::new(Line::from(spans)), rows[i * 3 + 1]);

            if let Some(message) = self.error_for(*field) {
                frame.render_widget(
                    Paragraph::new(Span::styled(format!("   {message}"), Style::default().fg(theme::ERROR))),
                    rows[i * 3 + 2],
                );
            }
        }

        let base = FormField::ALL.len() * 3;
        frame.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled(" Supporting Documents", theme::muted())),
                Line::from(Span::styled("   Upload a file (PDF, DOC up to 10MB)", theme::dim())),
            ]),
            rows[base],
        );
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::raw(" "),
                Span::styled(" Cancel ", Style::default().fg(theme::TEXT).bg(theme::TEXT_DIM)),
                Span::styled(" [Esc]", theme::key_hint()),
                Span::raw("   "),
                Span::styled(
                    format!(" {submit} "),
                    Style::default()
                        .fg(theme::BG_BASE)
                        .bg(theme::ACCENT)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" [Enter]", theme::key_hint()),
            ])),
            rows[base + 1],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::DashboardData;
    use crate::tui::test_support::render_to_string;
    use crossterm::event::KeyEvent;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_create_submits_sample_values() {
        let mut form = ListingFormState::create();
        assert_eq!(form.mode(), &FormMode::Create);
        assert_eq!(form.handle_input(&press(KeyCode::Enter)), FormResult::Submit(ListingDraft::sample()));
    }

    #[test]
    fn test_edit_prefills_from_listing() {
        let data = DashboardData::sample();
        let form = ListingFormState::edit(&data.managed_listings[1]);
        let draft = form.draft();
        assert_eq!(draft.title, "Commercial Property Fund");
        assert_eq!(draft.duration, "24");
        assert_eq!(form.mode(), &FormMode::Edit { listing_id: "2".into() });
    }

    #[test]
    fn test_empty_description_blocks_submit() {
        let data = DashboardData::sample();
        let mut form = ListingFormState::edit(&data.managed_listings[0]);
        assert_eq!(form.handle_input(&press(KeyCode::Enter)), FormResult::Consumed);
        assert_eq!(form.focused_field(), FormField::Description);
        assert_eq!(form.errors().len(), 1);

        form.handle_input(&press(KeyCode::Char('x')));
        assert!(form.errors().is_empty());
        assert!(matches!(form.handle_input(&press(KeyCode::Enter)), FormResult::Submit(_)));
    }

    #[test]
    fn test_focus_wraps() {
        let mut form = ListingFormState::create();
        form.handle_input(&press(KeyCode::BackTab));
        assert_eq!(form.focused_field(), FormField::Returns);
        form.handle_input(&press(KeyCode::Tab));
        assert_eq!(form.focused_field(), FormField::Title);
    }

    #[test]
    fn test_escape_cancels() {
        let mut form = ListingFormState::create();
        assert_eq!(form.handle_input(&press(KeyCode::Esc)), FormResult::Cancel);
    }

    #[test]
    fn test_render_error_and_buttons() {
        let data = DashboardData::sample();
        let mut form = ListingFormState::edit(&data.managed_listings[0]);
        form.handle_input(&press(KeyCode::Enter));
        let text = render_to_string(80, 24, |f| form.render(f, f.area()));
        assert!(text.contains("Edit Listing"));
        assert!(text.contains("Description is required"));
        assert!(text.contains("Update Listing"));
        assert!(text.contains("PDF, DOC up to 10MB"));
    }
}
