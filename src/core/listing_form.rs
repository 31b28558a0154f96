//! Listing draft edited in the create/edit dialog, and its required-field rules.

use super::models::ManagedListing;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Title,
    Description,
    Amount,
    Duration,
    Returns,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Title,
        FormField::Description,
        FormField::Amount,
        FormField::Duration,
        FormField::Returns,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Description => "Description",
            Self::Amount => "Amount (USD)",
            Self::Duration => "Duration (Months)",
            Self::Returns => "Expected Returns (%)",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Title => "Enter listing title",
            Self::Description => "Enter listing description",
            Self::Amount => "100,000",
            Self::Duration => "12",
            Self::Returns => "8.5",
        }
    }

    pub fn required_message(self) -> &'static str {
        match self {
            Self::Title => "Title is required",
            Self::Description => "Description is required",
            Self::Amount => "Amount is required",
            Self::Duration => "Duration is required",
            Self::Returns => "Expected returns is required",
        }
    }
}

/// A validation failure on one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FormField,
    pub message: &'static str,
}

/// Raw text of the five form fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListingDraft {
    pub title: String,
    pub description: String,
    pub amount: String,
    pub duration: String,
    pub returns: String,
}

impl ListingDraft {
    /// Values the create dialog opens with.
    pub fn sample() -> Self {
        Self {
            title: "Sample Investment Opportunity".to_string(),
            description: "This is a sample investment opportunity description.".to_string(),
            amount: "100000".to_string(),
            duration: "12".to_string(),
            returns: "8.5".to_string(),
        }
    }

    /// Prefill for the edit dialog.
    pub fn from_listing(listing: &ManagedListing) -> Self {
        let duration: String = listing
            .duration
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        Self {
            title: listing.title.clone(),
            description: String::new(),
            amount: format!("{}", listing.target),
            duration,
            returns: format!("{}", listing.returns),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Description => &self.description,
            FormField::Amount => &self.amount,
            FormField::Duration => &self.duration,
            FormField::Returns => &self.returns,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Title => self.title = value,
            FormField::Description => self.description = value,
            FormField::Amount => self.amount = value,
            FormField::Duration => self.duration = value,
            FormField::Returns => self.returns = value,
        }
    }

    /// Every field must be non-empty.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let errors: Vec<FieldError> = FormField::ALL
            .iter()
            .filter(|&&f| self.get(f).is_empty())
            .map(|&field| FieldError {
                field,
                message: field.required_message(),
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::ManagedStatus;

    #[test]
    fn test_sample_is_valid() {
        assert!(ListingDraft::sample().validate().is_ok());
    }

    #[test]
    fn test_empty_draft_reports_all_fields_in_order() {
        let errors = ListingDraft::default().validate().unwrap_err();
        let messages: Vec<&str> = errors.iter().map(|e| e.message).collect();
        assert_eq!(
            messages,
            vec![
                "Title is required",
                "Description is required",
                "Amount is required",
                "Duration is required",
                "Expected returns is required",
            ]
        );
    }

    #[test]
    fn test_whitespace_counts_as_content() {
        let mut draft = ListingDraft::sample();
        draft.set(FormField::Title, " ".to_string());
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_from_listing_prefill() {
        let listing = ManagedListing {
            id: "2".into(),
            title: "Commercial Property Fund".into(),
            status: ManagedStatus::Pending,
            returns: 8.75,
            duration: "24 months".into(),
            raised: 250_000.0,
            target: 750_000.0,
        };
        let draft = ListingDraft::from_listing(&listing);
        assert_eq!(draft.title, "Commercial Property Fund");
        assert_eq!(draft.amount, "750000");
        assert_eq!(draft.duration, "24");
        assert_eq!(draft.returns, "8.75");

        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, FormField::Description);
    }
}
