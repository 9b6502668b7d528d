//! Issue form types and validation.
//!
//! This module contains the form field values for the create-issue view,
//! the per-field validation error map, and the submission status tracked
//! while a create request is outstanding.

use std::collections::HashMap;

/// Minimum length of a trimmed issue title.
///
pub const TITLE_MIN_CHARS: usize = 3;

/// Minimum length of a trimmed issue description.
///
pub const DESCRIPTION_MIN_CHARS: usize = 10;

/// Specifying the fields of the issue form.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum FormField {
    Title,
    Description,
}

impl FormField {
    /// Return the display label for the field.
    ///
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Description => "Description",
        }
    }
}

/// Houses the current values of the issue form.
///
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IssueForm {
    pub title: String,
    pub description: String,
}

/// Maps form fields to validation error messages. An empty map means the
/// form (or, for a single lookup, the field) is valid.
///
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldErrors {
    entries: HashMap<FormField, String>,
}

impl FieldErrors {
    /// Return true when no field has an error.
    ///
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Return the number of fields with errors.
    ///
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return the error message for the field, if any.
    ///
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.entries.get(&field).map(String::as_str)
    }

    /// Record an error message for the field.
    ///
    pub fn set(&mut self, field: FormField, message: impl Into<String>) {
        self.entries.insert(field, message.into());
    }

    /// Remove any error recorded for the field, leaving other fields
    /// untouched.
    ///
    pub fn clear(&mut self, field: FormField) {
        self.entries.remove(&field);
    }
}

/// Tracks the lifecycle of a form submission. At most one request is
/// outstanding per form session.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionStatus {
    Idle,
    InFlight,
    Succeeded,
    Failed(String),
}

impl SubmissionStatus {
    /// Return true while a create request is outstanding.
    ///
    pub fn is_in_flight(&self) -> bool {
        matches!(self, SubmissionStatus::InFlight)
    }
}

impl Default for SubmissionStatus {
    fn default() -> Self {
        SubmissionStatus::Idle
    }
}

/// Validate the form, returning an error map recomputed from scratch.
/// Both fields are trimmed before their lengths are checked, so
/// whitespace-only input counts as empty. Fields exactly at their minimum
/// length are valid.
///
pub fn validate(form: &IssueForm) -> FieldErrors {
    let mut errors = FieldErrors::default();

    let title = form.title.trim();
    if title.is_empty() {
        errors.set(FormField::Title, "Title is required");
    } else if title.chars().count() < TITLE_MIN_CHARS {
        errors.set(
            FormField::Title,
            format!("Title must be at least {} characters long", TITLE_MIN_CHARS),
        );
    }

    let description = form.description.trim();
    if description.is_empty() {
        errors.set(FormField::Description, "Description is required");
    } else if description.chars().count() < DESCRIPTION_MIN_CHARS {
        errors.set(
            FormField::Description,
            format!(
                "Description must be at least {} characters long",
                DESCRIPTION_MIN_CHARS
            ),
        );
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(title: &str, description: &str) -> IssueForm {
        IssueForm {
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_valid_form_returns_no_errors() {
        let errors = validate(&form("Bug", "Something is broken"));
        assert!(errors.is_empty());
        assert_eq!(errors.len(), 0);
    }

    #[test]
    fn test_empty_form_returns_errors_for_both_fields() {
        let errors = validate(&form("", ""));
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(FormField::Title), Some("Title is required"));
        assert_eq!(
            errors.get(FormField::Description),
            Some("Description is required")
        );
    }

    #[test]
    fn test_whitespace_only_title_is_treated_as_empty() {
        let errors = validate(&form("   ", "A long enough description"));
        assert_eq!(errors.get(FormField::Title), Some("Title is required"));
        assert!(errors.get(FormField::Description).is_none());
    }

    #[test]
    fn test_title_boundary_is_inclusive() {
        // Exactly three non-space characters passes.
        let errors = validate(&form("Bug", "A long enough description"));
        assert!(errors.get(FormField::Title).is_none());

        // Two characters fails.
        let errors = validate(&form("Bu", "A long enough description"));
        assert_eq!(
            errors.get(FormField::Title),
            Some("Title must be at least 3 characters long")
        );
    }

    #[test]
    fn test_title_is_trimmed_before_length_check() {
        // Two characters padded with spaces still fails.
        let errors = validate(&form("  Bu  ", "A long enough description"));
        assert!(errors.get(FormField::Title).is_some());

        // Three characters padded with spaces passes.
        let errors = validate(&form("  Bug  ", "A long enough description"));
        assert!(errors.get(FormField::Title).is_none());
    }

    #[test]
    fn test_description_boundary_is_inclusive() {
        // Exactly ten characters passes.
        let errors = validate(&form("Bug", "0123456789"));
        assert!(errors.get(FormField::Description).is_none());

        // Nine characters fails.
        let errors = validate(&form("Bug", "012345678"));
        assert_eq!(
            errors.get(FormField::Description),
            Some("Description must be at least 10 characters long")
        );
    }

    #[test]
    fn test_validator_is_pure_and_idempotent() {
        let input = form("Bu", "short");
        let first = validate(&input);
        let second = validate(&input);
        assert_eq!(first, second);
        // The input form is untouched by validation.
        assert_eq!(input, form("Bu", "short"));
    }

    #[test]
    fn test_errors_are_recomputed_wholesale() {
        let errors = validate(&form("", "short"));
        assert_eq!(errors.len(), 2);

        // Fixing one field drops exactly that entry on the next pass.
        let errors = validate(&form("Bug", "short"));
        assert_eq!(errors.len(), 1);
        assert!(errors.get(FormField::Title).is_none());
        assert!(errors.get(FormField::Description).is_some());
    }

    #[test]
    fn test_clear_removes_only_the_given_field() {
        let mut errors = validate(&form("", ""));
        errors.clear(FormField::Title);
        assert!(errors.get(FormField::Title).is_none());
        assert!(errors.get(FormField::Description).is_some());
    }

    #[test]
    fn test_submission_status_in_flight() {
        assert!(!SubmissionStatus::Idle.is_in_flight());
        assert!(SubmissionStatus::InFlight.is_in_flight());
        assert!(!SubmissionStatus::Succeeded.is_in_flight());
        assert!(!SubmissionStatus::Failed("nope".to_string()).is_in_flight());
    }

    #[test]
    fn test_submission_status_default_is_idle() {
        assert_eq!(SubmissionStatus::default(), SubmissionStatus::Idle);
    }
}
