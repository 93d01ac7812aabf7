//! Contact form validation and simulated submission
//!
//! Nothing is sent anywhere; a valid message only produces a delayed
//! success notice.

use std::fmt;

/// Delay before the fake submission "succeeds" (ms)
pub const SUBMIT_DELAY_MS: i32 = 2000;
pub const SENDING_LABEL: &str = "Sending...";
pub const SENT_NOTICE: &str = "Message sent successfully!";

/// A validated message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    /// A required field is absent or empty
    MissingField(&'static str),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Shown to the visitor as-is
            FormError::MissingField(_) => f.write_str("Please fill in all fields"),
        }
    }
}

impl std::error::Error for FormError {}

impl ContactMessage {
    /// Validate raw form values; every field must be non-empty
    pub fn validate(
        name: Option<String>,
        email: Option<String>,
        message: Option<String>,
    ) -> Result<Self, FormError> {
        Ok(Self {
            name: required("name", name)?,
            email: required("email", email)?,
            message: required("message", message)?,
        })
    }
}

fn required(field: &'static str, value: Option<String>) -> Result<String, FormError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(FormError::MissingField(field)),
    }
}

/// Submit button state while a fake submission is in flight
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    /// Holds the label to restore afterwards
    Sending { original_label: String },
}

impl SubmitState {
    /// Start sending. Returns `None` if a submission is already in flight.
    pub fn begin(&mut self, current_label: &str) -> Option<&'static str> {
        match self {
            SubmitState::Idle => {
                *self = SubmitState::Sending {
                    original_label: current_label.to_owned(),
                };
                Some(SENDING_LABEL)
            }
            SubmitState::Sending { .. } => None,
        }
    }

    /// Finish sending. Returns the label to restore.
    pub fn finish(&mut self) -> Option<String> {
        match std::mem::replace(self, SubmitState::Idle) {
            SubmitState::Sending { original_label } => Some(original_label),
            SubmitState::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &str) -> Option<String> {
        Some(v.to_string())
    }

    #[test]
    fn test_valid_message() {
        let msg = ContactMessage::validate(s("Ada"), s("ada@example.com"), s("Hello")).unwrap();
        assert_eq!(msg.name, "Ada");
        assert_eq!(msg.message, "Hello");
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(
            ContactMessage::validate(s(""), s("a@b.c"), s("hi")),
            Err(FormError::MissingField("name"))
        );
        assert_eq!(
            ContactMessage::validate(s("Ada"), None, s("hi")),
            Err(FormError::MissingField("email"))
        );
        let err = ContactMessage::validate(s("Ada"), s("a@b.c"), s("")).unwrap_err();
        assert_eq!(err.to_string(), "Please fill in all fields");
    }

    #[test]
    fn test_submit_state_cycle() {
        let mut state = SubmitState::Idle;
        assert_eq!(state.begin("Send Message"), Some(SENDING_LABEL));
        assert_eq!(state.begin("Sending..."), None);
        assert_eq!(state.finish().as_deref(), Some("Send Message"));
        assert_eq!(state, SubmitState::Idle);
        assert_eq!(state.finish(), None);
    }
}
