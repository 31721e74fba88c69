//! Form definitions backing the list view inputs.

use thiserror::Error;
use validator::ValidationErrors;

pub mod search;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid search term")]
    InvalidSearchTerm,
}

impl FormError {
    /// Message to show next to the offending input.
    pub fn user_message(&self) -> String {
        match self {
            FormError::Validation(errors) => errors
                .field_errors()
                .values()
                .flat_map(|errors| errors.iter())
                .find_map(|error| error.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| self.to_string()),
            FormError::InvalidSearchTerm => self.to_string(),
        }
    }
}
