use serde::Deserialize;
use validator::Validate;

use crate::domain::types::SearchTerm;
use crate::forms::FormError;

pub const SEARCH_TERM_TOO_SHORT: &str = "Input must be at least 3 characters long.";

#[derive(Debug, Deserialize, Validate)]
/// Raw value of the search input.
pub struct SearchForm {
    #[validate(length(min = 3, message = "Input must be at least 3 characters long."))]
    #[serde(default)]
    pub term: String,
}

/// What the search input asks the list to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchInput {
    /// The input was emptied: drop the search filter.
    Cleared,
    Term(SearchTerm),
}

impl SearchForm {
    pub fn new(term: impl Into<String>) -> Self {
        Self { term: term.into() }
    }
}

impl TryFrom<SearchForm> for SearchInput {
    type Error = FormError;

    fn try_from(form: SearchForm) -> Result<Self, Self::Error> {
        if form.term.is_empty() {
            return Ok(SearchInput::Cleared);
        }

        form.validate()?;

        SearchTerm::new(form.term)
            .map(SearchInput::Term)
            .map_err(|_| FormError::InvalidSearchTerm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_clears_the_search() {
        let input = SearchInput::try_from(SearchForm::new("")).unwrap();
        assert_eq!(input, SearchInput::Cleared);
    }

    #[test]
    fn short_input_is_rejected_with_a_message() {
        let err = SearchInput::try_from(SearchForm::new("ab")).unwrap_err();

        assert!(matches!(err, FormError::Validation(_)));
        assert_eq!(err.user_message(), SEARCH_TERM_TOO_SHORT);
    }

    #[test]
    fn long_enough_input_becomes_a_term() {
        let input = SearchInput::try_from(SearchForm::new("abc")).unwrap();
        assert_eq!(input, SearchInput::Term(SearchTerm::new("abc").unwrap()));
    }
}
