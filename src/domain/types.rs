//! Strongly-typed value objects used by the list view.
//!
//! These wrappers enforce basic invariants (non-empty identifiers, positive
//! page sizes, minimum search length) so that once a value reaches the
//! coordinator it can be treated as trusted.
use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum number of characters a search term must have to be applied.
pub const SEARCH_TERM_MIN_LENGTH: usize = 3;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Page size was zero.
    #[error("page size must be greater than zero")]
    NonPositivePageSize,
    /// Page size could not be parsed as a number.
    #[error("invalid page size: {0}")]
    InvalidPageSize(String),
    /// Search term is shorter than [`SEARCH_TERM_MIN_LENGTH`].
    #[error("search term must be at least {SEARCH_TERM_MIN_LENGTH} characters long")]
    SearchTermTooShort,
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let trimmed = value.into().trim().to_string();
                if trimmed.is_empty() {
                    return Err(TypeConstraintError::EmptyString);
                }
                Ok(Self(trimmed))
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

non_empty_string_newtype!(AccountId, "Unique identifier for an account record.");

non_empty_string_newtype!(
    AccountName,
    "Account name wrapper enforcing trimmed, non-empty values."
);

non_empty_string_newtype!(
    RecordTypeId,
    "Identifier of the record type used to resolve picklist values."
);

/// Number of records requested per page.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "usize", into = "usize")]
pub struct PageSize(usize);

impl PageSize {
    /// Creates a page size ensuring it is greater than zero.
    pub fn new(value: usize) -> Result<Self, TypeConstraintError> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::NonPositivePageSize)
        }
    }

    /// Returns the raw `usize` backing this page size.
    pub const fn get(self) -> usize {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(crate::DEFAULT_PAGE_SIZE)
    }
}

impl Display for PageSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<usize> for PageSize {
    type Error = TypeConstraintError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PageSize> for usize {
    fn from(value: PageSize) -> Self {
        value.0
    }
}

impl FromStr for PageSize {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<usize>()
            .map_err(|_| TypeConstraintError::InvalidPageSize(s.to_string()))?;
        Self::new(value)
    }
}

/// Free-text search term that is long enough to be applied as a filter.
///
/// The text is kept as typed: no trimming, length counted in characters.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let value = value.into();
        if value.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        if value.chars().count() < SEARCH_TERM_MIN_LENGTH {
            return Err(TypeConstraintError::SearchTermTooShort);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for SearchTerm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for SearchTerm {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for SearchTerm {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SearchTerm> for String {
    fn from(value: SearchTerm) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_id_rejects_blank_values() {
        assert_eq!(AccountId::new("   "), Err(TypeConstraintError::EmptyString));
        assert_eq!(AccountId::new(" 001A ").unwrap().as_str(), "001A");
    }

    #[test]
    fn page_size_must_be_positive() {
        assert_eq!(PageSize::new(0), Err(TypeConstraintError::NonPositivePageSize));
        assert_eq!(PageSize::new(50).unwrap().get(), 50);
        assert_eq!(PageSize::default().get(), 25);
    }

    #[test]
    fn page_size_parses_combobox_values() {
        assert_eq!("10".parse::<PageSize>().unwrap().get(), 10);
        assert_eq!(
            "ten".parse::<PageSize>(),
            Err(TypeConstraintError::InvalidPageSize("ten".to_string()))
        );
        assert_eq!(
            "0".parse::<PageSize>(),
            Err(TypeConstraintError::NonPositivePageSize)
        );
    }

    #[test]
    fn search_term_requires_three_characters() {
        assert_eq!(SearchTerm::new(""), Err(TypeConstraintError::EmptyString));
        assert_eq!(
            SearchTerm::new("ab"),
            Err(TypeConstraintError::SearchTermTooShort)
        );
        assert_eq!(SearchTerm::new("abc").unwrap().as_str(), "abc");
        // Counted in characters, not bytes.
        assert_eq!(
            SearchTerm::new("жж"),
            Err(TypeConstraintError::SearchTermTooShort)
        );
    }
}
