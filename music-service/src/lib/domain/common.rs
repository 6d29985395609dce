//! Value objects shared by several aggregates.

use std::fmt;

use chrono::Datelike;
use chrono::Utc;
use thiserror::Error;
use uuid::Uuid;

const ID_SUFFIX_LENGTH: usize = 16;

/// Generate an opaque identifier such as `album-3f9c0d1e2b4a5c6d`.
pub fn generate_id(prefix: &str) -> String {
    let random = Uuid::new_v4().simple().to_string();
    format!("{}-{}", prefix, &random[..ID_SUFFIX_LENGTH])
}

/// Error for free-text field validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("{field} is required")]
    Empty { field: &'static str },

    #[error("{field} too long: maximum {max} characters, got {actual}")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
}

/// Validate a required free-text field.
///
/// Rejects blank values and values longer than `max` characters. The value is
/// returned unchanged otherwise.
pub fn required_text(field: &'static str, value: String, max: usize) -> Result<String, FieldError> {
    let length = value.chars().count();

    if value.trim().is_empty() {
        Err(FieldError::Empty { field })
    } else if length > max {
        Err(FieldError::TooLong {
            field,
            max,
            actual: length,
        })
    } else {
        Ok(value)
    }
}

/// Error for release year validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum YearError {
    #[error("year must be between {min} and {max}, got {actual}")]
    OutOfRange { min: i32, max: i32, actual: i32 },
}

/// Release year of an album or song.
///
/// Bounded by 1900 and the current calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseYear(i32);

impl ReleaseYear {
    const MIN: i32 = 1900;

    pub fn new(year: i32) -> Result<Self, YearError> {
        let max = Utc::now().year();

        if (Self::MIN..=max).contains(&year) {
            Ok(Self(year))
        } else {
            Err(YearError::OutOfRange {
                min: Self::MIN,
                max,
                actual: year,
            })
        }
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for ReleaseYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
