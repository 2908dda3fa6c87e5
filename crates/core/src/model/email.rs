use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EmailError {
    #[error("Please enter a valid email address")]
    Invalid,
}

/// A login email as typed by the student.
///
/// Only the presence of `@` is checked; the address is kept verbatim
/// (surrounding whitespace trimmed) so lookups can compare it case-insensitively.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    /// Validate raw input.
    ///
    /// # Errors
    ///
    /// Returns `EmailError::Invalid` if the input is blank or lacks `@`.
    pub fn parse(raw: &str) -> Result<Self, EmailError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || !trimmed.contains('@') {
            return Err(EmailError::Invalid);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Everything before the first `@`.
    #[must_use]
    pub fn local_part(&self) -> &str {
        self.0.split('@').next().unwrap_or_default()
    }

    /// Case-insensitive comparison against a raw address from a sheet row.
    #[must_use]
    pub fn matches(&self, other: &str) -> bool {
        self.0.to_lowercase() == other.trim().to_lowercase()
    }

    /// Display name guessed from the local part.
    #[must_use]
    pub fn display_name(&self) -> String {
        display_name_from_email(self)
    }
}

impl fmt::Debug for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Email({})", self.0)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `jane.doe_smith@uni.edu` -> `Jane Doe Smith`.
///
/// Dots and underscores become spaces, then every run of letters is
/// capitalized with the rest lowercased. A letter following any non-letter
/// (digit, apostrophe, hyphen) starts a new word.
#[must_use]
pub fn display_name_from_email(email: &Email) -> String {
    let spaced = email.local_part().replace(['.', '_'], " ");
    title_case(&spaced)
}

fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_is_letter = false;
    for ch in input.chars() {
        if ch.is_alphabetic() {
            if prev_is_letter {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(ch);
            prev_is_letter = false;
        }
    }
    out
}
