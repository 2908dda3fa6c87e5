//! Shared error types for the services crate.
//!
//! Every variant's message is the warning shown to the student, so views can
//! render errors directly.

use thiserror::Error;

use sheets::SheetsInitError;
use synchrony_core::model::{EmailError, HintLevelError};

/// Errors emitted by `LoginService`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LoginError {
    #[error(transparent)]
    Email(#[from] EmailError),
}

/// Errors emitted while reading the team of the current session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TeamError {
    #[error("Please login first in the Home tab")]
    NoSession,
}

/// Errors emitted by `ChallengeService`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ChallengeError {
    #[error("No active session. Please login first in the Home tab")]
    NoSession,
    #[error("You logged in again while challenges were loading. Please load them again")]
    SessionChanged,
}

/// Errors emitted by `HintService`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HintError {
    #[error("No active session. Please login first")]
    NoSession,
    #[error("Please load challenges first in the Challenges tab")]
    NoChallenges,
    #[error("Invalid challenge number")]
    InvalidChallenge { input: String },
    #[error("Only {available} hints available")]
    LevelUnavailable { available: usize },
    #[error(transparent)]
    Level(#[from] HintLevelError),
}

/// Errors emitted while assembling `AppServices`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error("sheet source setup failed: {0}")]
    Sheets(#[from] SheetsInitError),
}
