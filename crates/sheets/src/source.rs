use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use synchrony_core::model::{Email, GroupId, SessionId};
use thiserror::Error;

use crate::records::{
    ChallengeRecord, GroupRecord, StudentRecord, select_challenges, select_group, select_student,
};

/// Errors surfaced by sheet sources.
///
/// A lookup that simply finds nothing is not an error: sources return
/// `Ok(None)` / an empty list for that.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SourceError {
    #[error("sheet request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("sheet request returned status {0}")]
    HttpStatus(reqwest::StatusCode),

    #[error("malformed sheet data: {0}")]
    Csv(#[from] csv::Error),

    #[error("source unavailable: {0}")]
    Unavailable(String),
}

/// Lookup contract for the Students tab.
#[async_trait]
pub trait StudentSource: Send + Sync {
    /// Find the row whose email matches, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns `SourceError` if the tab cannot be fetched or parsed.
    async fn find_student(&self, email: &Email) -> Result<Option<StudentRecord>, SourceError>;
}

/// Lookup contract for the Groups tab.
#[async_trait]
pub trait GroupSource: Send + Sync {
    /// Find the first row for a group id.
    ///
    /// # Errors
    ///
    /// Returns `SourceError` if the tab cannot be fetched or parsed.
    async fn find_group(&self, group_id: &GroupId) -> Result<Option<GroupRecord>, SourceError>;
}

/// Lookup contract for the Challenges tab.
#[async_trait]
pub trait ChallengeSource: Send + Sync {
    /// All rows for a session, in sheet order. Empty when none match.
    ///
    /// # Errors
    ///
    /// Returns `SourceError` if the tab cannot be fetched or parsed.
    async fn challenges_for_session(
        &self,
        session_id: &SessionId,
    ) -> Result<Vec<ChallengeRecord>, SourceError>;
}

/// In-memory tabs for tests and offline runs. An empty instance behaves like
/// a reachable spreadsheet with no rows.
#[derive(Clone, Default)]
pub struct InMemorySheets {
    students: Arc<Mutex<Vec<StudentRecord>>>,
    groups: Arc<Mutex<Vec<GroupRecord>>>,
    challenges: Arc<Mutex<Vec<ChallengeRecord>>>,
}

impl InMemorySheets {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a Students row.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Unavailable` if the lock is poisoned.
    pub fn add_student(&self, row: StudentRecord) -> Result<(), SourceError> {
        self.students.lock().map_err(unavailable)?.push(row);
        Ok(())
    }

    /// Append a Groups row.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Unavailable` if the lock is poisoned.
    pub fn add_group(&self, row: GroupRecord) -> Result<(), SourceError> {
        self.groups.lock().map_err(unavailable)?.push(row);
        Ok(())
    }

    /// Append a Challenges row.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Unavailable` if the lock is poisoned.
    pub fn add_challenge(&self, row: ChallengeRecord) -> Result<(), SourceError> {
        self.challenges.lock().map_err(unavailable)?.push(row);
        Ok(())
    }
}

fn unavailable<E: std::fmt::Display>(e: E) -> SourceError {
    SourceError::Unavailable(e.to_string())
}

#[async_trait]
impl StudentSource for InMemorySheets {
    async fn find_student(&self, email: &Email) -> Result<Option<StudentRecord>, SourceError> {
        let guard = self.students.lock().map_err(unavailable)?;
        Ok(select_student(&guard, email).cloned())
    }
}

#[async_trait]
impl GroupSource for InMemorySheets {
    async fn find_group(&self, group_id: &GroupId) -> Result<Option<GroupRecord>, SourceError> {
        let guard = self.groups.lock().map_err(unavailable)?;
        Ok(select_group(&guard, group_id).cloned())
    }
}

#[async_trait]
impl ChallengeSource for InMemorySheets {
    async fn challenges_for_session(
        &self,
        session_id: &SessionId,
    ) -> Result<Vec<ChallengeRecord>, SourceError> {
        let guard = self.challenges.lock().map_err(unavailable)?;
        Ok(select_challenges(&guard, session_id))
    }
}

/// The three tabs behind trait objects so the HTTP backend can be swapped for
/// in-memory data.
#[derive(Clone)]
pub struct Sources {
    pub students: Arc<dyn StudentSource>,
    pub groups: Arc<dyn GroupSource>,
    pub challenges: Arc<dyn ChallengeSource>,
}

impl Sources {
    /// Empty in-memory tabs: every lookup misses, so callers fall back to mock data.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_sheets(InMemorySheets::new())
    }

    #[must_use]
    pub fn from_sheets(sheets: InMemorySheets) -> Self {
        let students: Arc<dyn StudentSource> = Arc::new(sheets.clone());
        let groups: Arc<dyn GroupSource> = Arc::new(sheets.clone());
        let challenges: Arc<dyn ChallengeSource> = Arc::new(sheets);
        Self {
            students,
            groups,
            challenges,
        }
    }
}
