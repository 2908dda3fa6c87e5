use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Key for one connection's session slot.
///
/// Every UI connection gets its own token, so two students logged in at once
/// never see each other's state.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionToken(Uuid);

impl SessionToken {
    /// Creates a fresh random token
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID
    #[must_use]
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for SessionToken {
    fn default() -> Self {
        Self::new()
    }
}

/// Human-facing study session identifier: `S` followed by the UTC login time
/// to the second (`S20250114093000`).
///
/// Also the key used to look up a session's challenges.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Derives the identifier from a login timestamp.
    #[must_use]
    pub fn from_timestamp(at: DateTime<Utc>) -> Self {
        Self(format!("S{}", at.format("%Y%m%d%H%M%S")))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifier of a study group row in the Groups sheet.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GroupId(String);

impl GroupId {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionToken({})", self.0)
    }
}

impl fmt::Debug for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionId({})", self.0)
    }
}

impl fmt::Debug for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GroupId({})", self.0)
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ─── FromStr Implementations ───────────────────────────────────────────────────

/// Error type for parsing ID from string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    kind: String,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {} from string", self.kind)
    }
}

impl std::error::Error for ParseIdError {}

impl FromStr for SessionToken {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Uuid>()
            .map(SessionToken)
            .map_err(|_| ParseIdError {
                kind: "SessionToken".to_string(),
            })
    }
}

impl FromStr for GroupId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseIdError {
                kind: "GroupId".to_string(),
            });
        }
        Ok(GroupId::new(trimmed))
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn session_id_uses_utc_second_stamp() {
        let id = SessionId::from_timestamp(fixed_now());
        assert_eq!(id.as_str(), "S20231114221320");
    }

    #[test]
    fn session_ids_differ_across_seconds() {
        let first = SessionId::from_timestamp(fixed_now());
        let second = SessionId::from_timestamp(fixed_now() + chrono::Duration::seconds(1));
        assert_ne!(first, second);
    }

    #[test]
    fn tokens_are_unique() {
        assert_ne!(SessionToken::new(), SessionToken::new());
    }

    #[test]
    fn token_round_trips_through_display() {
        let token = SessionToken::new();
        let parsed: SessionToken = token.to_string().parse().unwrap();
        assert_eq!(token, parsed);
    }

    #[test]
    fn token_from_str_invalid() {
        assert!("not-a-token".parse::<SessionToken>().is_err());
    }

    #[test]
    fn group_id_from_str_trims_and_rejects_blank() {
        let id: GroupId = " G002 ".parse().unwrap();
        assert_eq!(id, GroupId::new("G002"));
        assert!("   ".parse::<GroupId>().is_err());
    }
}
