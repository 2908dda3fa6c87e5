use chrono::{DateTime, Utc};

use crate::model::{Challenge, GroupId, SessionId, TeamMember};

/// Where a connection sits in the login flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    LoggedOut,
    LoggedIn,
    ChallengesLoaded,
}

impl SessionPhase {
    /// Phase of a connection given its (possibly absent) session.
    #[must_use]
    pub fn of(session: Option<&Session>) -> Self {
        match session {
            None => Self::LoggedOut,
            Some(session) if session.challenges.is_empty() => Self::LoggedIn,
            Some(_) => Self::ChallengesLoaded,
        }
    }
}

/// The logged-in student's state for one connection.
///
/// Replaced wholesale on every login; challenges are attached later by the
/// challenge-load action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    name: String,
    group_id: GroupId,
    session_id: SessionId,
    team: Vec<TeamMember>,
    challenges: Vec<Challenge>,
}

impl Session {
    /// Start a session at `started_at`; the session id is derived from it.
    #[must_use]
    pub fn start(
        name: impl Into<String>,
        group_id: GroupId,
        team: Vec<TeamMember>,
        started_at: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.into(),
            group_id,
            session_id: SessionId::from_timestamp(started_at),
            team,
            challenges: Vec::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn group_id(&self) -> &GroupId {
        &self.group_id
    }

    #[must_use]
    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    #[must_use]
    pub fn team(&self) -> &[TeamMember] {
        &self.team
    }

    #[must_use]
    pub fn challenges(&self) -> &[Challenge] {
        &self.challenges
    }

    /// Challenge by its 1-based position in the loaded list.
    #[must_use]
    pub fn challenge(&self, position: u32) -> Option<&Challenge> {
        let index = usize::try_from(position).ok()?.checked_sub(1)?;
        self.challenges.get(index)
    }

    /// Teammates other than the logged-in student.
    pub fn teammates(&self) -> impl Iterator<Item = &TeamMember> {
        self.team.iter().filter(|member| !member.is_named(&self.name))
    }

    pub fn set_challenges(&mut self, challenges: Vec<Challenge>) {
        self.challenges = challenges;
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        SessionPhase::of(Some(self))
    }
}
