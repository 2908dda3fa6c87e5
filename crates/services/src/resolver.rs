use sheets::{SourceError, Sources};
use synchrony_core::fallback::{fallback_challenges, fallback_group_id, fallback_team};
use synchrony_core::model::{Challenge, Email, GroupId, SessionId, TeamMember};
use tracing::{debug, warn};

/// Why mock data was used instead of sheet data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    /// The source answered but had no usable row.
    Missing,
    /// The source could not be read; carries the rendered error.
    SourceError(String),
}

/// Where a resolved value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    Sheet,
    Fallback(FallbackReason),
}

/// A value plus the path that produced it. The value is always usable; the
/// origin exists for logs and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<T> {
    pub value: T,
    pub origin: Origin,
}

impl<T> Resolved<T> {
    fn sheet(value: T) -> Self {
        Self {
            value,
            origin: Origin::Sheet,
        }
    }

    fn fallback(value: T, reason: FallbackReason) -> Self {
        Self {
            value,
            origin: Origin::Fallback(reason),
        }
    }

    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self.origin, Origin::Fallback(_))
    }
}

/// Who a login email belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub name: String,
    pub group_id: GroupId,
}

/// Turns sheet lookups into values, substituting mock data for anything the
/// sheet cannot provide.
#[derive(Clone)]
pub struct DataResolver {
    sources: Sources,
}

impl DataResolver {
    #[must_use]
    pub fn new(sources: Sources) -> Self {
        Self { sources }
    }

    /// Name and group for an email. Without a student row the name is derived
    /// from the email and the group is the fallback group; a row with blank
    /// cells is filled the same way, cell by cell.
    pub async fn resolve_identity(&self, email: &Email) -> Resolved<Identity> {
        match self.sources.students.find_student(email).await {
            Ok(Some(row)) => {
                debug!(%email, "student row found");
                Resolved::sheet(Identity {
                    name: row
                        .display_name()
                        .map_or_else(|| email.display_name(), str::to_string),
                    group_id: row.group().unwrap_or_else(fallback_group_id),
                })
            }
            Ok(None) => {
                debug!(%email, "no student row; deriving identity from email");
                Resolved::fallback(derived_identity(email), FallbackReason::Missing)
            }
            Err(err) => Resolved::fallback(derived_identity(email), source_failed("Students", &err)),
        }
    }

    /// Members of a group, or the fallback trio when the group is unknown,
    /// lists nobody, or cannot be read.
    pub async fn resolve_team(&self, group_id: &GroupId) -> Resolved<Vec<TeamMember>> {
        match self.sources.groups.find_group(group_id).await {
            Ok(Some(row)) => {
                let members = row.members();
                if members.is_empty() {
                    debug!(%group_id, "group row lists no members; using fallback team");
                    Resolved::fallback(fallback_team(), FallbackReason::Missing)
                } else {
                    Resolved::sheet(members)
                }
            }
            Ok(None) => {
                debug!(%group_id, "no group row; using fallback team");
                Resolved::fallback(fallback_team(), FallbackReason::Missing)
            }
            Err(err) => Resolved::fallback(fallback_team(), source_failed("Groups", &err)),
        }
    }

    /// Challenges for a session in sheet order, or the three mock challenges.
    pub async fn resolve_challenges(&self, session_id: &SessionId) -> Resolved<Vec<Challenge>> {
        match self
            .sources
            .challenges
            .challenges_for_session(session_id)
            .await
        {
            Ok(rows) if rows.is_empty() => {
                debug!(%session_id, "no challenge rows; using mock challenges");
                Resolved::fallback(fallback_challenges(), FallbackReason::Missing)
            }
            Ok(rows) => Resolved::sheet(
                rows.iter()
                    .enumerate()
                    .map(|(i, row)| row.to_challenge(i))
                    .collect(),
            ),
            Err(err) => {
                Resolved::fallback(fallback_challenges(), source_failed("Challenges", &err))
            }
        }
    }
}

fn derived_identity(email: &Email) -> Identity {
    Identity {
        name: email.display_name(),
        group_id: fallback_group_id(),
    }
}

fn source_failed(tab: &'static str, err: &SourceError) -> FallbackReason {
    warn!(tab, error = %err, "could not read sheet; using fallback data");
    FallbackReason::SourceError(err.to_string())
}
