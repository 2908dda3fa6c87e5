//! Row shapes of the three sheet tabs and their mapping into domain types.
//!
//! Columns other than the lookup key are optional: a blank cell or a missing
//! column both deserialize to `None`, and the mapping supplies defaults.

use serde::Deserialize;
use synchrony_core::fallback::{DEFAULT_DESCRIPTION, DEFAULT_MEMBER_TOPIC, DEFAULT_TOPICS};
use synchrony_core::model::{Challenge, Email, GroupId, SessionId, TeamMember};

/// Row of the Students tab.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StudentRecord {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub group_id: Option<String>,
}

impl StudentRecord {
    #[must_use]
    pub fn new(email: impl Into<String>, name: Option<&str>, group_id: Option<&str>) -> Self {
        Self {
            email: email.into(),
            name: name.map(str::to_string),
            group_id: group_id.map(str::to_string),
        }
    }

    /// Non-blank name cell.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        non_blank(self.name.as_deref())
    }

    /// Non-blank group cell.
    #[must_use]
    pub fn group(&self) -> Option<GroupId> {
        non_blank(self.group_id.as_deref()).map(GroupId::new)
    }
}

/// Row of the Groups tab. Members and topics are comma-separated and paired by
/// position.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GroupRecord {
    pub group_id: String,
    #[serde(default)]
    pub member_names: Option<String>,
    #[serde(default)]
    pub topics: Option<String>,
}

impl GroupRecord {
    #[must_use]
    pub fn new(group_id: impl Into<String>, member_names: &str, topics: &str) -> Self {
        Self {
            group_id: group_id.into(),
            member_names: Some(member_names.to_string()),
            topics: Some(topics.to_string()),
        }
    }

    /// Pair names with topics. Blank names are skipped; a name without a topic
    /// gets the default topic.
    #[must_use]
    pub fn members(&self) -> Vec<TeamMember> {
        let topics: Vec<&str> = self
            .topics
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .collect();

        self.member_names
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .enumerate()
            .filter_map(|(i, name)| {
                let name = name.trim();
                if name.is_empty() {
                    return None;
                }
                let topic = topics.get(i).copied().unwrap_or(DEFAULT_MEMBER_TOPIC);
                Some(TeamMember::new(name, topic))
            })
            .collect()
    }
}

/// Row of the Challenges tab.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChallengeRecord {
    pub session_id: String,
    #[serde(default)]
    pub challenge_number: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub topics_involved: Option<String>,
    #[serde(default)]
    pub hints_json: Option<String>,
}

impl ChallengeRecord {
    /// Map into a domain challenge. `position` is the row's 0-based index among
    /// the session's rows and numbers the challenge when the cell is blank or
    /// unreadable. Hints that are not a JSON string array are dropped.
    #[must_use]
    pub fn to_challenge(&self, position: usize) -> Challenge {
        let fallback_number = u32::try_from(position + 1).unwrap_or(u32::MAX);
        let number = self
            .challenge_number
            .as_deref()
            .and_then(parse_number)
            .unwrap_or(fallback_number);
        let hints = self
            .hints_json
            .as_deref()
            .and_then(|raw| serde_json::from_str::<Vec<String>>(raw).ok())
            .unwrap_or_default();

        Challenge::new(
            number,
            non_blank(self.description.as_deref()).unwrap_or(DEFAULT_DESCRIPTION),
            non_blank(self.topics_involved.as_deref()).unwrap_or(DEFAULT_TOPICS),
            hints,
        )
    }
}

// Sheet exports render whole numbers as either `2` or `2.0`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn parse_number(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    raw.parse::<u32>().ok().or_else(|| {
        let value = raw.parse::<f64>().ok()?;
        if value.fract() == 0.0 && value >= 0.0 && value <= f64::from(u32::MAX) {
            Some(value as u32)
        } else {
            None
        }
    })
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

// ─── Row selection shared by every source ──────────────────────────────────────

pub(crate) fn select_student<'a>(
    rows: &'a [StudentRecord],
    email: &Email,
) -> Option<&'a StudentRecord> {
    rows.iter().find(|row| email.matches(&row.email))
}

pub(crate) fn select_group<'a>(
    rows: &'a [GroupRecord],
    group_id: &GroupId,
) -> Option<&'a GroupRecord> {
    rows.iter().find(|row| row.group_id.trim() == group_id.as_str())
}

pub(crate) fn select_challenges(
    rows: &[ChallengeRecord],
    session_id: &SessionId,
) -> Vec<ChallengeRecord> {
    rows.iter()
        .filter(|row| row.session_id.trim() == session_id.as_str())
        .cloned()
        .collect()
}
