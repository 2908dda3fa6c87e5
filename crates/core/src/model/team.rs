use serde::{Deserialize, Serialize};

/// A study-group member and the topic they teach the others.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    name: String,
    topic: String,
}

impl TeamMember {
    #[must_use]
    pub fn new(name: impl Into<String>, topic: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            topic: topic.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Exact, case-insensitive name match. Used to keep the student out of
    /// their own simulated chat replies.
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

/// Loose "is this you" check for the team listing: either lowercased name
/// contains the other.
///
/// Short names over-match ("Al" matches "Ali" and "Ala"). A blank name never
/// matches.
#[must_use]
pub fn names_overlap(user_name: &str, member_name: &str) -> bool {
    let user = user_name.trim().to_lowercase();
    let member = member_name.trim().to_lowercase();
    if user.is_empty() || member.is_empty() {
        return false;
    }
    member.contains(&user) || user.contains(&member)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_is_symmetric_substring() {
        assert!(names_overlap("Layla", "Layla Mahmoud"));
        assert!(names_overlap("Layla Mahmoud", "layla"));
        assert!(!names_overlap("Omar Khalil", "Layla Mahmoud"));
    }

    #[test]
    fn short_names_over_match() {
        assert!(names_overlap("Al", "Ali"));
        assert!(names_overlap("Al", "Ala"));
    }

    #[test]
    fn blank_names_never_match() {
        assert!(!names_overlap("", "Omar Khalil"));
        assert!(!names_overlap("  ", "Omar Khalil"));
    }

    #[test]
    fn is_named_ignores_case_only() {
        let member = TeamMember::new("Omar Khalil", "Linked Lists");
        assert!(member.is_named("omar khalil"));
        assert!(!member.is_named("Omar"));
    }
}
