use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── CHALLENGE ─────────────────────────────────────────────────────────────────
//

/// One collaborative challenge with its progressive hints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    number: u32,
    description: String,
    topics: String,
    hints: Vec<String>,
}

impl Challenge {
    #[must_use]
    pub fn new(
        number: u32,
        description: impl Into<String>,
        topics: impl Into<String>,
        hints: Vec<String>,
    ) -> Self {
        Self {
            number,
            description: description.into(),
            topics: topics.into(),
            hints,
        }
    }

    #[must_use]
    pub fn number(&self) -> u32 {
        self.number
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn topics(&self) -> &str {
        &self.topics
    }

    #[must_use]
    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    /// Hint text for a level, if this challenge has that many hints.
    #[must_use]
    pub fn hint(&self, level: HintLevel) -> Option<&str> {
        let index = usize::try_from(level.value()).ok()?.checked_sub(1)?;
        self.hints.get(index).map(String::as_str)
    }
}

//
// ─── HINT LEVEL ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HintLevelError {
    #[error("Hint level must start with a number")]
    NotANumber { raw: String },
    #[error("Hint level {value} is out of range")]
    OutOfRange { value: i64 },
}

/// Progressive disclosure level of a hint. 1 is a gentle nudge, 3 is nearly
/// the answer.
///
/// Any positive integer parses; whether a challenge has that many hints is
/// checked at lookup time.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HintLevel(u32);

impl HintLevel {
    pub const GENTLE: Self = Self(1);
    pub const CLEARER: Self = Self(2);
    pub const ALMOST: Self = Self(3);

    /// The levels offered in the picker, in order.
    pub const CHOICES: [Self; 3] = [Self::GENTLE, Self::CLEARER, Self::ALMOST];

    #[must_use]
    pub fn new(level: u32) -> Self {
        Self(level)
    }

    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Picker label, e.g. `2 - Clearer guidance`.
    #[must_use]
    pub fn label(&self) -> String {
        let name = match self.0 {
            1 => "Gentle nudge",
            2 => "Clearer guidance",
            _ => "Almost there",
        };
        format!("{} - {name}", self.0)
    }

    /// Encouragement shown above the hint text.
    #[must_use]
    pub fn encouragement(&self) -> &'static str {
        match self.0 {
            1 => "💡 **Think about it a bit more**",
            2 => "💭 **You're getting closer**",
            _ => "🎯 **Almost there**",
        }
    }
}

impl fmt::Debug for HintLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HintLevel({})", self.0)
    }
}

impl fmt::Display for HintLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Accepts a bare number (`"2"`) or a picker label (`"2 - Clearer guidance"`).
impl FromStr for HintLevel {
    type Err = HintLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let head = s.split(" - ").next().unwrap_or_default().trim();
        let value = head
            .parse::<i64>()
            .map_err(|_| HintLevelError::NotANumber { raw: s.to_string() })?;
        match u32::try_from(value) {
            Ok(level) if level >= 1 => Ok(HintLevel(level)),
            _ => Err(HintLevelError::OutOfRange { value }),
        }
    }
}
