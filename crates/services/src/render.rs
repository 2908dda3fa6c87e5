//! Markdown text blocks shown by the views.

use std::fmt::{Display, Write as _};

use synchrony_core::model::{Challenge, Session, names_overlap};

use crate::hint_service::Hint;

pub const CHALLENGES_PLACEHOLDER: &str = "Click the button above to load your challenges";
pub const HINT_PLACEHOLDER: &str = "Select a challenge and hint level, then click the button";

const RULE: &str = "---\n\n";

/// A recoverable problem, e.g. `⚠️ Please login first in the Home tab`.
#[must_use]
pub fn warning(message: impl Display) -> String {
    format!("⚠️ {message}")
}

/// Rejected input, e.g. `❌ Please enter a valid email address`.
#[must_use]
pub fn rejection(message: impl Display) -> String {
    format!("❌ {message}")
}

fn member_names(session: &Session) -> String {
    session
        .team()
        .iter()
        .map(|member| member.name())
        .collect::<Vec<_>>()
        .join(", ")
}

#[must_use]
pub fn welcome(session: &Session) -> String {
    let names = member_names(session);
    let mut out = String::new();
    let _ = write!(out, "### ✅ Welcome back, {}!\n\n", session.name());
    let _ = write!(out, "**Session ID:** `{}`\n\n", session.session_id());
    out.push_str("**Synco says:**\n");
    let _ = write!(
        out,
        "Hey {names}! Welcome to your Synchrony study session. You're all studying Data \
         Structures with different focus areas—perfect for peer teaching!\n\n"
    );
    let _ = write!(out, "**Your Team ({}):** {names}\n\n", session.group_id());
    out.push_str("👉 Head to the **My Team** tab to see everyone's topics!");
    out
}

/// Team roster; members whose name overlaps the student's are marked "(You)".
#[must_use]
pub fn team(session: &Session) -> String {
    let mut out = String::new();
    let _ = write!(out, "## 👥 Your Study Squad - {}\n\n", session.group_id());
    let _ = write!(out, "**Session ID:** `{}`\n\n", session.session_id());
    out.push_str(RULE);
    for member in session.team() {
        let marker = if names_overlap(session.name(), member.name()) {
            " **(You)**"
        } else {
            ""
        };
        let _ = writeln!(out, "### 🎓 {}{marker}", member.name());
        let _ = write!(out, "**Focus Area:** {}\n\n", member.topic());
    }
    out.push_str(RULE);
    out.push_str("💡 Collaborate, learn together, and grow!");
    out
}

#[must_use]
pub fn challenges(challenges: &[Challenge]) -> String {
    let mut out = String::from("# 🎯 Your Collaborative Challenges\n\n");
    let _ = write!(
        out,
        "**Synco says:** Here are your {} collaborative challenges! Work together, discuss \
         your approaches, and request hints when needed. Ready? Let's go!\n\n",
        challenges.len()
    );
    out.push_str(RULE);
    for challenge in challenges {
        let _ = write!(out, "## Challenge {}\n\n", challenge.number());
        let _ = write!(out, "{}\n\n", challenge.description());
        let _ = write!(out, "**📚 Topics:** {}\n\n", challenge.topics());
        out.push_str("💡 *Need help? Request a hint in the Hints tab!*\n\n");
        out.push_str(RULE);
    }
    out
}

#[must_use]
pub fn hint(hint: &Hint) -> String {
    let mut out = String::new();
    let _ = write!(out, "## {}\n\n", hint.level.encouragement());
    let _ = write!(
        out,
        "**Challenge {}** • Hint Level {}\n\n",
        hint.challenge_number, hint.level
    );
    out.push_str(RULE);
    let _ = write!(out, "{}\n\n", hint.text);
    out.push_str(RULE);
    out.push_str("💪 You got this! Keep going!");
    out
}
