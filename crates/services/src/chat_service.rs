use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use synchrony_core::model::{ChatTurn, Session, SessionToken, TeamMember, Transcript};
use tracing::debug;

use crate::session_store::SessionStore;

const LOGIN_FIRST: &str = "**Synco:** Please login first to chat with your team";
const NO_TEAMMATES: &str = "**Synco:** Great thinking!";
const SYNCO_REMARK: &str = "**Synco:** Excellent collaboration! Keep discussing!";
const REPLY_TEMPLATES: usize = 5;

/// Simulated team chat: every message gets one canned reply.
pub struct ChatService {
    store: SessionStore,
    rng: Mutex<StdRng>,
}

impl ChatService {
    /// A seed makes replies reproducible; `None` seeds from the OS.
    #[must_use]
    pub fn new(store: SessionStore, seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self {
            store,
            rng: Mutex::new(rng),
        }
    }

    /// Append the user's message and a reply. Blank messages are ignored and
    /// leave the transcript untouched; returns whether anything was appended.
    pub fn send(&self, token: SessionToken, transcript: &mut Transcript, message: &str) -> bool {
        let message = message.trim();
        if message.is_empty() {
            return false;
        }

        let session = self.store.get(token);
        let speaker = session.as_ref().map_or("You", Session::name);
        transcript.push(ChatTurn::user(format!("**{speaker}:** {message}")));

        let reply = match &session {
            None => LOGIN_FIRST.to_string(),
            Some(session) => {
                let teammates: Vec<&TeamMember> = session.teammates().collect();
                self.reply_from(&teammates)
            }
        };
        debug!(turns = transcript.len() + 1, "chat reply generated");
        transcript.push(ChatTurn::assistant(reply));
        true
    }

    fn reply_from(&self, teammates: &[&TeamMember]) -> String {
        if teammates.is_empty() {
            return NO_TEAMMATES.to_string();
        }
        let mut rng = self.rng.lock();
        let member = teammates[rng.random_range(0..teammates.len())];
        let (name, topic) = (member.name(), member.topic());
        match rng.random_range(0..REPLY_TEMPLATES) {
            0 => format!("**{name}:** That's a great point about {topic}!"),
            1 => format!("**{name}:** Interesting! Let me explain how {topic} relates to that..."),
            2 => format!("**{name}:** I agree! In {topic}, we approach it similarly."),
            3 => format!("**{name}:** Good question! Let me draw a quick diagram..."),
            _ => SYNCO_REMARK.to_string(),
        }
    }
}
