mod challenge;
mod email;
mod ids;
mod session;
mod team;
mod transcript;

pub use challenge::{Challenge, HintLevel, HintLevelError};
pub use email::{Email, EmailError, display_name_from_email};
pub use ids::{GroupId, ParseIdError, SessionId, SessionToken};
pub use session::{Session, SessionPhase};
pub use team::{TeamMember, names_overlap};
pub use transcript::{ChatRole, ChatTurn, Transcript};
