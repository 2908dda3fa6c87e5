use synchrony_core::model::{HintLevel, HintLevelError, SessionToken};
use tracing::debug;

use crate::error::HintError;
use crate::session_store::SessionStore;

/// A hint handed out for one challenge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    pub challenge_number: u32,
    pub level: HintLevel,
    pub text: String,
}

/// Hands out the scripted hints of the loaded challenges.
#[derive(Clone)]
pub struct HintService {
    store: SessionStore,
}

impl HintService {
    #[must_use]
    pub fn new(store: SessionStore) -> Self {
        Self { store }
    }

    /// Look up a hint by picker values: the challenge position (`"1"`) and the
    /// level label (`"2 - Clearer guidance"` or a bare number).
    ///
    /// # Errors
    ///
    /// Checked in order: `NoSession`, `NoChallenges`, `Level` for an
    /// unparseable label, `InvalidChallenge` for a position outside the loaded
    /// list, `LevelUnavailable` for a level below 1 or above the challenge's
    /// hint count.
    pub fn request(
        &self,
        token: SessionToken,
        challenge_input: &str,
        level_input: &str,
    ) -> Result<Hint, HintError> {
        let session = self.store.get(token).ok_or(HintError::NoSession)?;
        if session.challenges().is_empty() {
            return Err(HintError::NoChallenges);
        }

        let level = match level_input.parse::<HintLevel>() {
            Ok(level) => Some(level),
            Err(HintLevelError::OutOfRange { .. }) => None,
            Err(err) => return Err(err.into()),
        };
        let challenge = challenge_input
            .trim()
            .parse::<u32>()
            .ok()
            .and_then(|position| session.challenge(position).map(|c| (position, c)));
        let Some((position, challenge)) = challenge else {
            return Err(HintError::InvalidChallenge {
                input: challenge_input.to_string(),
            });
        };

        let Some((level, text)) =
            level.and_then(|level| challenge.hint(level).map(|text| (level, text.to_string())))
        else {
            return Err(HintError::LevelUnavailable {
                available: challenge.hints().len(),
            });
        };
        debug!(challenge = position, %level, "hint requested");

        Ok(Hint {
            challenge_number: position,
            level,
            text,
        })
    }
}
