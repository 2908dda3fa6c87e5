//! The five tabs as functions of (connection, input) to display text.
//!
//! Nothing here fails: every error becomes a warning line, so the UI only
//! ever renders markdown.

use synchrony_core::model::{SessionToken, Transcript};

use crate::app_services::AppServices;
use crate::error::{LoginError, TeamError};
use crate::render;

/// Home tab: log in with an email and greet the student.
pub async fn home(services: &AppServices, token: SessionToken, raw_email: &str) -> String {
    match services.login().login(token, raw_email).await {
        Ok(outcome) => render::welcome(&outcome.session),
        Err(LoginError::Email(err)) => render::rejection(err),
    }
}

/// My Team tab.
#[must_use]
pub fn team(services: &AppServices, token: SessionToken) -> String {
    services.sessions().get(token).map_or_else(
        || render::warning(TeamError::NoSession),
        |session| render::team(&session),
    )
}

/// Challenges tab: (re)load and list the session's challenges.
pub async fn challenges(services: &AppServices, token: SessionToken) -> String {
    match services.challenges().load(token).await {
        Ok(resolved) => render::challenges(&resolved.value),
        Err(err) => render::warning(err),
    }
}

/// Hints tab, driven by the two pickers.
#[must_use]
pub fn hints(
    services: &AppServices,
    token: SessionToken,
    challenge_input: &str,
    level_input: &str,
) -> String {
    match services.hints().request(token, challenge_input, level_input) {
        Ok(hint) => render::hint(&hint),
        Err(err) => render::warning(err),
    }
}

/// Chat tab. Returns whether the transcript grew; the caller clears its input
/// box either way.
pub fn chat(
    services: &AppServices,
    token: SessionToken,
    transcript: &mut Transcript,
    message: &str,
) -> bool {
    services.chat().send(token, transcript, message)
}
