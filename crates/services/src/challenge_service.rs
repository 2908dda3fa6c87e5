use synchrony_core::model::{Challenge, SessionToken};
use tracing::{debug, info};

use crate::error::ChallengeError;
use crate::resolver::{DataResolver, Resolved};
use crate::session_store::SessionStore;

/// Loads a session's challenges and caches them on the session.
#[derive(Clone)]
pub struct ChallengeService {
    resolver: DataResolver,
    store: SessionStore,
}

impl ChallengeService {
    #[must_use]
    pub fn new(resolver: DataResolver, store: SessionStore) -> Self {
        Self { resolver, store }
    }

    /// Resolve challenges by the session's id and store them on the session.
    /// Loading again re-resolves and overwrites.
    ///
    /// # Errors
    ///
    /// Returns `ChallengeError::NoSession` when the connection is logged out,
    /// and `ChallengeError::SessionChanged` when a new login replaced the
    /// session while its challenges were being fetched.
    pub async fn load(&self, token: SessionToken) -> Result<Resolved<Vec<Challenge>>, ChallengeError> {
        let session_id = self
            .store
            .get(token)
            .map(|session| session.session_id().clone())
            .ok_or(ChallengeError::NoSession)?;

        let resolved = self.resolver.resolve_challenges(&session_id).await;
        let stored = self.store.update(token, |session| {
            if session.session_id() != &session_id {
                return false;
            }
            session.set_challenges(resolved.value.clone());
            true
        });
        match stored {
            None => return Err(ChallengeError::NoSession),
            Some(false) => {
                debug!(%session_id, "session replaced during challenge fetch");
                return Err(ChallengeError::SessionChanged);
            }
            Some(true) => {}
        }
        info!(
            %session_id,
            count = resolved.value.len(),
            fallback = resolved.is_fallback(),
            "challenges loaded"
        );
        Ok(resolved)
    }
}
