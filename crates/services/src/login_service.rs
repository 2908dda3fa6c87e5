use synchrony_core::model::{Email, Session, SessionToken};
use tracing::info;

use crate::error::LoginError;
use crate::resolver::{DataResolver, Origin};
use crate::session_store::SessionStore;
use crate::Clock;

/// Result of a successful login, with where each piece of data came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub session: Session,
    pub identity_origin: Origin,
    pub team_origin: Origin,
}

/// Resolves an email into a fresh session for a connection.
#[derive(Clone)]
pub struct LoginService {
    clock: Clock,
    resolver: DataResolver,
    store: SessionStore,
}

impl LoginService {
    #[must_use]
    pub fn new(clock: Clock, resolver: DataResolver, store: SessionStore) -> Self {
        Self {
            clock,
            resolver,
            store,
        }
    }

    /// Log a connection in, replacing whatever session it had.
    ///
    /// # Errors
    ///
    /// Returns `LoginError::Email` for blank input or input without `@`; the
    /// connection's existing session is left untouched.
    pub async fn login(
        &self,
        token: SessionToken,
        raw_email: &str,
    ) -> Result<LoginOutcome, LoginError> {
        let email = Email::parse(raw_email)?;
        let identity = self.resolver.resolve_identity(&email).await;
        let team = self.resolver.resolve_team(&identity.value.group_id).await;

        let session = Session::start(
            identity.value.name,
            identity.value.group_id,
            team.value,
            self.clock.now(),
        );
        info!(
            session_id = %session.session_id(),
            group_id = %session.group_id(),
            members = session.team().len(),
            "student logged in"
        );
        self.store.replace(token, session.clone());

        Ok(LoginOutcome {
            session,
            identity_origin: identity.origin,
            team_origin: team.origin,
        })
    }
}
