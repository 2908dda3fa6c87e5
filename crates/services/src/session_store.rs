use std::sync::Arc;

use dashmap::DashMap;
use synchrony_core::model::{Session, SessionPhase, SessionToken};

/// Sessions of all connections, keyed by token.
///
/// A token with no entry is logged out. Logging in again replaces the entry;
/// nothing is ever removed.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<DashMap<SessionToken, Session>>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of a connection's session.
    #[must_use]
    pub fn get(&self, token: SessionToken) -> Option<Session> {
        self.sessions.get(&token).map(|entry| entry.value().clone())
    }

    /// Install a session, returning the one it overwrote.
    pub fn replace(&self, token: SessionToken, session: Session) -> Option<Session> {
        self.sessions.insert(token, session)
    }

    /// Mutate a connection's session in place. Returns `None` when logged out.
    pub fn update<R>(&self, token: SessionToken, f: impl FnOnce(&mut Session) -> R) -> Option<R> {
        self.sessions
            .get_mut(&token)
            .map(|mut entry| f(entry.value_mut()))
    }

    #[must_use]
    pub fn phase(&self, token: SessionToken) -> SessionPhase {
        SessionPhase::of(self.get(token).as_ref())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use synchrony_core::fallback::fallback_team;
    use synchrony_core::model::GroupId;
    use synchrony_core::time::fixed_now;

    fn session(name: &str) -> Session {
        Session::start(
            name,
            GroupId::new("G001"),
            fallback_team(),
            fixed_now(),
        )
    }

    #[test]
    fn tokens_are_isolated() {
        let store = SessionStore::new();
        let a = SessionToken::new();
        let b = SessionToken::new();

        store.replace(a, session("Ana"));
        assert_eq!(store.phase(a), SessionPhase::LoggedIn);
        assert_eq!(store.phase(b), SessionPhase::LoggedOut);

        store.replace(b, session("Ben"));
        assert_eq!(store.get(a).unwrap().name(), "Ana");
        assert_eq!(store.get(b).unwrap().name(), "Ben");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn replace_overwrites_previous_login() {
        let store = SessionStore::new();
        let token = SessionToken::new();
        assert!(store.replace(token, session("Ana")).is_none());
        let previous = store.replace(token, session("Ben"));
        assert_eq!(previous.unwrap().name(), "Ana");
        assert_eq!(store.get(token).unwrap().name(), "Ben");
    }

    #[test]
    fn update_requires_login() {
        let store = SessionStore::new();
        let token = SessionToken::new();
        assert!(store.update(token, |s| s.name().to_string()).is_none());
    }
}
