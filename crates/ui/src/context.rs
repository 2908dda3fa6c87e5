use std::sync::Arc;

use services::AppServices;
use synchrony_core::model::SessionToken;

use crate::platform::LinkOpenerRef;

pub trait UiApp: Send + Sync {
    fn services(&self) -> AppServices;
    fn link_opener(&self) -> LinkOpenerRef;
}

/// What every view reads: the shared services plus the token identifying
/// this connection's session.
#[derive(Clone)]
pub struct AppContext {
    services: AppServices,
    link_opener: LinkOpenerRef,
    token: SessionToken,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            services: app.services(),
            link_opener: app.link_opener(),
            token: SessionToken::new(),
        }
    }

    /// Same services, fresh token. Each mounted app root calls this so two
    /// windows never share a login.
    #[must_use]
    pub fn for_connection(&self) -> Self {
        Self {
            token: SessionToken::new(),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn services(&self) -> &AppServices {
        &self.services
    }

    #[must_use]
    pub fn token(&self) -> SessionToken {
        self.token
    }

    pub fn open_url(&self, url: &str) {
        self.link_opener.open_url(url);
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
