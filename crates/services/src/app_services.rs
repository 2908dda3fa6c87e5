use std::sync::Arc;

use sheets::{SheetsConfig, Sources};

use crate::Clock;
use crate::challenge_service::ChallengeService;
use crate::chat_service::ChatService;
use crate::error::AppServicesError;
use crate::hint_service::HintService;
use crate::login_service::LoginService;
use crate::resolver::DataResolver;
use crate::session_store::SessionStore;

/// Form new students fill in to get matched with a group.
pub const REGISTRATION_FORM_URL: &str = "https://docs.google.com/forms/d/e/1FAIpQLSfJFGx-yd0FPIuRYLUJut3BOOiQ14x_5DYheWpgrUqcHdQaCA/viewform";

/// Outbound links shown in the UI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Links {
    pub registration_form: String,
    /// Spreadsheet backing the demo; `None` when running offline.
    pub spreadsheet: Option<String>,
}

impl Default for Links {
    fn default() -> Self {
        Self {
            registration_form: REGISTRATION_FORM_URL.to_string(),
            spreadsheet: None,
        }
    }
}

/// Assembles app-facing services around one shared session store.
#[derive(Clone)]
pub struct AppServices {
    store: SessionStore,
    links: Links,
    login: Arc<LoginService>,
    challenges: Arc<ChallengeService>,
    hints: Arc<HintService>,
    chat: Arc<ChatService>,
}

impl AppServices {
    /// Build services over arbitrary sources. `chat_seed` pins the simulated
    /// chat replies.
    #[must_use]
    pub fn new(clock: Clock, sources: Sources, links: Links, chat_seed: Option<u64>) -> Self {
        let store = SessionStore::new();
        let resolver = DataResolver::new(sources);

        let login = Arc::new(LoginService::new(clock, resolver.clone(), store.clone()));
        let challenges = Arc::new(ChallengeService::new(resolver, store.clone()));
        let hints = Arc::new(HintService::new(store.clone()));
        let chat = Arc::new(ChatService::new(store.clone(), chat_seed));

        Self {
            store,
            links,
            login,
            challenges,
            hints,
            chat,
        }
    }

    /// Build services backed by the Google spreadsheet.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the sheet URLs or HTTP client cannot be set up.
    pub fn google(config: &SheetsConfig, clock: Clock) -> Result<Self, AppServicesError> {
        let sources = Sources::google(config)?;
        let links = Links {
            spreadsheet: Some(config.edit_url()),
            ..Links::default()
        };
        Ok(Self::new(clock, sources, links, None))
    }

    /// Services with no spreadsheet at all; every lookup resolves to mock data.
    #[must_use]
    pub fn offline(clock: Clock) -> Self {
        Self::new(clock, Sources::in_memory(), Links::default(), None)
    }

    #[must_use]
    pub fn sessions(&self) -> &SessionStore {
        &self.store
    }

    #[must_use]
    pub fn links(&self) -> &Links {
        &self.links
    }

    #[must_use]
    pub fn login(&self) -> Arc<LoginService> {
        Arc::clone(&self.login)
    }

    #[must_use]
    pub fn challenges(&self) -> Arc<ChallengeService> {
        Arc::clone(&self.challenges)
    }

    #[must_use]
    pub fn hints(&self) -> Arc<HintService> {
        Arc::clone(&self.hints)
    }

    #[must_use]
    pub fn chat(&self) -> Arc<ChatService> {
        Arc::clone(&self.chat)
    }
}
