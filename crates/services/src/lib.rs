#![forbid(unsafe_code)]

pub mod app_services;
pub mod challenge_service;
pub mod chat_service;
pub mod error;
pub mod hint_service;
pub mod login_service;
pub mod render;
pub mod resolver;
pub mod session_store;
pub mod views;

pub use synchrony_core::Clock;

pub use app_services::{AppServices, Links, REGISTRATION_FORM_URL};
pub use challenge_service::ChallengeService;
pub use chat_service::ChatService;
pub use error::{AppServicesError, ChallengeError, HintError, LoginError, TeamError};
pub use hint_service::{Hint, HintService};
pub use login_service::{LoginOutcome, LoginService};
pub use resolver::{DataResolver, FallbackReason, Identity, Origin, Resolved};
pub use session_store::SessionStore;
