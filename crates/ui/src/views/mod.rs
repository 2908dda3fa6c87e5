mod challenges;
mod chat;
mod hints;
mod home;
mod markdown;
mod state;
mod team;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use challenges::ChallengesView;
pub use chat::ChatView;
pub use hints::HintsView;
pub use home::HomeView;
pub use markdown::MarkdownBlock;
pub use state::{StudyPanels, ViewError, ViewState, view_state_from_resource};
pub use team::TeamView;
