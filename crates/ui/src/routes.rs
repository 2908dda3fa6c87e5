use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};
use services::render::{CHALLENGES_PLACEHOLDER, HINT_PLACEHOLDER};

use crate::views::{ChallengesView, ChatView, HintsView, HomeView, StudyPanels, TeamView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/team", TeamView)] Team {},
        #[route("/challenges", ChallengesView)] Challenges {},
        #[route("/hints", HintsView)] Hints {},
        #[route("/chat", ChatView)] Chat {},
}

#[component]
fn Layout() -> Element {
    use_context_provider(|| StudyPanels::new(CHALLENGES_PLACEHOLDER, HINT_PLACEHOLDER));

    rsx! {
        div { class: "app",
            header { class: "masthead",
                h1 { "🌟 Synchrony" }
                p { class: "masthead-tagline", "Where students teach students" }
            }
            Tabs {}
            main { class: "content",
                Outlet::<Route> {}
            }
            footer { class: "colophon",
                p { "Synchrony • Collaborative Learning Platform" }
            }
        }
    }
}

#[component]
fn Tabs() -> Element {
    rsx! {
        nav { class: "tabs",
            Link { to: Route::Home {}, "🏠 Home" }
            Link { to: Route::Team {}, "👥 My Team" }
            Link { to: Route::Challenges {}, "🎯 Challenges" }
            Link { to: Route::Hints {}, "💡 Hints" }
            Link { to: Route::Chat {}, "💬 Chat" }
        }
    }
}
