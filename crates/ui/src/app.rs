use dioxus::prelude::*;
use dioxus_router::Router;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn App() -> Element {
    // The launcher hands every window the same context; give this root its own session.
    let shared = use_context::<AppContext>();
    use_context_provider(|| shared.for_connection());

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "Synchrony • Collaborative Learning" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
