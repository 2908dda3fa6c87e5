use dioxus::prelude::*;
use services::views;

use crate::context::AppContext;
use crate::views::markdown::MarkdownBlock;
use crate::views::{ViewError, ViewState, view_state_from_resource};

#[component]
pub fn TeamView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut refreshes = use_signal(|| 0u32);

    let resource = use_resource(move || {
        let ctx = ctx.clone();
        // Re-run whenever the refresh button bumps the counter.
        let _ = refreshes();
        async move { Ok::<_, ViewError>(views::team(ctx.services(), ctx.token())) }
    });
    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "page",
            h2 { "Your Study Squad" }
            p { class: "page-lead", "Meet your teammates and see what everyone's focusing on" }

            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(text) => rsx! {
                    MarkdownBlock { text }
                },
                ViewState::Error(_) => rsx! {
                    p { "{ViewError::message()}" }
                },
            }

            button {
                class: "btn btn--secondary",
                r#type: "button",
                onclick: move |_| refreshes += 1,
                "Refresh Team Info"
            }
        }
    }
}
