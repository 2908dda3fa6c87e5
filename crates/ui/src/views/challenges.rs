use dioxus::prelude::*;
use services::views;

use crate::context::AppContext;
use crate::views::markdown::MarkdownBlock;
use crate::views::state::StudyPanels;

#[component]
pub fn ChallengesView() -> Element {
    let ctx = use_context::<AppContext>();
    let panels = use_context::<StudyPanels>();
    let loading = use_signal(|| false);

    let on_load = use_callback(move |()| {
        if loading() {
            return;
        }
        let services = ctx.services().clone();
        let token = ctx.token();
        let mut output = panels.challenges;
        let mut loading = loading;
        spawn(async move {
            loading.set(true);
            output.set(views::challenges(&services, token).await);
            loading.set(false);
        });
    });

    let text = panels.challenges.read().clone();

    rsx! {
        div { class: "page",
            h2 { "Collaborative Challenges" }
            p { class: "page-lead",
                "Work together on AI-generated challenges designed for your group's topics"
            }
            button {
                class: "btn btn--primary",
                r#type: "button",
                disabled: loading(),
                onclick: move |_| on_load.call(()),
                if loading() { "Loading..." } else { "Load Challenges" }
            }
            MarkdownBlock { text }
        }
    }
}
