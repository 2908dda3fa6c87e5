use dioxus::prelude::*;
use services::views;
use synchrony_core::model::HintLevel;

use crate::context::AppContext;
use crate::views::markdown::MarkdownBlock;
use crate::views::state::StudyPanels;

const CHALLENGE_CHOICES: [&str; 3] = ["1", "2", "3"];

#[component]
pub fn HintsView() -> Element {
    let ctx = use_context::<AppContext>();
    let panels = use_context::<StudyPanels>();
    let mut challenge = use_signal(|| CHALLENGE_CHOICES[0].to_string());
    let mut level = use_signal(|| HintLevel::GENTLE.label());

    let text = panels.hint.read().clone();

    rsx! {
        div { class: "page",
            h2 { "Adaptive Hints" }
            p { class: "page-lead",
                "Get progressive hints when you're stuck—from gentle nudges to detailed guidance"
            }
            div { class: "hint-pickers",
                label { class: "field-label",
                    "Select Challenge"
                    select {
                        class: "field-select",
                        value: "{challenge.read()}",
                        onchange: move |evt| challenge.set(evt.value()),
                        for choice in CHALLENGE_CHOICES {
                            option { value: "{choice}", "{choice}" }
                        }
                    }
                }
                label { class: "field-label",
                    "Hint Level"
                    select {
                        class: "field-select",
                        value: "{level.read()}",
                        onchange: move |evt| level.set(evt.value()),
                        for choice in HintLevel::CHOICES {
                            option { value: "{choice.label()}", "{choice.label()}" }
                        }
                    }
                }
            }
            button {
                class: "btn btn--primary",
                r#type: "button",
                onclick: move |_| {
                    let mut output = panels.hint;
                    output.set(views::hints(
                        ctx.services(),
                        ctx.token(),
                        &challenge.read(),
                        &level.read(),
                    ));
                },
                "Get Hint"
            }
            MarkdownBlock { text }
        }
    }
}
