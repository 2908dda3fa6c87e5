use dioxus::prelude::*;
use services::views;

use crate::context::AppContext;
use crate::views::state::StudyPanels;
use crate::vm::map_chat_bubbles;

#[component]
pub fn ChatView() -> Element {
    let ctx = use_context::<AppContext>();
    let panels = use_context::<StudyPanels>();
    let mut draft = use_signal(String::new);

    let on_send = use_callback(move |()| {
        let message = draft();
        let mut transcript = panels.transcript;
        views::chat(ctx.services(), ctx.token(), &mut transcript.write(), &message);
        draft.set(String::new());
    });

    let bubbles = map_chat_bubbles(&panels.transcript.read());

    rsx! {
        div { class: "page page--chat",
            h2 { "Team Chat" }
            p { class: "page-lead", "Discuss challenges, share insights, and help each other learn" }
            p { class: "page-note", em { "Demo mode - responses are simulated" } }

            div { class: "chat-log",
                for bubble in bubbles {
                    div { class: "{bubble.class}", dangerous_inner_html: "{bubble.html}" }
                }
            }

            div { class: "chat-compose",
                input {
                    class: "field-input",
                    r#type: "text",
                    placeholder: "Type your message...",
                    value: "{draft.read()}",
                    oninput: move |evt| draft.set(evt.value()),
                    onkeydown: move |evt| {
                        if evt.data.key() == Key::Enter {
                            evt.prevent_default();
                            on_send.call(());
                        }
                    },
                }
                button {
                    class: "btn btn--primary",
                    r#type: "button",
                    onclick: move |_| on_send.call(()),
                    "Send"
                }
            }
        }
    }
}
