use dioxus::prelude::*;
use services::views;

use crate::context::AppContext;
use crate::views::markdown::MarkdownBlock;
use crate::views::state::StudyPanels;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let panels = use_context::<StudyPanels>();
    let mut email = use_signal(String::new);
    let logging_in = use_signal(|| false);

    let registration_url = ctx.services().links().registration_form.clone();
    let spreadsheet_url = ctx.services().links().spreadsheet.clone();

    let on_login = {
        let ctx = ctx.clone();
        use_callback(move |()| {
            if logging_in() {
                return;
            }
            let services = ctx.services().clone();
            let token = ctx.token();
            let raw = email();
            let mut welcome = panels.welcome;
            let mut logging_in = logging_in;
            spawn(async move {
                logging_in.set(true);
                let text = views::home(&services, token, &raw).await;
                welcome.set(text);
                logging_in.set(false);
            });
        })
    };

    let opener = ctx.clone();
    let welcome = panels.welcome.read().clone();

    rsx! {
        div { class: "page page--home",
            section { class: "home-card",
                h2 { "Welcome to Synchrony" }
                p { "Join a community of students learning together through peer teaching." }
                h3 { "📝 New Here?" }
                p { "Register to get matched with your perfect study group" }
                button {
                    class: "btn btn--primary",
                    r#type: "button",
                    onclick: move |_| opener.open_url(&registration_url),
                    "Register Now"
                }
                if let Some(url) = spreadsheet_url {
                    p { class: "home-source",
                        "Data source: "
                        span { class: "home-source-url", "{url}" }
                    }
                }
            }

            section { class: "home-card",
                h3 { "🔐 Already Registered?" }
                p { "Enter your university email to access your study session" }
                label { class: "field-label", "University Email" }
                input {
                    id: "email",
                    class: "field-input",
                    r#type: "email",
                    placeholder: "your.email@university.edu",
                    value: "{email.read()}",
                    oninput: move |evt| email.set(evt.value()),
                    onkeydown: move |evt| {
                        if evt.data.key() == Key::Enter {
                            evt.prevent_default();
                            on_login.call(());
                        }
                    },
                }
                button {
                    class: "btn btn--secondary",
                    r#type: "button",
                    disabled: logging_in(),
                    onclick: move |_| on_login.call(()),
                    if logging_in() { "Logging in..." } else { "Login" }
                }
                if !welcome.is_empty() {
                    MarkdownBlock { text: welcome }
                }
            }
        }
    }
}
