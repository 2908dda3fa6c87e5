use dioxus::prelude::*;

use crate::vm::markdown_to_html;

/// Sanitized markdown output panel.
#[component]
pub fn MarkdownBlock(text: String, class: Option<String>) -> Element {
    let html = markdown_to_html(&text);
    let class = class.unwrap_or_else(|| "markdown".to_string());
    rsx! {
        div { class: "{class}", dangerous_inner_html: "{html}" }
    }
}
