use synchrony_core::model::{ChatRole, Transcript};

use super::markdown_vm::markdown_to_html;

/// One rendered chat bubble.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatBubbleVm {
    pub class: &'static str,
    pub html: String,
}

#[must_use]
pub fn map_chat_bubbles(transcript: &Transcript) -> Vec<ChatBubbleVm> {
    transcript
        .turns()
        .iter()
        .map(|turn| ChatBubbleVm {
            class: match turn.role {
                ChatRole::User => "bubble bubble--user",
                ChatRole::Assistant => "bubble bubble--team",
            },
            html: markdown_to_html(&turn.content),
        })
        .collect()
}
