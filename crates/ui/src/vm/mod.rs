mod chat_vm;
mod markdown_vm;

pub use chat_vm::{ChatBubbleVm, map_chat_bubbles};
pub use markdown_vm::{markdown_to_html, sanitize_html};
