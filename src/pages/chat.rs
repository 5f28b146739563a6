//! AI assistant chat page.
//!
//! Assistant replies appear after a short thinking pause and are revealed
//! with the typewriter. Input is locked until the reveal completes.

use std::time::Duration;

use dioxus::prelude::*;
use volt_ui::{use_timer_slot, Button, LoadingAnimation, TaskTimer, TypewriterText};

use crate::assistant::{reply_to, GREETING, THINKING_DELAY_MS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: u64,
    pub sender: Sender,
    pub content: String,
    /// Still being revealed by the typewriter
    pub typing: bool,
}

/// Transcript state for one chat session.
#[derive(Clone, Debug, PartialEq)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl Default for Transcript {
    fn default() -> Self {
        Self {
            messages: vec![ChatMessage {
                id: 0,
                sender: Sender::Assistant,
                content: GREETING.to_string(),
                typing: false,
            }],
            next_id: 1,
        }
    }
}

impl Transcript {
    pub fn push(&mut self, sender: Sender, content: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id,
            sender,
            content: content.into(),
            typing: sender == Sender::Assistant,
        });
        id
    }

    pub fn finish_typing(&mut self, id: u64) {
        if let Some(msg) = self.messages.iter_mut().find(|m| m.id == id) {
            msg.typing = false;
        }
    }

    pub fn is_typing(&self) -> bool {
        self.messages.iter().any(|m| m.typing)
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }
}

#[component]
pub fn Chat() -> Element {
    let mut transcript = use_signal(Transcript::default);
    let mut input = use_signal(String::new);
    let mut thinking = use_signal(|| false);
    let timer = use_timer_slot("assistant-reply");

    let send = use_callback(move |_: ()| {
        let text = input().trim().to_string();
        if text.is_empty() || thinking() || transcript.read().is_typing() {
            return;
        }
        transcript.write().push(Sender::User, text.clone());
        input.set(String::new());
        thinking.set(true);

        let slot = timer.clone();
        let task = spawn(async move {
            tokio::time::sleep(Duration::from_millis(THINKING_DELAY_MS)).await;
            thinking.set(false);
            transcript.write().push(Sender::Assistant, reply_to(&text));
            slot.borrow_mut().release();
        });
        timer.borrow_mut().replace(TaskTimer(task));
    });

    let busy = thinking() || transcript.read().is_typing();
    let messages = transcript.read().messages().to_vec();

    rsx! {
        section { class: "chat",
            h2 { class: "page-title", "AI Assistant" }
            div { class: "chat-log",
                for msg in messages {
                    div {
                        key: "{msg.id}",
                        class: if msg.sender == Sender::User { "chat-bubble user" } else { "chat-bubble assistant" },
                        if msg.typing {
                            TypewriterText {
                                text: msg.content.clone(),
                                speed_ms: 20,
                                on_complete: move |_| transcript.write().finish_typing(msg.id),
                            }
                        } else {
                            "{msg.content}"
                        }
                    }
                }
                if thinking() {
                    div { class: "chat-bubble assistant", LoadingAnimation {} }
                }
            }
            div { class: "chat-input",
                input {
                    class: "input-field",
                    value: "{input}",
                    placeholder: "Ask about bookings, pricing, features...",
                    disabled: busy,
                    oninput: move |e| input.set(e.value()),
                    onkeydown: move |e| {
                        if e.key() == Key::Enter {
                            send.call(());
                        }
                    },
                }
                Button { disabled: busy, onclick: move |_| send.call(()), "Send" }
            }
        }
    }
}
