//! Typewriter Text Component
//!
//! Reveals its text one character at a time and reports completion once.

use std::time::Duration;

use dioxus::prelude::*;
use volt_core::typewriter::tick_delay;
use volt_core::Typewriter;

use crate::drivers::drive_reveal;
use crate::timer::{use_timer_slot, TaskTimer};

/// Properties for the TypewriterText component
#[derive(Clone, PartialEq, Props)]
pub struct TypewriterTextProps {
    /// Text to reveal
    pub text: String,
    /// Delay between characters in milliseconds (default: 30)
    #[props(default = 30)]
    pub speed_ms: u64,
    /// Called once when the whole text is visible
    #[props(default)]
    pub on_complete: Option<EventHandler<()>>,
}

/// Character-by-character text reveal
///
/// Changing `text` restarts the reveal from the first character. Passing
/// the same text again keeps the current progress.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     TypewriterText {
///         text: reply.clone(),
///         on_complete: move |_| scroll_to_bottom(),
///     }
/// }
/// ```
#[component]
pub fn TypewriterText(props: TypewriterTextProps) -> Element {
    let mut typewriter = use_signal(Typewriter::default);
    let timer = use_timer_slot("typewriter");

    let text = props.text.clone();
    let speed_ms = props.speed_ms;
    let on_complete = props.on_complete;

    use_effect(use_reactive((&text, &speed_ms), move |(text, speed_ms)| {
        let restarted = typewriter.with_mut(|tw| tw.set_source(&text));
        if restarted {
            // Stop the previous reveal before the new one starts.
            timer.borrow_mut().clear();
        }
        if !typewriter.peek().needs_timer() {
            return;
        }

        let delay = tick_delay(speed_ms).unwrap_or_else(|e| {
            tracing::warn!("{}, clamping to 1ms", e);
            Duration::from_millis(1)
        });

        let slot = timer.clone();
        let task = spawn(async move {
            drive_reveal(
                delay,
                move || typewriter.with_mut(|tw| tw.tick()),
                move || {
                    if let Some(handler) = on_complete {
                        handler.call(());
                    }
                },
            )
            .await;
            slot.borrow_mut().release();
        });
        timer.borrow_mut().replace(TaskTimer(task));
    }));

    let shown = typewriter.read().displayed().to_string();

    rsx! {
        span { class: "typewriter-text", "{shown}" }
    }
}
