//! Hero Typewriter Component
//!
//! Types, holds and deletes a list of phrases in a loop. Used for the
//! rotating headline on the landing page.

use dioxus::prelude::*;
use volt_core::{CyclerTimings, PhraseCycler};

use crate::drivers::drive_cycle;
use crate::timer::{use_timer_slot, TaskTimer};

/// Properties for the HeroTypewriter component
#[derive(Clone, PartialEq, Props)]
pub struct HeroTypewriterProps {
    /// Phrases to cycle through, in order
    pub phrases: Vec<String>,
    /// Delay per typed character in milliseconds (default: 100)
    #[props(default = 100)]
    pub typing_speed_ms: u64,
    /// Delay per deleted character in milliseconds (default: 50)
    #[props(default = 50)]
    pub deleting_speed_ms: u64,
    /// Hold time once a phrase is complete in milliseconds (default: 1500)
    #[props(default = 1500)]
    pub pause_ms: u64,
}

/// Push the latest props into the cycler, creating it on first use.
///
/// Returns `true` when the phrase list was (re)started and the driver has
/// to begin again from the first phrase. A timing-only change returns
/// `false`; an empty list keeps whatever was already cycling.
pub fn apply_cycler_props(
    slot: &mut Option<PhraseCycler>,
    phrases: &[String],
    timings: CyclerTimings,
) -> bool {
    match slot {
        Some(c) => {
            c.set_timings(timings);
            match c.set_phrases(phrases) {
                Ok(changed) => changed,
                Err(e) => {
                    tracing::warn!("Keeping previous phrases: {}", e);
                    false
                }
            }
        }
        None => match PhraseCycler::new(phrases, timings) {
            Ok(c) => {
                *slot = Some(c);
                true
            }
            Err(e) => {
                tracing::warn!("Hero typewriter idle: {}", e);
                false
            }
        },
    }
}

/// Rotating headline with a blinking cursor
///
/// An empty phrase list renders only the cursor.
#[component]
pub fn HeroTypewriter(props: HeroTypewriterProps) -> Element {
    let mut cycler: Signal<Option<PhraseCycler>> = use_signal(|| None);
    let timer = use_timer_slot("hero-typewriter");

    let phrases = props.phrases.clone();
    let timings = CyclerTimings::from_millis(
        props.typing_speed_ms,
        props.deleting_speed_ms,
        props.pause_ms,
    );

    use_effect(use_reactive((&phrases, &timings), move |(phrases, timings)| {
        let restart = cycler.with_mut(|slot| apply_cycler_props(slot, &phrases, timings));

        if !restart && timer.borrow().is_armed() {
            // Timing-only change; the running driver picks it up on its next sleep.
            return;
        }
        if cycler.peek().is_none() {
            return;
        }

        let task = spawn(drive_cycle(
            move || cycler.peek().as_ref().map(PhraseCycler::next_delay),
            move || {
                cycler.with_mut(|slot| {
                    if let Some(c) = slot {
                        c.advance();
                    }
                })
            },
        ));
        timer.borrow_mut().replace(TaskTimer(task));
    }));

    let text = cycler
        .read()
        .as_ref()
        .map(PhraseCycler::current_text)
        .unwrap_or_default();

    rsx! {
        span { class: "hero-typewriter",
            "{text}"
            span { class: "typewriter-cursor", "|" }
        }
    }
}
