//! Loading Animation Component
//!
//! Three dots bouncing out of phase, with a caption. No inputs, no outputs.

use dioxus::prelude::*;
use volt_core::loading::{dot_delay, BOUNCE_PERIOD, DOT_COUNT, LOADING_CAPTION};

const BOUNCE_KEYFRAMES: &str = r#"
@keyframes volt-dot-bounce {
  0%, 100% { transform: translateY(0%); }
  50% { transform: translateY(-100%); }
}
@keyframes volt-fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}
"#;

/// Indeterminate wait indicator
#[component]
pub fn LoadingAnimation() -> Element {
    let period_ms = BOUNCE_PERIOD.as_millis();
    let delays: Vec<u128> = (0..DOT_COUNT).map(|i| dot_delay(i).as_millis()).collect();

    rsx! {
        style { {BOUNCE_KEYFRAMES} }
        div {
            class: "loading-animation",
            style: "display: flex; flex-direction: column; align-items: center; justify-content: center;",
            role: "status",
            div {
                class: "loading-dots",
                style: "display: flex; gap: 0.5rem; animation: volt-fade-in 500ms ease both;",
                for (index, delay_ms) in delays.into_iter().enumerate() {
                    div {
                        key: "{index}",
                        class: "loading-dot",
                        style: "width: 1rem; height: 1rem; border-radius: 9999px; background: var(--primary); animation: volt-dot-bounce {period_ms}ms ease-in-out {delay_ms}ms infinite;",
                    }
                }
            }
            p {
                class: "loading-caption",
                style: "margin-top: 1rem; animation: volt-fade-in 500ms ease 500ms both;",
                "{LOADING_CAPTION}"
            }
        }
    }
}
