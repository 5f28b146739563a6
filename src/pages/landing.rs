//! Landing page - marketing entry point.

use dioxus::prelude::*;
use volt_core::MarqueeDirection;
use volt_ui::{Button, ButtonVariant, HeroTypewriter, Marquee};

use crate::app::Route;
use crate::context::use_auth;

const HERO_PHRASES: [&str; 5] = [
    "Workspace Bookings",
    "Meeting Room Management",
    "Desk Reservations",
    "Office Space Optimization",
    "Video Conferencing",
];

const PARTNERS: [&str; 8] = [
    "Northwind", "Contoso", "Fabrikam", "Globex", "Initech", "Umbrella", "Hooli", "Stark",
];

const FEATURES: [(&str, &str); 4] = [
    ("Instant booking", "Reserve desks and rooms in seconds with real-time availability."),
    ("AI assistant", "Describe what you need and let the assistant find the right space."),
    ("Smart reminders", "Confirmations and reminders by email or in-app notification."),
    ("Usage analytics", "See which spaces are busy and plan your office around it."),
];

#[component]
pub fn Landing() -> Element {
    let navigator = use_navigator();
    let auth = use_auth();
    let phrases: Vec<String> = HERO_PHRASES.iter().map(|p| p.to_string()).collect();

    let get_started = move |_| {
        if auth.user().is_some() {
            navigator.push(Route::Dashboard {});
        } else {
            navigator.push(Route::Login {});
        }
    };

    rsx! {
        main { class: "landing",
            header { class: "landing-header",
                span { class: "brand", "Volt" }
                Link { class: "nav-link", to: Route::Dashboard {}, "Dashboard" }
            }

            section { class: "hero",
                h1 { class: "hero-title",
                    "Simplify Your "
                    br {}
                    HeroTypewriter { phrases }
                }
                p { class: "hero-subtitle",
                    "Book workspaces, manage meeting rooms and let an AI assistant handle the details."
                }
                Button { onclick: get_started, "Get Started" }
            }

            section { class: "partners",
                p { class: "section-label", "Trusted by teams at" }
                Marquee { speed: 25.0,
                    for name in PARTNERS {
                        span { key: "{name}", class: "partner", "{name}" }
                    }
                }
                Marquee { direction: MarqueeDirection::Right, speed: 40.0, pause_on_hover: false,
                    for (title, _) in FEATURES {
                        span { key: "{title}", class: "partner partner-muted", "{title}" }
                    }
                }
            }

            section { class: "features",
                for (title, body) in FEATURES {
                    div { key: "{title}", class: "feature-card",
                        h3 { "{title}" }
                        p { "{body}" }
                    }
                }
            }

            footer { class: "landing-footer",
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| { navigator.push(Route::Login {}); },
                    "Sign in"
                }
            }
        }
    }
}
