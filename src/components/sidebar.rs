//! Dashboard Sidebar Component
//!
//! Navigation links for the dashboard pages plus the sign-out action.

use dioxus::prelude::*;
use volt_ui::{Button, ButtonVariant};

use crate::app::Route;
use crate::context::use_auth;

/// Entries in the dashboard navigation
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NavItem {
    Overview,
    Bookings,
    Assistant,
    Settings,
}

impl NavItem {
    pub const ALL: [NavItem; 4] = [
        NavItem::Overview,
        NavItem::Bookings,
        NavItem::Assistant,
        NavItem::Settings,
    ];

    /// Get the display name for this item
    pub fn label(&self) -> &'static str {
        match self {
            NavItem::Overview => "Dashboard",
            NavItem::Bookings => "Bookings",
            NavItem::Assistant => "AI Assistant",
            NavItem::Settings => "Settings",
        }
    }

    /// Get the route for this item
    pub fn route(&self) -> Route {
        match self {
            NavItem::Overview => Route::Dashboard {},
            NavItem::Bookings => Route::Bookings {},
            NavItem::Assistant => Route::Chat {},
            NavItem::Settings => Route::Settings {},
        }
    }

    /// Item highlighted for `route`, if any
    pub fn for_route(route: &Route) -> Option<NavItem> {
        if let Route::NewBooking {} = route {
            return Some(NavItem::Bookings);
        }
        NavItem::ALL.into_iter().find(|item| &item.route() == route)
    }
}

fn link_class(active: bool) -> String {
    if active {
        "nav-link active".to_string()
    } else {
        "nav-link".to_string()
    }
}

#[component]
pub fn Sidebar() -> Element {
    let auth = use_auth();
    let current = use_route::<Route>();
    let active = NavItem::for_route(&current);
    let links: Vec<(NavItem, &str, String)> = NavItem::ALL
        .into_iter()
        .map(|item| (item, item.label(), link_class(active == Some(item))))
        .collect();

    rsx! {
        aside { class: "sidebar",
            Link { class: "sidebar-brand", to: Route::Landing {}, "Volt" }
            nav { class: "sidebar-nav",
                for (item, label, class) in links {
                    Link { key: "{label}", class, to: item.route(), "{label}" }
                }
            }
            div { class: "sidebar-footer",
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| auth.sign_out(),
                    "Sign out"
                }
            }
        }
    }
}
