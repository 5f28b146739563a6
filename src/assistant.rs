//! Canned replies for the dashboard assistant.
//!
//! Replies are picked by the first rule whose keywords appear in the
//! lower-cased message. The booking API is not consulted.

/// How long the assistant "thinks" before its reply starts typing.
pub const THINKING_DELAY_MS: u64 = 1500;

pub const GREETING: &str = "Hi! I'm Volt Assistant. Ask me about booking a workspace, \
    managing your reservations, pricing, or what Volt can do.";

const FALLBACK: &str = "I'm not sure I understand that question. You can ask me about \
    booking a workspace, managing or cancelling bookings, notifications, pricing, or \
    Volt's features.";

struct Rule {
    keywords: &'static [&'static str],
    reply: &'static str,
}

const RULES: &[Rule] = &[
    Rule {
        keywords: &["hello", "hey", "good morning"],
        reply: "Hello! How can I help with your workspace today?",
    },
    Rule {
        keywords: &["manage booking", "cancel", "reschedule"],
        reply: "You can view, cancel or reschedule upcoming bookings from the Bookings page \
            in your dashboard.",
    },
    Rule {
        keywords: &["book", "reserve", "workspace", "desk", "room"],
        reply: "Tell me what you need, like 'a quiet desk for two this Friday at 2 PM', \
            or browse available spaces and pick a time slot. You'll get an instant \
            confirmation with all the details.",
    },
    Rule {
        keywords: &["notification", "reminder"],
        reply: "Volt sends booking confirmations and reminders by email and in-app \
            notification, so you never miss a reservation.",
    },
    Rule {
        keywords: &["price", "cost", "plan", "subscription"],
        reply: "Volt offers flexible plans for individuals, teams and workspace providers. \
            Contact our sales team for enterprise options.",
    },
    Rule {
        keywords: &["feature", "what can", "capabilities"],
        reply: "Volt handles workspace and meeting room bookings, desk reservations, \
            calendar integration, usage analytics and video conferencing.",
    },
    Rule {
        keywords: &["help", "support"],
        reply: "I can find and book spaces, explain your bookings, or answer questions \
            about your plan. What would you like to do?",
    },
];

/// Reply to a user message.
pub fn reply_to(message: &str) -> &'static str {
    let lower = message.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|k| lower.contains(*k)))
        .map(|rule| rule.reply)
        .unwrap_or(FALLBACK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_are_case_insensitive() {
        assert_eq!(reply_to("HELLO there"), RULES[0].reply);
        assert_eq!(reply_to("What does a Plan cost?"), RULES[4].reply);
    }

    #[test]
    fn earlier_rules_win() {
        // "cancel my booking" mentions both cancel and book.
        assert_eq!(reply_to("cancel my booking"), RULES[1].reply);
    }

    #[test]
    fn unknown_falls_back() {
        assert_eq!(reply_to("zzz"), FALLBACK);
    }
}
