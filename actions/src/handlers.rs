//! Custom action handlers.
//!
//! Each handler reads one slot, sends exactly one message and returns no
//! events. An unset slot is not an error: the handler answers with its
//! "don't know" message instead.

use crate::config::{
    BALANCE_MESSAGE, CARD_ID_SLOT, GREETING_PREFIX, UNKNOWN_CARD_ID, UNKNOWN_USER_NAME,
    USER_NAME_SLOT,
};
use crate::dispatcher::Dispatcher;
use crate::types::{slot_text, Domain, Event, Tracker};

/// `action_show_balance`: report the balance once a card id is known.
pub fn show_balance(dispatcher: &mut dyn Dispatcher, tracker: &Tracker, _domain: &Domain) -> Vec<Event> {
    match tracker.filled_slot(CARD_ID_SLOT) {
        Some(_) => dispatcher.utter_message(BALANCE_MESSAGE),
        None => dispatcher.utter_message(UNKNOWN_CARD_ID),
    }

    Vec::new()
}

/// `action_greet_with_name`: greet the user by name once it is known.
pub fn greet_with_name(dispatcher: &mut dyn Dispatcher, tracker: &Tracker, _domain: &Domain) -> Vec<Event> {
    match tracker.filled_slot(USER_NAME_SLOT) {
        Some(name) => dispatcher.utter_message(&format!("{} {}", GREETING_PREFIX, slot_text(name))),
        None => dispatcher.utter_message(UNKNOWN_USER_NAME),
    }

    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatcher::CollectingDispatcher;

    fn run(
        handler: fn(&mut dyn Dispatcher, &Tracker, &Domain) -> Vec<Event>,
        tracker: &Tracker,
    ) -> (Vec<String>, Vec<Event>) {
        let mut dispatcher = CollectingDispatcher::new();
        let events = handler(&mut dispatcher, tracker, &Domain::new());
        let texts = dispatcher.into_messages().into_iter().map(|m| m.text).collect();
        (texts, events)
    }

    #[test]
    fn test_show_balance_known_card() {
        let tracker = Tracker::new("u1").with_slot("card_id", "9704-0000");
        let (texts, events) = run(show_balance, &tracker);

        assert_eq!(texts, vec!["Your balance is: 1 000 000 VND"]);
        assert!(events.is_empty());
    }

    #[test]
    fn test_show_balance_unknown_card() {
        let (texts, events) = run(show_balance, &Tracker::new("u1"));

        assert_eq!(texts, vec!["I dont know your card id"]);
        assert!(events.is_empty());
    }

    #[test]
    fn test_show_balance_null_card() {
        let tracker = Tracker::new("u1").with_slot("card_id", serde_json::Value::Null);
        let (texts, _) = run(show_balance, &tracker);

        assert_eq!(texts, vec!["I dont know your card id"]);
    }

    #[test]
    fn test_greet_known_name() {
        let tracker = Tracker::new("u1").with_slot("user_name", "Linh");
        let (texts, events) = run(greet_with_name, &tracker);

        assert_eq!(texts, vec!["Hello Linh"]);
        assert!(events.is_empty());
    }

    #[test]
    fn test_greet_empty_name() {
        let tracker = Tracker::new("u1").with_slot("user_name", "");
        let (texts, _) = run(greet_with_name, &tracker);

        assert_eq!(texts, vec!["I dont know your name"]);
    }

    #[test]
    fn test_handlers_ignore_unrelated_slots() {
        let tracker = Tracker::new("u1").with_slot("user_name", "Linh");
        let (texts, _) = run(show_balance, &tracker);

        assert_eq!(texts, vec!["I dont know your card id"]);
    }
}
