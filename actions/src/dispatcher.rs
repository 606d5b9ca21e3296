//! Message sinks handed to action handlers.

use serde::{Deserialize, Serialize};

/// A bot message produced by an action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotMessage {
    pub text: String,
}

/// Where handlers send their replies.
pub trait Dispatcher {
    /// Queue a text message for the user.
    fn utter_message(&mut self, text: &str);
}

/// Dispatcher that keeps every message in memory, in order.
#[derive(Clone, Debug, Default)]
pub struct CollectingDispatcher {
    messages: Vec<BotMessage>,
}

impl CollectingDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages dispatched so far.
    pub fn messages(&self) -> &[BotMessage] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<BotMessage> {
        self.messages
    }
}

impl Dispatcher for CollectingDispatcher {
    fn utter_message(&mut self, text: &str) {
        self.messages.push(BotMessage { text: text.to_string() });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_in_order() {
        let mut dispatcher = CollectingDispatcher::new();
        dispatcher.utter_message("one");
        dispatcher.utter_message("two");

        let texts: Vec<_> = dispatcher.messages().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["one", "two"]);
    }

    #[test]
    fn test_message_json_shape() {
        let json = serde_json::to_string(&BotMessage { text: "hi".into() }).unwrap();
        assert_eq!(json, r#"{"text":"hi"}"#);
    }
}
