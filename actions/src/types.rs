//! Common types shared by the action handlers.
//!
//! # Categories
//!
//! - **Tracker** - read-only view of the conversation's slots
//! - **Domain / Event** - loosely typed payloads from and to the agent runtime
//! - **Error Types** - registry errors

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use thiserror::Error;

// =============================================================================
// Runtime payloads
// =============================================================================

/// The assistant's domain as handed over by the runtime.
///
/// Handlers receive it but none of the current ones read it.
pub type Domain = Map<String, Value>;

/// An event returned to the runtime (slot sets, follow-ups, ...).
pub type Event = Value;

// =============================================================================
// Tracker
// =============================================================================

/// Read-only snapshot of a conversation's state.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Tracker {
    /// Conversation id
    #[serde(default)]
    pub sender_id: String,
    /// Slot values by name
    #[serde(default)]
    pub slots: HashMap<String, Value>,
}

impl Tracker {
    pub fn new(sender_id: impl Into<String>) -> Self {
        Self {
            sender_id: sender_id.into(),
            slots: HashMap::new(),
        }
    }

    /// Set a slot value.
    pub fn with_slot(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.slots.insert(name.into(), value.into());
        self
    }

    /// Current value of a slot, if it was ever set.
    pub fn get_slot(&self, name: &str) -> Option<&Value> {
        self.slots.get(name)
    }

    /// The slot's value when it holds something meaningful.
    ///
    /// Null, `false`, zero, empty strings and empty collections all count
    /// as unset.
    pub fn filled_slot(&self, name: &str) -> Option<&Value> {
        self.get_slot(name).filter(|v| is_filled(v))
    }
}

/// Whether a slot value counts as set.
pub fn is_filled(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Render a slot value for use in a message.
///
/// Strings are used as-is, anything else in its JSON form.
pub fn slot_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Errors from running actions by name.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActionError {
    /// No handler is registered under this name.
    #[error("Unknown action: {0}")]
    UnknownAction(String),
}

/// Result type for action lookups.
pub type ActionResult<T> = Result<T, ActionError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_slot() {
        let tracker = Tracker::new("u1").with_slot("card_id", "1234");

        assert_eq!(tracker.get_slot("card_id"), Some(&json!("1234")));
        assert_eq!(tracker.get_slot("user_name"), None);
    }

    #[test]
    fn test_is_filled() {
        assert!(!is_filled(&Value::Null));
        assert!(!is_filled(&json!(false)));
        assert!(!is_filled(&json!(0)));
        assert!(!is_filled(&json!(0.0)));
        assert!(!is_filled(&json!("")));
        assert!(!is_filled(&json!([])));
        assert!(!is_filled(&json!({})));

        assert!(is_filled(&json!(true)));
        assert!(is_filled(&json!(7)));
        assert!(is_filled(&json!("0")));
        assert!(is_filled(&json!(["x"])));
    }

    #[test]
    fn test_filled_slot_skips_empty() {
        let tracker = Tracker::new("u1").with_slot("user_name", "");
        assert!(tracker.get_slot("user_name").is_some());
        assert!(tracker.filled_slot("user_name").is_none());
    }

    #[test]
    fn test_slot_text() {
        assert_eq!(slot_text(&json!("Linh")), "Linh");
        assert_eq!(slot_text(&json!(42)), "42");
    }

    #[test]
    fn test_tracker_from_json() {
        let tracker: Tracker =
            serde_json::from_str(r#"{ "slots": { "card_id": "9704" } }"#).unwrap();
        assert_eq!(tracker.sender_id, "");
        assert_eq!(tracker.filled_slot("card_id"), Some(&json!("9704")));
    }
}
