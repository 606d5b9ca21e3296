//! Slot names and canned responses used by the action handlers.

/// Slot holding the customer's card id.
pub const CARD_ID_SLOT: &str = "card_id";

/// Slot holding the customer's name.
pub const USER_NAME_SLOT: &str = "user_name";

/// Reply when the card id slot is unset.
pub const UNKNOWN_CARD_ID: &str = "I dont know your card id";

/// Reply when the card id slot is set.
///
/// The balance is a fixed placeholder; no account lookup happens.
pub const BALANCE_MESSAGE: &str = "Your balance is: 1 000 000 VND";

/// Reply when the user name slot is unset.
pub const UNKNOWN_USER_NAME: &str = "I dont know your name";

/// Prefix of the greeting, followed by the user's name.
pub const GREETING_PREFIX: &str = "Hello";
