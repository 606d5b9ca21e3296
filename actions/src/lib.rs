//! Custom actions for the banking assistant.
//!
//! Two stateless handlers, looked up by name by the agent runtime:
//!
//! | Action                   | Slot        | Reply                                 |
//! |--------------------------|-------------|---------------------------------------|
//! | `action_show_balance`    | `card_id`   | fixed balance, or "don't know" message |
//! | `action_greet_with_name` | `user_name` | `Hello <name>`, or "don't know" message |
//!
//! # Modules
//!
//! - [`types`] - Tracker, domain/event payloads, errors
//! - [`dispatcher`] - Message sinks
//! - [`handlers`] - The handler functions
//! - [`registry`] - Name → handler lookup

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod dispatcher;
pub mod handlers;
pub mod registry;
pub mod types;

// =============================================================================
// Re-exports
// =============================================================================

// Types
pub use types::{is_filled, ActionError, ActionResult, Domain, Event, Tracker};

// Dispatch
pub use dispatcher::{BotMessage, CollectingDispatcher, Dispatcher};

// Registry
pub use registry::{action_names, lookup, registry, run_action, ActionFn};
