//! Name → handler lookup table.
//!
//! The agent runtime asks for actions by name; this is the only place
//! names are bound to handler functions.

use once_cell::sync::Lazy;
use std::collections::BTreeMap;

use crate::dispatcher::Dispatcher;
use crate::handlers::{greet_with_name, show_balance};
use crate::types::{ActionError, ActionResult, Domain, Event, Tracker};

/// Signature every action handler has.
pub type ActionFn = fn(&mut dyn Dispatcher, &Tracker, &Domain) -> Vec<Event>;

pub const ACTION_SHOW_BALANCE: &str = "action_show_balance";
pub const ACTION_GREET_WITH_NAME: &str = "action_greet_with_name";

static REGISTRY: Lazy<BTreeMap<&'static str, ActionFn>> = Lazy::new(|| {
    let mut actions: BTreeMap<&'static str, ActionFn> = BTreeMap::new();
    actions.insert(ACTION_SHOW_BALANCE, show_balance);
    actions.insert(ACTION_GREET_WITH_NAME, greet_with_name);
    actions
});

/// All registered actions, keyed by name.
pub fn registry() -> &'static BTreeMap<&'static str, ActionFn> {
    &REGISTRY
}

/// Registered action names, sorted.
pub fn action_names() -> Vec<&'static str> {
    REGISTRY.keys().copied().collect()
}

/// Handler registered under `name`.
pub fn lookup(name: &str) -> Option<ActionFn> {
    REGISTRY.get(name).copied()
}

/// Run the action registered under `name`.
pub fn run_action(
    name: &str,
    dispatcher: &mut dyn Dispatcher,
    tracker: &Tracker,
    domain: &Domain,
) -> ActionResult<Vec<Event>> {
    let handler = lookup(name).ok_or_else(|| ActionError::UnknownAction(name.to_string()))?;

    log::debug!("running {} for sender '{}'", name, tracker.sender_id);
    Ok(handler(dispatcher, tracker, domain))
}
