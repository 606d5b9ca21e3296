//! Group flat CSV records by intent label.
//!
//! ```text
//! CSV rows (flat)                  →  Groups
//! ┌──────────────────────────┐       ┌──────────────────────────────┐
//! │ "What time is it?"  time │       │ time:  ["What time is it?"]  │
//! │ "Is it open?"      hours │  →    ├──────────────────────────────┤
//! │ "Can I pay?"       hours │       │ hours: ["Is it open?",       │
//! └──────────────────────────┘       │         "Can I pay?"]        │
//!                                    └──────────────────────────────┘
//! ```
//!
//! Groups come out in the order their label was first seen; members keep
//! source row order.

use indexmap::IndexMap;

use crate::models::{Group, Record};

/// Group records by label, preserving first-seen label order.
pub fn group_by_label(records: Vec<Record>) -> Vec<Group> {
    let mut groups: IndexMap<String, Group> = IndexMap::new();

    for record in records {
        groups
            .entry(record.label.clone())
            .or_insert_with(|| Group::new(record.label.clone()))
            .members
            .push(record);
    }

    groups.into_values().collect()
}
