//! Activity registry for dense activity indexing.

use super::EventLog;
use std::collections::HashMap;

/// Activity identifier type.
pub type ActivityId = u32;

/// Registry mapping activity names to dense identifiers.
///
/// Identifiers are assigned in first-seen order, so iterating a registry
/// built from a log is deterministic.
#[derive(Debug, Clone, Default)]
pub struct ActivityRegistry {
    /// Names by ID.
    names: Vec<String>,
    /// Name to ID mapping.
    name_to_id: HashMap<String, ActivityId>,
}

impl ActivityRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every activity of a log in first-seen order.
    pub fn from_log(log: &EventLog) -> Self {
        let mut registry = Self::new();
        for trace in log {
            for activity in trace.activities() {
                registry.get_or_create(activity);
            }
        }
        registry
    }

    /// Get the ID for a name, registering it if needed.
    pub fn get_or_create(&mut self, name: &str) -> ActivityId {
        if let Some(&id) = self.name_to_id.get(name) {
            id
        } else {
            let id = self.names.len() as ActivityId;
            self.names.push(name.to_string());
            self.name_to_id.insert(name.to_string(), id);
            id
        }
    }

    /// Get activity ID by name.
    pub fn id_of(&self, name: &str) -> Option<ActivityId> {
        self.name_to_id.get(name).copied()
    }

    /// Get activity name by ID.
    pub fn name(&self, id: ActivityId) -> Option<&str> {
        self.names.get(id as usize).map(String::as_str)
    }

    /// All names in ID order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of registered activities.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
