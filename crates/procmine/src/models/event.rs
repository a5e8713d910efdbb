//! Process event types.
//!
//! Events are immutable once constructed; the builder-style `with_*` methods
//! consume `self` and are meant for load time only.

use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use std::fmt;

/// Event timestamp with the offset it was recorded in.
pub type Timestamp = DateTime<FixedOffset>;

/// Lifecycle transition of an event (XES lifecycle extension).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Lifecycle {
    /// Activity started.
    Start,
    /// Activity completed.
    #[default]
    Complete,
    /// Activity scheduled.
    Schedule,
    /// Activity assigned to resource.
    Assign,
    /// Activity suspended.
    Suspend,
    /// Activity resumed.
    Resume,
    /// Activity aborted.
    Abort,
}

impl Lifecycle {
    /// Parse a lifecycle transition name. Unknown names yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "start" => Some(Lifecycle::Start),
            "complete" => Some(Lifecycle::Complete),
            "schedule" => Some(Lifecycle::Schedule),
            "assign" => Some(Lifecycle::Assign),
            "suspend" => Some(Lifecycle::Suspend),
            "resume" => Some(Lifecycle::Resume),
            "ate_abort" | "pi_abort" | "abort" => Some(Lifecycle::Abort),
            _ => None,
        }
    }

    /// Get the XES name.
    pub fn name(&self) -> &'static str {
        match self {
            Lifecycle::Start => "start",
            Lifecycle::Complete => "complete",
            Lifecycle::Schedule => "schedule",
            Lifecycle::Assign => "assign",
            Lifecycle::Suspend => "suspend",
            Lifecycle::Resume => "resume",
            Lifecycle::Abort => "abort",
        }
    }
}

/// Typed attribute value carried through from the log source.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// String value.
    String(String),
    /// Integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// Boolean value.
    Boolean(bool),
    /// Date value.
    Date(Timestamp),
    /// Identifier value.
    Id(String),
}

impl AttributeValue {
    /// Get the value as a string slice if it is textual.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::String(s) | AttributeValue::Id(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::String(s) | AttributeValue::Id(s) => write!(f, "{}", s),
            AttributeValue::Int(v) => write!(f, "{}", v),
            AttributeValue::Float(v) => write!(f, "{}", v),
            AttributeValue::Boolean(v) => write!(f, "{}", v),
            AttributeValue::Date(v) => write!(f, "{}", v.to_rfc3339()),
        }
    }
}

/// A named attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attribute {
    /// Attribute key (e.g. `org:resource`).
    pub key: String,
    /// Attribute value.
    pub value: AttributeValue,
}

impl Attribute {
    /// Create a new attribute.
    pub fn new(key: impl Into<String>, value: AttributeValue) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Look up an attribute by key.
pub(crate) fn find_attribute<'a>(
    attributes: &'a [Attribute],
    key: &str,
) -> Option<&'a AttributeValue> {
    attributes.iter().find(|a| a.key == key).map(|a| &a.value)
}

/// A single event in an event log.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    activity: String,
    timestamp: Option<Timestamp>,
    lifecycle: Option<Lifecycle>,
    attributes: Vec<Attribute>,
}

impl Event {
    /// Create a new event for an activity.
    pub fn new(activity: impl Into<String>) -> Self {
        Self {
            activity: activity.into(),
            timestamp: None,
            lifecycle: None,
            attributes: Vec::new(),
        }
    }

    /// Set the timestamp.
    pub fn with_timestamp(mut self, timestamp: Timestamp) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Set the lifecycle transition.
    pub fn with_lifecycle(mut self, lifecycle: Lifecycle) -> Self {
        self.lifecycle = Some(lifecycle);
        self
    }

    /// Add an extension attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: AttributeValue) -> Self {
        self.attributes.push(Attribute::new(key, value));
        self
    }

    /// Activity name.
    pub fn activity(&self) -> &str {
        &self.activity
    }

    /// Event timestamp, if recorded.
    pub fn timestamp(&self) -> Option<&Timestamp> {
        self.timestamp.as_ref()
    }

    /// Lifecycle transition, if recorded.
    pub fn lifecycle(&self) -> Option<Lifecycle> {
        self.lifecycle
    }

    /// Extension attributes in source order.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Get an extension attribute by key.
    pub fn attribute(&self, key: &str) -> Option<&AttributeValue> {
        find_attribute(&self.attributes, key)
    }
}
