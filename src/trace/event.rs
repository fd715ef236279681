use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::naming::builder::DerivedName;

/// One line of the naming trace. Flat so every event serializes with the
/// same columns; unused fields stay null.
#[derive(Debug, Serialize)]
pub struct TraceEvent {
    pub timestamp_ms: u128,
    pub event: String,

    pub node: Option<usize>,
    pub tag: Option<String>,

    pub source: Option<String>,
    pub raw: Option<String>,
    pub name: Option<String>,
    pub resolved: Option<String>,
    pub reason: Option<String>,
}

impl TraceEvent {
    fn base(event: &str) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or(0),
            event: event.to_string(),
            node: None,
            tag: None,
            source: None,
            raw: None,
            name: None,
            resolved: None,
            reason: None,
        }
    }

    /// An element received its final (collision-resolved) name.
    pub fn named(node: usize, tag: &str, derived: &DerivedName, resolved: &str) -> Self {
        let mut event = Self::base("named");
        event.node = Some(node);
        event.tag = Some(tag.to_string());
        event.source = derived.source.clone();
        event.raw = Some(derived.raw.clone());
        event.name = Some(derived.name.clone());
        event.resolved = Some(resolved.to_string());
        event
    }

    /// An element was dropped before naming (hidden, no locator).
    pub fn skipped(node: usize, tag: &str, reason: &str) -> Self {
        let mut event = Self::base("skipped");
        event.node = Some(node);
        event.tag = Some(tag.to_string());
        event.reason = Some(reason.to_string());
        event
    }

    /// A name was already taken in this batch and got a numeric suffix.
    pub fn collision(name: &str, resolved: &str) -> Self {
        let mut event = Self::base("collision");
        event.name = Some(name.to_string());
        event.resolved = Some(resolved.to_string());
        event
    }
}
