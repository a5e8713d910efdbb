//! XES (IEEE 1849) event log reader.
//!
//! Supports the flat attribute types (`string`, `date`, `int`, `float`,
//! `boolean`, `id`). Nested `list` and `container` attributes are skipped.

use super::ImportOptions;
use crate::error::{MiningError, Result};
use crate::models::{Attribute, AttributeValue, Event, EventLog, Lifecycle, Timestamp, Trace};
use chrono::{DateTime, NaiveDateTime};
use roxmltree::Node;

const CONCEPT_NAME: &str = "concept:name";
const TIME_TIMESTAMP: &str = "time:timestamp";
const LIFECYCLE_TRANSITION: &str = "lifecycle:transition";

/// Parse an XES document with default options.
pub fn parse_xes(text: &str) -> Result<EventLog> {
    parse_xes_with_options(text, &ImportOptions::default())
}

/// Parse an XES document.
pub fn parse_xes_with_options(text: &str, options: &ImportOptions) -> Result<EventLog> {
    let doc = roxmltree::Document::parse(text)?;
    let root = doc.root_element();
    if root.tag_name().name() != "log" {
        return Err(MiningError::Parse(format!(
            "expected <log> root element, found <{}>",
            root.tag_name().name()
        )));
    }

    let mut traces = Vec::new();
    let mut log_attributes = Vec::new();

    for child in root.children().filter(Node::is_element) {
        match child.tag_name().name() {
            "trace" => {
                let trace_idx = traces.len();
                traces.push(parse_trace(child, trace_idx, options)?);
            }
            // Declarations, not data.
            "extension" | "global" | "classifier" => {}
            _ => {
                if let Some(attr) =
                    parse_attribute(child).map_err(MiningError::Parse)?
                {
                    log_attributes.push(attr);
                }
            }
        }
    }

    log::debug!("Parsed XES document with {} traces", traces.len());
    Ok(EventLog::new(traces).with_attributes(log_attributes))
}

fn parse_trace(node: Node<'_, '_>, trace_idx: usize, options: &ImportOptions) -> Result<Trace> {
    let mut case_id = None;
    let mut attributes = Vec::new();
    let mut events = Vec::new();

    for child in node.children().filter(Node::is_element) {
        if child.tag_name().name() == "event" {
            let event_idx = events.len();
            events.push(parse_event(child, trace_idx, event_idx, options)?);
            continue;
        }

        let Some(attr) =
            parse_attribute(child).map_err(|e| MiningError::parse_at(trace_idx, None, e))?
        else {
            continue;
        };
        if attr.key == CONCEPT_NAME {
            case_id = Some(attr.value.to_string());
        } else {
            attributes.push(attr);
        }
    }

    let case_id = case_id.unwrap_or_else(|| {
        log::warn!("Trace {} has no concept:name, using its position as case id", trace_idx);
        trace_idx.to_string()
    });
    Ok(Trace::new(case_id, events).with_attributes(attributes))
}

fn parse_event(
    node: Node<'_, '_>,
    trace_idx: usize,
    event_idx: usize,
    options: &ImportOptions,
) -> Result<Event> {
    let mut activity = None;
    let mut timestamp = None;
    let mut lifecycle = None;
    let mut attributes = Vec::new();

    for child in node.children().filter(Node::is_element) {
        let Some(attr) = parse_attribute(child)
            .map_err(|e| MiningError::parse_at(trace_idx, Some(event_idx), e))?
        else {
            continue;
        };

        match attr.key.as_str() {
            CONCEPT_NAME => activity = Some(attr.value.to_string()),
            TIME_TIMESTAMP => match attr.value {
                AttributeValue::Date(ts) => timestamp = Some(ts),
                _ => {
                    return Err(MiningError::parse_at(
                        trace_idx,
                        Some(event_idx),
                        "time:timestamp is not a date",
                    ))
                }
            },
            LIFECYCLE_TRANSITION => {
                lifecycle = attr.value.as_str().and_then(Lifecycle::parse);
            }
            _ => attributes.push(attr),
        }
    }

    let activity = match activity {
        Some(a) if !a.is_empty() => a,
        _ => {
            return Err(MiningError::parse_at(
                trace_idx,
                Some(event_idx),
                "missing concept:name",
            ))
        }
    };
    if options.require_timestamps && timestamp.is_none() {
        return Err(MiningError::parse_at(
            trace_idx,
            Some(event_idx),
            "missing time:timestamp",
        ));
    }

    let mut event = Event::new(activity);
    if let Some(ts) = timestamp {
        event = event.with_timestamp(ts);
    }
    if let Some(lc) = lifecycle {
        event = event.with_lifecycle(lc);
    }
    for attr in attributes {
        event = event.with_attribute(attr.key, attr.value);
    }
    Ok(event)
}

/// Parse one typed attribute element. Unknown or nested types yield `None`.
fn parse_attribute(node: Node<'_, '_>) -> std::result::Result<Option<Attribute>, String> {
    let tag = node.tag_name().name();
    if matches!(tag, "list" | "container") {
        return Ok(None);
    }

    let key = node
        .attribute("key")
        .ok_or_else(|| format!("<{}> without key", tag))?;
    let raw = node
        .attribute("value")
        .ok_or_else(|| format!("attribute '{}' without value", key))?;

    let value = match tag {
        "string" => AttributeValue::String(raw.to_string()),
        "id" => AttributeValue::Id(raw.to_string()),
        "int" => AttributeValue::Int(
            raw.trim()
                .parse()
                .map_err(|_| format!("attribute '{}': invalid int '{}'", key, raw))?,
        ),
        "float" => AttributeValue::Float(
            raw.trim()
                .parse()
                .map_err(|_| format!("attribute '{}': invalid float '{}'", key, raw))?,
        ),
        "boolean" => match raw.trim().to_ascii_lowercase().as_str() {
            "true" => AttributeValue::Boolean(true),
            "false" => AttributeValue::Boolean(false),
            _ => return Err(format!("attribute '{}': invalid boolean '{}'", key, raw)),
        },
        "date" => AttributeValue::Date(
            parse_timestamp(raw)
                .ok_or_else(|| format!("attribute '{}': invalid date '{}'", key, raw))?,
        ),
        _ => return Ok(None),
    };

    Ok(Some(Attribute::new(key, value)))
}

/// Parse an XES date.
///
/// Accepts RFC 3339, offsets without a colon, and local times without an
/// offset (interpreted as UTC).
pub fn parse_timestamp(value: &str) -> Option<Timestamp> {
    let value = value.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts);
    }
    if let Ok(ts) = DateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Some(ts);
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc().fixed_offset())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<log xes.version="1.0" xmlns="http://www.xes-standard.org/">
  <extension name="Concept" prefix="concept" uri="http://www.xes-standard.org/concept.xesext"/>
  <global scope="event"><string key="concept:name" value="__INVALID__"/></global>
  <string key="concept:name" value="sample"/>
  <trace>
    <string key="concept:name" value="case-1"/>
    <event>
      <string key="concept:name" value="Register"/>
      <date key="time:timestamp" value="2024-01-01T10:00:00.000+01:00"/>
      <string key="lifecycle:transition" value="complete"/>
      <string key="org:resource" value="Ann"/>
      <int key="cost" value="12"/>
    </event>
    <event>
      <string key="concept:name" value="Approve"/>
      <date key="time:timestamp" value="2024-01-01T11:30:00.000+01:00"/>
      <list key="tags"><string key="t" value="x"/></list>
    </event>
  </trace>
  <trace>
    <event><string key="concept:name" value="Register"/></event>
  </trace>
</log>"#;

    #[test]
    fn test_parse_sample() {
        let log = parse_xes(SAMPLE).unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!(log.attributes()[0].key, "concept:name");

        let trace = &log.traces()[0];
        assert_eq!(trace.case_id(), "case-1");
        assert_eq!(trace.variant(), vec!["Register", "Approve"]);

        let first = &trace.events()[0];
        assert_eq!(first.lifecycle(), Some(Lifecycle::Complete));
        assert_eq!(first.attribute("cost"), Some(&AttributeValue::Int(12)));
        assert!(first.timestamp().is_some());
        assert!(trace.events()[1].attribute("tags").is_none());

        // Missing case id falls back to position.
        assert_eq!(log.traces()[1].case_id(), "1");
    }

    #[test]
    fn test_missing_activity_rejected() {
        let text = r#"<log><trace><event><int key="cost" value="1"/></event></trace></log>"#;
        let err = parse_xes(text).unwrap_err();
        assert!(matches!(err, MiningError::Parse(_)));
        assert!(err.to_string().contains("missing concept:name"));
    }

    #[test]
    fn test_required_timestamps() {
        let text =
            r#"<log><trace><event><string key="concept:name" value="A"/></event></trace></log>"#;
        assert!(parse_xes(text).is_ok());
        let options = ImportOptions::default().with_required_timestamps();
        assert!(parse_xes_with_options(text, &options).is_err());
    }

    #[test]
    fn test_malformed_input() {
        assert!(matches!(parse_xes("<log><trace>"), Err(MiningError::Parse(_))));
        assert!(matches!(parse_xes("<foo/>"), Err(MiningError::Parse(_))));

        let bad_date = r#"<log><trace><event>
            <string key="concept:name" value="A"/>
            <date key="time:timestamp" value="yesterday"/>
        </event></trace></log>"#;
        assert!(matches!(parse_xes(bad_date), Err(MiningError::Parse(_))));
    }

    #[test]
    fn test_timestamp_formats() {
        assert!(parse_timestamp("2024-01-01T10:00:00Z").is_some());
        assert!(parse_timestamp("2024-01-01T10:00:00.123+0100").is_some());
        let local = parse_timestamp("2024-01-01T10:00:00").unwrap();
        assert_eq!(local.offset().local_minus_utc(), 0);
        assert!(parse_timestamp("01/01/2024").is_none());
    }
}
