//! Happy path: the most frequent variant.

use super::variants::variants;
use crate::models::{EventLog, VariantKey, VariantMap};

fn most_frequent(variants: &VariantMap) -> Option<(&VariantKey, usize)> {
    let mut best: Option<(&VariantKey, usize)> = None;
    for (key, traces) in variants.iter() {
        match best {
            Some((_, count)) if traces.len() <= count => {}
            _ => best = Some((key, traces.len())),
        }
    }
    best
}

/// Activity sequence of the most frequent variant.
///
/// Ties go to the variant encountered first. Empty for an empty log.
pub fn happy_path(log: &EventLog) -> Vec<String> {
    most_frequent(&variants(log))
        .map(|(key, _)| key.clone())
        .unwrap_or_default()
}

/// Share of traces following the happy path, 0-100. 0 for an empty log.
pub fn happy_path_percentage(log: &EventLog) -> f64 {
    if log.is_empty() {
        return 0.0;
    }
    let count = most_frequent(&variants(log)).map_or(0, |(_, count)| count);
    count as f64 / log.len() as f64 * 100.0
}
