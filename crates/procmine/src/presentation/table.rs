//! Tabular log views.
//!
//! One row per event. Transformations return new tables and never modify
//! the table they are called on.

use crate::models::{variant_name, EventLog};
use serde::Serialize;

/// Case id column.
pub const CASE_COLUMN: &str = "case:concept:name";
/// Activity column.
pub const ACTIVITY_COLUMN: &str = "concept:name";
/// Timestamp column.
pub const TIMESTAMP_COLUMN: &str = "time:timestamp";

const LIFECYCLE_COLUMN: &str = "lifecycle:transition";
const CASE_PREFIX: &str = "case:";

/// Event table with string cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LogTable {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

fn push_column(columns: &mut Vec<String>, name: String) {
    if !columns.contains(&name) {
        columns.push(name);
    }
}

impl LogTable {
    /// Flatten a log.
    ///
    /// Columns are case id, activity and timestamp, followed by every other
    /// attribute in first-seen order. Trace attributes get a `case:` prefix.
    /// Missing values are empty cells.
    pub fn from_log(log: &EventLog) -> Self {
        let mut columns: Vec<String> = [CASE_COLUMN, ACTIVITY_COLUMN, TIMESTAMP_COLUMN]
            .iter()
            .map(|c| c.to_string())
            .collect();
        for trace in log {
            for event in trace.events() {
                if event.lifecycle().is_some() {
                    push_column(&mut columns, LIFECYCLE_COLUMN.to_string());
                }
                for attr in event.attributes() {
                    push_column(&mut columns, attr.key.clone());
                }
            }
            for attr in trace.attributes() {
                push_column(&mut columns, format!("{}{}", CASE_PREFIX, attr.key));
            }
        }

        let mut rows = Vec::with_capacity(log.event_count());
        for trace in log {
            for event in trace.events() {
                let row = columns
                    .iter()
                    .map(|column| match column.as_str() {
                        CASE_COLUMN => trace.case_id().to_string(),
                        ACTIVITY_COLUMN => event.activity().to_string(),
                        TIMESTAMP_COLUMN => event
                            .timestamp()
                            .map(|ts| ts.to_rfc3339())
                            .unwrap_or_default(),
                        LIFECYCLE_COLUMN if event.attribute(LIFECYCLE_COLUMN).is_none() => event
                            .lifecycle()
                            .map(|lc| lc.name().to_string())
                            .unwrap_or_default(),
                        key => event
                            .attribute(key)
                            .or_else(|| {
                                key.strip_prefix(CASE_PREFIX)
                                    .and_then(|k| trace.attribute(k))
                            })
                            .map(|v| v.to_string())
                            .unwrap_or_default(),
                    })
                    .collect();
                rows.push(row);
            }
        }

        Self { columns, rows }
    }

    /// Column names.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows in log order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Position of a column.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell value.
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.column_index(column)?;
        self.rows.get(row).map(|r| r[idx].as_str())
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Table without the named columns. Unknown names are ignored.
    pub fn drop_columns(&self, names: &[&str]) -> LogTable {
        let keep: Vec<usize> = (0..self.columns.len())
            .filter(|&i| !names.contains(&self.columns[i].as_str()))
            .collect();
        LogTable {
            columns: keep.iter().map(|&i| self.columns[i].clone()).collect(),
            rows: self
                .rows
                .iter()
                .map(|row| keep.iter().map(|&i| row[i].clone()).collect())
                .collect(),
        }
    }

    /// Table with the rows whose `column` value satisfies `predicate`.
    ///
    /// An unknown column matches no rows.
    pub fn filter_rows(&self, column: &str, predicate: impl Fn(&str) -> bool) -> LogTable {
        let rows = match self.column_index(column) {
            Some(idx) => self
                .rows
                .iter()
                .filter(|row| predicate(&row[idx]))
                .cloned()
                .collect(),
            None => Vec::new(),
        };
        LogTable {
            columns: self.columns.clone(),
            rows,
        }
    }
}

/// Events of the traces following the variant named `"A -> B"`.
///
/// Activity and timestamp columns are dropped, since they are the same
/// for every case of the variant up to timing.
pub fn variant_cases_table(log: &EventLog, variant: &str) -> LogTable {
    let cases = log.filter(|trace| variant_name(trace.variant().as_slice()) == variant);
    LogTable::from_log(&cases).drop_columns(&[ACTIVITY_COLUMN, TIMESTAMP_COLUMN])
}
