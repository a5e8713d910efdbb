//! Cycle time statistics.

use crate::models::{EventLog, Trace};
use serde::Serialize;

/// Seconds from the first to the last event of a trace.
///
/// `None` for an empty trace or when either boundary event has no
/// timestamp. Events are not re-sorted, so out-of-order timestamps give a
/// negative value.
pub fn cycle_time(trace: &Trace) -> Option<f64> {
    let start = trace.start_time()?;
    let end = trace.end_time()?;
    let delta = *end - *start;
    // Microseconds overflow only beyond ~292k years; fall back to millis there.
    Some(match delta.num_microseconds() {
        Some(us) => us as f64 / 1_000_000.0,
        None => delta.num_milliseconds() as f64 / 1000.0,
    })
}

fn defined_cycle_times(log: &EventLog) -> Vec<f64> {
    let times: Vec<f64> = log.iter().filter_map(cycle_time).collect();
    let skipped = log.len() - times.len();
    if skipped > 0 {
        log::warn!("Skipped {} traces without boundary timestamps", skipped);
    }
    times
}

/// Mean cycle time in seconds over traces with a defined cycle time.
///
/// 0.0 when no trace has one (including the empty log).
pub fn average_cycle_time(log: &EventLog) -> f64 {
    let times = defined_cycle_times(log);
    if times.is_empty() {
        return 0.0;
    }
    times.iter().sum::<f64>() / times.len() as f64
}

/// Summary of trace cycle times, in seconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CycleTimeStats {
    /// Traces with a defined cycle time.
    pub count: usize,
    /// Mean.
    pub mean: f64,
    /// Minimum.
    pub min: f64,
    /// Maximum.
    pub max: f64,
    /// Median (mean of the two middle values for even counts).
    pub median: f64,
}

impl CycleTimeStats {
    /// Compute statistics for a log. All zeros when no cycle time is defined.
    pub fn from_log(log: &EventLog) -> Self {
        let mut times = defined_cycle_times(log);
        if times.is_empty() {
            return Self::default();
        }
        times.sort_by(f64::total_cmp);

        let count = times.len();
        let mid = count / 2;
        let median = if count % 2 == 0 {
            (times[mid - 1] + times[mid]) / 2.0
        } else {
            times[mid]
        };

        Self {
            count,
            mean: times.iter().sum::<f64>() / count as f64,
            min: times[0],
            max: times[count - 1],
            median,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Event;
    use chrono::DateTime;

    fn timed_trace(case_id: &str, stamps: &[&str]) -> Trace {
        let events = stamps
            .iter()
            .enumerate()
            .map(|(i, ts)| {
                Event::new(format!("A{}", i))
                    .with_timestamp(DateTime::parse_from_rfc3339(ts).unwrap())
            })
            .collect();
        Trace::new(case_id, events)
    }

    #[test]
    fn test_cycle_time() {
        let trace = timed_trace(
            "1",
            &["2024-01-01T10:00:00Z", "2024-01-01T10:30:00Z", "2024-01-01T11:00:00Z"],
        );
        assert_eq!(cycle_time(&trace), Some(3600.0));

        let reversed = timed_trace("2", &["2024-01-01T11:00:00Z", "2024-01-01T10:00:00Z"]);
        assert_eq!(cycle_time(&reversed), Some(-3600.0));

        assert_eq!(cycle_time(&Trace::new("3", vec![Event::new("A")])), None);
        assert_eq!(cycle_time(&Trace::new("4", Vec::new())), None);
    }

    #[test]
    fn test_cycle_time_keeps_microseconds() {
        let trace = timed_trace(
            "1",
            &["2024-01-01T10:00:00.000000Z", "2024-01-01T10:00:01.250375Z"],
        );
        assert!((cycle_time(&trace).unwrap() - 1.250375).abs() < 1e-9);
    }

    #[test]
    fn test_average_and_stats() {
        let log = EventLog::new(vec![
            timed_trace("1", &["2024-01-01T10:00:00Z", "2024-01-01T10:01:00Z"]),
            timed_trace("2", &["2024-01-01T10:00:00Z", "2024-01-01T10:03:00Z"]),
            timed_trace("3", &["2024-01-01T10:00:00+02:00", "2024-01-01T08:02:00Z"]),
            Trace::new("4", vec![Event::new("untimed")]),
        ]);

        assert!((average_cycle_time(&log) - 120.0).abs() < 1e-9);

        let stats = CycleTimeStats::from_log(&log);
        assert_eq!(stats.count, 3);
        assert_eq!(stats.min, 60.0);
        assert_eq!(stats.max, 180.0);
        assert_eq!(stats.median, 120.0);
    }

    #[test]
    fn test_empty_log_is_zero() {
        let log = EventLog::default();
        assert_eq!(average_cycle_time(&log), 0.0);
        assert_eq!(CycleTimeStats::from_log(&log), CycleTimeStats::default());
    }
}
