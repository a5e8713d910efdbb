//! Metrics and queries over event logs.
//!
//! Every function here is a pure function of its inputs. [`ProcessAnalyzer`]
//! bundles a log with an [`AnalysisConfig`] so callers do not have to thread
//! chunk sizes and top-N limits through each call.

mod activities;
mod bottleneck;
mod cycle_time;
mod filtering;
mod happy_path;
mod transition;
mod variants;

pub use activities::{activities, activity_case_counts, case_count};
pub use bottleneck::{detect_bottlenecks, rank_edges, Bottleneck};
pub use cycle_time::{average_cycle_time, cycle_time, CycleTimeStats};
pub use filtering::{
    dfg_for_variant, dfg_for_variant_name, filter_between, filter_by_variants, filter_rework,
    other_variant_traces, SUBCASE_SEPARATOR,
};
pub use happy_path::{happy_path, happy_path_percentage};
pub use transition::{
    transition_context, transition_info, TransitionContext, TransitionInfo, TransitionShare,
};
pub use variants::{
    filter_variants_by_activity, rank_variants, variant_mapping, variants, RankedVariant,
    OTHER_VARIANT,
};

use crate::config::AnalysisConfig;
use crate::discovery::{build_dfg, AlphaMiner, DiscoveredNet};
use crate::error::Result;
use crate::models::{Dfg, EventLog, VariantMap};
use std::collections::{BTreeMap, BTreeSet};

/// A loaded log together with the configuration its analyses run under.
#[derive(Debug, Clone)]
pub struct ProcessAnalyzer {
    log: EventLog,
    config: AnalysisConfig,
}

impl ProcessAnalyzer {
    /// Create an analyzer with the default configuration.
    pub fn new(log: EventLog) -> Self {
        Self::with_config(log, AnalysisConfig::default())
    }

    /// Create an analyzer with an explicit configuration.
    pub fn with_config(log: EventLog, config: AnalysisConfig) -> Self {
        Self { log, config }
    }

    /// The analyzed log.
    pub fn log(&self) -> &EventLog {
        &self.log
    }

    /// The active configuration.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Sorted distinct activities.
    pub fn activities(&self) -> BTreeSet<String> {
        activities(&self.log, self.config.chunk_size)
    }

    /// Traces per activity.
    pub fn activity_case_counts(&self) -> BTreeMap<String, usize> {
        activity_case_counts(&self.log, self.config.chunk_size)
    }

    /// Traces containing `activity`.
    pub fn case_count(&self, activity: &str) -> usize {
        case_count(&self.log, activity)
    }

    /// Directly-follows graph.
    pub fn dfg(&self) -> Dfg {
        build_dfg(&self.log)
    }

    /// Alpha-mined net.
    pub fn discover(&self) -> Result<DiscoveredNet> {
        AlphaMiner::new().discover(&self.log)
    }

    /// Variant map.
    pub fn variants(&self) -> VariantMap {
        variants(&self.log)
    }

    /// Top `variant_top_n` variants plus `Other`.
    pub fn ranked_variants(&self) -> Vec<RankedVariant> {
        rank_variants(&self.variants(), self.config.variant_top_n)
    }

    /// Numbered variant names.
    pub fn variant_mapping(&self) -> Vec<(String, String)> {
        variant_mapping(&self.variants())
    }

    /// Most frequent variant.
    pub fn happy_path(&self) -> Vec<String> {
        happy_path(&self.log)
    }

    /// Share of traces on the happy path.
    pub fn happy_path_percentage(&self) -> f64 {
        happy_path_percentage(&self.log)
    }

    /// Mean cycle time in seconds.
    pub fn average_cycle_time(&self) -> f64 {
        average_cycle_time(&self.log)
    }

    /// Cycle time summary.
    pub fn cycle_time_stats(&self) -> CycleTimeStats {
        CycleTimeStats::from_log(&self.log)
    }

    /// Top `bottleneck_top_k` edges.
    pub fn bottlenecks(&self) -> Vec<Bottleneck> {
        detect_bottlenecks(&self.log, self.config.bottleneck_top_k)
    }

    /// Net neighbours of a transition label.
    pub fn transition_context(&self, label: &str) -> Result<TransitionContext> {
        let discovered = self.discover()?;
        transition_context(&discovered.net, label)
    }

    /// Predecessor and successor statistics of an activity.
    pub fn transition_info(&self, activity: &str) -> TransitionInfo {
        transition_info(&self.log, activity)
    }

    /// Variants containing or lacking an activity.
    pub fn filter_variants_by_activity(&self, activity: &str, include: bool) -> VariantMap {
        filter_variants_by_activity(&self.variants(), activity, include)
    }

    /// DFG of one variant given as `"A -> B"`.
    pub fn dfg_for_variant(&self, name: &str) -> Dfg {
        dfg_for_variant_name(&self.log, name)
    }

    /// DFG of the traces with rework on `activity`.
    pub fn rework_dfg(&self, activity: &str) -> Dfg {
        build_dfg(&filter_rework(&self.log, activity))
    }

    /// DFG of the sub-traces between two activities.
    pub fn between_dfg(&self, from: &str, to: &str) -> Dfg {
        build_dfg(&filter_between(&self.log, from, to))
    }

    /// Traces of the variants folded into `Other`.
    pub fn other_variant_traces(&self) -> EventLog {
        other_variant_traces(&self.log, &self.variants(), self.config.variant_top_n)
    }
}
