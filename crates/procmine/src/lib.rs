//! # procmine
//!
//! Process discovery and trace analytics for business event logs.
//!
//! This crate turns an event log (cases made of timestamped activity events)
//! into:
//!
//! - **Directly-Follows Graphs**: edge frequencies between consecutive activities
//! - **Process Nets**: Petri nets discovered with the Alpha algorithm
//! - **Variants**: distinct activity sequences, ranked and filterable
//! - **Metrics**: happy path, cycle time, bottleneck ranking, transition context
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐     ┌──────────────────┐     ┌────────────────┐
//! │   Log Import    │────▶│    Discovery     │────▶│  Presentation  │
//! │   (XES, Builder)│     │  (DFG, Alpha)    │     │  (graph JSON)  │
//! └─────────────────┘     └──────────────────┘     └────────────────┘
//!         │                        │                       ▲
//!         ▼                        ▼                       │
//! ┌─────────────────┐     ┌──────────────────┐             │
//! │  Event Log Model│────▶│    Analytics     │─────────────┘
//! │ Trace / Variant │     │ Variants, Metrics│
//! └─────────────────┘     └──────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use procmine::prelude::*;
//!
//! let log = load_log("orders.xes")?;
//! let dfg = build_dfg(&log);
//! let discovered = discover(&log)?;
//! let happy = happy_path(&log);
//! let top = detect_bottlenecks(&log, 5);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analytics;
pub mod config;
pub mod discovery;
pub mod error;
pub mod import;
pub mod models;
pub mod presentation;

pub use error::{MiningError, Result};

/// Prelude for convenient imports.
pub mod prelude {
    // Core types
    pub use crate::models::{
        ActivityId, ActivityRegistry, Arc, AttributeValue, Dfg, DfgEdge, Event, EventLog,
        EventLogBuilder, FrequencyTable, Lifecycle, Marking, PetriNet, Place, PlaceId, Timestamp,
        Trace, Transition, TransitionId, VariantKey, VariantMap,
    };

    // Import
    pub use crate::import::{load_log, load_log_with_options, parse_xes, ImportOptions};

    // Discovery
    pub use crate::discovery::{build_dfg, discover, AlphaMiner, DiscoveredNet, Footprint, Relation};

    // Analytics
    pub use crate::analytics::{
        activities, activity_case_counts, average_cycle_time, case_count, cycle_time,
        detect_bottlenecks, dfg_for_variant, filter_between, filter_by_variants,
        filter_rework, filter_variants_by_activity, happy_path, happy_path_percentage,
        other_variant_traces, rank_variants, transition_context, transition_info,
        variant_mapping, variants, Bottleneck, CycleTimeStats, ProcessAnalyzer, RankedVariant,
        TransitionContext, TransitionInfo,
    };

    // Configuration & errors
    pub use crate::config::{AnalysisConfig, LayoutConfig};
    pub use crate::error::{MiningError, Result};
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
