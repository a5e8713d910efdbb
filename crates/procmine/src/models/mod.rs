//! Core data structures for process mining.
//!
//! Event logs are built once and read-only afterwards; every derived
//! structure (DFG, variants, nets) is a pure function of a log.

mod activity;
mod dfg;
mod event;
mod event_log;
mod frequency;
mod net;
mod trace;
mod variant;

pub use activity::*;
pub use dfg::*;
pub use event::{Attribute, AttributeValue, Event, Lifecycle, Timestamp};
pub use event_log::*;
pub use frequency::*;
pub use net::*;
pub use trace::*;
pub use variant::*;
