//! Process discovery.
//!
//! - [`build_dfg`]: Directly-Follows Graph with edge frequencies
//! - [`Footprint`]: causal, parallel and choice relations between activities
//! - [`AlphaMiner`]: Petri net discovery from the footprint

mod alpha;
mod dfg;
mod footprint;

pub use alpha::{discover, AlphaMiner, DiscoveredNet, SINK_PLACE, SOURCE_PLACE};
pub use dfg::{build_dfg, DfgBuilder};
pub use footprint::{Footprint, Relation};
