//! Forest Fire Monte Carlo Library
//!
//! Models wildfire spread on a randomly generated grid forest and searches,
//! through repeated randomized simulation, for the densest forest cover
//! whose expected burn damage stays under a caller-specified cap.
//!
//! A single trial plants trees at a target cover percentage, strikes a
//! random cell with lightning and burns the connected patch around it
//! through 8-directional adjacency. The optimizer scores every cover
//! percentage in `[1, 100]` with a thousand such trials, evaluated
//! concurrently on the rayon thread pool, and picks the densest forest that
//! stays within the acceptable average burn rate.

// Forest data model
pub mod forest;

// Fire spread engine
pub mod fire;

// Monte Carlo trial and cover optimization
pub mod optimizer;
pub mod trial;

// Text snapshot output
pub mod snapshot;

// Re-export core types
pub use fire::spread_fire;
pub use forest::{Forest, ForestError, Tree, TreeState};
pub use optimizer::{
    find_optimal_cover, OptimalCover, SearchError, SearchParams, DEFAULT_SAMPLE_COUNT,
    SHOWCASE_RETRY_LIMIT,
};
pub use snapshot::{render_forest, save_forest, SnapshotError, DEFAULT_SNAPSHOT_PATH};
pub use trial::{run_trial, TrialOutcome};
