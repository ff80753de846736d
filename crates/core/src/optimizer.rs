//! Concurrent search for the optimal forest cover percentage
//!
//! Every candidate cover percentage in `[1, 100]` is scored by averaging the
//! burn damage of many independent randomized trials. The 100 evaluations
//! share nothing but the thread-local random source, so they fan out across
//! the rayon pool and join at a single collect barrier before the best
//! candidate is selected.

use crate::forest::{Forest, ForestError};
use crate::trial::run_trial;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Trials averaged per candidate cover percentage
pub const DEFAULT_SAMPLE_COUNT: usize = 1000;

/// Attempts at producing a showcase forest before giving up
pub const SHOWCASE_RETRY_LIMIT: usize = 1000;

/// Parameters of an optimal-cover search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchParams {
    /// Forest width in cells
    pub width: usize,
    /// Forest height in cells
    pub height: usize,
    /// Highest acceptable average burn rate percentage, in `[1, 100]`
    pub max_burn_rate: u8,
    /// Trials averaged per candidate cover percentage
    pub samples: usize,
    /// Attempts at the post-search showcase trial before giving up
    pub showcase_retry_limit: usize,
}

impl SearchParams {
    /// Search parameters with the default sample count and retry limit
    pub fn new(width: usize, height: usize, max_burn_rate: u8) -> Self {
        SearchParams {
            width,
            height,
            max_burn_rate,
            samples: DEFAULT_SAMPLE_COUNT,
            showcase_retry_limit: SHOWCASE_RETRY_LIMIT,
        }
    }
}

/// Result of an optimal-cover search
#[derive(Debug, Clone)]
pub struct OptimalCover {
    /// Densest cover percentage whose average burn rate stayed under the
    /// cap, or 0 when no candidate qualified
    pub cover_percent: u8,
    /// Average burn rate percentage observed at that cover
    pub average_burn_rate: u8,
    /// A burnt forest demonstrating the chosen cover; `None` when no
    /// candidate qualified, since a cover of 0 cannot be generated
    pub showcase: Option<Forest>,
}

/// Find the densest forest cover that keeps the average burn rate under the cap
///
/// Scores all 100 candidate cover percentages concurrently, selects the
/// largest one whose average stays within `max_burn_rate`, then re-runs
/// trials at that cover until one actually burns a tree and returns the
/// burnt forest for the caller to snapshot.
///
/// # Errors
/// Returns an error when the parameters are invalid (dimensions below 1x1,
/// burn rate cap outside `[1, 100]`, zero samples) or when no showcase trial
/// burnt a tree within the retry limit.
pub fn find_optimal_cover(params: &SearchParams) -> Result<OptimalCover, SearchError> {
    if params.max_burn_rate == 0 || params.max_burn_rate > 100 {
        return Err(SearchError::InvalidBurnRateCap(params.max_burn_rate));
    }
    if params.width < 1 || params.height < 1 {
        return Err(ForestError::InvalidDimensions {
            width: params.width,
            height: params.height,
        }
        .into());
    }
    if params.samples == 0 {
        return Err(SearchError::InvalidSampleCount);
    }

    info!(
        "searching optimal cover for a {}x{} forest, burn rate cap {}%, {} samples per candidate",
        params.width, params.height, params.max_burn_rate, params.samples
    );

    let total_cells = params.width * params.height;
    let averages: Result<FxHashMap<u8, u8>, ForestError> = (1_u8..=100)
        .into_par_iter()
        .map(|cover_percent| {
            let mut rng = rand::rng();
            let mut burn_rate_sum = 0_usize;

            for _ in 0..params.samples {
                let outcome = run_trial(params.width, params.height, cover_percent, &mut rng)?;
                burn_rate_sum += 100 * outcome.burnt_trees / total_cells;
            }

            let average = (burn_rate_sum / params.samples) as u8;
            debug!("cover {cover_percent}%: average burn rate {average}%");
            Ok((cover_percent, average))
        })
        .collect();
    let averages = averages?;

    let (cover_percent, average_burn_rate) =
        select_optimal(&averages, params.max_burn_rate);

    if cover_percent == 0 {
        info!(
            "no cover percentage kept the average burn rate within {}%",
            params.max_burn_rate
        );
        return Ok(OptimalCover {
            cover_percent,
            average_burn_rate,
            showcase: None,
        });
    }

    info!("optimal cover is {cover_percent}% with an average burn rate of {average_burn_rate}%");

    let showcase = showcase_trial(params, cover_percent)?;
    Ok(OptimalCover {
        cover_percent,
        average_burn_rate,
        showcase: Some(showcase),
    })
}

/// Largest cover whose average burn rate stays within the cap, (0, 0) when
/// none qualifies
fn select_optimal(averages: &FxHashMap<u8, u8>, max_burn_rate: u8) -> (u8, u8) {
    let mut optimal_cover = 0_u8;
    let mut optimal_rate = 0_u8;

    for (&cover_percent, &average) in averages {
        if average <= max_burn_rate && cover_percent > optimal_cover {
            optimal_cover = cover_percent;
            optimal_rate = average;
        }
    }

    (optimal_cover, optimal_rate)
}

/// Re-run trials at the chosen cover until one actually burns a tree
///
/// The lightning strike can land on an empty cell and burn nothing, so the
/// demonstration run retries. A sparse forest on a small grid could retry
/// indefinitely, hence the bounded attempt count.
fn showcase_trial(params: &SearchParams, cover_percent: u8) -> Result<Forest, SearchError> {
    let mut rng = rand::rng();

    for attempt in 1..=params.showcase_retry_limit {
        let outcome = run_trial(params.width, params.height, cover_percent, &mut rng)?;
        if outcome.burnt_trees > 0 {
            debug!(
                "showcase trial burnt {} trees on attempt {attempt}",
                outcome.burnt_trees
            );
            return Ok(outcome.forest);
        }
    }

    Err(SearchError::ShowcaseExhausted {
        cover_percent,
        attempts: params.showcase_retry_limit,
    })
}

/// Errors that can occur during an optimal-cover search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Burn rate cap outside `[1, 100]`
    InvalidBurnRateCap(u8),
    /// Sample count of zero
    InvalidSampleCount,
    /// Forest generation rejected the search parameters
    Forest(ForestError),
    /// No showcase trial burnt a tree within the retry limit
    ShowcaseExhausted { cover_percent: u8, attempts: usize },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchError::InvalidBurnRateCap(cap) => {
                write!(f, "max burn rate must be between 1 and 100, got {cap}")
            }
            SearchError::InvalidSampleCount => {
                write!(f, "sample count must be at least 1")
            }
            SearchError::Forest(source) => write!(f, "{source}"),
            SearchError::ShowcaseExhausted {
                cover_percent,
                attempts,
            } => write!(
                f,
                "no trial at {cover_percent}% cover burnt a tree within {attempts} attempts"
            ),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SearchError::Forest(source) => Some(source),
            _ => None,
        }
    }
}

impl From<ForestError> for SearchError {
    fn from(source: ForestError) -> Self {
        SearchError::Forest(source)
    }
}
