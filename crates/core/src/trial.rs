//! Single randomized burn trial
//!
//! One trial generates a fresh forest at a target cover percentage, strikes
//! it with lightning at a uniformly random cell and lets the fire run its
//! course. Trials are fully independent: each caller brings its own random
//! source, so nothing is shared between concurrent trials.

use crate::fire::spread_fire;
use crate::forest::{Forest, ForestError};
use rand::Rng;

/// Outcome of one randomized burn trial
#[derive(Debug, Clone)]
pub struct TrialOutcome {
    /// Number of trees destroyed by the fire
    pub burnt_trees: usize,
    /// The forest after the fire has run its course
    pub forest: Forest,
}

/// Generate a forest and hit it with a single random lightning strike
///
/// # Errors
/// Returns an error if either dimension is below the 1x1 minimum or if
/// `cover_percent` is outside `[1, 100]`.
pub fn run_trial(
    width: usize,
    height: usize,
    cover_percent: u8,
    rng: &mut impl Rng,
) -> Result<TrialOutcome, ForestError> {
    let mut forest = Forest::generate(width, height, cover_percent, rng)?;

    let strike_x = rng.random_range(0..width) as isize;
    let strike_y = rng.random_range(0..height) as isize;
    let burnt_trees = spread_fire(&mut forest, strike_x, strike_y);

    Ok(TrialOutcome {
        burnt_trees,
        forest,
    })
}
