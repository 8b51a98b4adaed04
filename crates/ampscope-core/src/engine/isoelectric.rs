use super::charge::ChargeModel;
use crate::core::models::sequence::Sequence;

/// Width of the final pH bracket accepted by default.
pub const DEFAULT_TOLERANCE: f64 = 0.01;

pub const MIN_PH: f64 = 0.0;
pub const MAX_PH: f64 = 14.0;

// Returned as-is when the full pH range is already within tolerance.
const INITIAL_PH: f64 = 7.0;

// Upper bound on halvings; only reachable with a non-positive tolerance.
const MAX_BISECTION_STEPS: usize = 200;

/// Isoelectric point of `sequence` by bisection over pH 0-14.
pub fn isoelectric_point(sequence: &Sequence, tolerance: f64) -> f64 {
    solve(&ChargeModel::new(sequence), tolerance)
}

/// Bisects `[0, 14]` until the bracket is no wider than `tolerance` and returns the last
/// midpoint evaluated.
///
/// The bracket is assumed to contain the sign change: the terminal groups alone make the
/// charge positive at pH 0 and negative at pH 14 for any composition, so no check is made.
pub fn solve(model: &ChargeModel, tolerance: f64) -> f64 {
    let mut lo = MIN_PH;
    let mut hi = MAX_PH;
    let mut mid = INITIAL_PH;
    let mut steps = 0;

    while hi - lo > tolerance && steps < MAX_BISECTION_STEPS {
        mid = (lo + hi) / 2.0;
        if model.net_charge(mid) > 0.0 {
            lo = mid;
        } else {
            hi = mid;
        }
        steps += 1;
    }

    mid
}
