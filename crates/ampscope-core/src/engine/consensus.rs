use crate::core::models::scores::{ConsensusResult, MAX_SCORE, ModelScoreSet};

/// Combines whichever model scores are present into one consensus in `[0, 1]`.
///
/// With no scores at all the consensus is absent, never zero. The input is echoed unchanged
/// so the individual model values stay inspectable next to the aggregate.
pub fn consensus(scores: ModelScoreSet) -> ConsensusResult {
    let (total, present) = scores
        .present()
        .fold((0.0, 0usize), |(sum, n), (_, score)| (sum + score, n + 1));

    let consensus_score = (present > 0).then(|| total / present as f64 / MAX_SCORE);

    ConsensusResult {
        per_model_scores: scores,
        consensus_score,
    }
}
