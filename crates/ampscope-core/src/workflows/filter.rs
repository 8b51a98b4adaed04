use super::screen::PeptideReport;
use crate::engine::config::FilterCriteria;
use tracing::debug;

/// Whether a consensus score satisfies `threshold`.
///
/// An unknown score cannot be shown to meet a positive threshold, so it only passes when no
/// score threshold is in effect.
pub fn score_meets_threshold(score: Option<f64>, threshold: f64) -> bool {
    match score {
        Some(value) => value >= threshold,
        None => threshold <= 0.0,
    }
}

impl FilterCriteria {
    pub fn accepts(&self, report: &PeptideReport) -> bool {
        let length = report.length();
        let within_length = length >= self.min_length && length <= self.max_length;
        let has_excluded = report
            .profile
            .sequence
            .contains_any(&self.excluded_residues);

        within_length
            && !has_excluded
            && score_meets_threshold(report.consensus_score(), self.threshold)
    }
}

/// Reports accepted by `criteria`, in their original order.
pub fn apply<'a>(reports: &'a [PeptideReport], criteria: &FilterCriteria) -> Vec<&'a PeptideReport> {
    let kept: Vec<_> = reports.iter().filter(|r| criteria.accepts(r)).collect();
    debug!(
        kept = kept.len(),
        dropped = reports.len() - kept.len(),
        "Applied filter criteria."
    );
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::scores::{ModelKind, ModelScoreSet};
    use crate::core::residues::AminoAcid;
    use crate::engine::config::{FilterCriteriaBuilder, ProfilerConfig};
    use crate::engine::progress::ProgressReporter;
    use crate::workflows::screen::{self, Candidate};

    fn report(id: &str, sequence: &str, score: Option<f64>) -> PeptideReport {
        let mut scores = ModelScoreSet::new();
        scores.set(ModelKind::RandomForest, score).unwrap();
        let candidate = Candidate::new(id, sequence).with_scores(scores);
        screen::run(
            &[candidate],
            &ProfilerConfig::default(),
            &ProgressReporter::new(),
        )
        .remove(0)
    }

    #[test]
    fn unknown_score_passes_only_without_a_threshold() {
        assert!(score_meets_threshold(None, 0.0));
        assert!(!score_meets_threshold(None, 0.01));
        assert!(!score_meets_threshold(None, 0.5));
    }

    #[test]
    fn known_score_is_compared_inclusively() {
        assert!(score_meets_threshold(Some(0.5), 0.5));
        assert!(score_meets_threshold(Some(0.0), 0.0));
        assert!(!score_meets_threshold(Some(0.49), 0.5));
    }

    #[test]
    fn default_criteria_accept_short_peptides_with_unknown_scores() {
        let criteria = FilterCriteria::default();
        assert!(criteria.accepts(&report("a", "GLFDIVKKVVGALGSL", None)));
        assert!(criteria.accepts(&report("b", "", None)));
    }

    #[test]
    fn length_bounds_are_inclusive() {
        let criteria = FilterCriteriaBuilder::new()
            .min_length(3)
            .max_length(5)
            .build()
            .unwrap();
        assert!(!criteria.accepts(&report("a", "KK", None)));
        assert!(criteria.accepts(&report("b", "KKK", None)));
        assert!(criteria.accepts(&report("c", "KKKKK", None)));
        assert!(!criteria.accepts(&report("d", "KKKKKK", None)));
    }

    #[test]
    fn excluded_residues_reject_the_whole_peptide() {
        let criteria = FilterCriteriaBuilder::new()
            .exclude(AminoAcid::Cysteine)
            .build()
            .unwrap();
        assert!(!criteria.accepts(&report("a", "KKCKK", Some(90.0))));
        assert!(criteria.accepts(&report("b", "KKAKK", Some(90.0))));
    }

    #[test]
    fn threshold_applies_to_the_consensus_score() {
        let criteria = FilterCriteriaBuilder::new().threshold(0.5).build().unwrap();
        assert!(criteria.accepts(&report("a", "KK", Some(50.0))));
        assert!(!criteria.accepts(&report("b", "KK", Some(40.0))));
        assert!(!criteria.accepts(&report("c", "KK", None)));
        assert!(!criteria.accepts(&report("d", "KK", Some(0.0))));
    }

    #[test]
    fn apply_keeps_accepted_reports_in_order() {
        let reports = vec![
            report("a", "KKK", Some(90.0)),
            report("b", "KCK", Some(90.0)),
            report("c", "KKK", Some(10.0)),
            report("d", "LLL", Some(60.0)),
        ];
        let criteria = FilterCriteriaBuilder::new()
            .threshold(0.5)
            .exclude(AminoAcid::Cysteine)
            .build()
            .unwrap();
        let kept: Vec<&str> = apply(&reports, &criteria)
            .into_iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(kept, vec!["a", "d"]);
    }
}
