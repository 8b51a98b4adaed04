use crate::core::models::profile::SequenceProfile;
use crate::core::models::scores::{ConsensusResult, ModelScoreSet};
use crate::core::models::sequence::Sequence;
use crate::engine::config::ProfilerConfig;
use crate::engine::consensus::consensus;
use crate::engine::profiler::Profiler;
use crate::engine::progress::{Progress, ProgressReporter};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, instrument};

/// One peptide submitted for screening, with whatever model scores were obtained for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub id: String,
    pub sequence: Sequence,
    /// Generator or library the sequence came from, used to group summaries.
    pub source: Option<String>,
    pub scores: ModelScoreSet,
}

impl Candidate {
    pub fn new(id: impl Into<String>, sequence: impl Into<Sequence>) -> Self {
        Self {
            id: id.into(),
            sequence: sequence.into(),
            source: None,
            scores: ModelScoreSet::new(),
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_scores(mut self, scores: ModelScoreSet) -> Self {
        self.scores = scores;
        self
    }
}

/// Profile and consensus for one candidate, the record consumed by filtering and export.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeptideReport {
    pub id: String,
    pub source: Option<String>,
    #[serde(flatten)]
    pub profile: SequenceProfile,
    #[serde(flatten)]
    pub consensus: ConsensusResult,
}

impl PeptideReport {
    pub fn length(&self) -> usize {
        self.profile.length
    }

    pub fn consensus_score(&self) -> Option<f64> {
        self.consensus.consensus_score
    }
}

fn screen_one(profiler: &Profiler, candidate: &Candidate) -> PeptideReport {
    PeptideReport {
        id: candidate.id.clone(),
        source: candidate.source.clone(),
        profile: profiler.profile(&candidate.sequence),
        consensus: consensus(candidate.scores),
    }
}

/// Profiles and scores every candidate. The output has one report per candidate, in input
/// order.
#[instrument(skip_all, name = "screening_workflow", fields(candidates = candidates.len()))]
pub fn run(
    candidates: &[Candidate],
    config: &ProfilerConfig,
    reporter: &ProgressReporter,
) -> Vec<PeptideReport> {
    reporter.report(Progress::PhaseStart {
        name: "Screening",
    });
    info!("Screening {} candidate(s).", candidates.len());

    let profiler = Profiler::new(*config);

    reporter.report(Progress::BatchStart {
        total: candidates.len() as u64,
    });

    #[cfg(not(feature = "parallel"))]
    let iterator = candidates.iter();

    #[cfg(feature = "parallel")]
    let iterator = candidates.par_iter();

    let reports: Vec<PeptideReport> = iterator
        .map(|candidate| {
            let report = screen_one(&profiler, candidate);
            reporter.report(Progress::CandidateDone);
            report
        })
        .collect();

    reporter.report(Progress::BatchFinish);

    let unknown = reports
        .iter()
        .filter(|r| r.consensus_score().is_none())
        .count();
    if unknown > 0 {
        debug!(unknown, "Candidates without model scores.");
        reporter.report(Progress::Message(format!(
            "{} of {} candidate(s) have no model scores; consensus is unknown.",
            unknown,
            reports.len()
        )));
    }
    info!(reports = reports.len(), "Screening complete.");

    reporter.report(Progress::PhaseFinish);
    reports
}
