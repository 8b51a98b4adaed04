use super::screen::PeptideReport;
use crate::core::residues::AminoAcid;
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregate statistics for all reports sharing one source.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSummary {
    pub source: Option<String>,
    pub count: usize,
    pub mean_isoelectric_point: f64,
    pub mean_hydrophobicity: f64,
    pub mean_molecular_weight: f64,
    pub mean_length: f64,
    /// Mean over reports whose consensus is known; absent when none is.
    pub mean_consensus: Option<f64>,
    /// Percentage of each residue among the pooled canonical residues of the group, so the
    /// values sum to 100 whenever the group has any. Non-canonical characters are left out.
    pub composition: BTreeMap<AminoAcid, f64>,
    /// Number of reports per sequence length.
    pub length_distribution: BTreeMap<usize, usize>,
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, n) = values.fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    (n > 0).then(|| sum / n as f64)
}

fn summarize_group(source: Option<String>, reports: &[&PeptideReport]) -> GroupSummary {
    let mut residue_counts = [0usize; 20];
    let mut canonical_residues = 0usize;
    let mut length_distribution = BTreeMap::new();

    for report in reports {
        let composition = report.profile.sequence.composition();
        for (aa, n) in composition.iter() {
            residue_counts[aa.index()] += n;
        }
        canonical_residues += composition.canonical();
        *length_distribution.entry(report.length()).or_insert(0) += 1;
    }

    let composition = AminoAcid::ALL
        .iter()
        .map(|&aa| {
            let percent = if canonical_residues > 0 {
                residue_counts[aa.index()] as f64 / canonical_residues as f64 * 100.0
            } else {
                0.0
            };
            (aa, percent)
        })
        .collect();

    GroupSummary {
        source,
        count: reports.len(),
        mean_isoelectric_point: mean(reports.iter().map(|r| r.profile.isoelectric_point))
            .unwrap_or(0.0),
        mean_hydrophobicity: mean(reports.iter().map(|r| r.profile.hydrophobicity))
            .unwrap_or(0.0),
        mean_molecular_weight: mean(reports.iter().map(|r| r.profile.molecular_weight))
            .unwrap_or(0.0),
        mean_length: mean(reports.iter().map(|r| r.length() as f64)).unwrap_or(0.0),
        mean_consensus: mean(reports.iter().filter_map(|r| r.consensus_score())),
        composition,
        length_distribution,
    }
}

/// One summary per distinct source, in order of first appearance.
pub fn summarize<'a>(reports: impl IntoIterator<Item = &'a PeptideReport>) -> Vec<GroupSummary> {
    let mut groups: Vec<(Option<String>, Vec<&PeptideReport>)> = Vec::new();
    for report in reports {
        match groups.iter_mut().find(|(source, _)| *source == report.source) {
            Some((_, members)) => members.push(report),
            None => groups.push((report.source.clone(), vec![report])),
        }
    }

    groups
        .into_iter()
        .map(|(source, members)| summarize_group(source, &members))
        .collect()
}
