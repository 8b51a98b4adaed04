use super::sequence::Sequence;
use serde::{Deserialize, Serialize};

/// Physicochemical profile of one sequence.
///
/// Derived entirely from the sequence and the residue constant tables. Created fresh by every
/// profiling call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceProfile {
    pub sequence: Sequence,
    pub length: usize,
    /// Sum of residue masses plus one water for the termini, in Da.
    pub molecular_weight: f64,
    /// Mean Eisenberg hydrophobicity over canonical residues.
    pub hydrophobicity: f64,
    /// Net charge at the profiler's reference pH (7.0 by default).
    pub net_charge: f64,
    pub isoelectric_point: f64,
    /// Boman index, kcal/mol.
    pub boman_index: f64,
}
