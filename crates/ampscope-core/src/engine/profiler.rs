use super::charge::ChargeModel;
use super::config::ProfilerConfig;
use super::isoelectric;
use crate::core::models::profile::SequenceProfile;
use crate::core::models::sequence::Sequence;
use crate::core::residues::tables::{self, WATER_MASS};

/// Water mass plus the residue mass of every character; non-canonical characters add nothing.
pub fn molecular_weight(sequence: &Sequence) -> f64 {
    WATER_MASS + sequence.residues().map(tables::mass_of).sum::<f64>()
}

/// Mean Eisenberg hydrophobicity over canonical residues only, or 0 when there are none.
pub fn mean_hydrophobicity(sequence: &Sequence) -> f64 {
    let (total, canonical) = sequence
        .residues()
        .filter(|&code| tables::is_canonical(code))
        .fold((0.0, 0usize), |(sum, n), code| {
            (sum + tables::hydrophobicity_of(code), n + 1)
        });

    if canonical > 0 {
        total / canonical as f64
    } else {
        0.0
    }
}

/// Boman index: summed Boman scale over the full length, or 0 for an empty sequence.
pub fn boman_index(sequence: &Sequence) -> f64 {
    let length = sequence.len();
    if length == 0 {
        return 0.0;
    }
    let total: f64 = sequence.residues().map(tables::boman_of).sum();
    total / length as f64
}

/// Computes [`SequenceProfile`] records.
///
/// Holds only configuration and is freely shareable between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Profiler {
    config: ProfilerConfig,
}

impl Profiler {
    pub fn new(config: ProfilerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProfilerConfig {
        &self.config
    }

    pub fn profile(&self, sequence: &Sequence) -> SequenceProfile {
        let charge_model = ChargeModel::new(sequence);

        SequenceProfile {
            sequence: sequence.clone(),
            length: sequence.len(),
            molecular_weight: molecular_weight(sequence),
            hydrophobicity: mean_hydrophobicity(sequence),
            net_charge: charge_model.net_charge(self.config.reference_ph),
            isoelectric_point: isoelectric::solve(&charge_model, self.config.pi_tolerance),
            boman_index: boman_index(sequence),
        }
    }
}

/// Profiles `sequence` with the default configuration (charge at pH 7.0, pI tolerance 0.01).
pub fn profile(sequence: &Sequence) -> SequenceProfile {
    Profiler::default().profile(sequence)
}
