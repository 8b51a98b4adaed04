use crate::core::models::sequence::{Composition, Sequence};
use crate::core::residues::AminoAcid;
use crate::core::residues::tables::{C_TERMINUS_PKA, N_TERMINUS_PKA};

const BASIC_RESIDUES: [AminoAcid; 3] = [
    AminoAcid::Histidine,
    AminoAcid::Lysine,
    AminoAcid::Arginine,
];

const ACIDIC_RESIDUES: [AminoAcid; 4] = [
    AminoAcid::AsparticAcid,
    AminoAcid::GlutamicAcid,
    AminoAcid::Cysteine,
    AminoAcid::Tyrosine,
];

/// Fraction of a basic group that is protonated (charge +1) at `ph`.
#[inline]
fn protonated_fraction(ph: f64, pka: f64) -> f64 {
    1.0 / (1.0 + 10f64.powf(ph - pka))
}

/// Fraction of an acidic group that is deprotonated (charge -1) at `ph`.
#[inline]
fn deprotonated_fraction(ph: f64, pka: f64) -> f64 {
    1.0 / (1.0 + 10f64.powf(pka - ph))
}

/// Henderson-Hasselbalch titration model of a peptide.
///
/// Residue counts are aggregated once on construction, so each [`ChargeModel::net_charge`]
/// evaluation costs a constant number of operations regardless of sequence length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChargeModel {
    composition: Composition,
}

impl ChargeModel {
    pub fn new(sequence: &Sequence) -> Self {
        Self::from_composition(sequence.composition())
    }

    pub fn from_composition(composition: Composition) -> Self {
        Self { composition }
    }

    pub fn composition(&self) -> &Composition {
        &self.composition
    }

    /// Net charge at `ph`: one free amine, one free carboxyl and every ionizable side chain.
    ///
    /// Non-increasing in `ph` for any fixed composition.
    pub fn net_charge(&self, ph: f64) -> f64 {
        let mut positive = protonated_fraction(ph, N_TERMINUS_PKA);
        for aa in BASIC_RESIDUES {
            if let Some(pka) = aa.side_chain_pka() {
                positive += self.composition.count(aa) as f64 * protonated_fraction(ph, pka);
            }
        }

        let mut negative = deprotonated_fraction(ph, C_TERMINUS_PKA);
        for aa in ACIDIC_RESIDUES {
            if let Some(pka) = aa.side_chain_pka() {
                negative += self.composition.count(aa) as f64 * deprotonated_fraction(ph, pka);
            }
        }

        positive - negative
    }
}

/// Net charge of `sequence` at `ph`.
pub fn net_charge(sequence: &Sequence, ph: f64) -> f64 {
    ChargeModel::new(sequence).net_charge(ph)
}

/// Net charge sampled at every pH in `ph_values`, in the order given.
pub fn titration_curve(sequence: &Sequence, ph_values: &[f64]) -> Vec<(f64, f64)> {
    let model = ChargeModel::new(sequence);
    ph_values
        .iter()
        .map(|&ph| (ph, model.net_charge(ph)))
        .collect()
}
