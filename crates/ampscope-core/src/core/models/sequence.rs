use crate::core::residues::AminoAcid;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A raw peptide sequence.
///
/// The string is stored exactly as supplied. Characters outside the canonical alphabet
/// (including lowercase codes) are kept and counted toward [`Sequence::len`], but contribute
/// nothing to any residue-weighted property.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequence(String);

impl Sequence {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters, canonical or not.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn residues(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }

    pub fn composition(&self) -> Composition {
        Composition::of(self)
    }

    pub fn contains_any(&self, residues: &[AminoAcid]) -> bool {
        self.0
            .chars()
            .any(|c| residues.iter().any(|aa| aa.code() == c))
    }
}

impl From<&str> for Sequence {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Sequence {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl AsRef<str> for Sequence {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Residue counts of a sequence, aggregated in a single pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Composition {
    counts: [usize; 20],
    non_canonical: usize,
}

impl Composition {
    pub fn of(sequence: &Sequence) -> Self {
        let mut composition = Self::default();
        for code in sequence.residues() {
            match AminoAcid::from_code(code) {
                Some(aa) => composition.counts[aa.index()] += 1,
                None => composition.non_canonical += 1,
            }
        }
        composition
    }

    pub fn count(&self, aa: AminoAcid) -> usize {
        self.counts[aa.index()]
    }

    /// Number of canonical residues.
    pub fn canonical(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn non_canonical(&self) -> usize {
        self.non_canonical
    }

    /// Total character count, equal to the sequence length.
    pub fn total(&self) -> usize {
        self.canonical() + self.non_canonical
    }

    /// Share of `aa` in the full sequence length, or 0 for an empty sequence.
    pub fn fraction(&self, aa: AminoAcid) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.count(aa) as f64 / total as f64
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (AminoAcid, usize)> + '_ {
        AminoAcid::ALL.iter().map(|&aa| (aa, self.count(aa)))
    }
}
