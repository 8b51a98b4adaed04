use super::tables;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub enum AminoAcid {
    // --- Aliphatic, Nonpolar ---
    Alanine,    // A
    Glycine,    // G
    Isoleucine, // I
    Leucine,    // L
    Proline,    // P
    Valine,     // V

    // --- Aromatic ---
    Phenylalanine, // F
    Tryptophan,    // W
    Tyrosine,      // Y

    // --- Polar, Uncharged ---
    Asparagine, // N
    Cysteine,   // C
    Glutamine,  // Q
    Serine,     // S
    Threonine,  // T
    Methionine, // M

    // --- Positively Charged (Basic) ---
    Arginine,  // R
    Histidine, // H
    Lysine,    // K

    // --- Negatively Charged (Acidic) ---
    AsparticAcid, // D
    GlutamicAcid, // E
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseAminoAcidError {
    #[error("'{0}' is not one of the 20 canonical amino-acid codes")]
    NonCanonical(char),
    #[error("expected a single amino-acid code, got '{0}'")]
    NotASingleCode(String),
}

impl AminoAcid {
    /// The canonical alphabet in `ACDEFGHIKLMNPQRSTVWY` order.
    pub const ALL: [AminoAcid; 20] = [
        Self::Alanine,
        Self::Cysteine,
        Self::AsparticAcid,
        Self::GlutamicAcid,
        Self::Phenylalanine,
        Self::Glycine,
        Self::Histidine,
        Self::Isoleucine,
        Self::Lysine,
        Self::Leucine,
        Self::Methionine,
        Self::Asparagine,
        Self::Proline,
        Self::Glutamine,
        Self::Arginine,
        Self::Serine,
        Self::Threonine,
        Self::Valine,
        Self::Tryptophan,
        Self::Tyrosine,
    ];

    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'A' => Some(Self::Alanine),
            'C' => Some(Self::Cysteine),
            'D' => Some(Self::AsparticAcid),
            'E' => Some(Self::GlutamicAcid),
            'F' => Some(Self::Phenylalanine),
            'G' => Some(Self::Glycine),
            'H' => Some(Self::Histidine),
            'I' => Some(Self::Isoleucine),
            'K' => Some(Self::Lysine),
            'L' => Some(Self::Leucine),
            'M' => Some(Self::Methionine),
            'N' => Some(Self::Asparagine),
            'P' => Some(Self::Proline),
            'Q' => Some(Self::Glutamine),
            'R' => Some(Self::Arginine),
            'S' => Some(Self::Serine),
            'T' => Some(Self::Threonine),
            'V' => Some(Self::Valine),
            'W' => Some(Self::Tryptophan),
            'Y' => Some(Self::Tyrosine),
            _ => None,
        }
    }

    pub fn code(self) -> char {
        match self {
            Self::Alanine => 'A',
            Self::Cysteine => 'C',
            Self::AsparticAcid => 'D',
            Self::GlutamicAcid => 'E',
            Self::Phenylalanine => 'F',
            Self::Glycine => 'G',
            Self::Histidine => 'H',
            Self::Isoleucine => 'I',
            Self::Lysine => 'K',
            Self::Leucine => 'L',
            Self::Methionine => 'M',
            Self::Asparagine => 'N',
            Self::Proline => 'P',
            Self::Glutamine => 'Q',
            Self::Arginine => 'R',
            Self::Serine => 'S',
            Self::Threonine => 'T',
            Self::Valine => 'V',
            Self::Tryptophan => 'W',
            Self::Tyrosine => 'Y',
        }
    }

    /// Position of this residue in [`AminoAcid::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::Alanine => 0,
            Self::Cysteine => 1,
            Self::AsparticAcid => 2,
            Self::GlutamicAcid => 3,
            Self::Phenylalanine => 4,
            Self::Glycine => 5,
            Self::Histidine => 6,
            Self::Isoleucine => 7,
            Self::Lysine => 8,
            Self::Leucine => 9,
            Self::Methionine => 10,
            Self::Asparagine => 11,
            Self::Proline => 12,
            Self::Glutamine => 13,
            Self::Arginine => 14,
            Self::Serine => 15,
            Self::Threonine => 16,
            Self::Valine => 17,
            Self::Tryptophan => 18,
            Self::Tyrosine => 19,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Alanine => "Alanine",
            Self::Cysteine => "Cysteine",
            Self::AsparticAcid => "Aspartic Acid",
            Self::GlutamicAcid => "Glutamic Acid",
            Self::Phenylalanine => "Phenylalanine",
            Self::Glycine => "Glycine",
            Self::Histidine => "Histidine",
            Self::Isoleucine => "Isoleucine",
            Self::Lysine => "Lysine",
            Self::Leucine => "Leucine",
            Self::Methionine => "Methionine",
            Self::Asparagine => "Asparagine",
            Self::Proline => "Proline",
            Self::Glutamine => "Glutamine",
            Self::Arginine => "Arginine",
            Self::Serine => "Serine",
            Self::Threonine => "Threonine",
            Self::Valine => "Valine",
            Self::Tryptophan => "Tryptophan",
            Self::Tyrosine => "Tyrosine",
        }
    }

    pub fn mass(self) -> f64 {
        tables::mass_of(self.code())
    }

    pub fn hydrophobicity(self) -> f64 {
        tables::hydrophobicity_of(self.code())
    }

    pub fn boman(self) -> f64 {
        tables::boman_of(self.code())
    }

    pub fn side_chain_pka(self) -> Option<f64> {
        tables::side_chain_pka_of(self.code())
    }
}

impl TryFrom<char> for AminoAcid {
    type Error = ParseAminoAcidError;
    fn try_from(code: char) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(ParseAminoAcidError::NonCanonical(code))
    }
}

impl From<AminoAcid> for char {
    fn from(aa: AminoAcid) -> Self {
        aa.code()
    }
}

impl FromStr for AminoAcid {
    type Err = ParseAminoAcidError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(code), None) => Self::try_from(code.to_ascii_uppercase()),
            _ => Err(ParseAminoAcidError::NotASingleCode(trimmed.to_string())),
        }
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
