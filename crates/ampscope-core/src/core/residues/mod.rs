//! # Residue Knowledge
//!
//! The 20 canonical amino acids and the constant tables keyed by their single-letter codes.
//!
//! Any character outside the canonical alphabet is a *non-canonical residue*: it is never
//! rejected, it simply contributes zero to every weighted sum.

pub mod amino_acid;
pub mod tables;

pub use amino_acid::{AminoAcid, ParseAminoAcidError};
