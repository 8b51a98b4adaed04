//! # Core Module
//!
//! Fundamental building blocks shared by every computation in AMPScope.
//!
//! ## Overview
//!
//! - **Residue Knowledge** ([`residues`]) - The canonical amino-acid alphabet and its
//!   process-wide constant tables (residue masses, Eisenberg hydrophobicity, Boman scale,
//!   side-chain pKa values)
//! - **Data Models** ([`models`]) - Sequences, their composition, the physicochemical profile
//!   record and the per-model classifier score set
//!
//! Everything in this module is read-only once constructed. The constant tables are compiled
//! into perfect-hash maps, so they need no initialization and no locking.

pub mod models;
pub mod residues;
