//! # Core Models Module
//!
//! Plain data records exchanged between the engine, the workflows and external collaborators.
//!
//! ## Key Components
//!
//! - [`sequence`] - The raw peptide sequence and its residue composition
//! - [`profile`] - The physicochemical profile computed for one sequence
//! - [`scores`] - Per-model classifier scores and their consensus
//!
//! Optional values are modelled with `Option` throughout: a model that produced no score, or a
//! consensus that could not be formed, is absent rather than zero.

pub mod profile;
pub mod scores;
pub mod sequence;

pub use profile::SequenceProfile;
pub use scores::{ConsensusResult, ModelKind, ModelScoreSet, ScoreError};
pub use sequence::{Composition, Sequence};
