//! # AMPScope Core Library
//!
//! Physicochemical profiling and multi-model consensus scoring for candidate
//! antimicrobial peptides.
//!
//! ## Architectural Philosophy
//!
//! The library follows a strict three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Immutable residue constant tables and the stateless data
//!   models (`Sequence`, `SequenceProfile`, `ModelScoreSet`, `ConsensusResult`).
//!
//! - **[`engine`]: The Logic Core.** The titration charge model, the bisection solver for the
//!   isoelectric point, the physicochemical profiler and the consensus scorer. Every operation
//!   here is a pure, deterministic function of its inputs.
//!
//! - **[`workflows`]: The Public API.** Batch screening of many candidates, filtering of the
//!   resulting reports and per-source summary statistics.
//!
//! The library performs no I/O. Reading sequences, fetching predictions and exporting results
//! are the responsibility of the caller (see the `ampscope` command-line tool).

pub mod core;
pub mod engine;
pub mod workflows;
