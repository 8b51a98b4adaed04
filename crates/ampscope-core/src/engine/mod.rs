//! # Engine Module
//!
//! The computational core of AMPScope: every algorithm that turns a sequence or a set of raw
//! classifier scores into a derived record.
//!
//! ## Overview
//!
//! - **Titration** ([`charge`]) - Henderson-Hasselbalch net charge at an arbitrary pH
//! - **Isoelectric Point** ([`isoelectric`]) - Bisection search for the zero-charge pH
//! - **Profiling** ([`profiler`]) - Molecular weight, hydrophobicity, net charge, pI and
//!   Boman index for one sequence
//! - **Consensus** ([`consensus`]) - Mean of the available classifier scores, absent when
//!   none are available
//! - **Configuration** ([`config`]) - Validated profiler settings and filter criteria
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress reporting for batches
//!
//! ## Key Properties
//!
//! - **Pure and deterministic**: no I/O, no shared mutable state
//! - **Infallible on string input**: non-canonical residues and empty sequences resolve to
//!   defined numeric values instead of errors
//! - **Thread-safe**: all inputs are read-only, so records can be computed on any thread

pub mod charge;
pub mod config;
pub mod consensus;
pub mod isoelectric;
pub mod profiler;
pub mod progress;
