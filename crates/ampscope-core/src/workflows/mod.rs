//! # Workflows Module
//!
//! High-level entry points that run the engine over whole batches of candidate peptides.
//!
//! ## Overview
//!
//! A screening session is a short pipeline: every candidate is profiled and scored, the
//! resulting reports are filtered by the user's criteria, and the survivors can be summarized
//! per source. Each stage lives in its own module:
//!
//! - **Screening** ([`screen`]) - Profiles and scores a batch, reporting progress as it goes
//! - **Filtering** ([`filter`]) - Length bounds, excluded residues and a consensus threshold
//! - **Summaries** ([`summary`]) - Per-source means, pooled composition and length distribution
//!
//! ## Key Capabilities
//!
//! - **Order preservation**: reports come back in input order even when computed in parallel
//! - **Unknown scores stay unknown**: a candidate with no classifier output is still profiled,
//!   and its absent consensus is handled explicitly by the filter and the summaries

pub mod filter;
pub mod screen;
pub mod summary;
