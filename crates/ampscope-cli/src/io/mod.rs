pub mod export;
pub mod scores;
pub mod sequences;
