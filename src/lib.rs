//! Non-overlapping dinucleotide pair analysis.
//!
//! Sequences are scanned for the four tracked pairs (CG, GC, AT, TA); the
//! rest of the crate loads sequences from disk and reports the results as
//! text and charts.

pub mod chart;
pub mod errors;
pub mod loader;
pub mod report;
pub mod scanner;

pub use errors::LoadError;
pub use scanner::{analyze, scan_pairs, AnalysisResult, Sequence};
