//! Domain models for the fact-check service.

pub mod verdict;

pub use verdict::{FactCheckRequest, FactCheckVerdict, Highlight, Verdict};
