//! service-core: Shared infrastructure for the fact-check services.
pub mod config;
pub mod error;
pub mod observability;
