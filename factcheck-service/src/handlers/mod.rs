//! HTTP handlers for the fact-check service.

pub mod fact_check;
pub mod health;
