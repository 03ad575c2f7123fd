// src/dev/mod.rs
//! Shared test support: a random expression generator and an independent
//! reference matcher. Used by the fuzz binary and the integration tests;
//! nothing in the pipeline depends on this.

pub mod generator;
pub mod oracle;
