//! Integration tests for tint crates.
//!
//! End-to-end solves against known targets. SPSA is stochastic, so quality
//! checks take the best of a few seeded runs; with fixed seeds every run is
//! reproducible.
