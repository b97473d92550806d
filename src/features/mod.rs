//! Feature implementations for tally.

pub mod stats;
