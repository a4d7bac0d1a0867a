//! `ev-output` — the CSV-backed [`ev_sim::DataExtractor`] implementation.
//!
//! Grounded on `dt_output::CsvWriter`, but carrying only the one backend
//! the spec's persisted-state format names: sqlite/parquet are dropped (see
//! DESIGN.md) since nothing in the spec calls for them.

pub mod csv;
pub mod error;

#[cfg(test)]
mod tests;

pub use csv::CsvExtractor;
pub use error::{OutputError, OutputResult};
