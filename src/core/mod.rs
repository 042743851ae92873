// CourtScout - core/mod.rs
//
// Core business logic layer.
// Dependencies: standard library, serde, regex, csv.
// Must NOT depend on: ui, platform, app.

pub mod dataset;
pub mod detail;
pub mod engine;
pub mod export;
pub mod filter;
pub mod geo;
pub mod model;
pub mod parser;

#[cfg(test)]
pub(crate) mod test_support;
