// CourtScout - app/mod.rs
//
// Application layer: state, location lookup, map camera, display sinks.
// Dependencies: core layer.
// Must NOT depend on: ui, platform specifics.

pub mod location;
pub mod sinks;
pub mod state;
pub mod viewport;
