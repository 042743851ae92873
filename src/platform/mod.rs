// CourtScout - platform/mod.rs
//
// Platform abstraction layer.
// Dependencies: standard library, directories crate, core value types.
// Must NOT depend on: app, ui.

pub mod config;
