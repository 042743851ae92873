// CourtScout - ui/panels/mod.rs

pub mod about;
pub mod court_list;
pub mod detail;
pub mod filters;
pub mod map;
