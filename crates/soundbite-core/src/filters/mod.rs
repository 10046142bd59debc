//! Filters Module
//!
//! Defines named audio filters with keyword parameters and composes them
//! into the filtergraph strings consumed by FFmpeg's `-af` argument.

mod graph;
mod models;

pub use graph::{AudioFilter, FilterError, FilterGraph, FilterResult};
pub use models::*;
