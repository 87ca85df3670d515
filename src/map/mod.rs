//! Imperative canvas drawing for the campus map.

pub mod render;
