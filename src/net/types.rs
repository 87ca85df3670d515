//! Wire types for the pathfinding server's JSON payloads.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Building abbreviation mapped to its long display name, from
/// `GET /buildings`. A `BTreeMap` keeps dropdown order deterministic
/// (alphabetical by abbreviation).
pub type Buildings = BTreeMap<String, String>;

/// A pixel-space coordinate on the campus map image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A drawable line segment of the path, in canvas pixel space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
    /// Walking distance of this segment in feet. Present in the server
    /// payload but unused for drawing.
    #[serde(default)]
    pub cost: f64,
}

/// Response shape of `GET /path`. The server serializes its whole path
/// object, so extra fields (a top-level start point, per-segment costs)
/// ride along and are ignored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PathResponse {
    /// Total walking distance in feet.
    pub cost: f64,
    /// Segments to draw, in walking order.
    pub path: Vec<Segment>,
}

impl PathResponse {
    /// Total walking distance rounded to whole feet for display.
    #[must_use]
    pub fn rounded_cost(&self) -> i64 {
        self.cost.round() as i64
    }
}
