use super::*;

use crate::net::types::{Point, Segment};

fn sample_buildings() -> Buildings {
    let mut map = Buildings::new();
    map.insert("CSE".to_owned(), "Paul G. Allen Center".to_owned());
    map.insert("KNE".to_owned(), "Kane Hall".to_owned());
    map.insert("MLR".to_owned(), "Miller Hall".to_owned());
    map
}

fn sample_response() -> PathResponse {
    PathResponse {
        cost: 583.7,
        path: vec![Segment {
            start: Point { x: 10.0, y: 20.0 },
            end: Point { x: 30.0, y: 40.0 },
            cost: 583.7,
        }],
    }
}

// =============================================================
// Loading
// =============================================================

#[test]
fn starts_busy_with_no_buildings() {
    let state = PathState::default();
    assert!(state.busy);
    assert!(state.buildings.is_empty());
    assert!(!state.has_path());
    assert!(!state.footer_on);
    assert!(!state.email_sent);
}

#[test]
fn load_buildings_clears_busy() {
    let mut state = PathState::default();
    state.load_buildings(sample_buildings());
    assert!(!state.busy);
    assert_eq!(state.buildings.len(), 3);
}

#[test]
fn building_names_follow_abbreviation_order() {
    let mut state = PathState::default();
    state.load_buildings(sample_buildings());
    assert_eq!(
        state.building_names(),
        ["Paul G. Allen Center", "Kane Hall", "Miller Hall"]
    );
}

// =============================================================
// Selection
// =============================================================

#[test]
fn select_start_resolves_abbreviation() {
    let mut state = PathState::default();
    state.load_buildings(sample_buildings());
    state.select_start("Kane Hall");
    assert_eq!(state.start, "KNE");
    assert_eq!(state.start_value, "Kane Hall");
}

#[test]
fn select_dest_resolves_abbreviation() {
    let mut state = PathState::default();
    state.load_buildings(sample_buildings());
    state.select_dest("Miller Hall");
    assert_eq!(state.dest, "MLR");
    assert_eq!(state.dest_value, "Miller Hall");
}

#[test]
fn select_ignores_unknown_name() {
    let mut state = PathState::default();
    state.load_buildings(sample_buildings());
    state.select_start("Kane Hall");
    state.select_start("Not A Building");
    assert_eq!(state.start, "KNE");
    assert_eq!(state.start_value, "Kane Hall");
}

#[test]
fn degenerate_when_both_empty() {
    // Submitting an untouched form counts as degenerate and reloads.
    let state = PathState::default();
    assert!(state.selection_is_degenerate());
}

#[test]
fn degenerate_when_same_building() {
    let mut state = PathState::default();
    state.load_buildings(sample_buildings());
    state.select_start("Kane Hall");
    state.select_dest("Kane Hall");
    assert!(state.selection_is_degenerate());
}

#[test]
fn distinct_buildings_are_not_degenerate() {
    let mut state = PathState::default();
    state.load_buildings(sample_buildings());
    state.select_start("Kane Hall");
    state.select_dest("Miller Hall");
    assert!(!state.selection_is_degenerate());
    assert!(!state.selection_is_incomplete());
}

#[test]
fn single_selection_is_incomplete() {
    let mut state = PathState::default();
    state.load_buildings(sample_buildings());
    state.select_start("Kane Hall");
    assert!(state.selection_is_incomplete());
}

// =============================================================
// Path application
// =============================================================

#[test]
fn apply_path_stores_segments_and_rounded_cost() {
    let mut state = PathState::default();
    state.apply_path(&sample_response());
    assert_eq!(state.segments.len(), 1);
    assert_eq!(state.cost, Some(584));
}

#[test]
fn email_form_hidden_until_path_applied() {
    let mut state = PathState::default();
    assert!(!state.has_path());
    state.apply_path(&sample_response());
    assert!(state.has_path());
}
