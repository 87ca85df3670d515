use super::*;

// =============================================================
// /path response
// =============================================================

#[test]
fn path_response_decodes_server_shape() {
    // The server serializes its whole path object: a top-level start point
    // and per-segment costs ride along with the fields the client uses.
    let body = r#"{
        "start": {"x": 1903.71, "y": 1952.74},
        "cost": 1292.2,
        "path": [
            {"start": {"x": 1903.71, "y": 1952.74}, "end": {"x": 1906.1, "y": 1939.1}, "cost": 26.58},
            {"start": {"x": 1906.1, "y": 1939.1}, "end": {"x": 1931.9, "y": 1812.3}, "cost": 129.31}
        ]
    }"#;
    let response: PathResponse = serde_json::from_str(body).unwrap();
    assert_eq!(response.path.len(), 2);
    assert!((response.cost - 1292.2).abs() < 1e-9);
    assert!((response.path[0].end.x - 1906.1).abs() < 1e-9);
    assert!((response.path[1].start.y - 1939.1).abs() < 1e-9);
}

#[test]
fn path_response_rounds_cost_for_display() {
    let up = PathResponse { cost: 1292.5, path: Vec::new() };
    assert_eq!(up.rounded_cost(), 1293);

    let down = PathResponse { cost: 1292.2, path: Vec::new() };
    assert_eq!(down.rounded_cost(), 1292);
}

#[test]
fn segment_cost_defaults_when_absent() {
    let body = r#"{"start": {"x": 0.0, "y": 0.0}, "end": {"x": 3.0, "y": 4.0}}"#;
    let segment: Segment = serde_json::from_str(body).unwrap();
    assert!(segment.cost.abs() < 1e-9);
}

// =============================================================
// /buildings response
// =============================================================

#[test]
fn buildings_decode_sorted_by_abbreviation() {
    let body = r#"{"MLR": "Miller Hall", "CSE": "Paul G. Allen Center", "KNE": "Kane Hall"}"#;
    let buildings: Buildings = serde_json::from_str(body).unwrap();
    let abbreviations: Vec<&str> = buildings.keys().map(String::as_str).collect();
    assert_eq!(abbreviations, ["CSE", "KNE", "MLR"]);
    assert_eq!(buildings["KNE"], "Kane Hall");
}

// =============================================================
// /email-directions response
// =============================================================

#[test]
fn directions_payload_is_a_json_string() {
    let body = r#""Path from Kane Hall to Miller Hall:      Walk 58 feet SE to (1907, 1990) ->  Total distance: 58 feet""#;
    let directions: String = serde_json::from_str(body).unwrap();
    assert!(directions.starts_with("Path from"));
    assert!(directions.ends_with("feet"));
}
