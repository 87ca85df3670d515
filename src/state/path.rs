#[cfg(test)]
#[path = "path_test.rs"]
mod path_test;

use crate::net::types::{Buildings, PathResponse, Segment};

/// View state for the find-path page.
///
/// Created when the page mounts, mutated by user interaction and fetch
/// responses, discarded on navigation or reload. Selected values are always
/// keys of the last-fetched building map; the dropdowns guarantee
/// well-formed input.
#[derive(Clone, Debug)]
pub struct PathState {
    /// Building abbreviation → long name, from `GET /buildings`.
    pub buildings: Buildings,
    /// Dropdowns stay disabled until the building list arrives.
    pub busy: bool,
    /// Abbreviation of the selected start building, empty until selected.
    pub start: String,
    /// Long name of the selected start building.
    pub start_value: String,
    /// Abbreviation of the selected destination building.
    pub dest: String,
    /// Long name of the selected destination building.
    pub dest_value: String,
    /// Segments of the last fetched path, in canvas pixel space.
    pub segments: Vec<Segment>,
    /// Rounded total walking distance of the last fetched path, in feet.
    pub cost: Option<i64>,
    /// Emailable text directions for the last fetched path.
    pub directions: Option<String>,
    /// Whether the control footer is slid up.
    pub footer_on: bool,
    /// Email address typed into the form.
    pub email: String,
    /// Set once the relay confirms a send.
    pub email_sent: bool,
}

impl Default for PathState {
    fn default() -> Self {
        Self {
            buildings: Buildings::new(),
            busy: true,
            start: String::new(),
            start_value: String::new(),
            dest: String::new(),
            dest_value: String::new(),
            segments: Vec::new(),
            cost: None,
            directions: None,
            footer_on: false,
            email: String::new(),
            email_sent: false,
        }
    }
}

impl PathState {
    /// Store the fetched building map and enable the dropdowns.
    pub fn load_buildings(&mut self, buildings: Buildings) {
        self.buildings = buildings;
        self.busy = false;
    }

    /// Long names to offer in the dropdowns, ordered by abbreviation.
    #[must_use]
    pub fn building_names(&self) -> Vec<String> {
        self.buildings.values().cloned().collect()
    }

    /// Select the start building by its long name. Unknown names leave the
    /// selection unchanged; the dropdown only offers fetched names.
    pub fn select_start(&mut self, long_name: &str) {
        if let Some(abbreviation) = self.abbreviation_for(long_name) {
            self.start = abbreviation;
            self.start_value = long_name.to_owned();
        }
    }

    /// Select the destination building by its long name.
    pub fn select_dest(&mut self, long_name: &str) {
        if let Some(abbreviation) = self.abbreviation_for(long_name) {
            self.dest = abbreviation;
            self.dest_value = long_name.to_owned();
        }
    }

    /// Store a fetched path: its segments and the rounded total distance.
    pub fn apply_path(&mut self, response: &PathResponse) {
        self.segments = response.path.clone();
        self.cost = Some(response.rounded_cost());
    }

    /// Whether a path has been fetched; controls the email form.
    #[must_use]
    pub fn has_path(&self) -> bool {
        !self.segments.is_empty()
    }

    /// Start and destination name the same building. Both-empty counts:
    /// submitting an untouched form resets the page like the original.
    #[must_use]
    pub fn selection_is_degenerate(&self) -> bool {
        self.start == self.dest
    }

    /// Only one end of the route has been picked.
    #[must_use]
    pub fn selection_is_incomplete(&self) -> bool {
        self.start.is_empty() || self.dest.is_empty()
    }

    fn abbreviation_for(&self, long_name: &str) -> Option<String> {
        self.buildings
            .iter()
            .find(|(_, name)| name.as_str() == long_name)
            .map(|(abbreviation, _)| abbreviation.clone())
    }
}
