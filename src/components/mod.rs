//! Presentational UI components.
//!
//! Each wraps a single piece of browser UI and reports events upward via
//! callback props or the page's shared state signal.

pub mod building_selector;
pub mod map_view;
pub mod navbar;
