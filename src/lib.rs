//! # huskymap
//!
//! Leptos + WASM frontend for the campus pathfinding demo. Renders the
//! campus map on a canvas, lets the user pick start and destination
//! buildings from dropdowns, fetches the precomputed shortest path from the
//! course server, draws it, and optionally emails the text directions via
//! an external relay.
//!
//! All pathfinding, graph data, and email delivery live outside this crate;
//! this is purely an HTTP client of `GET /buildings`, `GET /path`, and
//! `GET /email-directions`.

pub mod app;
pub mod components;
pub mod map;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
