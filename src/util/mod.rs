//! Small browser-facing helpers.

pub mod browser;
