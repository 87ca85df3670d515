//! Network layer: wire types, REST helpers, and the email-relay binding.

pub mod api;
pub mod emailjs;
pub mod types;
