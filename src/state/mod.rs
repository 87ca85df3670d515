//! Client-side view state.
//!
//! Pure data plus transitions, kept free of browser types so everything
//! here is testable natively. Pages own the state in signals and apply
//! these transitions from event handlers and fetch callbacks.

pub mod email;
pub mod path;
