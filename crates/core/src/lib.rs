//! Scriptbox domain core.
//!
//! Holds the ephemeral script store and everything it needs (entry types,
//! errors, the clock seam, preview rendering). Nothing in here knows about
//! HTTP; the API crate wraps these operations in routes.

pub mod clock;
pub mod error;
pub mod preview;
pub mod store;
pub mod types;
