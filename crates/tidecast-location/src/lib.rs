//! Location provider for Tidecast.
//!
//! Wraps the host positioning capability into a single async lookup that
//! either yields `{latitude, longitude}` or fails with a user-displayable
//! [`LocationError`]. The capability itself sits behind the
//! [`PositionSource`] contract so hosts can wire a real backend and tests
//! can script faults.

pub mod error;
pub mod provider;
pub mod source;
pub mod types;

pub use error::LocationError;
pub use provider::current_location;
pub use source::{PositionFix, PositionSource, SystemPositionSource};
pub use types::Coordinates;
