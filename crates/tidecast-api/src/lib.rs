//! HTTP service wrappers for the Tidecast fishing forecast backend.
//!
//! Every operation issues exactly one request and returns an
//! [`ApiOutcome`] value instead of propagating errors: callers
//! pattern-match on success, absence of data, a server-reported fault, or
//! a transport fault. Nothing in this crate retries, caches, or times out
//! beyond the transport defaults.

pub mod client;
pub mod error;
pub mod outcome;
pub mod types;

pub use client::ForecastClient;
pub use error::TransportError;
pub use outcome::ApiOutcome;
pub use types::{Detection, FishingSpot, ImageUpload, Prediction, SeaConditions, TideCycle};
