//! HTTP inbound adapter exposing the location endpoint.

pub mod error;
pub mod location;
pub mod state;
#[cfg(test)]
pub mod test_utils;

pub use location::{LOCATION_PATH, ResponseEnvelope, configure, submit_location};
pub use state::HttpState;
