//! # fa-models
//!
//! Data models for FlightAware FlightXML2 API responses.
//!
//! Each FlightXML2 function wraps its payload in a single-key object named
//! after the function (`{"FlightInfoResult": {...}}`). The types here model
//! the payload only; unwrapping the envelope is left to the client.
//!
//! ## Usage
//!
//! ```ignore
//! use fa_models::flights::FlightInfoResult;
//!
//! let envelope: serde_json::Value = serde_json::from_str(&response_json)?;
//! let info: FlightInfoResult = serde_json::from_value(envelope["FlightInfoResult"].clone())?;
//! ```
//!
//! Fields missing from a response fall back to their defaults, and fields
//! the models do not know about are ignored.

#![warn(clippy::all)]

pub mod airports;
pub mod flights;

pub use airports::*;
pub use flights::*;
