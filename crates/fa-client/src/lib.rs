//! # fa-client
//!
//! A FlightAware FlightXML API client for Rust.
//!
//! ## Features
//!
//! - **One request shape**: form-encoded POST with HTTP Basic credentials
//! - **Any function by name**: `call("FleetArrived", params)` reaches functions
//!   the typed wrappers do not cover
//! - **Typed wrappers**: flight and airport lookups decoded into `fa-models` types
//! - **Per-call diagnostics**: URL, header lines and raw body come back with each result
//! - **Configurable**: in code, from `FLIGHTAWARE_*` environment variables or a settings file
//!
//! ## Usage
//!
//! ```rust,no_run
//! use fa_client::{FlightAwareClient, Params};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FlightAwareClient::from_env()?;
//!
//!     let info = client.call("AirportInfo", Params::new().with("airportCode", "KIAH")).await?;
//!     println!("{}", info["AirportInfoResult"]["name"]);
//!
//!     let detailed = client.request_detailed("Metar", [("airport", "KIAH")]).await?;
//!     println!("{:?}", detailed.outcome.status_line());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All methods return `Result<T, fa_core::Error>`. Credential problems are
//! reported before any network activity; transport failures, non-2xx
//! responses and malformed JSON each have their own variant.

#![warn(clippy::all)]

pub mod client;
pub mod endpoints;
pub mod params;
pub mod response;
pub mod transport;

// Re-export the main client and common types
pub use client::FlightAwareClient;
pub use fa_core::{
  ApiFunction, Config, CredentialError, Error, Protocol, Result, TransportError,
};
pub use params::Params;
pub use response::{ApiResponse, RequestOutcome};

// Re-export endpoint modules for direct access if needed
pub use endpoints::{airports::AirportEndpoints, flights::FlightEndpoints, BoardQuery};
