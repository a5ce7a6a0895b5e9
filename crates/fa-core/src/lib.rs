pub mod config;
pub mod credentials;
pub mod error;
pub mod function;
pub mod outcome;

pub use config::{Config, Protocol};
pub use credentials::{validate, Credentials};
pub use error::{CredentialError, Error, Result, TransportError};
pub use function::ApiFunction;
pub use outcome::RequestOutcome;

/// Host and path of the FlightXML2 JSON API, without the scheme.
///
/// Function names are appended directly, so the trailing slash matters.
pub const FLIGHTXML_BASE_HOST: &str = "flightxml.flightaware.com/json/FlightXML2/";

/// Request timeout used when none is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default settings file read by `Config::from_file` callers
pub const DEFAULT_CONFIG_FILE: &str = "flightaware.config.ini";
