use crate::outcome::RequestOutcome;
use thiserror::Error;

/// The main error type for fa-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Credentials or request URL failed validation; no request was sent
  #[error("Credential error: {0}")]
  Credential(#[from] CredentialError),

  /// The request never produced an HTTP response
  #[error("Transport error: {0}")]
  Transport(#[from] TransportError),

  /// The API answered with a non-2xx status
  #[error("API error: HTTP {}", .outcome.status)]
  Api {
    /// URL, status and header lines, and body of the failed call
    outcome: RequestOutcome,
  },

  /// A 2xx response body was not valid JSON, or not the expected shape
  #[error("Malformed JSON in response: {source}")]
  Decode {
    #[source]
    source: serde_json::Error,
    /// The call whose body failed to parse
    outcome: RequestOutcome,
  },

  /// The API returned a 2xx response whose body reports an error
  #[error("FlightXML error: {0}")]
  Service(String),

  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),
}

/// Raised before any network activity
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CredentialError {
  #[error("Missing or invalid FlightAware username")]
  MissingUsername,

  #[error("Missing or invalid FlightAware API key")]
  MissingApiKey,

  #[error("Missing or invalid FlightAware request URL/protocol: {0}")]
  InvalidRequestUrl(String),
}

/// Failures below HTTP: the server never produced a response we could read
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
  #[error("Connection failed: {0}")]
  ConnectionFailed(String),

  #[error("Request timed out: {0}")]
  Timeout(String),

  #[error("TLS failure: {0}")]
  Tls(String),

  #[error("DNS resolution failed: {0}")]
  Dns(String),

  #[error("Request failed: {0}")]
  Request(String),

  #[error("Failed to read response body: {0}")]
  Body(String),
}

impl Error {
  /// Diagnostics of the call that failed, when a response was received
  pub fn outcome(&self) -> Option<&RequestOutcome> {
    match self {
      Error::Api { outcome } | Error::Decode { outcome, .. } => Some(outcome),
      _ => None,
    }
  }

  /// Status line and header lines of the failed call
  pub fn headers(&self) -> Option<&[String]> {
    self.outcome().map(|outcome| outcome.headers.as_slice())
  }

  /// Raw body of the failed call
  pub fn body(&self) -> Option<&str> {
    self.outcome().and_then(|outcome| outcome.body.as_deref())
  }
}

/// Result type alias for fa-* crates
pub type Result<T> = std::result::Result<T, Error>;
