//! FlightXML2 function names
//!
//! Any name not listed here is still callable through `ApiFunction::Custom`;
//! the variants only exist so the typed facades and callers can avoid typos.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A FlightXML2 API function, identified by its wire name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ApiFunction {
  // Flight lookups
  FlightInfo,
  FlightInfoEx,
  InFlightInfo,
  AirlineInfo,

  // Airport information
  AirportInfo,
  Metar,
  Taf,
  CountAirportOperations,

  // Airport boards
  Enroute,
  Arrived,
  Departed,
  Scheduled,

  /// Passed through to the API unchanged
  Custom(String),
}

impl ApiFunction {
  const KNOWN: [ApiFunction; 12] = [
    ApiFunction::FlightInfo,
    ApiFunction::FlightInfoEx,
    ApiFunction::InFlightInfo,
    ApiFunction::AirlineInfo,
    ApiFunction::AirportInfo,
    ApiFunction::Metar,
    ApiFunction::Taf,
    ApiFunction::CountAirportOperations,
    ApiFunction::Enroute,
    ApiFunction::Arrived,
    ApiFunction::Departed,
    ApiFunction::Scheduled,
  ];

  /// Name appended to the base URL
  pub fn as_str(&self) -> &str {
    match self {
      ApiFunction::FlightInfo => "FlightInfo",
      ApiFunction::FlightInfoEx => "FlightInfoEx",
      ApiFunction::InFlightInfo => "InFlightInfo",
      ApiFunction::AirlineInfo => "AirlineInfo",
      ApiFunction::AirportInfo => "AirportInfo",
      ApiFunction::Metar => "Metar",
      ApiFunction::Taf => "Taf",
      ApiFunction::CountAirportOperations => "CountAirportOperations",
      ApiFunction::Enroute => "Enroute",
      ApiFunction::Arrived => "Arrived",
      ApiFunction::Departed => "Departed",
      ApiFunction::Scheduled => "Scheduled",
      ApiFunction::Custom(name) => name,
    }
  }

  /// Top-level key wrapping this function's JSON result, e.g. `FlightInfoResult`
  pub fn result_key(&self) -> String {
    format!("{}Result", self.as_str())
  }

  pub fn is_custom(&self) -> bool {
    matches!(self, ApiFunction::Custom(_))
  }
}

impl fmt::Display for ApiFunction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl AsRef<str> for ApiFunction {
  fn as_ref(&self) -> &str {
    self.as_str()
  }
}

impl FromStr for ApiFunction {
  type Err = Infallible;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Ok(
      Self::KNOWN
        .into_iter()
        .find(|known| known.as_str() == s)
        .unwrap_or_else(|| ApiFunction::Custom(s.to_string())),
    )
  }
}

impl From<&str> for ApiFunction {
  fn from(name: &str) -> Self {
    match name.parse() {
      Ok(function) => function,
      Err(never) => match never {},
    }
  }
}

impl From<String> for ApiFunction {
  fn from(name: String) -> Self {
    ApiFunction::from(name.as_str())
  }
}
