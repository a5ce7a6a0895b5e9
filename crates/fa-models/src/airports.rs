/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Airport information and airport board results

use serde::{Deserialize, Serialize};

/// Result of `AirportInfo`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AirportInfoStruct {
  /// Airport name
  pub name: String,

  /// City and state/country
  pub location: String,

  pub longitude: f64,
  pub latitude: f64,

  /// Olson timezone name prefixed with `:`, e.g. `:America/New_York`
  pub timezone: String,
}

/// Result of `CountAirportOperations`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountAirportOperationsStruct {
  /// Airborne flights heading to the airport
  pub enroute: u32,

  /// Airborne flights that departed from the airport
  pub departed: u32,

  pub scheduled_departures: u32,
  pub scheduled_arrivals: u32,
}

/// Result of `Enroute`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnrouteStruct {
  pub next_offset: i64,
  pub enroute: Vec<EnrouteFlight>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnrouteFlight {
  pub ident: String,
  pub aircrafttype: String,
  pub actualdeparturetime: i64,
  pub estimatedarrivaltime: i64,
  pub filed_departuretime: i64,
  pub origin: String,
  pub destination: String,
  #[serde(rename = "originName")]
  pub origin_name: String,
  #[serde(rename = "originCity")]
  pub origin_city: String,
  #[serde(rename = "destinationName")]
  pub destination_name: String,
  #[serde(rename = "destinationCity")]
  pub destination_city: String,
}

/// Result of `Arrived`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrivalStruct {
  pub next_offset: i64,
  pub arrivals: Vec<ArrivalFlight>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrivalFlight {
  pub ident: String,
  pub aircrafttype: String,
  pub actualdeparturetime: i64,
  pub actualarrivaltime: i64,
  pub origin: String,
  pub destination: String,
  #[serde(rename = "originName")]
  pub origin_name: String,
  #[serde(rename = "originCity")]
  pub origin_city: String,
  #[serde(rename = "destinationName")]
  pub destination_name: String,
  #[serde(rename = "destinationCity")]
  pub destination_city: String,
}

/// Result of `Departed`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DepartureStruct {
  pub next_offset: i64,
  pub departures: Vec<DepartureFlight>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DepartureFlight {
  pub ident: String,
  pub aircrafttype: String,
  pub actualdeparturetime: i64,
  pub estimatedarrivaltime: i64,
  /// Zero until the flight lands
  pub actualarrivaltime: i64,
  pub origin: String,
  pub destination: String,
  #[serde(rename = "originName")]
  pub origin_name: String,
  #[serde(rename = "originCity")]
  pub origin_city: String,
  #[serde(rename = "destinationName")]
  pub destination_name: String,
  #[serde(rename = "destinationCity")]
  pub destination_city: String,
}

/// Result of `Scheduled`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduledStruct {
  pub next_offset: i64,
  pub scheduled: Vec<ScheduledFlight>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduledFlight {
  pub ident: String,
  pub aircrafttype: String,
  pub filed_departuretime: i64,
  pub estimatedarrivaltime: i64,
  pub origin: String,
  pub destination: String,
  #[serde(rename = "originName")]
  pub origin_name: String,
  #[serde(rename = "originCity")]
  pub origin_city: String,
  #[serde(rename = "destinationName")]
  pub destination_name: String,
  #[serde(rename = "destinationCity")]
  pub destination_city: String,
}
