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

//! Flight lookup results
//!
//! Times are UNIX epoch seconds as sent by FlightXML2; zero means "not yet known".

use serde::{Deserialize, Serialize};

/// Result of `FlightInfo`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightInfoResult {
  /// Offset to pass to get the next page, `-1` when there is none
  pub next_offset: i64,

  /// Matching flights, most recent first
  pub flights: Vec<FlightInfoStruct>,
}

/// One flight as returned by `FlightInfo`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightInfoStruct {
  /// Flight ident, e.g. `UAL1`
  pub ident: String,

  /// ICAO aircraft type code
  pub aircrafttype: String,

  /// Filed en-route time as `HH:MM:SS`
  pub filed_ete: String,

  /// When the flight plan was filed
  pub filed_time: i64,

  pub filed_departuretime: i64,
  pub filed_airspeed_kts: i64,
  pub filed_airspeed_mach: String,

  /// Filed altitude in hundreds of feet
  pub filed_altitude: i64,

  pub route: String,
  pub actualdeparturetime: i64,
  pub estimatedarrivaltime: i64,
  pub actualarrivaltime: i64,

  /// Non-empty when the flight was diverted
  pub diverted: String,

  /// Origin airport ICAO code
  pub origin: String,

  /// Destination airport ICAO code
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

impl FlightInfoStruct {
  pub fn has_departed(&self) -> bool {
    self.actualdeparturetime > 0
  }

  pub fn has_arrived(&self) -> bool {
    self.actualarrivaltime > 0
  }

  pub fn is_diverted(&self) -> bool {
    !self.diverted.is_empty()
  }
}

/// Result of `FlightInfoEx`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightInfoExResult {
  pub next_offset: i64,
  pub flights: Vec<FlightExStruct>,
}

/// `FlightInfoStruct` plus the FlightAware flight id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightExStruct {
  /// Unique FlightAware id for this particular flight
  #[serde(rename = "faFlightID")]
  pub fa_flight_id: String,

  #[serde(flatten)]
  pub flight: FlightInfoStruct,
}

/// Result of `InFlightInfo`: the latest position of an airborne flight
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InFlightAircraftStruct {
  #[serde(rename = "faFlightID")]
  pub fa_flight_id: String,

  pub ident: String,
  pub prefix: String,

  /// Aircraft type
  #[serde(rename = "type")]
  pub aircraft_type: String,

  pub suffix: String,
  pub origin: String,
  pub destination: String,

  /// `ok` while tracking, otherwise the reason tracking stopped
  pub timeout: String,

  /// Time of the last position report
  pub timestamp: i64,

  pub departure_time: i64,
  pub first_position_time: i64,
  pub arrival_time: i64,
  pub longitude: f64,
  pub latitude: f64,
  pub low_longitude: f64,
  pub low_latitude: f64,
  pub high_longitude: f64,
  pub high_latitude: f64,

  /// Knots
  pub groundspeed: i64,

  /// Hundreds of feet
  pub altitude: i64,

  /// Degrees
  pub heading: i64,

  pub altitude_status: String,
  pub update_type: String,
  pub altitude_change: String,

  /// Space separated lat/lon pairs of the filed route
  pub waypoints: String,
}

/// Result of `AirlineInfo`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AirlineInfoStruct {
  pub name: String,
  pub shortname: String,
  pub callsign: String,
  pub location: String,
  pub country: String,
  pub url: String,
  pub phone: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_flight_info_deserialization() {
    let json = r#"{
      "next_offset": 1,
      "flights": [{
        "ident": "UAL1",
        "aircrafttype": "B789",
        "filed_ete": "05:05:00",
        "filed_time": 1700000000,
        "filed_departuretime": 1700003600,
        "filed_airspeed_kts": 491,
        "filed_airspeed_mach": "",
        "filed_altitude": 0,
        "route": "",
        "actualdeparturetime": 1700003700,
        "estimatedarrivaltime": 1700021900,
        "actualarrivaltime": 0,
        "diverted": "",
        "origin": "KSFO",
        "destination": "KEWR",
        "originName": "San Francisco Intl",
        "originCity": "San Francisco, CA",
        "destinationName": "Newark Liberty Intl",
        "destinationCity": "Newark, NJ",
        "unexpected": true
      }]
    }"#;

    let result: FlightInfoResult = serde_json::from_str(json).unwrap();
    assert_eq!(result.next_offset, 1);
    let flight = &result.flights[0];
    assert_eq!(flight.ident, "UAL1");
    assert_eq!(flight.origin_city, "San Francisco, CA");
    assert!(flight.has_departed());
    assert!(!flight.has_arrived());
    assert!(!flight.is_diverted());
  }

  #[test]
  fn test_flight_info_ex_flattens_flight_fields() {
    let json = r#"{"next_offset": -1, "flights": [{"faFlightID": "UAL1-1700000000-airline-0001", "ident": "UAL1", "origin": "KSFO"}]}"#;

    let result: FlightInfoExResult = serde_json::from_str(json).unwrap();
    assert_eq!(result.flights[0].fa_flight_id, "UAL1-1700000000-airline-0001");
    assert_eq!(result.flights[0].flight.origin, "KSFO");
    assert_eq!(result.flights[0].flight.destination, "");
  }

  #[test]
  fn test_in_flight_info_field_names() {
    let json = r#"{"faFlightID": "x", "ident": "DAL47", "type": "A321", "groundspeed": 450, "altitude": 350, "lowLongitude": -122.5, "altitudeStatus": "-", "updateType": "TA"}"#;

    let aircraft: InFlightAircraftStruct = serde_json::from_str(json).unwrap();
    assert_eq!(aircraft.aircraft_type, "A321");
    assert_eq!(aircraft.groundspeed, 450);
    assert_eq!(aircraft.low_longitude, -122.5);
    assert_eq!(aircraft.update_type, "TA");
  }
}
