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

//! Flight Tracker Example
//!
//! Looks up an airport and the recent flights of one ident, then calls a
//! function the typed wrappers do not cover by name.
//!
//! Settings come from `flightaware.config.ini` in the working directory when
//! present, otherwise from `FLIGHTAWARE_*` environment variables (or `.env`).
//!
//! ```sh
//! FLIGHTAWARE_USERNAME=me FLIGHTAWARE_API_KEY=... \
//!   cargo run -p fa-client --example flight_tracker -- UAL1 KIAH
//! ```

use fa_client::{BoardQuery, Error, FlightAwareClient, Params};
use fa_core::DEFAULT_CONFIG_FILE;
use std::path::Path;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let mut args = std::env::args().skip(1);
  let ident = args.next().unwrap_or_else(|| "UAL1".to_string());
  let airport = args.next().unwrap_or_else(|| "KIAH".to_string());

  let client = if Path::new(DEFAULT_CONFIG_FILE).is_file() {
    info!("Loading settings from {}", DEFAULT_CONFIG_FILE);
    FlightAwareClient::from_config_file(DEFAULT_CONFIG_FILE)?
  } else {
    FlightAwareClient::from_env()?
  };

  let airport_info = client.airports().airport_info(&airport).await?;
  println!("{} - {} ({})", airport, airport_info.name, airport_info.location);

  let arrivals = client.airports().arrived(&airport, &BoardQuery::new(5)).await?;
  for flight in &arrivals.arrivals {
    println!("  arrived {:<8} from {}", flight.ident, flight.origin);
  }

  match client.flights().flight_info(&ident, 3).await {
    Ok(result) => {
      for flight in &result.flights {
        let state = match (flight.has_departed(), flight.has_arrived()) {
          (_, true) => "landed",
          (true, false) => "airborne",
          _ => "scheduled",
        };
        println!("{} {} -> {} [{}]", flight.ident, flight.origin, flight.destination, state);
      }
    }
    Err(Error::Service(message)) => error!("FlightXML rejected {}: {}", ident, message),
    Err(e) => return Err(e),
  }

  let response = client
    .request_detailed("CountAirportOperations", Params::new().with("airport", &airport))
    .await?;
  info!("{:?}", response.outcome.status_line());
  println!("{}", serde_json::to_string_pretty(&response.data).unwrap_or_default());

  Ok(())
}
