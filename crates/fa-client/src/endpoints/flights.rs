//! Flight lookup endpoints
//!
//! - `FlightInfo` / `FlightInfoEx`: recent and scheduled flights for an ident
//! - `InFlightInfo`: latest position of an airborne flight
//! - `AirlineInfo`: operator details for an airline code

use crate::client::FlightAwareClient;
use crate::params::Params;
use fa_core::{ApiFunction, Result};
use fa_models::flights::*;
use tracing::instrument;

/// Flight lookup endpoints
#[derive(Debug, Clone, Copy)]
pub struct FlightEndpoints<'a> {
  client: &'a FlightAwareClient,
}

impl<'a> FlightEndpoints<'a> {
  pub fn new(client: &'a FlightAwareClient) -> Self {
    Self { client }
  }

  /// Flights matching an ident (`UAL1`) or tail number
  ///
  /// # Arguments
  ///
  /// * `ident` - Flight ident or registration
  /// * `how_many` - Maximum number of flights to return
  #[instrument(skip(self))]
  pub async fn flight_info(&self, ident: &str, how_many: u32) -> Result<FlightInfoResult> {
    let params = Params::new().with("ident", ident).with("howMany", how_many);
    self.client.request_typed(ApiFunction::FlightInfo, params).await
  }

  /// `flight_info` with FlightAware flight ids and paging
  #[instrument(skip(self))]
  pub async fn flight_info_ex(
    &self,
    ident: &str,
    how_many: u32,
    offset: u32,
  ) -> Result<FlightInfoExResult> {
    let params =
      Params::new().with("ident", ident).with("howMany", how_many).with("offset", offset);
    self.client.request_typed(ApiFunction::FlightInfoEx, params).await
  }

  #[instrument(skip(self))]
  pub async fn in_flight_info(&self, ident: &str) -> Result<InFlightAircraftStruct> {
    self.client.request_typed(ApiFunction::InFlightInfo, [("ident", ident)]).await
  }

  #[instrument(skip(self))]
  pub async fn airline_info(&self, airline_code: &str) -> Result<AirlineInfoStruct> {
    self.client.request_typed(ApiFunction::AirlineInfo, [("airlineCode", airline_code)]).await
  }
}
