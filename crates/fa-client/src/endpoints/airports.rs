//! Airport information and airport board endpoints

use super::BoardQuery;
use crate::client::FlightAwareClient;
use fa_core::{ApiFunction, Result};
use fa_models::airports::*;
use tracing::instrument;

/// Airport information and board endpoints
#[derive(Debug, Clone, Copy)]
pub struct AirportEndpoints<'a> {
  client: &'a FlightAwareClient,
}

impl<'a> AirportEndpoints<'a> {
  pub fn new(client: &'a FlightAwareClient) -> Self {
    Self { client }
  }

  /// Name, location and timezone of an airport
  ///
  /// # Arguments
  ///
  /// * `airport_code` - ICAO or IATA code, e.g. `KIAH`
  #[instrument(skip(self))]
  pub async fn airport_info(&self, airport_code: &str) -> Result<AirportInfoStruct> {
    self.client.request_typed(ApiFunction::AirportInfo, [("airportCode", airport_code)]).await
  }

  /// Latest raw METAR weather report
  #[instrument(skip(self))]
  pub async fn metar(&self, airport: &str) -> Result<String> {
    self.client.request_typed(ApiFunction::Metar, [("airport", airport)]).await
  }

  /// Latest raw terminal area forecast
  #[instrument(skip(self))]
  pub async fn taf(&self, airport: &str) -> Result<String> {
    self.client.request_typed(ApiFunction::Taf, [("airport", airport)]).await
  }

  #[instrument(skip(self))]
  pub async fn count_airport_operations(
    &self,
    airport: &str,
  ) -> Result<CountAirportOperationsStruct> {
    self.client.request_typed(ApiFunction::CountAirportOperations, [("airport", airport)]).await
  }

  /// Flights en route to `airport`
  #[instrument(skip(self))]
  pub async fn enroute(&self, airport: &str, query: &BoardQuery) -> Result<EnrouteStruct> {
    self.client.request_typed(ApiFunction::Enroute, query.to_params(airport)).await
  }

  /// Flights that recently arrived at `airport`
  #[instrument(skip(self))]
  pub async fn arrived(&self, airport: &str, query: &BoardQuery) -> Result<ArrivalStruct> {
    self.client.request_typed(ApiFunction::Arrived, query.to_params(airport)).await
  }

  /// Flights that recently departed `airport`
  #[instrument(skip(self))]
  pub async fn departed(&self, airport: &str, query: &BoardQuery) -> Result<DepartureStruct> {
    self.client.request_typed(ApiFunction::Departed, query.to_params(airport)).await
  }

  /// Flights scheduled to depart `airport` that have not left yet
  #[instrument(skip(self))]
  pub async fn scheduled(&self, airport: &str, query: &BoardQuery) -> Result<ScheduledStruct> {
    self.client.request_typed(ApiFunction::Scheduled, query.to_params(airport)).await
  }
}
