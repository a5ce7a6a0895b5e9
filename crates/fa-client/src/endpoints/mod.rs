//! Typed wrappers over [`crate::FlightAwareClient::request_typed`]
//!
//! These are conveniences only: each method builds the parameter list for one
//! FlightXML2 function and names the model its result decodes into. Anything
//! not covered here is reachable through [`crate::FlightAwareClient::call`].

pub mod airports;
pub mod flights;

use crate::params::Params;

/// Paging and filtering shared by the airport board functions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardQuery {
  /// Maximum rows to return
  pub how_many: u32,

  /// `ga`, `airline` or empty for all flights
  pub filter: Option<String>,

  /// Rows to skip, from a previous result's `next_offset`
  pub offset: u32,
}

impl Default for BoardQuery {
  fn default() -> Self {
    Self { how_many: 15, filter: None, offset: 0 }
  }
}

impl BoardQuery {
  pub fn new(how_many: u32) -> Self {
    Self { how_many, ..Self::default() }
  }

  pub fn filter(mut self, filter: impl Into<String>) -> Self {
    self.filter = Some(filter.into());
    self
  }

  pub fn offset(mut self, offset: u32) -> Self {
    self.offset = offset;
    self
  }

  pub(crate) fn to_params(&self, airport: &str) -> Params {
    let mut params = Params::new().with("airport", airport).with("howMany", self.how_many);
    params.push_opt("filter", self.filter.as_deref()).push("offset", self.offset);
    params
  }
}
