//! Pre-flight checks run before every request

use crate::config::{Config, Protocol};
use crate::error::CredentialError;
use url::Url;

/// Borrowed view of a config that passed [`validate`]
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Credentials<'a> {
  pub username: &'a str,
  pub api_key: &'a str,
  pub base_host: &'a str,
  pub protocol: Protocol,
}

impl Credentials<'_> {
  /// `protocol://base_host` without userinfo
  pub fn base_url(&self) -> Result<Url, CredentialError> {
    parse_base_url(self.protocol, self.base_host)
  }
}

impl std::fmt::Debug for Credentials<'_> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Credentials")
      .field("username", &self.username)
      .field("api_key", &"***")
      .field("base_host", &self.base_host)
      .field("protocol", &self.protocol)
      .finish()
  }
}

/// Check that username, API key and request URL are usable.
///
/// Checks run in that order and stop at the first failure. A value made only
/// of whitespace counts as missing.
pub fn validate(config: &Config) -> Result<Credentials<'_>, CredentialError> {
  let username = present(&config.username).ok_or(CredentialError::MissingUsername)?;
  let api_key = present(&config.api_key).ok_or(CredentialError::MissingApiKey)?;

  let (base_host, protocol) = match (present(&config.base_host), config.protocol) {
    (Some(host), Some(protocol)) => (host, protocol),
    (None, _) => {
      return Err(CredentialError::InvalidRequestUrl("request URL is not set".to_string()))
    }
    (_, None) => {
      return Err(CredentialError::InvalidRequestUrl("protocol is not set".to_string()))
    }
  };

  parse_base_url(protocol, base_host)?;

  Ok(Credentials { username, api_key, base_host, protocol })
}

fn present(value: &Option<String>) -> Option<&str> {
  value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn parse_base_url(protocol: Protocol, base_host: &str) -> Result<Url, CredentialError> {
  let raw = format!("{}://{}", protocol.scheme(), base_host);
  let url = Url::parse(&raw)
    .map_err(|e| CredentialError::InvalidRequestUrl(format!("{raw}: {e}")))?;

  if url.host_str().map_or(true, str::is_empty) {
    return Err(CredentialError::InvalidRequestUrl(format!("{raw}: no host")));
  }

  Ok(url)
}
