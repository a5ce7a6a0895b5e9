//! Configuration management for the FlightAware client
//!
//! A `Config` may be partially populated. Nothing here checks that the
//! credentials are usable; that happens in [`crate::credentials::validate`]
//! right before each request.

use crate::error::{Error, Result};
use dotenvy::dotenv;
use ini::{Ini, ParseOption};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

/// URL scheme used to reach the API
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
  #[default]
  Http,
  Https,
}

impl Protocol {
  pub fn scheme(&self) -> &'static str {
    match self {
      Protocol::Http => "http",
      Protocol::Https => "https",
    }
  }
}

impl fmt::Display for Protocol {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.scheme())
  }
}

impl FromStr for Protocol {
  type Err = Error;

  /// Accepts a bare scheme or the `scheme://` prefix form
  fn from_str(s: &str) -> Result<Self> {
    let scheme = s.trim();
    let scheme = scheme.strip_suffix("://").unwrap_or(scheme);
    match scheme.to_ascii_lowercase().as_str() {
      "http" => Ok(Protocol::Http),
      "https" => Ok(Protocol::Https),
      other => Err(Error::Config(format!("Unsupported protocol: {other}"))),
    }
  }
}

/// Connection settings for the FlightXML API
#[derive(Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Config {
  /// FlightAware account name
  pub username: Option<String>,

  /// FlightXML API key
  pub api_key: Option<String>,

  /// Host and path prefix, e.g. `flightxml.flightaware.com/json/FlightXML2/`
  pub base_host: Option<String>,

  /// Scheme placed in front of `base_host`
  pub protocol: Option<Protocol>,

  /// Request timeout in seconds
  pub timeout_secs: u64,
}

impl Default for Config {
  fn default() -> Self {
    Config {
      username: None,
      api_key: None,
      base_host: None,
      protocol: None,
      timeout_secs: crate::DEFAULT_TIMEOUT_SECS,
    }
  }
}

impl Config {
  /// Create a fully populated config with the default timeout
  pub fn new(
    username: impl Into<String>,
    api_key: impl Into<String>,
    base_host: impl Into<String>,
    protocol: Protocol,
  ) -> Self {
    Config {
      username: Some(username.into()),
      api_key: Some(api_key.into()),
      base_host: Some(base_host.into()),
      protocol: Some(protocol),
      timeout_secs: crate::DEFAULT_TIMEOUT_SECS,
    }
  }

  /// Load configuration from environment variables
  ///
  /// Reads `FLIGHTAWARE_USERNAME`, `FLIGHTAWARE_API_KEY`, `FLIGHTAWARE_BASE_URL`,
  /// `FLIGHTAWARE_PROTOCOL` and `FLIGHTAWARE_TIMEOUT_SECS`, after loading a
  /// `.env` file if one exists. Missing credentials are left unset.
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    Self::from_settings(
      |key| std::env::var(key).ok(),
      SettingKeys {
        username: "FLIGHTAWARE_USERNAME",
        api_key: "FLIGHTAWARE_API_KEY",
        base_host: "FLIGHTAWARE_BASE_URL",
        protocol: "FLIGHTAWARE_PROTOCOL",
        timeout: "FLIGHTAWARE_TIMEOUT_SECS",
      },
    )
  }

  /// Load configuration from an INI settings file such as `flightaware.config.ini`
  ///
  /// Recognised keys are `username`, `apiKey`, `requestURL`,
  /// `requestProtocol` and `timeout`, in any section. `;` and `#` start
  /// comments, values may be quoted, and `$` or `\` in a value are kept as is.
  pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    if !path.is_file() {
      return Err(Error::Config(format!("Configuration file missing: {}", path.display())));
    }

    let options = ParseOption { enabled_quote: true, enabled_escape: false, ..ParseOption::default() };
    let ini = Ini::load_from_file_opt(path, options)
      .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))?;

    let mut settings = HashMap::new();
    for (_section, properties) in ini.iter() {
      for (key, value) in properties.iter() {
        settings.insert(key.to_string(), value.to_string());
      }
    }

    Self::from_settings(
      |key| settings.get(key).cloned(),
      SettingKeys {
        username: "username",
        api_key: "apiKey",
        base_host: "requestURL",
        protocol: "requestProtocol",
        timeout: "timeout",
      },
    )
  }

  fn from_settings<F>(get: F, keys: SettingKeys) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let protocol = match get(keys.protocol) {
      Some(value) => value.parse()?,
      None => Protocol::default(),
    };

    let timeout_secs = match get(keys.timeout) {
      Some(value) => value
        .trim()
        .parse()
        .map_err(|_| Error::Config(format!("Invalid {}: {}", keys.timeout, value)))?,
      None => crate::DEFAULT_TIMEOUT_SECS,
    };

    Ok(Config {
      username: get(keys.username),
      api_key: get(keys.api_key),
      base_host: Some(
        get(keys.base_host).unwrap_or_else(|| crate::FLIGHTXML_BASE_HOST.to_string()),
      ),
      protocol: Some(protocol),
      timeout_secs,
    })
  }

  /// Request timeout as a `Duration`
  pub fn request_timeout(&self) -> Duration {
    Duration::from_secs(self.timeout_secs)
  }
}

impl fmt::Debug for Config {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Config")
      .field("username", &self.username)
      .field("api_key", &self.api_key.as_ref().map(|_| "***"))
      .field("base_host", &self.base_host)
      .field("protocol", &self.protocol)
      .field("timeout_secs", &self.timeout_secs)
      .finish()
  }
}

/// Names under which each setting is looked up
struct SettingKeys {
  username: &'static str,
  api_key: &'static str,
  base_host: &'static str,
  protocol: &'static str,
  timeout: &'static str,
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;

  fn env_keys() -> SettingKeys {
    SettingKeys {
      username: "USER",
      api_key: "KEY",
      base_host: "HOST",
      protocol: "PROTO",
      timeout: "TIMEOUT",
    }
  }

  #[test]
  fn test_protocol_parsing() {
    assert_eq!("http".parse::<Protocol>().unwrap(), Protocol::Http);
    assert_eq!("https://".parse::<Protocol>().unwrap(), Protocol::Https);
    assert_eq!(" HTTPS ".parse::<Protocol>().unwrap(), Protocol::Https);
    assert!(matches!("ftp".parse::<Protocol>(), Err(Error::Config(_))));
    assert_eq!(Protocol::Https.to_string(), "https");
  }

  #[test]
  fn test_default_config_is_unset() {
    let config = Config::default();
    assert!(config.username.is_none());
    assert!(config.api_key.is_none());
    assert!(config.base_host.is_none());
    assert!(config.protocol.is_none());
    assert_eq!(config.request_timeout(), Duration::from_secs(30));
  }

  #[test]
  fn test_settings_defaults() {
    let mut vars = HashMap::new();
    vars.insert("USER", "flyer".to_string());

    let config = Config::from_settings(|k| vars.get(k).cloned(), env_keys()).unwrap();
    assert_eq!(config.username.as_deref(), Some("flyer"));
    assert!(config.api_key.is_none());
    assert_eq!(config.base_host.as_deref(), Some(crate::FLIGHTXML_BASE_HOST));
    assert_eq!(config.protocol, Some(Protocol::Http));
    assert_eq!(config.timeout_secs, 30);
  }

  #[test]
  fn test_settings_invalid_timeout() {
    let mut vars = HashMap::new();
    vars.insert("TIMEOUT", "soon".to_string());

    let result = Config::from_settings(|k| vars.get(k).cloned(), env_keys());
    assert!(matches!(result, Err(Error::Config(_))));
  }

  #[test]
  fn test_config_from_file() {
    let path = std::env::temp_dir().join(format!("fa-core-config-{}.ini", std::process::id()));
    fs::write(
      &path,
      "username=flyer\napiKey=s3cr3t\nrequestURL=example.test/json/FlightXML2/\nrequestProtocol=https://\ntimeout=5\n",
    )
    .unwrap();

    let config = Config::from_file(&path).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(config.username.as_deref(), Some("flyer"));
    assert_eq!(config.api_key.as_deref(), Some("s3cr3t"));
    assert_eq!(config.base_host.as_deref(), Some("example.test/json/FlightXML2/"));
    assert_eq!(config.protocol, Some(Protocol::Https));
    assert_eq!(config.timeout_secs, 5);
  }

  fn write_settings(name: &str, contents: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("fa-core-{}-{}.ini", name, std::process::id()));
    fs::write(&path, contents).unwrap();
    path
  }

  #[test]
  fn test_config_file_keeps_dollar_literal() {
    let path = write_settings("dollar", "username=flyer\napiKey=ab$cdef12\nrequestURL=example.test/\n");
    let config = Config::from_file(&path).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(config.api_key.as_deref(), Some("ab$cdef12"));
  }

  #[test]
  fn test_config_file_ini_syntax() {
    let path = write_settings(
      "ini",
      "; FlightAware settings\n[flightaware]\nusername = \"flyer\"\napiKey = \"s3$cr3t\"\n# host\nrequestURL = flightxml.flightaware.com/json/FlightXML2/\nrequestProtocol = \"https://\"\n",
    );
    let config = Config::from_file(&path).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(config.username.as_deref(), Some("flyer"));
    assert_eq!(config.api_key.as_deref(), Some("s3$cr3t"));
    assert_eq!(config.base_host.as_deref(), Some("flightxml.flightaware.com/json/FlightXML2/"));
    assert_eq!(config.protocol, Some(Protocol::Https));
    assert_eq!(config.timeout_secs, 30);
  }

  #[test]
  fn test_config_file_missing() {
    let result = Config::from_file("/nonexistent/flightaware.config.ini");
    assert!(matches!(result, Err(Error::Config(msg)) if msg.contains("missing")));
  }

  #[test]
  fn test_debug_hides_api_key() {
    let config = Config::new("flyer", "s3cr3t", "example.test/", Protocol::Https);
    let printed = format!("{:?}", config);
    assert!(!printed.contains("s3cr3t"));
    assert!(printed.contains("flyer"));
  }
}
