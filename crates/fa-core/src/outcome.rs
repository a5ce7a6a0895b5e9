//! What was sent and what came back for one request

use std::fmt;
use url::Url;

/// Everything captured about one request, whatever its outcome
#[derive(Clone, PartialEq, Eq)]
pub struct RequestOutcome {
  /// Requested URL, including the `user:key@` userinfo
  pub url: String,

  /// Status code of the final status line, `0` if none was seen
  pub status: u16,

  /// Status line(s) followed by `name: value` header lines
  pub headers: Vec<String>,

  /// Raw response body, if one was read
  pub body: Option<String>,

  /// Whether `status` is in the 2xx range
  pub succeeded: bool,
}

impl RequestOutcome {
  /// Build an outcome from raw response lines.
  ///
  /// The status is taken from the last line that parses as a status line, so
  /// a sequence of redirect responses resolves to the final one.
  pub fn from_raw(url: impl Into<String>, headers: Vec<String>, body: Option<String>) -> Self {
    let status = headers.iter().rev().find_map(|line| status_code_of(line)).unwrap_or(0);
    Self { url: url.into(), status, headers, body, succeeded: is_success(status) }
  }

  /// The status line, when the transport reported one
  pub fn status_line(&self) -> Option<&str> {
    self.headers.iter().rev().find(|line| status_code_of(line).is_some()).map(String::as_str)
  }

  /// `url` with the API key replaced by `***`, safe for logs
  pub fn redacted_url(&self) -> String {
    redact(&self.url)
  }
}

impl fmt::Debug for RequestOutcome {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("RequestOutcome")
      .field("url", &self.redacted_url())
      .field("status", &self.status)
      .field("headers", &self.headers)
      .field("body_len", &self.body.as_ref().map(String::len))
      .field("succeeded", &self.succeeded)
      .finish()
  }
}

/// Numeric code of an HTTP status line such as `HTTP/1.1 200 OK`
pub fn status_code_of(line: &str) -> Option<u16> {
  let mut parts = line.split_whitespace();
  let version = parts.next()?;
  if !version.starts_with("HTTP/") {
    return None;
  }
  let code = parts.next()?;
  if code.len() != 3 {
    return None;
  }
  code.parse().ok()
}

pub fn is_success(status: u16) -> bool {
  (200..300).contains(&status)
}

/// `url` with any password replaced by `***`
pub fn redact(url: &str) -> String {
  match Url::parse(url) {
    Ok(mut parsed) if parsed.password().is_some() => {
      if parsed.set_password(Some("***")).is_ok() {
        parsed.to_string()
      } else {
        url.to_string()
      }
    }
    _ => url.to_string(),
  }
}
