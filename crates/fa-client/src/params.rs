//! Ordered request parameters and their form encoding

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fmt::Display;

/// Everything except RFC 3986 unreserved characters is escaped, so a space
/// becomes `%20` rather than `+`.
const FORM_VALUE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

/// Parameters for one API call, kept in insertion order
///
/// Keys are unique: setting an existing key replaces its value but keeps
/// its original position.
///
/// ```
/// use fa_client::Params;
///
/// let params = Params::new().with("ident", "UAL1").with("howMany", 5);
/// assert_eq!(params.encode(), "ident=UAL1&howMany=5");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
  pairs: Vec<(String, String)>,
}

impl Params {
  pub fn new() -> Self {
    Self::default()
  }

  /// Builder-style [`Params::push`]
  pub fn with(mut self, key: impl Into<String>, value: impl Display) -> Self {
    self.push(key, value);
    self
  }

  /// Set `key`, replacing any earlier value in place
  pub fn push(&mut self, key: impl Into<String>, value: impl Display) -> &mut Self {
    let key = key.into();
    let value = value.to_string();
    match self.pairs.iter_mut().find(|(k, _)| *k == key) {
      Some(slot) => slot.1 = value,
      None => self.pairs.push((key, value)),
    }
    self
  }

  /// Set `key` only when a value is given
  pub fn push_opt<V: Display>(&mut self, key: impl Into<String>, value: Option<V>) -> &mut Self {
    if let Some(value) = value {
      self.push(key, value);
    }
    self
  }

  pub fn get(&self, key: &str) -> Option<&str> {
    self.pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
  }

  pub fn len(&self) -> usize {
    self.pairs.len()
  }

  pub fn is_empty(&self) -> bool {
    self.pairs.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
    self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
  }

  /// `application/x-www-form-urlencoded` body, pairs joined by `&` in insertion order
  pub fn encode(&self) -> String {
    self
      .pairs
      .iter()
      .map(|(k, v)| {
        format!("{}={}", utf8_percent_encode(k, FORM_VALUE), utf8_percent_encode(v, FORM_VALUE))
      })
      .collect::<Vec<_>>()
      .join("&")
  }
}

impl<K: Into<String>, V: Display> FromIterator<(K, V)> for Params {
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    let mut params = Params::new();
    for (key, value) in iter {
      params.push(key, value);
    }
    params
  }
}

impl<K: Into<String>, V: Display, const N: usize> From<[(K, V); N]> for Params {
  fn from(pairs: [(K, V); N]) -> Self {
    pairs.into_iter().collect()
  }
}

impl<K: Into<String>, V: Display> From<Vec<(K, V)>> for Params {
  fn from(pairs: Vec<(K, V)>) -> Self {
    pairs.into_iter().collect()
  }
}

impl IntoIterator for Params {
  type Item = (String, String);
  type IntoIter = std::vec::IntoIter<(String, String)>;

  fn into_iter(self) -> Self::IntoIter {
    self.pairs.into_iter()
  }
}
