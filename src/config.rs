//! File-friendly configuration, deserializable from any serde format.
//!
//! ```json
//! {
//!   "origin": "https://app.example",
//!   "allowMethods": ["GET", "POST"],
//!   "allowHeaders": "X-Requested-With",
//!   "exposeHeaders": ["content-length", "x-request-id"],
//!   "maxAge": 3600,
//!   "credentials": true
//! }
//! ```
//!
//! A missing `allowMethods` keeps the default list while `null` disables the header.
//! Keys this struct does not know are ignored, so a shared settings file may carry them.

use crate::max_age::MaxAge;
use crate::options::CorsOptions;
use crate::origin::Origin;
use crate::token_list::TokenList;
use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorsConfig {
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default, deserialize_with = "explicit_null")]
    pub allow_methods: Option<Option<ListValue>>,
    #[serde(default)]
    pub expose_headers: Option<ListValue>,
    #[serde(default)]
    pub allow_headers: Option<ListValue>,
    #[serde(default)]
    pub max_age: Option<MaxAgeValue>,
    #[serde(default)]
    pub credentials: bool,
}

/// A header option written either as one string or as a list of tokens.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ListValue {
    One(String),
    Many(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum MaxAgeValue {
    Seconds(u64),
    Text(String),
}

impl From<ListValue> for TokenList {
    fn from(value: ListValue) -> Self {
        match value {
            ListValue::One(value) => TokenList::Joined(value),
            ListValue::Many(values) => TokenList::List(values),
        }
    }
}

impl From<MaxAgeValue> for MaxAge {
    fn from(value: MaxAgeValue) -> Self {
        match value {
            MaxAgeValue::Seconds(seconds) => MaxAge::seconds(seconds),
            MaxAgeValue::Text(text) => MaxAge::from(text),
        }
    }
}

impl CorsConfig {
    pub fn into_options(self) -> CorsOptions {
        let defaults = CorsOptions::default();

        CorsOptions {
            origin: self.origin.map(Origin::Exact).unwrap_or(defaults.origin),
            allow_methods: match self.allow_methods {
                None => defaults.allow_methods,
                Some(value) => value.map(Into::into),
            },
            expose_headers: self.expose_headers.map(Into::into),
            allow_headers: self.allow_headers.map(Into::into),
            max_age: self.max_age.map(Into::into),
            credentials: self.credentials,
        }
    }
}

impl From<CorsConfig> for CorsOptions {
    fn from(config: CorsConfig) -> Self {
        config.into_options()
    }
}

/// Distinguishes an explicit `null` (`Some(None)`) from a missing key (`None`).
fn explicit_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
