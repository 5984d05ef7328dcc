// --- File: crates/twilio_rest/src/page.rs ---
//! One fetched page of a collection.
//!
//! Twilio answers list requests in two shapes. Newer APIs wrap paging data in a `meta`
//! object that also names the records key:
//!
//! ```json
//! { "meta": { "key": "sims", "next_page_url": "https://...", ... }, "sims": [ ... ] }
//! ```
//!
//! The 2010-04-01 API puts paging fields next to the records and only gives a relative
//! `next_page_uri`.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::RestError;

/// Paging fields of the 2010-04-01 API; any other array-valued key holds the records.
const V2010_META_KEYS: &[&str] = &[
    "end",
    "first_page_uri",
    "last_page_uri",
    "next_page_uri",
    "num_pages",
    "page",
    "page_size",
    "previous_page_uri",
    "start",
    "total",
    "uri",
];

/// Paging metadata normalized to absolute URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PageMeta {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub page_size: Option<u32>,
    #[serde(default)]
    pub first_page_url: Option<String>,
    #[serde(default)]
    pub previous_page_url: Option<String>,
    #[serde(default)]
    pub next_page_url: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub key: Option<String>,
}

/// Records of one page plus the link to the next one.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub records: Vec<T>,
    pub meta: PageMeta,
}

impl<T: DeserializeOwned> Page<T> {
    /// Parses a list response. `api_base` (`https://api.twilio.com`) turns the
    /// 2010-04-01 API's relative URIs into absolute URLs.
    pub fn from_payload(payload: Value, api_base: &str) -> Result<Self, RestError> {
        let mut object = match payload {
            Value::Object(object) => object,
            other => {
                return Err(RestError::Parse(format!(
                    "expected a JSON object for a page, got {}",
                    other
                )))
            }
        };

        let meta = match object.remove("meta") {
            Some(meta @ Value::Object(_)) => serde_json::from_value::<PageMeta>(meta)?,
            _ => v2010_meta(&object, api_base),
        };

        let key = match &meta.key {
            Some(key) => key.clone(),
            None => records_key(&object)?,
        };

        let records = match object.remove(&key) {
            Some(records @ Value::Array(_)) => serde_json::from_value::<Vec<T>>(records)?,
            _ => {
                return Err(RestError::Parse(format!(
                    "page has no record array under '{}'",
                    key
                )))
            }
        };

        Ok(Page {
            records,
            meta: PageMeta {
                key: Some(key),
                ..meta
            },
        })
    }
}

impl<T> Page<T> {
    pub fn next_page_url(&self) -> Option<&str> {
        self.meta.next_page_url.as_deref().filter(|url| !url.is_empty())
    }

    pub fn has_next_page(&self) -> bool {
        self.next_page_url().is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

fn v2010_meta(object: &Map<String, Value>, api_base: &str) -> PageMeta {
    let absolute = |field: &str| {
        object
            .get(field)
            .and_then(Value::as_str)
            .filter(|uri| !uri.is_empty())
            .map(|uri| format!("{}{}", api_base, uri))
    };
    let number = |field: &str| {
        object
            .get(field)
            .and_then(Value::as_u64)
            .and_then(|n| u32::try_from(n).ok())
    };

    PageMeta {
        page: number("page"),
        page_size: number("page_size"),
        first_page_url: absolute("first_page_uri"),
        previous_page_url: absolute("previous_page_uri"),
        next_page_url: absolute("next_page_uri"),
        url: absolute("uri"),
        key: None,
    }
}

fn records_key(object: &Map<String, Value>) -> Result<String, RestError> {
    object
        .iter()
        .find(|(key, value)| value.is_array() && !V2010_META_KEYS.contains(&key.as_str()))
        .map(|(key, _)| key.clone())
        .ok_or_else(|| RestError::Parse("page has no record array".to_string()))
}
