// --- File: crates/twilio_rest/src/serialize.rs ---
//! Request parameter encoding and date formats used by Twilio.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;
use serde_json::Value;

use crate::error::RestError;

/// Characters escaped inside a single path segment (RFC 3986 unreserved stay literal).
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encodes one path segment (a SID, an identity, an ISO code, ...).
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

/// Flattens a parameter struct into `(key, value)` pairs in field declaration order.
///
/// `None` fields are dropped, arrays repeat their key, nested objects are sent as JSON
/// text. `()` yields no pairs.
pub fn to_form_pairs<P: Serialize + ?Sized>(params: &P) -> Result<Vec<(String, String)>, RestError> {
    let value =
        serde_json::to_value(params).map_err(|e| RestError::Serialization(e.to_string()))?;

    let map = match value {
        Value::Null => return Ok(Vec::new()),
        Value::Object(map) => map,
        other => {
            return Err(RestError::Serialization(format!(
                "expected a parameter struct, got {}",
                other
            )))
        }
    };

    let mut pairs = Vec::with_capacity(map.len());
    for (key, value) in map {
        push_value(&mut pairs, &key, value);
    }
    Ok(pairs)
}

fn push_value(pairs: &mut Vec<(String, String)>, key: &str, value: Value) {
    match value {
        Value::Null => {}
        Value::Bool(b) => pairs.push((key.to_string(), b.to_string())),
        Value::Number(n) => pairs.push((key.to_string(), n.to_string())),
        Value::String(s) => pairs.push((key.to_string(), s)),
        Value::Array(items) => {
            for item in items {
                push_value(pairs, key, item);
            }
        }
        object @ Value::Object(_) => pairs.push((key.to_string(), object.to_string())),
    }
}

/// Reads a nullable JSON array, treating `null` like an absent key.
pub fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de>,
{
    let items: Option<Vec<T>> = serde::Deserialize::deserialize(deserializer)?;
    Ok(items.unwrap_or_default())
}

/// (De)serializes `Option<DateTime<Utc>>` from the RFC 2822 strings the 2010-04-01 API uses
/// (`"Thu, 30 Jul 2015 20:12:31 +0000"`).
pub mod rfc2822 {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_str(&date.to_rfc2822()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref() {
            None | Some("") => Ok(None),
            Some(text) => DateTime::parse_from_rfc2822(text)
                .map(|date| Some(date.with_timezone(&Utc)))
                .map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, NaiveDate, Utc};
    use proptest::prelude::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Serialize, Default)]
    struct Params {
        #[serde(rename = "To")]
        to: Option<String>,
        #[serde(rename = "MediaUrl")]
        media_url: Vec<String>,
        #[serde(rename = "ProvideFeedback")]
        provide_feedback: Option<bool>,
        #[serde(rename = "ValidityPeriod")]
        validity_period: Option<u32>,
        #[serde(rename = "RateLimits")]
        rate_limits: Option<serde_json::Value>,
        #[serde(rename = "DateSent>")]
        date_sent_after: Option<NaiveDate>,
    }

    #[test]
    fn test_to_form_pairs_flattens_values() {
        let params = Params {
            to: Some("+15558675310".to_string()),
            media_url: vec!["https://a.example/1.png".into(), "https://a.example/2.png".into()],
            provide_feedback: Some(true),
            validity_period: Some(60),
            rate_limits: Some(json!({ "my_key": "value" })),
            date_sent_after: NaiveDate::from_ymd_opt(2024, 1, 2),
        };

        let pairs = to_form_pairs(&params).unwrap();
        let get = |key: &str| -> Vec<&str> {
            pairs
                .iter()
                .filter(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
                .collect()
        };
        assert_eq!(get("To"), vec!["+15558675310"]);
        assert_eq!(
            get("MediaUrl"),
            vec!["https://a.example/1.png", "https://a.example/2.png"]
        );
        assert_eq!(get("ProvideFeedback"), vec!["true"]);
        assert_eq!(get("ValidityPeriod"), vec!["60"]);
        assert_eq!(get("RateLimits"), vec![r#"{"my_key":"value"}"#]);
        assert_eq!(get("DateSent>"), vec!["2024-01-02"]);
    }

    #[test]
    fn test_to_form_pairs_follow_field_order() {
        let params = Params {
            to: Some("+15558675310".to_string()),
            media_url: vec!["b".into(), "a".into()],
            validity_period: Some(60),
            ..Default::default()
        };
        let keys: Vec<String> = to_form_pairs(&params)
            .unwrap()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, vec!["To", "MediaUrl", "MediaUrl", "ValidityPeriod"]);
    }

    #[test]
    fn test_to_form_pairs_drops_unset_fields() {
        assert!(to_form_pairs(&Params::default()).unwrap().is_empty());
        assert!(to_form_pairs(&()).unwrap().is_empty());
    }

    #[test]
    fn test_to_form_pairs_rejects_scalars() {
        assert!(matches!(
            to_form_pairs(&"just a string"),
            Err(RestError::Serialization(_))
        ));
    }

    #[test]
    fn test_encode_segment() {
        assert_eq!(encode_segment("MM800f449d0399ed014aae2bcc0cc2f2ec"), "MM800f449d0399ed014aae2bcc0cc2f2ec");
        assert_eq!(encode_segment("user@example.com"), "user%40example.com");
        assert_eq!(encode_segment("a/b c"), "a%2Fb%20c");
    }

    #[derive(Deserialize)]
    struct Dated {
        #[serde(default, with = "rfc2822")]
        date_created: Option<DateTime<Utc>>,
    }

    #[derive(Deserialize)]
    struct Tagged {
        #[serde(default, deserialize_with = "null_as_empty")]
        tags: Vec<String>,
    }

    #[test]
    fn test_null_array_reads_as_empty() {
        let tagged: Tagged = serde_json::from_value(json!({ "tags": null })).unwrap();
        assert!(tagged.tags.is_empty());

        let tagged: Tagged = serde_json::from_value(json!({})).unwrap();
        assert!(tagged.tags.is_empty());

        let tagged: Tagged = serde_json::from_value(json!({ "tags": ["silence"] })).unwrap();
        assert_eq!(tagged.tags, vec!["silence"]);
    }

    #[test]
    fn test_rfc2822_dates() {
        let dated: Dated =
            serde_json::from_value(json!({ "date_created": "Thu, 30 Jul 2015 20:12:31 +0000" }))
                .unwrap();
        assert_eq!(
            dated.date_created.unwrap().to_rfc3339(),
            "2015-07-30T20:12:31+00:00"
        );

        let dated: Dated = serde_json::from_value(json!({ "date_created": null })).unwrap();
        assert!(dated.date_created.is_none());

        let dated: Dated = serde_json::from_value(json!({})).unwrap();
        assert!(dated.date_created.is_none());
    }

    proptest! {
        #[test]
        fn test_repeated_keys_keep_every_value(values in proptest::collection::vec("[a-z0-9]{1,12}", 0..8)) {
            let params = Params { media_url: values.clone(), ..Default::default() };
            let pairs = to_form_pairs(&params).unwrap();
            let got: Vec<String> = pairs.into_iter().map(|(_, v)| v).collect();
            prop_assert_eq!(got, values);
        }
    }
}
