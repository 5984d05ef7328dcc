// --- File: crates/twilio_rest/src/webhook.rs ---
//! Validation of the `X-Twilio-Signature` header Twilio attaches to webhook requests.
//!
//! The signature is `base64(HMAC-SHA1(auth_token, url + k1 + v1 + k2 + v2 ...))` with the
//! POST parameters sorted by key. JSON webhooks are signed over the URL only and carry a
//! SHA-256 of the body in the `bodySHA256` query parameter.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use constant_time_eq::constant_time_eq;
use hmac::{Hmac, Mac};
use reqwest::Url;
use sha1::Sha1;
use sha2::{Digest, Sha256};
use tracing::debug;

type HmacSha1 = Hmac<Sha1>;

/// Query parameter carrying the hex SHA-256 of a JSON webhook body.
pub const BODY_HASH_PARAM: &str = "bodySHA256";

/// Header Twilio puts the signature in.
pub const SIGNATURE_HEADER: &str = "X-Twilio-Signature";

fn signing_mac(auth_token: &str, url: &str, params: &[(String, String)]) -> HmacSha1 {
    let mut sorted: Vec<&(String, String)> = params.iter().collect();
    sorted.sort();

    let mut mac = HmacSha1::new_from_slice(auth_token.as_bytes())
        .unwrap_or_else(|_| unreachable!("HMAC accepts any key length"));
    mac.update(url.as_bytes());
    for (key, value) in sorted {
        mac.update(key.as_bytes());
        mac.update(value.as_bytes());
    }
    mac
}

/// Signature Twilio would send for `url` and the POSTed form `params`.
pub fn get_expected_signature(auth_token: &str, url: &str, params: &[(String, String)]) -> String {
    STANDARD.encode(signing_mac(auth_token, url, params).finalize().into_bytes())
}

fn signature_matches(auth_token: &str, signature: &[u8], url: &str, params: &[(String, String)]) -> bool {
    signing_mac(auth_token, url, params).verify_slice(signature).is_ok()
}

/// Checks `signature` against `url` and `params`.
///
/// Twilio may have signed the URL with or without an explicit default port
/// (`:443` / `:80`), so both spellings are accepted.
pub fn validate_request(
    auth_token: &str,
    signature: &str,
    url: &str,
    params: &[(String, String)],
) -> bool {
    let Ok(decoded) = STANDARD.decode(signature) else {
        debug!("webhook signature is not valid base64");
        return false;
    };

    if signature_matches(auth_token, &decoded, url, params) {
        return true;
    }

    let Ok(parsed) = Url::parse(url) else {
        return false;
    };
    [without_port(&parsed), with_port(&parsed)]
        .into_iter()
        .flatten()
        .any(|candidate| signature_matches(auth_token, &decoded, &candidate, params))
}

/// Lowercase hex SHA-256 of a request body.
pub fn get_expected_body_hash(body: &[u8]) -> String {
    hex::encode(Sha256::digest(body))
}

/// Compares `body` against the hex hash Twilio sent.
pub fn validate_body(body: &[u8], expected_hash: &str) -> bool {
    constant_time_eq(
        get_expected_body_hash(body).as_bytes(),
        expected_hash.to_ascii_lowercase().as_bytes(),
    )
}

/// Validates a JSON webhook: the URL signature (no form params) and the `bodySHA256`
/// query parameter against `body`. Fails when the parameter is missing.
pub fn validate_request_with_body(auth_token: &str, signature: &str, url: &str, body: &[u8]) -> bool {
    let Ok(parsed) = Url::parse(url) else {
        return false;
    };
    let Some(hash) = parsed
        .query_pairs()
        .find(|(key, _)| key == BODY_HASH_PARAM)
        .map(|(_, value)| value.into_owned())
    else {
        debug!("webhook url has no {} parameter", BODY_HASH_PARAM);
        return false;
    };

    validate_request(auth_token, signature, url, &[]) && validate_body(body, &hash)
}

/// `Url` already drops default ports, so only explicit non-default ports need stripping.
fn without_port(url: &Url) -> Option<String> {
    let mut stripped = url.clone();
    stripped.set_port(None).ok()?;
    Some(stripped.to_string())
}

/// The explicit default-port form has to be assembled by hand.
fn with_port(url: &Url) -> Option<String> {
    if url.port().is_some() {
        return None;
    }
    let port = url.port_or_known_default()?;
    let host = url.host_str()?;

    let mut out = format!("{}://", url.scheme());
    if !url.username().is_empty() {
        out.push_str(url.username());
        if let Some(password) = url.password() {
            out.push(':');
            out.push_str(password);
        }
        out.push('@');
    }
    out.push_str(&format!("{}:{}{}", host, port, url.path()));
    if let Some(query) = url.query() {
        out.push('?');
        out.push_str(query);
    }
    if let Some(fragment) = url.fragment() {
        out.push('#');
        out.push_str(fragment);
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKEN: &str = "12345";
    const URL: &str = "https://mycompany.com/myapp.php?foo=1&bar=2";

    fn params() -> Vec<(String, String)> {
        vec![
            ("CallSid", "CA1234567890ABCDE"),
            ("Caller", "+12349013030"),
            ("Digits", "1234"),
            ("From", "+12349013030"),
            ("To", "+18005551212"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn test_known_signature() {
        assert_eq!(
            get_expected_signature(TOKEN, URL, &params()),
            "0/KCTR6DLpKmkAf8muzZqo1nDgQ="
        );
    }

    #[test]
    fn test_param_order_does_not_matter() {
        let mut reversed = params();
        reversed.reverse();
        assert_eq!(
            get_expected_signature(TOKEN, URL, &reversed),
            get_expected_signature(TOKEN, URL, &params())
        );
    }

    #[test]
    fn test_validate_request() {
        let signature = get_expected_signature(TOKEN, URL, &params());
        assert!(validate_request(TOKEN, &signature, URL, &params()));
        assert!(!validate_request("wrong", &signature, URL, &params()));
        assert!(!validate_request(TOKEN, "not base64!", URL, &params()));

        let mut tampered = params();
        tampered[2].1 = "9999".to_string();
        assert!(!validate_request(TOKEN, &signature, URL, &tampered));
    }

    #[test]
    fn test_accepts_default_port_variants() {
        let signed_with_port = get_expected_signature(
            TOKEN,
            "https://mycompany.com:443/myapp.php?foo=1&bar=2",
            &params(),
        );
        assert!(validate_request(TOKEN, &signed_with_port, URL, &params()));

        let signed_without_port = get_expected_signature(TOKEN, URL, &params());
        assert!(validate_request(
            TOKEN,
            &signed_without_port,
            "https://mycompany.com:443/myapp.php?foo=1&bar=2",
            &params()
        ));
    }

    #[test]
    fn test_port_variants() {
        let url = Url::parse("http://user:pw@example.com/hook?x=1").unwrap();
        assert_eq!(
            with_port(&url).as_deref(),
            Some("http://user:pw@example.com:80/hook?x=1")
        );
        assert_eq!(
            without_port(&url).as_deref(),
            Some("http://user:pw@example.com/hook?x=1")
        );

        let url = Url::parse("https://example.com:8443/hook").unwrap();
        assert_eq!(without_port(&url).as_deref(), Some("https://example.com/hook"));
        assert!(with_port(&url).is_none());
    }

    #[test]
    fn test_body_hash() {
        let body = br#"{"property": "value", "boolean": true}"#;
        let hash = get_expected_body_hash(body);
        assert_eq!(
            hash,
            "0a1ff7634d9ab3b95db5c9a2dfe9416e41502b283a80c7cf19632632f96e6620"
        );
        assert!(validate_body(body, &hash));
        assert!(validate_body(body, &hash.to_uppercase()));
        assert!(!validate_body(b"{}", &hash));
        // truncated or empty hashes never match
        assert!(!validate_body(body, &hash[..32]));
        assert!(!validate_body(body, ""));
    }

    #[test]
    fn test_validate_request_with_body() {
        let body = br#"{"property": "value", "boolean": true}"#;
        let url = format!(
            "https://mycompany.com/myapp.php?foo=1&bar=2&{}={}",
            BODY_HASH_PARAM,
            get_expected_body_hash(body)
        );
        let signature = get_expected_signature(TOKEN, &url, &[]);

        assert!(validate_request_with_body(TOKEN, &signature, &url, body));
        assert!(!validate_request_with_body(TOKEN, &signature, &url, b"{}"));
        assert!(!validate_request_with_body(TOKEN, &signature, URL, body));
    }
}
