// --- File: crates/twilio_jwt/src/access_token.rs ---
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::{DateTime, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, TokenData, Validation};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::error::JwtError;
use crate::grants::Grant;

/// Content type Twilio expects in the JWT header.
pub const CONTENT_TYPE: &str = "twilio-fpa;v=1";

/// Default token lifetime in seconds.
pub const DEFAULT_TTL: u64 = 3600;

/// Signing algorithms accepted for access tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Algorithm {
    #[default]
    HS256,
    HS384,
    HS512,
}

impl Algorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::HS256 => "HS256",
            Algorithm::HS384 => "HS384",
            Algorithm::HS512 => "HS512",
        }
    }

    fn to_jsonwebtoken(self) -> jsonwebtoken::Algorithm {
        match self {
            Algorithm::HS256 => jsonwebtoken::Algorithm::HS256,
            Algorithm::HS384 => jsonwebtoken::Algorithm::HS384,
            Algorithm::HS512 => jsonwebtoken::Algorithm::HS512,
        }
    }
}

impl FromStr for Algorithm {
    type Err = JwtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HS256" => Ok(Algorithm::HS256),
            "HS384" => Ok(Algorithm::HS384),
            "HS512" => Ok(Algorithm::HS512),
            other => Err(JwtError::UnsupportedAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of the token holder. Twilio accepts strings and integers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identity {
    Number(i64),
    Text(String),
}

impl Identity {
    fn is_empty(&self) -> bool {
        matches!(self, Identity::Text(text) if text.is_empty())
    }
}

impl From<&str> for Identity {
    fn from(value: &str) -> Self {
        Identity::Text(value.to_string())
    }
}

impl From<String> for Identity {
    fn from(value: String) -> Self {
        Identity::Text(value)
    }
}

impl From<i64> for Identity {
    fn from(value: i64) -> Self {
        Identity::Number(value)
    }
}

impl From<i32> for Identity {
    fn from(value: i32) -> Self {
        Identity::Number(value.into())
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identity::Number(n) => write!(f, "{}", n),
            Identity::Text(s) => f.write_str(s),
        }
    }
}

/// Optional settings for an [`AccessToken`]. `identity` must be set before construction.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessTokenOptions {
    pub identity: Option<Identity>,
    /// Lifetime in seconds, added to the issue time to form `exp`.
    pub ttl: u64,
    /// Not-before timestamp (Unix seconds).
    pub nbf: Option<i64>,
    /// Twilio region, written to the header as `twr`.
    pub region: Option<String>,
}

impl Default for AccessTokenOptions {
    fn default() -> Self {
        Self {
            identity: None,
            ttl: DEFAULT_TTL,
            nbf: None,
            region: None,
        }
    }
}

impl AccessTokenOptions {
    pub fn new(identity: impl Into<Identity>) -> Self {
        Self {
            identity: Some(identity.into()),
            ..Default::default()
        }
    }

    pub fn ttl(mut self, ttl: u64) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn nbf(mut self, nbf: i64) -> Self {
        self.nbf = Some(nbf);
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }
}

/// JWT header written for access tokens.
#[derive(Debug, Serialize)]
struct TokenHeader<'a> {
    alg: &'static str,
    typ: &'static str,
    cty: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    twr: Option<&'a str>,
}

/// Claims carried by an access token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub jti: String,
    pub grants: Map<String, Value>,
    pub iss: String, // API Key SID
    pub sub: String, // Account SID
    pub iat: i64,
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nbf: Option<i64>,
}

/// Builder for Twilio access tokens.
///
/// ```
/// use twilio_jwt::{AccessToken, AccessTokenOptions, VideoGrant};
///
/// let mut token = AccessToken::new(
///     "ACxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx",
///     "SKxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx",
///     "api-key-secret",
///     AccessTokenOptions::new("alice").ttl(600),
/// )?;
/// token.add_grant(VideoGrant::for_room("standup"));
/// let jwt = token.to_jwt("HS256")?;
/// assert_eq!(jwt.split('.').count(), 3);
/// # Ok::<(), twilio_jwt::JwtError>(())
/// ```
#[derive(Debug, Clone)]
pub struct AccessToken {
    account_sid: String,
    key_sid: String,
    secret: String,
    options: AccessTokenOptions,
    grants: Vec<Grant>,
}

impl AccessToken {
    /// Creates a token builder.
    ///
    /// Fails with [`JwtError::MissingArgument`] when the account SID, key SID, secret or
    /// identity is empty.
    pub fn new(
        account_sid: impl Into<String>,
        key_sid: impl Into<String>,
        secret: impl Into<String>,
        options: AccessTokenOptions,
    ) -> Result<Self, JwtError> {
        let account_sid = account_sid.into();
        let key_sid = key_sid.into();
        let secret = secret.into();

        if account_sid.is_empty() {
            return Err(JwtError::MissingArgument("accountSid"));
        }
        if key_sid.is_empty() {
            return Err(JwtError::MissingArgument("keySid"));
        }
        if secret.is_empty() {
            return Err(JwtError::MissingArgument("secret"));
        }
        match &options.identity {
            Some(identity) if !identity.is_empty() => {}
            _ => return Err(JwtError::MissingArgument("identity")),
        }

        Ok(Self {
            account_sid,
            key_sid,
            secret,
            options,
            grants: Vec::new(),
        })
    }

    pub fn add_grant(&mut self, grant: impl Into<Grant>) -> &mut Self {
        self.grants.push(grant.into());
        self
    }

    pub fn grants(&self) -> &[Grant] {
        &self.grants
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.options.identity.as_ref()
    }

    /// Signs the token with the named algorithm (`HS256`, `HS384` or `HS512`).
    pub fn to_jwt(&self, algorithm: &str) -> Result<String, JwtError> {
        self.to_jwt_with(algorithm.parse()?)
    }

    /// Signs the token, issued now.
    pub fn to_jwt_with(&self, algorithm: Algorithm) -> Result<String, JwtError> {
        self.to_jwt_at(algorithm, Utc::now())
    }

    /// Signs the token as if issued at `issued_at`.
    pub fn to_jwt_at(
        &self,
        algorithm: Algorithm,
        issued_at: DateTime<Utc>,
    ) -> Result<String, JwtError> {
        let claims = self.claims(issued_at)?;
        let header = TokenHeader {
            alg: algorithm.as_str(),
            typ: "JWT",
            cty: CONTENT_TYPE,
            twr: self.options.region.as_deref(),
        };

        let encoded_header = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&header)?);
        let encoded_claims = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&claims)?);
        let message = format!("{}.{}", encoded_header, encoded_claims);

        let signature = jsonwebtoken::crypto::sign(
            message.as_bytes(),
            &EncodingKey::from_secret(self.secret.as_bytes()),
            algorithm.to_jsonwebtoken(),
        )?;

        debug!(
            "signed access token jti={} iss={} grants={}",
            claims.jti,
            claims.iss,
            self.grants.len()
        );
        Ok(format!("{}.{}", message, signature))
    }

    fn claims(&self, issued_at: DateTime<Utc>) -> Result<Claims, JwtError> {
        let now = issued_at.timestamp();
        let ttl = self.options.ttl;
        let exp = i64::try_from(ttl)
            .ok()
            .and_then(|ttl| now.checked_add(ttl))
            .ok_or(JwtError::TtlOutOfRange(ttl))?;

        let mut grants = Map::new();
        if let Some(identity) = &self.options.identity {
            grants.insert("identity".to_string(), serde_json::to_value(identity)?);
        }
        for grant in &self.grants {
            grants.insert(grant.key().to_string(), grant.to_payload()?);
        }

        Ok(Claims {
            jti: format!("{}-{}", self.key_sid, now),
            grants,
            iss: self.key_sid.clone(),
            sub: self.account_sid.clone(),
            iat: now,
            exp,
            nbf: self.options.nbf,
        })
    }
}

/// Verifies `token` with `secret` and returns its header and claims.
///
/// Expiry is checked; issuer and audience are not.
pub fn decode_token(
    token: &str,
    secret: &str,
    algorithm: Algorithm,
) -> Result<TokenData<Claims>, JwtError> {
    let validation = Validation::new(algorithm.to_jsonwebtoken());
    Ok(jsonwebtoken::decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grants::VideoGrant;

    fn token(options: AccessTokenOptions) -> AccessToken {
        AccessToken::new("AC123", "SK123", "secret", options).unwrap()
    }

    #[test]
    fn test_requires_account_sid() {
        let err = AccessToken::new("", "SK123", "secret", AccessTokenOptions::new("id")).unwrap_err();
        assert!(matches!(err, JwtError::MissingArgument("accountSid")));
    }

    #[test]
    fn test_requires_key_sid() {
        let err = AccessToken::new("AC123", "", "secret", AccessTokenOptions::new("id")).unwrap_err();
        assert!(matches!(err, JwtError::MissingArgument("keySid")));
    }

    #[test]
    fn test_requires_secret() {
        let err = AccessToken::new("AC123", "SK123", "", AccessTokenOptions::new("id")).unwrap_err();
        assert!(matches!(err, JwtError::MissingArgument("secret")));
    }

    #[test]
    fn test_requires_identity() {
        let err = AccessToken::new("AC123", "SK123", "secret", AccessTokenOptions::default())
            .unwrap_err();
        assert!(matches!(err, JwtError::MissingArgument("identity")));

        let err = AccessToken::new("AC123", "SK123", "secret", AccessTokenOptions::new(""))
            .unwrap_err();
        assert_eq!(err.to_string(), "identity is required");
    }

    #[test]
    fn test_rejects_unsupported_algorithm() {
        let err = token(AccessTokenOptions::new("id")).to_jwt("RS256").unwrap_err();
        assert!(matches!(err, JwtError::UnsupportedAlgorithm(ref alg) if alg == "RS256"));
        assert!(token(AccessTokenOptions::new("id")).to_jwt("none").is_err());
    }

    #[test]
    fn test_claims_shape() {
        let issued_at = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let mut token = token(AccessTokenOptions::new("bob").ttl(120).nbf(1_699_999_990));
        token.add_grant(VideoGrant::for_room("lobby"));

        let claims = token.claims(issued_at).unwrap();
        assert_eq!(claims.jti, "SK123-1700000000");
        assert_eq!(claims.iss, "SK123");
        assert_eq!(claims.sub, "AC123");
        assert_eq!(claims.exp, 1_700_000_120);
        assert_eq!(claims.nbf, Some(1_699_999_990));
        assert_eq!(claims.grants["identity"], "bob");
        assert_eq!(claims.grants["video"]["room"], "lobby");
    }

    #[test]
    fn test_ttl_out_of_range_is_rejected() {
        let issued_at = DateTime::from_timestamp(1_700_000_000, 0).unwrap();

        let err = token(AccessTokenOptions::new("bob").ttl(u64::MAX))
            .claims(issued_at)
            .unwrap_err();
        assert!(matches!(err, JwtError::TtlOutOfRange(u64::MAX)));

        let err = token(AccessTokenOptions::new("bob").ttl(i64::MAX as u64))
            .to_jwt_at(Algorithm::HS256, issued_at)
            .unwrap_err();
        assert!(matches!(err, JwtError::TtlOutOfRange(_)));
    }

    #[test]
    fn test_integer_identity_stays_numeric() {
        let claims = token(AccessTokenOptions::new(42)).claims(Utc::now()).unwrap();
        assert_eq!(claims.grants["identity"], serde_json::json!(42));
    }
}
