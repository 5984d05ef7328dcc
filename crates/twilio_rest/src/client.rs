// --- File: crates/twilio_rest/src/client.rs ---
//! HTTP client shared by every resource.
//!
//! [`TwilioClient`] owns credentials, host selection (region / edge) and the
//! request/response plumbing. Resource modules only build paths and parameter
//! structs and call [`TwilioClient::fetch`], [`TwilioClient::create`], ... on it.

use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::{Client, Method, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};
use twilio_config::TwilioConfig;

use crate::error::RestError;
use crate::page::Page;
use crate::serialize::to_form_pairs;

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Region used when only an edge is configured.
const DEFAULT_REGION: &str = "us1";

/// Twilio product hosts served by this client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Api,
    Chat,
    Conversations,
    Events,
    Insights,
    Supersim,
    Sync,
    Verify,
    Voice,
    Wireless,
}

impl Domain {
    /// Leftmost label of the product host (`api` in `api.twilio.com`).
    pub fn host(&self) -> &'static str {
        match self {
            Domain::Api => "api",
            Domain::Chat => "chat",
            Domain::Conversations => "conversations",
            Domain::Events => "events",
            Domain::Insights => "insights",
            Domain::Supersim => "supersim",
            Domain::Sync => "sync",
            Domain::Verify => "verify",
            Domain::Voice => "voice",
            Domain::Wireless => "wireless",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.host())
    }
}

/// Builder for [`TwilioClient`].
#[derive(Debug)]
pub struct TwilioClientBuilder {
    username: String,
    password: String,
    account_sid: Option<String>,
    region: Option<String>,
    edge: Option<String>,
    timeout: Duration,
    http_client: Option<Client>,
    base_url_override: Option<String>,
    user_agent_extensions: Vec<String>,
}

impl TwilioClientBuilder {
    /// Starts a builder with Basic-auth credentials: an Account SID + auth token, or an
    /// API key SID + secret (then also call [`account_sid`](Self::account_sid)).
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            account_sid: None,
            region: None,
            edge: None,
            timeout: DEFAULT_TIMEOUT,
            http_client: None,
            base_url_override: None,
            user_agent_extensions: Vec::new(),
        }
    }

    /// Account the 2010-04-01 API paths are scoped to. Defaults to the username.
    pub fn account_sid(mut self, account_sid: impl Into<String>) -> Self {
        self.account_sid = Some(account_sid.into());
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn edge(mut self, edge: impl Into<String>) -> Self {
        self.edge = Some(edge.into());
        self
    }

    /// Request timeout; ignored when a custom HTTP client is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use a pre-built reqwest client (shared pool, proxies, TLS settings).
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Send every domain's requests to this base URL instead of `*.twilio.com`.
    pub fn base_url_override(mut self, base_url: impl Into<String>) -> Self {
        self.base_url_override = Some(base_url.into().trim_end_matches('/').to_string());
        self
    }

    /// Extra token appended to the `User-Agent` header.
    pub fn user_agent_extension(mut self, extension: impl Into<String>) -> Self {
        self.user_agent_extensions.push(extension.into());
        self
    }

    pub fn build(self) -> Result<TwilioClient, RestError> {
        if self.username.is_empty() {
            return Err(RestError::Config("username is required".to_string()));
        }
        if self.password.is_empty() {
            return Err(RestError::Config("password is required".to_string()));
        }

        let http = match self.http_client {
            Some(client) => client,
            None => Client::builder()
                .timeout(self.timeout)
                .build()
                .map_err(|e| RestError::Config(e.to_string()))?,
        };

        let mut user_agent = format!(
            "twilio-rs/{} ({} {})",
            env!("CARGO_PKG_VERSION"),
            std::env::consts::OS,
            std::env::consts::ARCH
        );
        for extension in &self.user_agent_extensions {
            user_agent.push(' ');
            user_agent.push_str(extension);
        }

        let account_sid = self.account_sid.unwrap_or_else(|| self.username.clone());

        Ok(TwilioClient {
            inner: Arc::new(ClientInner {
                http,
                username: self.username,
                password: self.password,
                account_sid,
                region: self.region.filter(|r| !r.is_empty()),
                edge: self.edge.filter(|e| !e.is_empty()),
                base_url_override: self.base_url_override,
                user_agent,
            }),
        })
    }
}

struct ClientInner {
    http: Client,
    username: String,
    password: String,
    account_sid: String,
    region: Option<String>,
    edge: Option<String>,
    base_url_override: Option<String>,
    user_agent: String,
}

impl fmt::Debug for ClientInner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientInner")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("account_sid", &self.account_sid)
            .field("region", &self.region)
            .field("edge", &self.edge)
            .field("base_url_override", &self.base_url_override)
            .finish()
    }
}

/// Client for the Twilio REST API. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct TwilioClient {
    inner: Arc<ClientInner>,
}

impl TwilioClient {
    /// Client authenticated with an Account SID and auth token.
    pub fn new(
        account_sid: impl Into<String>,
        auth_token: impl Into<String>,
    ) -> Result<Self, RestError> {
        TwilioClientBuilder::new(account_sid, auth_token).build()
    }

    pub fn builder(username: impl Into<String>, password: impl Into<String>) -> TwilioClientBuilder {
        TwilioClientBuilder::new(username, password)
    }

    /// Client built from the application's `[twilio]` config section, sharing the
    /// process-wide HTTP connection pool.
    pub fn from_config(config: &TwilioConfig) -> Result<Self, RestError> {
        let (username, password) = config.rest_credentials();
        let mut builder = TwilioClientBuilder::new(username, password)
            .account_sid(config.account_sid.clone())
            .http_client(twilio_common::HTTP_CLIENT.clone());
        if let Some(region) = &config.region {
            builder = builder.region(region.clone());
        }
        if let Some(edge) = &config.edge {
            builder = builder.edge(edge.clone());
        }
        builder.build()
    }

    pub fn account_sid(&self) -> &str {
        &self.inner.account_sid
    }

    pub fn region(&self) -> Option<&str> {
        self.inner.region.as_deref()
    }

    pub fn edge(&self) -> Option<&str> {
        self.inner.edge.as_deref()
    }

    /// Base URL (scheme + host, no trailing slash) for a product domain.
    ///
    /// `api` + edge `sydney` + region `au1` gives `https://api.sydney.au1.twilio.com`.
    pub fn base_url(&self, domain: Domain) -> String {
        if let Some(base) = &self.inner.base_url_override {
            return base.clone();
        }

        let region = self
            .inner
            .region
            .as_deref()
            .or_else(|| self.inner.edge.as_ref().map(|_| DEFAULT_REGION));

        let mut labels = vec![domain.host()];
        if let Some(edge) = self.inner.edge.as_deref() {
            labels.push(edge);
        }
        if let Some(region) = region {
            labels.push(region);
        }
        labels.push("twilio.com");
        format!("https://{}", labels.join("."))
    }

    /// Absolute URL for `path` on `domain`.
    pub fn url(&self, domain: Domain, path: &str) -> String {
        format!("{}{}", self.base_url(domain), path)
    }

    /// Sends one authenticated request and returns the successful response.
    ///
    /// `query` goes into the URL, `form` (when non-empty) into an
    /// `application/x-www-form-urlencoded` body.
    #[instrument(skip(self, query, form), fields(method = %method))]
    pub async fn request(
        &self,
        method: Method,
        url: &str,
        query: &[(String, String)],
        form: &[(String, String)],
    ) -> Result<Response, RestError> {
        let mut request = self
            .inner
            .http
            .request(method, url)
            .basic_auth(&self.inner.username, Some(&self.inner.password))
            .header(USER_AGENT, &self.inner.user_agent)
            .header(ACCEPT, "application/json");

        if !query.is_empty() {
            request = request.query(query);
        }
        if !form.is_empty() {
            request = request.form(form);
        }

        debug!("sending Twilio request to {}", url);
        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            warn!("Twilio API rate limit hit for {}", url);
            return Err(RestError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Twilio returned {} for {}: {}", status, url, body);
            return Err(RestError::from_response(status.as_u16(), &body));
        }

        Ok(response)
    }

    async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        query: &[(String, String)],
        form: &[(String, String)],
    ) -> Result<T, RestError> {
        let response = self.request(method, url, query, form).await?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(RestError::from)
    }

    /// `GET` a single record.
    pub async fn fetch<T: DeserializeOwned>(&self, domain: Domain, path: &str) -> Result<T, RestError> {
        self.request_json(Method::GET, &self.url(domain, path), &[], &[])
            .await
    }

    /// `POST` to a collection, creating a record.
    pub async fn create<T, P>(&self, domain: Domain, path: &str, params: &P) -> Result<T, RestError>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let form = to_form_pairs(params)?;
        self.request_json(Method::POST, &self.url(domain, path), &[], &form)
            .await
    }

    /// `POST` to a record, updating it. Twilio uses POST rather than PUT/PATCH.
    pub async fn update<T, P>(&self, domain: Domain, path: &str, params: &P) -> Result<T, RestError>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let form = to_form_pairs(params)?;
        self.request_json(Method::POST, &self.url(domain, path), &[], &form)
            .await
    }

    /// `DELETE` a record. Returns `true` when Twilio answers `204 No Content`.
    pub async fn remove(&self, domain: Domain, path: &str) -> Result<bool, RestError> {
        let response = self
            .request(Method::DELETE, &self.url(domain, path), &[], &[])
            .await?;
        Ok(response.status() == StatusCode::NO_CONTENT)
    }

    /// Fetches the first page of a collection with the given query parameters.
    pub async fn page<T: DeserializeOwned>(
        &self,
        domain: Domain,
        path: &str,
        query: &[(String, String)],
    ) -> Result<Page<T>, RestError> {
        let url = self.url(domain, path);
        let payload: Value = self.request_json(Method::GET, &url, query, &[]).await?;
        Page::from_payload(payload, &origin_of(&url)?)
    }

    /// Fetches a page by absolute URL, typically a previous page's `next_page_url`.
    pub async fn get_page<T: DeserializeOwned>(&self, url: &str) -> Result<Page<T>, RestError> {
        let origin = origin_of(url)?;
        let payload: Value = self.request_json(Method::GET, url, &[], &[]).await?;
        Page::from_payload(payload, &origin)
    }
}

/// `scheme://host[:port]` of an absolute URL.
fn origin_of(url: &str) -> Result<String, RestError> {
    let parsed = Url::parse(url)
        .map_err(|e| RestError::InvalidArgument(format!("invalid URL {}: {}", url, e)))?;
    Ok(parsed.origin().ascii_serialization())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> TwilioClientBuilder {
        TwilioClient::builder("ACxxx", "token")
    }

    #[test]
    fn test_default_hosts() {
        let client = client().build().unwrap();
        assert_eq!(client.base_url(Domain::Api), "https://api.twilio.com");
        assert_eq!(client.base_url(Domain::Verify), "https://verify.twilio.com");
        assert_eq!(
            client.url(Domain::Sync, "/v1/Services"),
            "https://sync.twilio.com/v1/Services"
        );
    }

    #[test]
    fn test_region_and_edge_hosts() {
        let both = client().region("au1").edge("sydney").build().unwrap();
        assert_eq!(both.base_url(Domain::Api), "https://api.sydney.au1.twilio.com");

        let edge_only = client().edge("dublin").build().unwrap();
        assert_eq!(
            edge_only.base_url(Domain::Chat),
            "https://chat.dublin.us1.twilio.com"
        );

        let region_only = client().region("ie1").build().unwrap();
        assert_eq!(
            region_only.base_url(Domain::Conversations),
            "https://conversations.ie1.twilio.com"
        );
    }

    #[test]
    fn test_base_url_override_wins() {
        let client = client()
            .region("ie1")
            .base_url_override("http://127.0.0.1:9000/")
            .build()
            .unwrap();
        assert_eq!(client.base_url(Domain::Wireless), "http://127.0.0.1:9000");
    }

    #[test]
    fn test_account_sid_defaults_to_username() {
        assert_eq!(client().build().unwrap().account_sid(), "ACxxx");
        let keyed = TwilioClient::builder("SKxxx", "secret")
            .account_sid("ACyyy")
            .build()
            .unwrap();
        assert_eq!(keyed.account_sid(), "ACyyy");
    }

    #[test]
    fn test_rejects_empty_credentials() {
        assert!(matches!(
            TwilioClient::new("", "token"),
            Err(RestError::Config(_))
        ));
        assert!(matches!(
            TwilioClient::new("ACxxx", ""),
            Err(RestError::Config(_))
        ));
    }

    #[test]
    fn test_debug_redacts_password() {
        let printed = format!("{:?}", client().build().unwrap());
        assert!(printed.contains("<redacted>"));
        assert!(!printed.contains("token"));
    }

    #[test]
    fn test_origin_of() {
        assert_eq!(
            origin_of("https://api.twilio.com/2010-04-01/Accounts/AC1/Messages.json?Page=1").unwrap(),
            "https://api.twilio.com"
        );
        assert_eq!(
            origin_of("http://127.0.0.1:8080/v1/Sims").unwrap(),
            "http://127.0.0.1:8080"
        );
        assert!(origin_of("not a url").is_err());
    }
}
