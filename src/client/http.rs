//! Drift HTTP Client
//!
//! Blocking client that authenticates every call with a bearer token,
//! records the rate limit reset time and decodes JSON envelopes.

use crate::client::body::RequestBody;
use crate::client::query::{self, Params};
use crate::client::rate_limiter::{RateLimitDetails, RateLimitSlot};
use crate::client::transport::{
    HttpMethod, HttpSender, RequestFactory, TransportResponse, Transports, UriFactory,
};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::pagination;
use crate::resources::{Accounts, Admin, Contacts, Conversations, Gdpr, Playbooks, Users};
use parking_lot::RwLock;
use serde_json::Value;
use tracing::{debug, trace};

/// Base URL of the hosted Drift API
pub const DRIFT_API_URL: &str = "https://driftapi.com";

/// Client for the Drift API
pub struct DriftClient {
    /// Bearer token, read at the moment each request is built
    access_token: RwLock<String>,

    /// Headers sent with every request
    extra_headers: Vec<(String, String)>,

    /// API root, without a trailing slash
    base_url: String,

    http_client: Box<dyn HttpSender>,
    request_factory: Box<dyn RequestFactory>,
    uri_factory: Box<dyn UriFactory>,

    rate_limit: RateLimitSlot,
}

impl DriftClient {
    /// Create a client with the default transports
    pub fn new(access_token: impl Into<String>) -> Result<Self> {
        Self::from_config(ClientConfig::new(access_token))
    }

    /// Create a client that sends `extra_headers` with every request
    pub fn with_extra_headers<I, K, V>(access_token: impl Into<String>, extra_headers: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut config = ClientConfig::new(access_token);
        for (name, value) in extra_headers {
            config = config.with_header(name, value);
        }
        Self::from_config(config)
    }

    /// Create a client from a config object with the default transports
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        Ok(Self::with_transports(config, Transports::new()?))
    }

    /// Create a client with explicit transports
    pub fn with_transports(config: ClientConfig, transports: Transports) -> Self {
        let mut extra_headers: Vec<(String, String)> = config.extra_headers.into_iter().collect();
        extra_headers.sort();

        Self {
            access_token: RwLock::new(config.access_token),
            extra_headers,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http_client: transports.sender,
            request_factory: transports.request_factory,
            uri_factory: transports.uri_factory,
            rate_limit: RateLimitSlot::new(),
        }
    }

    /// Replace the request sender
    pub fn set_http_client(&mut self, sender: impl HttpSender + 'static) {
        self.http_client = Box::new(sender);
    }

    /// Replace the request factory
    pub fn set_request_factory(&mut self, factory: impl RequestFactory + 'static) {
        self.request_factory = Box::new(factory);
    }

    /// Replace the URI factory
    pub fn set_uri_factory(&mut self, factory: impl UriFactory + 'static) {
        self.uri_factory = Box::new(factory);
    }

    /// Replace the bearer token used by subsequent calls
    pub fn set_access_token(&self, access_token: impl Into<String>) {
        *self.access_token.write() = access_token.into();
    }

    /// Current bearer token
    pub fn access_token(&self) -> String {
        self.access_token.read().clone()
    }

    /// API root requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Rate limit details from the most recent response
    pub fn rate_limit_details(&self) -> RateLimitDetails {
        self.rate_limit.details()
    }

    /// See [`pagination::has_more`]
    pub fn has_more(&self, envelope: &Value) -> bool {
        pagination::has_more(envelope)
    }

    /// See [`pagination::next_page`]
    pub fn next_page(&self, envelope: &Value) -> i64 {
        pagination::next_page(envelope)
    }

    /// Send a GET request, appending `query_params` when it is non-empty
    pub fn get(&self, endpoint: &str, query_params: &Params) -> Result<Option<Value>> {
        let mut uri = self.uri_factory.create_uri(&self.endpoint_uri(endpoint))?;
        if !query_params.is_empty() {
            query::apply(&mut uri, query_params);
        }

        let response = self.send_request(HttpMethod::Get, uri, RequestBody::Empty)?;
        self.handle_response(response)
    }

    /// Send a POST request
    pub fn post(&self, endpoint: &str, body: impl Into<RequestBody>) -> Result<Option<Value>> {
        self.send_with_body(HttpMethod::Post, endpoint, body.into())
    }

    /// Send a PUT request
    pub fn put(&self, endpoint: &str, body: impl Into<RequestBody>) -> Result<Option<Value>> {
        self.send_with_body(HttpMethod::Put, endpoint, body.into())
    }

    /// Send a PATCH request
    pub fn patch(&self, endpoint: &str, body: impl Into<RequestBody>) -> Result<Option<Value>> {
        self.send_with_body(HttpMethod::Patch, endpoint, body.into())
    }

    /// Send a DELETE request
    pub fn delete(&self, endpoint: &str, body: impl Into<RequestBody>) -> Result<Option<Value>> {
        self.send_with_body(HttpMethod::Delete, endpoint, body.into())
    }

    /// Send a DELETE request with the default `[]` body
    pub fn delete_empty(&self, endpoint: &str) -> Result<Option<Value>> {
        self.delete(endpoint, RequestBody::empty_array())
    }

    /// Record rate limit details and decode the body.
    ///
    /// A body that is empty or not valid JSON decodes to `None` rather than
    /// an error, as does a literal `null`.
    pub fn handle_response(&self, response: Box<dyn TransportResponse>) -> Result<Option<Value>> {
        let reset_at = self.rate_limit.update_from_response(&*response);
        let status = response.status();

        let body = response.into_text()?;
        debug!(status, ?reset_at, "Drift API response received");
        trace!(bytes = body.len(), "Drift API response body");

        Ok(decode_envelope(&body))
    }

    /// Accessors for the per-domain facades
    pub fn accounts(&self) -> Accounts<'_> {
        Accounts::new(self)
    }

    pub fn contacts(&self) -> Contacts<'_> {
        Contacts::new(self)
    }

    pub fn conversations(&self) -> Conversations<'_> {
        Conversations::new(self)
    }

    pub fn users(&self) -> Users<'_> {
        Users::new(self)
    }

    pub fn playbooks(&self) -> Playbooks<'_> {
        Playbooks::new(self)
    }

    pub fn admin(&self) -> Admin<'_> {
        Admin::new(self)
    }

    pub fn gdpr(&self) -> Gdpr<'_> {
        Gdpr::new(self)
    }

    fn endpoint_uri(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }

    fn send_with_body(
        &self,
        method: HttpMethod,
        endpoint: &str,
        body: RequestBody,
    ) -> Result<Option<Value>> {
        let uri = self.uri_factory.create_uri(&self.endpoint_uri(endpoint))?;
        let response = self.send_request(method, uri, body)?;
        self.handle_response(response)
    }

    fn send_request(
        &self,
        method: HttpMethod,
        uri: reqwest::Url,
        body: RequestBody,
    ) -> Result<Box<dyn TransportResponse>> {
        let headers = self.request_headers();
        let body = body.into_text()?;

        debug!(%method, %uri, "Sending Drift API request");

        let request = self
            .request_factory
            .create_request(method, uri, headers, body)?;
        self.http_client.send(request)
    }

    /// Defaults, then extra headers, then Authorization
    fn request_headers(&self) -> Vec<(String, String)> {
        let mut headers = vec![
            ("Accept".to_string(), "application/json".to_string()),
            ("Content-Type".to_string(), "application/json".to_string()),
        ];

        for (name, value) in &self.extra_headers {
            set_header(&mut headers, name, value);
        }

        let authorization = format!("Bearer {}", self.access_token.read());
        set_header(&mut headers, "Authorization", &authorization);

        headers
    }
}

/// Insert or overwrite a header, matching names without regard to case
fn set_header(headers: &mut Vec<(String, String)>, name: &str, value: &str) {
    match headers
        .iter_mut()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
    {
        Some(entry) => *entry = (name.to_string(), value.to_string()),
        None => headers.push((name.to_string(), value.to_string())),
    }
}

fn decode_envelope(body: &str) -> Option<Value> {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Null) => None,
        Ok(value) => Some(value),
        Err(e) => {
            if !body.is_empty() {
                debug!(error = %e, "Drift API response body is not JSON");
            }
            None
        }
    }
}
