//! Transport Handles
//!
//! The three collaborators the client dispatches through: a URI factory, a
//! request factory and a request sender. Each is a trait so callers can swap
//! in their own implementation (a test double, a proxying client, a different
//! HTTP stack). `Transports::new` wires up the reqwest-backed defaults.

use crate::error::{DriftError, Result};
use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, Url};
use std::fmt;
use tracing::debug;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }

    fn to_reqwest(self) -> Method {
        match self {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An HTTP request described as plain data.
///
/// Built by a `RequestFactory` and handed to an `HttpSender`. Headers keep
/// their insertion order.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub uri: Url,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Look up a header value by name, ignoring ASCII case
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// A response handed back by an `HttpSender`.
///
/// The body is read through `into_text`, which consumes the response, so it
/// can be read at most once.
pub trait TransportResponse {
    /// HTTP status code
    fn status(&self) -> u16;

    /// Value of the named header, ignoring ASCII case
    fn header(&self, name: &str) -> Option<String>;

    /// Read the whole body as text
    fn into_text(self: Box<Self>) -> Result<String>;
}

/// Sends a request and returns the response.
///
/// Errors returned here reach the caller of the verb operation untouched.
pub trait HttpSender: Send + Sync {
    fn send(&self, request: HttpRequest) -> Result<Box<dyn TransportResponse>>;
}

/// Assembles an `HttpRequest` from its parts.
pub trait RequestFactory: Send + Sync {
    fn create_request(
        &self,
        method: HttpMethod,
        uri: Url,
        headers: Vec<(String, String)>,
        body: Option<String>,
    ) -> Result<HttpRequest>;
}

/// Turns an absolute URI string into a `Url`.
pub trait UriFactory: Send + Sync {
    fn create_uri(&self, uri: &str) -> Result<Url>;
}

/// Default URI factory: strict parsing through `Url::parse`
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultUriFactory;

impl UriFactory for DefaultUriFactory {
    fn create_uri(&self, uri: &str) -> Result<Url> {
        Url::parse(uri).map_err(|e| DriftError::InvalidUri(format!("{}: {}", uri, e)))
    }
}

/// Default request factory: copies the parts into an `HttpRequest`
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRequestFactory;

impl RequestFactory for DefaultRequestFactory {
    fn create_request(
        &self,
        method: HttpMethod,
        uri: Url,
        headers: Vec<(String, String)>,
        body: Option<String>,
    ) -> Result<HttpRequest> {
        Ok(HttpRequest {
            method,
            uri,
            headers,
            body,
        })
    }
}

/// Blocking reqwest sender.
///
/// 4xx and 5xx answers are turned into `DriftError::Client` and
/// `DriftError::Server` before the response reaches the client, so rate
/// limit details are not updated for them.
#[derive(Debug, Clone)]
pub struct ReqwestSender {
    client: Client,
}

impl ReqwestSender {
    /// Create a sender with a fresh reqwest client
    pub fn new() -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self { client })
    }

    /// Wrap an existing reqwest client (custom timeouts, proxies, TLS)
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    fn header_map(headers: &[(String, String)]) -> Result<HeaderMap> {
        let mut map = HeaderMap::with_capacity(headers.len());
        for (name, value) in headers {
            let header_name = HeaderName::try_from(name.as_str())
                .map_err(|e| DriftError::InvalidHeader(format!("{}: {}", name, e)))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|e| DriftError::InvalidHeader(format!("{}: {}", name, e)))?;
            map.insert(header_name, header_value);
        }
        Ok(map)
    }
}

impl HttpSender for ReqwestSender {
    fn send(&self, request: HttpRequest) -> Result<Box<dyn TransportResponse>> {
        let headers = Self::header_map(&request.headers)?;

        let mut builder = self
            .client
            .request(request.method.to_reqwest(), request.uri)
            .headers(headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send()?;
        let status = response.status();

        if status.is_client_error() || status.is_server_error() {
            let status = status.as_u16();
            let body = match response.text() {
                Ok(body) => body,
                Err(e) => {
                    debug!(status, error = %e, "Failed to read Drift API error body");
                    String::new()
                }
            };
            return Err(if status < 500 {
                DriftError::Client { status, body }
            } else {
                DriftError::Server { status, body }
            });
        }

        Ok(Box::new(ReqwestResponse { inner: response }))
    }
}

/// `TransportResponse` over a blocking reqwest response
#[derive(Debug)]
pub struct ReqwestResponse {
    inner: Response,
}

impl TransportResponse for ReqwestResponse {
    fn status(&self) -> u16 {
        self.inner.status().as_u16()
    }

    fn header(&self, name: &str) -> Option<String> {
        self.inner
            .headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    }

    fn into_text(self: Box<Self>) -> Result<String> {
        Ok(self.inner.text()?)
    }
}

/// A fully buffered response.
///
/// Handy for custom senders that already hold the whole body, and for tests.
#[derive(Debug, Clone, Default)]
pub struct BufferedResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl BufferedResponse {
    /// A 200 response with the given body and no headers
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    /// Add a header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

impl TransportResponse for BufferedResponse {
    fn status(&self) -> u16 {
        self.status
    }

    fn header(&self, name: &str) -> Option<String> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.clone())
    }

    fn into_text(self: Box<Self>) -> Result<String> {
        Ok(self.body)
    }
}

/// The set of transport handles a client dispatches through
pub struct Transports {
    pub sender: Box<dyn HttpSender>,
    pub request_factory: Box<dyn RequestFactory>,
    pub uri_factory: Box<dyn UriFactory>,
}

impl Transports {
    /// Reqwest sender with the default request and URI factories
    pub fn new() -> Result<Self> {
        Ok(Self::with_sender(ReqwestSender::new()?))
    }

    /// Custom sender with the default request and URI factories
    pub fn with_sender(sender: impl HttpSender + 'static) -> Self {
        Self {
            sender: Box::new(sender),
            request_factory: Box::new(DefaultRequestFactory),
            uri_factory: Box::new(DefaultUriFactory),
        }
    }
}
