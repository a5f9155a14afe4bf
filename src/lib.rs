//! drift-client
//!
//! A blocking client for the Drift conversational-commerce API.
//!
//! ```no_run
//! use drift_client::{DriftClient, Params};
//!
//! # fn main() -> drift_client::Result<()> {
//! let client = DriftClient::new("my-token")?;
//!
//! let mut query = Params::new();
//! query.insert("limit".into(), 50.into());
//! let first = client.contacts().list(&query)?;
//!
//! if let Some(envelope) = first {
//!     if client.has_more(&envelope) {
//!         query.insert("page".into(), client.next_page(&envelope).into());
//!         let _second = client.contacts().list(&query)?;
//!     }
//! }
//!
//! println!("quota resets at {:?}", client.rate_limit_details().reset_at);
//! # Ok(())
//! # }
//! ```
//!
//! Requests go through three replaceable transport handles (see
//! [`client::transport`]). Responses decode to an untyped
//! [`serde_json::Value`]; a body that is empty or not JSON decodes to `None`.

pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod pagination;
pub mod resources;

pub use client::{
    BufferedResponse, DriftClient, HttpMethod, HttpRequest, HttpSender, Params,
    RateLimitDetails, RequestBody, RequestFactory, ReqwestSender, TransportResponse, Transports,
    UriFactory, DRIFT_API_URL,
};
pub use config::{ClientConfig, ConfigLoader};
pub use error::{DriftError, Result};
pub use pagination::{has_more, next_page, PageInfo};
