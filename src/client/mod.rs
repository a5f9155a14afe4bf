//! Client Module
//!
//! Request dispatch, transports and rate limit tracking.

pub mod body;
pub mod http;
pub mod query;
pub mod rate_limiter;
pub mod transport;

pub use body::RequestBody;
pub use http::{DriftClient, DRIFT_API_URL};
pub use query::Params;
pub use rate_limiter::{RateLimitDetails, RateLimitSlot, RESET_HEADER};
pub use transport::{
    BufferedResponse, DefaultRequestFactory, DefaultUriFactory, HttpMethod, HttpRequest,
    HttpSender, ReqwestSender, RequestFactory, TransportResponse, Transports, UriFactory,
};
