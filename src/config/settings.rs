//! Client Settings
//!
//! Defines the configuration schema for a Drift client.

use crate::client::DRIFT_API_URL;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

fn default_base_url() -> String {
    DRIFT_API_URL.to_string()
}

/// Settings a `DriftClient` is built from
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Bearer token; must be present but may be empty
    pub access_token: String,

    /// Additional headers to send with every request
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub extra_headers: HashMap<String, String>,

    /// API root (only worth changing to point at a test server)
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            extra_headers: HashMap::new(),
            base_url: default_base_url(),
        }
    }

    /// Add a header sent with every request
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers.insert(name.into(), value.into());
        self
    }

    /// Point the client at a different API root
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

// Keeps the token out of logs
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("access_token", &"<redacted>")
            .field("extra_headers", &self.extra_headers)
            .field("base_url", &self.base_url)
            .finish()
    }
}
