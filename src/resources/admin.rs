//! App administration

use crate::client::DriftClient;
use crate::error::Result;
use serde_json::{json, Value};

#[derive(Clone, Copy)]
pub struct Admin<'a> {
    client: &'a DriftClient,
}

impl<'a> Admin<'a> {
    pub fn new(client: &'a DriftClient) -> Self {
        Self { client }
    }

    /// Uninstall the app from the authorizing organization
    pub fn uninstall(&self, client_id: &str, client_secret: &str) -> Result<Option<Value>> {
        self.client.post(
            "app/uninstall",
            json!({"clientId": client_id, "clientSecret": client_secret}),
        )
    }

    /// Look up the organization and scopes behind an access token
    pub fn token_info(&self, access_token: &str) -> Result<Option<Value>> {
        self.client
            .post("app/token_info", json!({"accessToken": access_token}))
    }
}
