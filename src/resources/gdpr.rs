//! GDPR requests
//!
//! Both calls are asynchronous on Drift's side: the response only confirms
//! the request was queued.

use crate::client::DriftClient;
use crate::error::Result;
use serde_json::{json, Value};

#[derive(Clone, Copy)]
pub struct Gdpr<'a> {
    client: &'a DriftClient,
}

impl<'a> Gdpr<'a> {
    pub fn new(client: &'a DriftClient) -> Self {
        Self { client }
    }

    /// Email the data Drift holds about a contact to the org admin
    pub fn retrieve(&self, email: &str) -> Result<Option<Value>> {
        self.client.post("gdpr/retrieve", json!({"email": email}))
    }

    /// Erase a contact's data
    pub fn delete(&self, email: &str) -> Result<Option<Value>> {
        self.client.post("gdpr/delete", json!({"email": email}))
    }
}
