//! Accounts
//!
//! <https://devdocs.drift.com/docs/account-model>

use crate::client::{DriftClient, Params};
use crate::error::Result;
use serde_json::Value;

/// Company accounts
#[derive(Clone, Copy)]
pub struct Accounts<'a> {
    client: &'a DriftClient,
}

impl<'a> Accounts<'a> {
    pub fn new(client: &'a DriftClient) -> Self {
        Self { client }
    }

    /// Create an account
    pub fn create(&self, options: &Params) -> Result<Option<Value>> {
        self.client.post("accounts/create", options.clone())
    }

    /// List accounts (`index`, `size` paging parameters)
    pub fn list(&self, query: &Params) -> Result<Option<Value>> {
        self.client.get("accounts", query)
    }

    /// Retrieve one account
    pub fn get(&self, account_id: &str, query: &Params) -> Result<Option<Value>> {
        self.client.get(&format!("accounts/{}", account_id), query)
    }

    /// Update an account; the owner and account id travel in `options`
    pub fn update(&self, options: &Params) -> Result<Option<Value>> {
        self.client.patch("accounts/update", options.clone())
    }

    pub fn delete(&self, account_id: &str) -> Result<Option<Value>> {
        self.client.delete_empty(&format!("accounts/{}", account_id))
    }
}
