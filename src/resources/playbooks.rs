//! Playbooks

use crate::client::{DriftClient, Params};
use crate::error::Result;
use serde_json::Value;

#[derive(Clone, Copy)]
pub struct Playbooks<'a> {
    client: &'a DriftClient,
}

impl<'a> Playbooks<'a> {
    pub fn new(client: &'a DriftClient) -> Self {
        Self { client }
    }

    pub fn list(&self, query: &Params) -> Result<Option<Value>> {
        self.client.get("playbooks/list", query)
    }

    /// Conversational landing pages
    pub fn clp(&self, query: &Params) -> Result<Option<Value>> {
        self.client.get("playbooks/clp", query)
    }
}
