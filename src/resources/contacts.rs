//! Contacts
//!
//! <https://devdocs.drift.com/docs/contact-model>

use crate::client::{DriftClient, Params};
use crate::error::Result;
use crate::resources::{merge_params, single};
use serde_json::{json, Value};

/// Site visitors and leads
#[derive(Clone, Copy)]
pub struct Contacts<'a> {
    client: &'a DriftClient,
}

impl<'a> Contacts<'a> {
    pub fn new(client: &'a DriftClient) -> Self {
        Self { client }
    }

    /// List contacts (cursor paging through `next` / `limit`)
    pub fn list(&self, query: &Params) -> Result<Option<Value>> {
        self.client.get("contacts/list", query)
    }

    pub fn create(&self, attributes: &Params) -> Result<Option<Value>> {
        self.client
            .post("contacts", json!({ "attributes": attributes }))
    }

    pub fn update(&self, contact_id: &str, attributes: &Params) -> Result<Option<Value>> {
        self.client.patch(
            &format!("contacts/{}", contact_id),
            json!({ "attributes": attributes }),
        )
    }

    /// Remove a contact. Not a GDPR erasure; see [`crate::resources::Gdpr::delete`].
    pub fn delete(&self, contact_id: &str) -> Result<Option<Value>> {
        self.client
            .delete_empty(&format!("contacts/{}", contact_id))
    }

    /// Unsubscribe an address from Drift emails
    pub fn unsubscribe(&self, email: &str) -> Result<Option<Value>> {
        self.client.post("emails/unsubscribe", json!([email]))
    }

    /// Post a timeline event (`contactId` or `externalId`, `event`, `createdAt`, ...)
    pub fn add_to_timeline(&self, parameters: &Params) -> Result<Option<Value>> {
        self.client.post("contacts/timeline", parameters.clone())
    }

    /// Update a contact addressed by an external identifier of type `id_type`
    pub fn update_by_external_id(
        &self,
        id_type: &str,
        id: &str,
        attributes: &Params,
    ) -> Result<Option<Value>> {
        self.client.patch(
            "contacts/normalize",
            json!({ "idType": id_type, "id": id, "attributes": attributes }),
        )
    }

    pub fn get_by_id(&self, contact_id: &str, query: &Params) -> Result<Option<Value>> {
        self.client.get(&format!("users/{}", contact_id), query)
    }

    pub fn get_by_email(&self, email: &str, query: &Params) -> Result<Option<Value>> {
        self.client
            .get("contacts", &merge_params(single("email", email), query))
    }

    /// Custom attributes defined for the organization
    pub fn custom_attributes(&self) -> Result<Option<Value>> {
        self.client.get("contacts/attributes", &Params::new())
    }
}
