//! Users (agents of the organization)

use crate::client::{DriftClient, Params};
use crate::error::Result;
use serde_json::Value;

#[derive(Clone, Copy)]
pub struct Users<'a> {
    client: &'a DriftClient,
}

impl<'a> Users<'a> {
    pub fn new(client: &'a DriftClient) -> Self {
        Self { client }
    }

    pub fn list(&self, query: &Params) -> Result<Option<Value>> {
        self.client.get("users/list", query)
    }

    /// Update a user; the id travels in the query string
    pub fn update(&self, user_id: &str, attributes: &Params) -> Result<Option<Value>> {
        self.client
            .patch(&format!("users/update?userId={}", user_id), attributes.clone())
    }

    pub fn get(&self, user_id: &str) -> Result<Option<Value>> {
        self.client.get(&format!("users/{}", user_id), &Params::new())
    }

    /// Meetings booked across the organization (`min_start_time`, `max_start_time`)
    pub fn meetings(&self, query: &Params) -> Result<Option<Value>> {
        self.client.get("users/meetings/org", query)
    }
}

#[cfg(test)]
mod tests {
    use crate::client::testing::{params, RecordingSender};
    use crate::client::{HttpMethod, Transports};
    use crate::config::ClientConfig;
    use crate::DriftClient;
    use serde_json::json;

    #[test]
    fn test_update_keeps_id_in_query() {
        let sender = RecordingSender::new();
        let client =
            DriftClient::with_transports(ClientConfig::new("t"), Transports::with_sender(sender.clone()));

        client
            .users()
            .update("42", &params(json!({"availability": "AVAILABLE"})))
            .unwrap();

        let request = sender.last_request();
        assert_eq!(request.method, HttpMethod::Patch);
        assert_eq!(request.uri.as_str(), "https://driftapi.com/users/update?userId=42");
        assert_eq!(request.body.as_deref(), Some(r#"{"availability":"AVAILABLE"}"#));
    }
}
