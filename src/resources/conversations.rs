//! Conversations and messages
//!
//! <https://devdocs.drift.com/docs/conversation-model>

use crate::client::{DriftClient, Params};
use crate::error::Result;
use crate::resources::merge_params;
use serde_json::{json, Value};

/// Message type used for regular chat messages
pub const CHAT: &str = "chat";

/// Message type used for internal notes
pub const PRIVATE_NOTE: &str = "private_note";

/// A message to post into a conversation
#[derive(Debug, Clone, PartialEq)]
pub struct NewMessage {
    pub body: String,
    /// Message type, `chat` unless set otherwise
    pub kind: String,
    /// Sending agent; omitted when empty
    pub user_id: Option<String>,
    /// Button payload; omitted when absent
    pub buttons: Option<Value>,
}

impl NewMessage {
    pub fn chat(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            kind: CHAT.to_string(),
            user_id: None,
            buttons: None,
        }
    }

    pub fn note(body: impl Into<String>) -> Self {
        Self {
            kind: PRIVATE_NOTE.to_string(),
            ..Self::chat(body)
        }
    }

    pub fn from_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn with_buttons(mut self, buttons: Value) -> Self {
        self.buttons = Some(buttons);
        self
    }

    fn into_payload(self) -> Value {
        let mut payload = json!({ "body": self.body, "type": self.kind });
        if let Some(user_id) = self.user_id.filter(|id| !id.is_empty()) {
            payload["userId"] = Value::String(user_id);
        }
        if let Some(buttons) = self.buttons.filter(|b| !is_blank(b)) {
            payload["buttons"] = buttons;
        }
        payload
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

#[derive(Clone, Copy)]
pub struct Conversations<'a> {
    client: &'a DriftClient,
}

impl<'a> Conversations<'a> {
    pub fn new(client: &'a DriftClient) -> Self {
        Self { client }
    }

    /// Start a conversation with a contact
    pub fn create_conversation(
        &self,
        email: &str,
        message: &str,
        options: &Params,
    ) -> Result<Option<Value>> {
        let base = json!({ "message": message, "email": email });
        let payload = merge_params(base.as_object().cloned().unwrap_or_default(), options);
        self.client.post("conversations/new", payload)
    }

    pub fn create_message(&self, conversation_id: &str, message: NewMessage) -> Result<Option<Value>> {
        self.client.post(
            &format!("conversations/{}/messages", conversation_id),
            message.into_payload(),
        )
    }

    /// Post a private note visible only to agents
    pub fn create_note(
        &self,
        conversation_id: &str,
        body: &str,
        user_id: Option<&str>,
    ) -> Result<Option<Value>> {
        let mut note = NewMessage::note(body);
        note.user_id = user_id.map(str::to_string);
        self.create_message(conversation_id, note)
    }

    pub fn list(&self, query: &Params) -> Result<Option<Value>> {
        self.client.get("conversations/list", query)
    }

    pub fn get(&self, conversation_id: &str, query: &Params) -> Result<Option<Value>> {
        self.client
            .get(&format!("conversations/{}", conversation_id), query)
    }

    pub fn messages(&self, conversation_id: &str, query: &Params) -> Result<Option<Value>> {
        self.client
            .get(&format!("conversations/{}/messages", conversation_id), query)
    }

    /// Transcript as plain text, or as structured JSON when `json` is set.
    ///
    /// The plain transcript is not JSON, so it decodes to `None`.
    pub fn transcript(&self, conversation_id: &str, json: bool, query: &Params) -> Result<Option<Value>> {
        let endpoint = if json {
            format!("conversations/{}/json_transcript", conversation_id)
        } else {
            format!("conversations/{}/transcript", conversation_id)
        };
        self.client.get(&endpoint, query)
    }

    pub fn attachments(&self, document_id: &str, query: &Params) -> Result<Option<Value>> {
        self.client
            .get(&format!("attachments/{}/data", document_id), query)
    }

    /// Conversation report (`filter`, `metrics` in the body)
    pub fn reporting(&self, options: &Params) -> Result<Option<Value>> {
        self.client.post("reports/conversations", options.clone())
    }

    /// Counts of conversations by status
    pub fn stats(&self, query: &Params) -> Result<Option<Value>> {
        self.client.get("conversations/stats", query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::{params, RecordingSender};
    use crate::client::{BufferedResponse, HttpMethod, Transports};
    use crate::config::ClientConfig;

    fn client(sender: &RecordingSender) -> DriftClient {
        DriftClient::with_transports(ClientConfig::new("t"), Transports::with_sender(sender.clone()))
    }

    fn sent_body(sender: &RecordingSender) -> Value {
        serde_json::from_str(sender.last_request().body.as_deref().unwrap()).unwrap()
    }

    #[test]
    fn test_message_payloads() {
        assert_eq!(
            NewMessage::chat("hi").into_payload(),
            json!({"body": "hi", "type": "chat"})
        );
        assert_eq!(
            NewMessage::chat("hi").from_user("").into_payload(),
            json!({"body": "hi", "type": "chat"})
        );
        assert_eq!(
            NewMessage::note("psst")
                .from_user("7")
                .with_buttons(json!([{"label": "Yes"}]))
                .into_payload(),
            json!({"body": "psst", "type": "private_note", "userId": "7", "buttons": [{"label": "Yes"}]})
        );
    }

    #[test]
    fn test_create_conversation_merges_options() {
        let sender = RecordingSender::new();
        client(&sender)
            .conversations()
            .create_conversation("jane@example.com", "Hello", &params(json!({"userId": 3})))
            .unwrap();

        assert_eq!(
            sender.last_request().uri.as_str(),
            "https://driftapi.com/conversations/new"
        );
        assert_eq!(
            sent_body(&sender),
            json!({"message": "Hello", "email": "jane@example.com", "userId": 3})
        );
    }

    #[test]
    fn test_create_note() {
        let sender = RecordingSender::new();
        client(&sender)
            .conversations()
            .create_note("88", "internal", Some("4"))
            .unwrap();

        let request = sender.last_request();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.uri.as_str(), "https://driftapi.com/conversations/88/messages");
        assert_eq!(
            sent_body(&sender),
            json!({"body": "internal", "type": "private_note", "userId": "4"})
        );
    }

    #[test]
    fn test_transcript_variants() {
        let sender = RecordingSender::new();
        let client = client(&sender);
        let conversations = client.conversations();

        sender.push_response(BufferedResponse::ok("Agent: hi\nVisitor: hello"));
        let plain = conversations.transcript("88", false, &Params::new()).unwrap();
        assert_eq!(plain, None);
        assert_eq!(
            sender.last_request().uri.as_str(),
            "https://driftapi.com/conversations/88/transcript"
        );

        sender.push_response(BufferedResponse::ok(r#"[{"author":"Agent"}]"#));
        let structured = conversations.transcript("88", true, &Params::new()).unwrap();
        assert_eq!(structured, Some(json!([{"author": "Agent"}])));
        assert_eq!(
            sender.last_request().uri.as_str(),
            "https://driftapi.com/conversations/88/json_transcript"
        );
    }

    #[test]
    fn test_read_endpoints() {
        let sender = RecordingSender::new();
        let client = client(&sender);
        let conversations = client.conversations();

        conversations.list(&params(json!({"statusId": [1, 2]}))).unwrap();
        conversations.get("88", &Params::new()).unwrap();
        conversations.messages("88", &Params::new()).unwrap();
        conversations.attachments("doc-1", &Params::new()).unwrap();
        conversations.stats(&Params::new()).unwrap();
        conversations.reporting(&params(json!({"metrics": ["count"]}))).unwrap();

        let uris: Vec<String> = sender.requests().iter().map(|r| r.uri.to_string()).collect();
        assert_eq!(
            uris,
            vec![
                "https://driftapi.com/conversations/list?statusId%5B0%5D=1&statusId%5B1%5D=2",
                "https://driftapi.com/conversations/88",
                "https://driftapi.com/conversations/88/messages",
                "https://driftapi.com/attachments/doc-1/data",
                "https://driftapi.com/conversations/stats",
                "https://driftapi.com/reports/conversations",
            ]
        );
        assert_eq!(sender.last_request().method, HttpMethod::Post);
    }
}
