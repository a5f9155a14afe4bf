//! Resource Facades
//!
//! Thin per-domain wrappers. Each one borrows a `DriftClient` and maps its
//! methods onto fixed endpoints; none of them hold state of their own.

pub mod accounts;
pub mod admin;
pub mod contacts;
pub mod conversations;
pub mod gdpr;
pub mod playbooks;
pub mod users;

pub use accounts::Accounts;
pub use admin::Admin;
pub use contacts::Contacts;
pub use conversations::{Conversations, NewMessage};
pub use gdpr::Gdpr;
pub use playbooks::Playbooks;
pub use users::Users;

use crate::client::Params;
use serde_json::Value;

/// `base` with every entry of `extra` laid over it
fn merge_params(mut base: Params, extra: &Params) -> Params {
    for (key, value) in extra {
        base.insert(key.clone(), value.clone());
    }
    base
}

/// Single-entry parameter map
fn single(key: &str, value: impl Into<Value>) -> Params {
    let mut params = Params::new();
    params.insert(key.to_string(), value.into());
    params
}
