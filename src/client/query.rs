//! Query String Encoding
//!
//! Flattens a JSON parameter map into form-urlencoded pairs using bracket
//! notation for nested values (`tags[0]=a`, `filter[owner]=7`).

use reqwest::Url;
use serde_json::{Map, Value};

/// Query or option parameters passed to the verb operations and facades
pub type Params = Map<String, Value>;

/// Flatten parameters into ordered key/value pairs.
///
/// Strings are kept as-is, numbers use their JSON form, booleans become
/// `1`/`0` and nulls are dropped.
pub fn flatten(params: &Params) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for (key, value) in params {
        push_pairs(&mut pairs, key.clone(), value);
    }
    pairs
}

fn push_pairs(pairs: &mut Vec<(String, String)>, key: String, value: &Value) {
    match value {
        Value::Null => {}
        Value::Bool(flag) => pairs.push((key, if *flag { "1" } else { "0" }.to_string())),
        Value::Number(number) => pairs.push((key, number.to_string())),
        Value::String(text) => pairs.push((key, text.clone())),
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                push_pairs(pairs, format!("{}[{}]", key, index), item);
            }
        }
        Value::Object(map) => {
            for (sub_key, item) in map {
                push_pairs(pairs, format!("{}[{}]", key, sub_key), item);
            }
        }
    }
}

/// Replace the query of `uri` with the encoded parameters.
///
/// Parameters that flatten to nothing leave the URI without a query.
pub fn apply(uri: &mut Url, params: &Params) {
    let pairs = flatten(params);
    uri.set_query(None);
    if !pairs.is_empty() {
        uri.query_pairs_mut().extend_pairs(pairs);
    }
}
