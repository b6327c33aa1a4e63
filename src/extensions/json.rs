// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Pretty JSON dumps for debugging and log lines.
//!
//! Output shape:
//!
//! ```text
//! {
//!   "Object": { ... },
//!   "Type": "my_crate::Order"
//! }
//! ```
//!
//! Slow, because it goes through `serde_json::Value`. Keep it off hot paths.

use serde::Serialize;
use serde_json::{Map, Value};

const SERIALIZE_ERROR_MARKER: &str = "Error while serializing";

/// Render `value` as indented JSON together with its type name.
///
/// Never fails. A value that serializes to `null` is reported as the string
/// `"null"`. If `Serialize` returns an error, `"Object"` holds
/// `"Error while serializing"` instead.
pub fn to_debug_json<T: Serialize + ?Sized>(value: &T) -> String {
    let type_name = std::any::type_name::<T>();
    let object = match serde_json::to_value(value) {
        Ok(Value::Null) => Value::String("null".to_owned()),
        Ok(object) => object,
        Err(err) => {
            tracing::debug!(type_name, error = %err, "debug json serialization failed");
            Value::String(SERIALIZE_ERROR_MARKER.to_owned())
        }
    };
    render(type_name, object)
}

fn render(type_name: &str, object: Value) -> String {
    let mut envelope = Map::new();
    envelope.insert("Type".to_owned(), Value::String(type_name.to_owned()));
    envelope.insert("Object".to_owned(), object);
    // Alternate Display on `Value` is the pretty printer and cannot fail.
    format!("{:#}", Value::Object(envelope))
}
