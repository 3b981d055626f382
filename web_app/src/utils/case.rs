//! snake_case / camelCase translation of JSON object keys.
//!
//! Rows and models use snake_case field names; request and response bodies
//! use camelCase. The translation renames keys only, string values such as
//! `"due_soon"` are left untouched.

use serde_json::{Map, Value};

pub fn to_snake_case(key: &str) -> String {
    let mut snake = String::with_capacity(key.len() + 4);
    for (i, c) in key.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                snake.push('_');
            }
            snake.push(c.to_ascii_lowercase());
        } else {
            snake.push(c);
        }
    }
    snake
}

pub fn to_camel_case(key: &str) -> String {
    let mut camel = String::with_capacity(key.len());
    let mut upper_next = false;
    for c in key.chars() {
        if c == '_' && !camel.is_empty() {
            upper_next = true;
        } else if upper_next {
            camel.push(c.to_ascii_uppercase());
            upper_next = false;
        } else {
            camel.push(c);
        }
    }
    camel
}

fn rename_keys(value: Value, rename: fn(&str) -> String) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (rename(&k), rename_keys(v, rename)))
                .collect::<Map<_, _>>(),
        ),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|v| rename_keys(v, rename))
                .collect(),
        ),
        other => other,
    }
}

/// Recursively renames every object key to camelCase
pub fn camelize_keys(value: Value) -> Value {
    rename_keys(value, to_camel_case)
}

/// Recursively renames every object key to snake_case
pub fn snakify_keys(value: Value) -> Value {
    rename_keys(value, to_snake_case)
}
