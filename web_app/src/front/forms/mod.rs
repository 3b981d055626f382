//! Request bodies accepted by the JSON endpoints.
//!
//! Every form is validated before it becomes a model, so nothing invalid
//! reaches the repository. Free text is stored as sent (trimmed); clients
//! escape it when rendering.

pub mod health;
pub mod logs;
pub mod puppy;

use crate::{consts, front::errors::UserError};

fn invalid(msg: impl Into<String>) -> UserError {
    UserError::FormInputValueError(msg.into())
}

/// Trims a required text field
fn required_text(field: &str, value: &str, max_len: usize) -> Result<String, UserError> {
    let value = value.trim().to_string();

    if value.is_empty() {
        return Err(invalid(format!("{field} is required")));
    }
    if value.chars().count() > max_len {
        return Err(invalid(format!("{field} is longer than {max_len} characters")));
    }

    Ok(value)
}

/// Trims an optional text field, blank values become `None`
fn optional_text(field: &str, value: Option<String>) -> Result<Option<String>, UserError> {
    let Some(value) = value.map(|v| v.trim().to_string()) else {
        return Ok(None);
    };

    if value.is_empty() {
        return Ok(None);
    }
    if value.chars().count() > consts::MAX_TEXT_LEN {
        return Err(invalid(format!(
            "{field} is longer than {} characters",
            consts::MAX_TEXT_LEN
        )));
    }

    Ok(Some(value))
}

fn percentage(field: &str, value: f64) -> Result<f64, UserError> {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(invalid(format!("{field} must be a percentage between 0 and 100")));
    }

    Ok(value)
}

fn positive(field: &str, value: f64) -> Result<f64, UserError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(invalid(format!("{field} must be greater than 0")));
    }

    Ok(value)
}
