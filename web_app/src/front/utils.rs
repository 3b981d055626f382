use anyhow::bail;
use chrono_tz::Tz;
use ntex::{http, web};
use serde::{Serialize, de::DeserializeOwned};

use crate::{consts, front::errors, utils::case};

pub fn extract_usertimezone(request_headers: &http::HeaderMap) -> anyhow::Result<Tz> {
    let user_timezone = request_headers
        .get(consts::TIMEZONE_HEADER)
        .map(|v| v.to_str().map(|tz| tz.parse::<Tz>()));

    if let Some(Ok(Ok(tz))) = user_timezone {
        return Ok(tz);
    }

    bail!("cant parse user time zone")
}

/// Reads a camelCase request body into a snake_case form
pub fn parse_body<T: DeserializeOwned>(body: serde_json::Value) -> Result<T, web::Error> {
    serde_json::from_value(case::snakify_keys(body))
        .map_err(|e| errors::UserError::FormInputValueError(e.to_string()).into())
}

/// [ntex responder](ntex::web::HttpResponse) with `body` serialized using camelCase keys
pub fn json_response<T: Serialize>(
    status: http::StatusCode,
    body: &T,
) -> Result<web::HttpResponse, web::Error> {
    let value = serde_json::to_value(body).map_err(|e| {
        errors::ServerError::LoadError(format!("response body couldnt be serialized: {e}"))
    })?;

    Ok(web::HttpResponse::build(status).json(&case::camelize_keys(value)))
}

pub fn ok_json<T: Serialize>(body: &T) -> Result<web::HttpResponse, web::Error> {
    json_response(http::StatusCode::OK, body)
}

/// Body returned by creation endpoints
#[derive(Serialize)]
pub struct Created {
    pub id: i64,
}
