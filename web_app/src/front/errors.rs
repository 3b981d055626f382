use derive_more::{Display, Error};
use log::error;
use ntex::{http, web};
use serde::Serialize;

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

fn json_error(status: http::StatusCode, kind: &str, message: String) -> web::HttpResponse {
    web::HttpResponse::build(status).json(&ErrorBody {
        error: kind,
        message,
    })
}

#[derive(Debug, Display, Error)]
pub enum UserError {
    #[display("resource not found")]
    NotFound,
    #[display("identity cookie missing or invalid")]
    Unauthorized,
    #[display("invalid input values: {_0}")]
    FormInputValueError(#[error(not(source))] String),
}

impl UserError {
    fn kind(&self) -> &'static str {
        match self {
            UserError::NotFound => "notFound",
            UserError::Unauthorized => "unauthorized",
            UserError::FormInputValueError(_) => "invalidInput",
        }
    }
}

impl web::error::WebResponseError for UserError {
    fn error_response(&self, _: &web::HttpRequest) -> web::HttpResponse {
        error!("{:#?}", self);

        json_error(self.status_code(), self.kind(), self.to_string())
    }

    fn status_code(&self) -> http::StatusCode {
        match *self {
            UserError::NotFound => http::StatusCode::NOT_FOUND,
            UserError::Unauthorized => http::StatusCode::UNAUTHORIZED,
            UserError::FormInputValueError(_) => http::StatusCode::BAD_REQUEST,
        }
    }
}

#[derive(Debug, Display, Error)]
pub enum ServerError {
    #[display("data could not be loaded")]
    LoadError(#[error(not(source))] String),
    #[display("data could not be saved")]
    WriteError(#[error(not(source))] String),
}

impl ServerError {
    fn get_error_message(&self) -> String {
        match self {
            ServerError::LoadError(msg) => format!("[LoadError] {:#?}", msg),
            ServerError::WriteError(msg) => format!("[WriteError] {:#?}", msg),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ServerError::LoadError(_) => "loadError",
            ServerError::WriteError(_) => "writeError",
        }
    }
}

impl web::error::WebResponseError for ServerError {
    fn error_response(&self, _: &web::HttpRequest) -> web::HttpResponse {
        // the internal details stay in the logs, the client only gets the kind
        error!("{}", self.get_error_message());
        logfire::error!("{message}", message = self.get_error_message());

        json_error(self.status_code(), self.kind(), self.to_string())
    }

    fn status_code(&self) -> http::StatusCode {
        http::StatusCode::INTERNAL_SERVER_ERROR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ntex::web::error::WebResponseError;

    #[test]
    fn test_user_error_status_codes() {
        assert_eq!(UserError::NotFound.status_code(), http::StatusCode::NOT_FOUND);
        assert_eq!(
            UserError::Unauthorized.status_code(),
            http::StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            UserError::FormInputValueError("weight must be positive".into()).status_code(),
            http::StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_server_error_hides_details() {
        let err = ServerError::WriteError("UNIQUE constraint failed".into());
        assert_eq!(err.status_code(), http::StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "data could not be saved");
        assert_eq!(err.kind(), "writeError");
    }

    #[test]
    fn test_form_error_message_keeps_reason() {
        let err = UserError::FormInputValueError("fecal score must be between 1 and 7".into());
        assert_eq!(
            err.to_string(),
            "invalid input values: fecal score must be between 1 and 7"
        );
    }
}
