use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::env;
use std::fmt::{self, Debug, Display};

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

impl Error {
    pub fn is_internal(&self) -> bool {
        (1..=99).contains(&self.code)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

impl std::error::Error for Error {}

impl From<env::VarError> for Error {
    fn from(err: env::VarError) -> Self {
        env_var_error(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        reqwest_error(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        serde_error(err)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_message) = match self.code {
            1..=99 => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
            _ => (StatusCode::BAD_REQUEST, self.message.as_str()),
        };

        let body = Json(json!({
            "code": self.code,
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

pub fn invalid_input_error() -> Error {
    Error {
        code: 100,
        message: "invalid input".into(),
    }
}

pub fn missing_input_error() -> Error {
    Error {
        code: 101,
        message: "Source or destination is missing".into(),
    }
}

pub fn geocode_failure_error(address: &str) -> Error {
    Error {
        code: 102,
        message: format!("Could not locate {}", address),
    }
}

pub fn generation_failure_error() -> Error {
    Error {
        code: 103,
        message: "place generation failed".into(),
    }
}

pub fn generation_empty_error() -> Error {
    Error {
        code: 104,
        message: "place generation returned no places".into(),
    }
}

pub fn env_var_error(_: env::VarError) -> Error {
    Error {
        code: 1,
        message: "environment variable error".into(),
    }
}

pub fn reqwest_error(_: reqwest::Error) -> Error {
    Error {
        code: 3,
        message: "reqwest error".into(),
    }
}

pub fn upstream_error() -> Error {
    Error {
        code: 4,
        message: "upstream error".into(),
    }
}

pub fn serde_error<T: Debug>(_: T) -> Error {
    Error {
        code: 5,
        message: "serialization error".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_codes_hide_their_message() {
        let response = upstream_error().into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = missing_input_error().into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn geocode_failure_names_the_address() {
        let err = geocode_failure_error("Atlantis");
        assert_eq!(err.message, "Could not locate Atlantis");
        assert!(!err.is_internal());
    }
}
