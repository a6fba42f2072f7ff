use std::num::ParseIntError;

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use thiserror::Error;

use crate::config::ConfigError;

/// Request-level failure. Malformed and unknown ids are deliberately the same
/// outcome: a 404 with no body.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found")]
    NotFound,
}

impl From<ParseIntError> for AppError {
    fn from(_: ParseIntError) -> Self {
        AppError::NotFound
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).finish()
    }
}

/// Failure that stops the process: bad configuration, a listener that cannot
/// bind, or a server that dies while running.
#[derive(Debug, Error)]
pub enum ServeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
