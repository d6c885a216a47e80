use crate::db::StoreError;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    DatabaseError(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    message: String,
}

impl From<StoreError> for AppError {
    /// Failed read: a missing row is 404, anything else is a backend failure.
    fn from(err: StoreError) -> Self {
        let msg = err.to_string();
        match err {
            StoreError::NotFound => AppError::NotFound(msg),
            StoreError::Database(_) => AppError::DatabaseError(msg),
        }
    }
}

impl AppError {
    /// Failed write: a missing row is 404, a rejected statement is the client's fault.
    pub fn from_write(err: StoreError) -> Self {
        let msg = err.to_string();
        match err {
            StoreError::NotFound => AppError::NotFound(msg),
            StoreError::Database(_) => AppError::BadRequest(msg),
        }
    }

    /// Prefix the message with what the handler was doing.
    pub fn context(self, context: &str) -> Self {
        match self {
            AppError::BadRequest(msg) => AppError::BadRequest(format!("{}: {}", context, msg)),
            AppError::NotFound(msg) => AppError::NotFound(format!("{}: {}", context, msg)),
            AppError::DatabaseError(msg) => AppError::DatabaseError(format!("{}: {}", context, msg)),
        }
    }

    fn message(&self) -> &str {
        match self {
            AppError::BadRequest(msg) | AppError::NotFound(msg) | AppError::DatabaseError(msg) => msg,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AppError::DatabaseError(msg) => write!(f, "Database Error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let body = ErrorResponse {
            message: self.message().to_string(),
        };
        match self {
            AppError::BadRequest(_) => HttpResponse::BadRequest().json(body),
            AppError::NotFound(_) => HttpResponse::NotFound().json(body),
            AppError::DatabaseError(_) => HttpResponse::InternalServerError().json(body),
        }
    }
}
