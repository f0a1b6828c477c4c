use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

use crate::views;

#[derive(Debug, ThisError)]
pub enum QuoteError {
    #[error("quote {0} not found")]
    NotFound(i64),

    #[error("malformed quote id: {0}")]
    BadId(String),

    #[error("invalid quote: {0}")]
    Validation(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),

    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<figment::Error> for QuoteError {
    fn from(e: figment::Error) -> Self {
        QuoteError::Config(Box::new(e))
    }
}

impl QuoteError {
    pub fn status(&self) -> StatusCode {
        match self {
            QuoteError::NotFound(_) | QuoteError::BadId(_) => StatusCode::NOT_FOUND,
            QuoteError::Validation(_) => StatusCode::BAD_REQUEST,
            QuoteError::Json(_)
            | QuoteError::DatabaseError(_)
            | QuoteError::Config(_)
            | QuoteError::InvalidConfig(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for QuoteError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (title, message) = match &self {
            QuoteError::NotFound(id) => (
                "Quote not found",
                format!("There is no quote with id {id}."),
            ),
            QuoteError::BadId(_) => (
                "Quote not found",
                "Quote ids are whole numbers; this one is not.".to_string(),
            ),
            QuoteError::Validation(reason) => ("Invalid quote", reason.clone()),
            QuoteError::Json(_)
            | QuoteError::DatabaseError(_)
            | QuoteError::Config(_)
            | QuoteError::InvalidConfig(_) => {
                error!(error = %self, "request failed");
                (
                    "Something went wrong",
                    "An internal server error occurred.".to_string(),
                )
            }
        };
        (status, views::error_page(status, title, &message)).into_response()
    }
}
