use crate::db::StoreError;
use actix_web::http::StatusCode;

/// Everything a chat handler can fail with. The error boundary
/// ([`crate::views::Views::error_page`]) matches on the variant to pick the
/// status and the message shown to the user.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("chat not found")]
    NotFound,
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("template rendering failed: {0}")]
    Render(#[from] tera::Error),
}

impl ChatError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Store(_) | Self::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to render. Store and template details stay in the logs.
    pub fn public_message(&self) -> &str {
        match self {
            Self::Validation(message) => message,
            Self::NotFound => "Chat not found",
            Self::Store(_) | Self::Render(_) => "Something went wrong!",
        }
    }
}
