use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
};

mod layer;

pub use layer::GuardLayer;

/// Standard Result type for Guard
/// Ok(()) means allowed
/// Err(GuardError) means denied
pub type GuardResult = Result<(), GuardError>;

#[derive(Debug, thiserror::Error)]
pub enum GuardError {
    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

impl IntoResponse for GuardError {
    fn into_response(self) -> Response {
        let status = match &self {
            GuardError::Forbidden(_) => StatusCode::FORBIDDEN,
            GuardError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        };
        (status, self.to_string()).into_response()
    }
}

/// The Guard trait
/// Implement this to protect routes
#[async_trait]
pub trait Guard: Send + Sync + 'static {
    async fn can_activate(&self, request: &Request<Body>) -> GuardResult;
}
