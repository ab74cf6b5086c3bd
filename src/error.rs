use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

/// Application error types
#[derive(Debug)]
pub enum AppError {
    /// Configuration error
    ConfigError(String),
    /// The pricing catalog has not been loaded
    CatalogUnavailable(String),
    /// Malformed request payload
    InvalidInput(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            Self::CatalogUnavailable(msg) => write!(f, "Catalog unavailable: {}", msg),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            Self::ConfigError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            Self::CatalogUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg.clone()),
            Self::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        };

        let body = Json(json!({
            "error": {
                "message": error_message,
                "type": error_type_name(&self),
            }
        }));

        (status, body).into_response()
    }
}

fn error_type_name(error: &AppError) -> &'static str {
    match error {
        AppError::ConfigError(_) => "config_error",
        AppError::CatalogUnavailable(_) => "catalog_unavailable",
        AppError::InvalidInput(_) => "invalid_input",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = AppError::CatalogUnavailable("not loaded".to_string());
        assert_eq!(error.to_string(), "Catalog unavailable: not loaded");
    }

    #[test]
    fn test_error_type_name() {
        assert_eq!(error_type_name(&AppError::InvalidInput("test".to_string())), "invalid_input");
        assert_eq!(
            error_type_name(&AppError::CatalogUnavailable("test".to_string())),
            "catalog_unavailable"
        );
    }

    #[tokio::test]
    async fn test_error_response() {
        let error = AppError::CatalogUnavailable("Catalog not loaded".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_invalid_input_response_body() {
        let response = AppError::InvalidInput("expected a JSON object".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["type"], "invalid_input");
        assert_eq!(body["error"]["message"], "expected a JSON object");
    }
}
