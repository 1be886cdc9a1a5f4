use crate::order_actor::OrderError;
use crate::product_actor::ProductError;
use crate::restaurant_actor::RestaurantError;
use crate::review_actor::ReviewError;
use crate::user_actor::UserError;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Every handler failure. Rendered as `{"error": "<message>"}`.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    /// The detail is logged; the client only sees a generic message.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal(detail) => {
                error!(%detail, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error interno del servidor".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(format!("JSON inválido: {}", rejection.body_text()))
    }
}

impl From<UserError> for AppError {
    fn from(e: UserError) -> Self {
        match e {
            UserError::NotFound(_) => AppError::not_found("Usuario no encontrado"),
            UserError::AlreadyExists(_) => AppError::bad_request("Usuario ya existe"),
            UserError::InvalidPassword => AppError::Forbidden(e.to_string()),
            UserError::ValidationError(msg) => AppError::BadRequest(msg),
            UserError::HashingError(_) | UserError::ActorCommunicationError(_) => {
                AppError::Internal(e.to_string())
            }
        }
    }
}

impl From<RestaurantError> for AppError {
    fn from(e: RestaurantError) -> Self {
        match e {
            RestaurantError::NotFound(_) => AppError::not_found("Restaurante no encontrado"),
            RestaurantError::ValidationError(msg) => AppError::BadRequest(msg),
            RestaurantError::ActorCommunicationError(_) => AppError::Internal(e.to_string()),
        }
    }
}

impl From<ProductError> for AppError {
    fn from(e: ProductError) -> Self {
        match e {
            ProductError::ValidationError(_) => AppError::BadRequest(e.to_string()),
            ProductError::ActorCommunicationError(_) => AppError::Internal(e.to_string()),
        }
    }
}

impl From<OrderError> for AppError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::NotFound(_) => AppError::not_found("Pedido no encontrado o no autorizado"),
            OrderError::InvalidUser(_) => AppError::not_found("Usuario no encontrado"),
            OrderError::ValidationError(msg) => AppError::BadRequest(msg),
            OrderError::ActorCommunicationError(_) => AppError::Internal(e.to_string()),
        }
    }
}

impl From<ReviewError> for AppError {
    fn from(e: ReviewError) -> Self {
        match e {
            ReviewError::NotFound(_) => {
                AppError::not_found("Reseña no encontrada o no tienes permiso para eliminarla")
            }
            ReviewError::AuthorNotFound(_) => AppError::not_found("Usuario no encontrado"),
            ReviewError::ValidationError(msg) => AppError::BadRequest(msg),
            ReviewError::ActorCommunicationError(_) => AppError::Internal(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn render(error: AppError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_domain_errors_map_to_status() {
        let (status, body) = render(UserError::InvalidPassword.into()).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"], "Contraseña incorrecta");

        let (status, _) = render(OrderError::InvalidUser("x".into()).into()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = render(ReviewError::ValidationError("El comentario es requerido".into()).into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "El comentario es requerido");
    }

    #[tokio::test]
    async fn test_internal_detail_is_not_leaked() {
        let (status, body) = render(OrderError::ActorCommunicationError("Actor closed".into()).into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Error interno del servidor");
    }
}
