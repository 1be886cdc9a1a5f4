use crate::model::{Credentials, Registration, Session};
use crate::routes::{AppError, AppJson, AppState};
use axum::{extract::State, Json};
use serde_json::{json, Value};

/// `POST /auth/register`
pub async fn register(
    State(state): State<AppState>,
    AppJson(registration): AppJson<Registration>,
) -> Result<Json<Value>, AppError> {
    let id = state.users.register(registration).await?;
    Ok(Json(json!({ "mensaje": "Usuario creado", "id": id })))
}

/// `POST /auth/login`
pub async fn login(
    State(state): State<AppState>,
    AppJson(credentials): AppJson<Credentials>,
) -> Result<Json<Session>, AppError> {
    let user = state
        .users
        .authenticate(&credentials.email, credentials.password)
        .await?;
    Ok(Json(Session::from(&user)))
}
