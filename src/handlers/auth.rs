// src/handlers/auth.rs

use axum::{Form, Json, extract::State, response::IntoResponse};

use crate::{
    common::error::ApiError,
    config::AppState,
    middleware::i18n::Locale,
    models::auth::{LoginPayload, TokenComUsuario},
};

// POST /api/v1/login
// O login segue o fluxo "password" do OAuth2: formulário com username
// (o e-mail) e password.
#[utoipa::path(
    post,
    path = "/api/v1/login",
    tag = "Autenticação",
    request_body(content = LoginPayload, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Token emitido", body = TokenComUsuario),
        (status = 401, description = "Credenciais inválidas")
    )
)]
pub async fn login(
    State(app_state): State<AppState>,
    locale: Locale,
    Form(payload): Form<LoginPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let (access_token, usuario) = app_state
        .auth_service
        .login(&payload.username, &payload.password)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(TokenComUsuario {
        access_token,
        token_type: "bearer".to_string(),
        usuario: usuario.into(),
    }))
}
