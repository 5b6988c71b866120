// src/handlers/usuario.rs

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use validator::Validate;

use crate::{
    common::{
        error::{ApiError, AppError},
        pagination::{ListParams, Paginated},
    },
    config::AppState,
    middleware::{auth::AuthenticatedUser, i18n::Locale},
    models::usuario::{UsuarioCreate, UsuarioPublic, UsuarioSimple, UsuarioUpdate},
};

// POST /api/v1/usuarios
#[utoipa::path(
    post,
    path = "/api/v1/usuarios",
    tag = "Usuários",
    request_body = UsuarioCreate,
    responses(
        (status = 201, description = "Usuário criado", body = UsuarioPublic),
        (status = 400, description = "Dados inválidos ou e-mail duplicado")
    )
)]
pub async fn create_usuario(
    State(app_state): State<AppState>,
    locale: Locale,
    Json(payload): Json<UsuarioCreate>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let usuario = app_state
        .usuario_service
        .create_usuario(&payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(UsuarioPublic::from(usuario))))
}

// GET /api/v1/usuarios
#[utoipa::path(
    get,
    path = "/api/v1/usuarios",
    tag = "Usuários",
    params(ListParams),
    responses(
        (status = 200, description = "Lista paginada de usuários", body = Paginated<UsuarioPublic>)
    )
)]
pub async fn read_usuarios(
    State(app_state): State<AppState>,
    locale: Locale,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, ApiError> {
    let usuarios = app_state
        .usuario_service
        .get_all_usuarios(params.skip, params.limit, params.filtro.as_deref())
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    let total = app_state
        .usuario_service
        .get_total_usuarios(params.filtro.as_deref())
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    let items: Vec<UsuarioPublic> = usuarios.into_iter().map(UsuarioPublic::from).collect();
    Ok(Json(Paginated { items, total }))
}

// GET /api/v1/usuarios/me
#[utoipa::path(
    get,
    path = "/api/v1/usuarios/me",
    tag = "Usuários",
    responses(
        (status = 200, description = "Dados do usuário autenticado", body = UsuarioPublic)
    ),
    security(("api_jwt" = []))
)]
pub async fn read_usuario_me(AuthenticatedUser(usuario): AuthenticatedUser) -> Json<UsuarioPublic> {
    Json(UsuarioPublic::from(usuario))
}

// GET /api/v1/usuarios/{id}
#[utoipa::path(
    get,
    path = "/api/v1/usuarios/{id}",
    tag = "Usuários",
    params(("id" = i64, Path, description = "ID do usuário")),
    responses(
        (status = 200, description = "Usuário encontrado", body = UsuarioSimple),
        (status = 404, description = "Usuário não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn read_usuario_by_id(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let usuario = app_state
        .usuario_service
        .get_usuario_by_id(id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(UsuarioSimple::from(usuario)))
}

// GET /api/v1/usuarios/email/{email}
#[utoipa::path(
    get,
    path = "/api/v1/usuarios/email/{email}",
    tag = "Usuários",
    params(("email" = String, Path, description = "E-mail do usuário")),
    responses(
        (status = 200, description = "Usuário encontrado", body = UsuarioSimple),
        (status = 404, description = "Usuário não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn read_usuario_by_email(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let usuario = app_state
        .usuario_service
        .get_usuario_by_email(&email)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(UsuarioSimple::from(usuario)))
}

// PUT /api/v1/usuarios/{id}
#[utoipa::path(
    put,
    path = "/api/v1/usuarios/{id}",
    tag = "Usuários",
    params(("id" = i64, Path, description = "ID do usuário")),
    request_body = UsuarioUpdate,
    responses(
        (status = 200, description = "Usuário atualizado", body = UsuarioPublic),
        (status = 404, description = "Usuário não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_usuario(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<i64>,
    Json(payload): Json<UsuarioUpdate>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let usuario = app_state
        .usuario_service
        .update_usuario(id, &payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(UsuarioPublic::from(usuario)))
}
