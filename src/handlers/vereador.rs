// src/handlers/vereador.rs

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
    middleware::i18n::Locale,
    models::vereador::{VereadorCreate, VereadorPublic, VereadorUpdate},
};

// POST /api/v1/vereadores
#[utoipa::path(
    post,
    path = "/api/v1/vereadores",
    tag = "Vereadores",
    request_body = VereadorCreate,
    responses(
        (status = 201, description = "Vereador criado", body = VereadorPublic),
        (status = 400, description = "Dados inválidos ou e-mail/CPF duplicado")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_vereador(
    State(app_state): State<AppState>,
    locale: Locale,
    Json(payload): Json<VereadorCreate>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let vereador = app_state
        .vereador_service
        .create_vereador(&payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(VereadorPublic::from(vereador))))
}

// GET /api/v1/vereadores
#[utoipa::path(
    get,
    path = "/api/v1/vereadores",
    tag = "Vereadores",
    params(ListParams),
    responses(
        (status = 200, description = "Lista paginada de vereadores", body = Paginated<VereadorPublic>)
    ),
    security(("api_jwt" = []))
)]
pub async fn read_vereadores(
    State(app_state): State<AppState>,
    locale: Locale,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, ApiError> {
    let vereadores = app_state
        .vereador_service
        .get_all_vereadores(params.skip, params.limit, params.filtro.as_deref())
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    let total = app_state
        .vereador_service
        .get_total_vereadores(params.filtro.as_deref())
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    let items: Vec<VereadorPublic> = vereadores.into_iter().map(VereadorPublic::from).collect();
    Ok(Json(Paginated { items, total }))
}

// GET /api/v1/vereadores/{id}
#[utoipa::path(
    get,
    path = "/api/v1/vereadores/{id}",
    tag = "Vereadores",
    params(("id" = i64, Path, description = "ID do vereador")),
    responses(
        (status = 200, description = "Vereador encontrado", body = VereadorPublic),
        (status = 404, description = "Vereador não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn read_vereador_by_id(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let vereador = app_state
        .vereador_service
        .get_vereador_by_id(id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(VereadorPublic::from(vereador)))
}

// GET /api/v1/vereadores/cpf/{cpf}
#[utoipa::path(
    get,
    path = "/api/v1/vereadores/cpf/{cpf}",
    tag = "Vereadores",
    params(("cpf" = String, Path, description = "CPF do vereador")),
    responses(
        (status = 200, description = "Vereador encontrado", body = VereadorPublic),
        (status = 404, description = "Vereador não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn read_vereador_by_cpf(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(cpf): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let vereador = app_state
        .vereador_service
        .get_vereador_by_cpf(&cpf)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(VereadorPublic::from(vereador)))
}

// GET /api/v1/vereadores/email/{email}
#[utoipa::path(
    get,
    path = "/api/v1/vereadores/email/{email}",
    tag = "Vereadores",
    params(("email" = String, Path, description = "E-mail do vereador")),
    responses(
        (status = 200, description = "Vereador encontrado", body = VereadorPublic),
        (status = 404, description = "Vereador não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn read_vereador_by_email(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let vereador = app_state
        .vereador_service
        .get_vereador_by_email(&email)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(VereadorPublic::from(vereador)))
}

// PUT /api/v1/vereadores/{id}
#[utoipa::path(
    put,
    path = "/api/v1/vereadores/{id}",
    tag = "Vereadores",
    params(("id" = i64, Path, description = "ID do vereador")),
    request_body = VereadorUpdate,
    responses(
        (status = 200, description = "Vereador atualizado", body = VereadorPublic),
        (status = 404, description = "Vereador não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_vereador(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<i64>,
    Json(payload): Json<VereadorUpdate>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let vereador = app_state
        .vereador_service
        .update_vereador(id, &payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(VereadorPublic::from(vereador)))
}
