// src/handlers/camara.rs

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
    models::camara::{CamaraCreate, CamaraPublic, CamaraUpdate},
};

// POST /api/v1/camaras
#[utoipa::path(
    post,
    path = "/api/v1/camaras",
    tag = "Câmaras",
    request_body = CamaraCreate,
    responses(
        (status = 201, description = "Câmara criada", body = CamaraPublic),
        (status = 400, description = "Dados inválidos")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_camara(
    State(app_state): State<AppState>,
    locale: Locale,
    Json(payload): Json<CamaraCreate>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let camara = app_state
        .camara_service
        .create_camara(&payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(CamaraPublic::from(camara))))
}

// GET /api/v1/camaras
#[utoipa::path(
    get,
    path = "/api/v1/camaras",
    tag = "Câmaras",
    params(ListParams),
    responses(
        (status = 200, description = "Lista paginada de câmaras", body = Paginated<CamaraPublic>)
    ),
    security(("api_jwt" = []))
)]
pub async fn read_camaras(
    State(app_state): State<AppState>,
    locale: Locale,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, ApiError> {
    let camaras = app_state
        .camara_service
        .get_all_camaras(params.skip, params.limit, params.filtro.as_deref())
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    let total = app_state
        .camara_service
        .get_total_camaras(params.filtro.as_deref())
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    let items: Vec<CamaraPublic> = camaras.into_iter().map(CamaraPublic::from).collect();
    Ok(Json(Paginated { items, total }))
}

// GET /api/v1/camaras/{id}
#[utoipa::path(
    get,
    path = "/api/v1/camaras/{id}",
    tag = "Câmaras",
    params(("id" = i64, Path, description = "ID da câmara")),
    responses(
        (status = 200, description = "Câmara encontrada", body = CamaraPublic),
        (status = 404, description = "Câmara não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn read_camara(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let camara = app_state
        .camara_service
        .get_camara(id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(CamaraPublic::from(camara)))
}

// PUT /api/v1/camaras/{id}
#[utoipa::path(
    put,
    path = "/api/v1/camaras/{id}",
    tag = "Câmaras",
    params(("id" = i64, Path, description = "ID da câmara")),
    request_body = CamaraUpdate,
    responses(
        (status = 200, description = "Câmara atualizada", body = CamaraPublic),
        (status = 404, description = "Câmara não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_camara(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<i64>,
    Json(payload): Json<CamaraUpdate>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let camara = app_state
        .camara_service
        .update_camara(id, &payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(CamaraPublic::from(camara)))
}

// DELETE /api/v1/camaras/{id}
// Exclusão lógica: devolve a câmara já marcada como excluída.
#[utoipa::path(
    delete,
    path = "/api/v1/camaras/{id}",
    tag = "Câmaras",
    params(("id" = i64, Path, description = "ID da câmara")),
    responses(
        (status = 200, description = "Câmara excluída (logicamente)", body = CamaraPublic),
        (status = 404, description = "Câmara não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_camara(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let camara = app_state
        .camara_service
        .delete_camara(id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(CamaraPublic::from(camara)))
}
