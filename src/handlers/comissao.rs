// src/handlers/comissao.rs

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
    models::comissao::{ComissaoCreate, ComissaoPublic, ComissaoUpdate},
};

// POST /api/v1/comissoes
#[utoipa::path(
    post,
    path = "/api/v1/comissoes",
    tag = "Comissões",
    request_body = ComissaoCreate,
    responses(
        (status = 201, description = "Comissão criada", body = ComissaoPublic),
        (status = 404, description = "Câmara não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_comissao(
    State(app_state): State<AppState>,
    locale: Locale,
    Json(payload): Json<ComissaoCreate>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let comissao = app_state
        .comissao_service
        .create_comissao(&payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(ComissaoPublic::from(comissao))))
}

// GET /api/v1/comissoes/{id}
#[utoipa::path(
    get,
    path = "/api/v1/comissoes/{id}",
    tag = "Comissões",
    params(("id" = i64, Path, description = "ID da comissão")),
    responses(
        (status = 200, description = "Comissão encontrada", body = ComissaoPublic),
        (status = 404, description = "Comissão não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn read_comissao_by_id(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let comissao = app_state
        .comissao_service
        .get_comissao(id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(ComissaoPublic::from(comissao)))
}

// GET /api/v1/comissoes/camara/{camara_id}
#[utoipa::path(
    get,
    path = "/api/v1/comissoes/camara/{camara_id}",
    tag = "Comissões",
    params(("camara_id" = i64, Path, description = "ID da câmara"), ListParams),
    responses(
        (status = 200, description = "Comissões da câmara", body = Paginated<ComissaoPublic>),
        (status = 404, description = "Câmara não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn read_comissoes_by_camara(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(camara_id): Path<i64>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, ApiError> {
    let comissoes = app_state
        .comissao_service
        .get_all_comissoes_by_camara(camara_id, params.skip, params.limit, params.filtro.as_deref())
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    let total = app_state
        .comissao_service
        .get_total_comissoes_by_camara(camara_id, params.filtro.as_deref())
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    let items: Vec<ComissaoPublic> = comissoes.into_iter().map(ComissaoPublic::from).collect();
    Ok(Json(Paginated { items, total }))
}

// PUT /api/v1/comissoes/{id}
#[utoipa::path(
    put,
    path = "/api/v1/comissoes/{id}",
    tag = "Comissões",
    params(("id" = i64, Path, description = "ID da comissão")),
    request_body = ComissaoUpdate,
    responses(
        (status = 200, description = "Comissão atualizada", body = ComissaoPublic),
        (status = 404, description = "Comissão não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_comissao(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<i64>,
    Json(payload): Json<ComissaoUpdate>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let comissao = app_state
        .comissao_service
        .update_comissao(id, &payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(ComissaoPublic::from(comissao)))
}

// DELETE /api/v1/comissoes/{id}
#[utoipa::path(
    delete,
    path = "/api/v1/comissoes/{id}",
    tag = "Comissões",
    params(("id" = i64, Path, description = "ID da comissão")),
    responses(
        (status = 204, description = "Comissão deletada"),
        (status = 404, description = "Comissão não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_comissao(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .comissao_service
        .delete_comissao(id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(StatusCode::NO_CONTENT)
}
