// src/handlers/comissao_membro.rs

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
    models::comissao_membro::{
        ComissaoMembroCreate, ComissaoMembroPublic, ComissaoMembroUpdate,
    },
};

// POST /api/v1/comissao-membros
#[utoipa::path(
    post,
    path = "/api/v1/comissao-membros",
    tag = "Membros da Comissão",
    request_body = ComissaoMembroCreate,
    responses(
        (status = 201, description = "Membro adicionado à comissão", body = ComissaoMembroPublic),
        (status = 404, description = "Comissão ou vínculo mandato/vereador não encontrados")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_comissao_membro(
    State(app_state): State<AppState>,
    locale: Locale,
    Json(payload): Json<ComissaoMembroCreate>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let membro = app_state
        .comissao_membro_service
        .create_association(&payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(membro)))
}

// GET /api/v1/comissao-membros/comissao/{comissao_id}
#[utoipa::path(
    get,
    path = "/api/v1/comissao-membros/comissao/{comissao_id}",
    tag = "Membros da Comissão",
    params(("comissao_id" = i64, Path, description = "ID da comissão"), ListParams),
    responses(
        (status = 200, description = "Membros da comissão", body = Paginated<ComissaoMembroPublic>),
        (status = 404, description = "Comissão não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn read_comissao_membros(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(comissao_id): Path<i64>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, ApiError> {
    let items = app_state
        .comissao_membro_service
        .get_all_by_comissao(comissao_id, params.skip, params.limit, params.filtro.as_deref())
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    let total = app_state
        .comissao_membro_service
        .get_total_by_comissao(comissao_id, params.filtro.as_deref())
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(Paginated { items, total }))
}

// GET /api/v1/comissao-membros/{id}
#[utoipa::path(
    get,
    path = "/api/v1/comissao-membros/{id}",
    tag = "Membros da Comissão",
    params(("id" = i64, Path, description = "ID da associação")),
    responses(
        (status = 200, description = "Membro encontrado", body = ComissaoMembroPublic),
        (status = 404, description = "Associação não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn read_comissao_membro_by_id(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let membro = app_state
        .comissao_membro_service
        .get_association(id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(membro))
}

// PUT /api/v1/comissao-membros/{id}
#[utoipa::path(
    put,
    path = "/api/v1/comissao-membros/{id}",
    tag = "Membros da Comissão",
    params(("id" = i64, Path, description = "ID da associação")),
    request_body = ComissaoMembroUpdate,
    responses(
        (status = 200, description = "Membro atualizado", body = ComissaoMembroPublic),
        (status = 404, description = "Associação não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_comissao_membro(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<i64>,
    Json(payload): Json<ComissaoMembroUpdate>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let membro = app_state
        .comissao_membro_service
        .update_association(id, &payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(membro))
}

// DELETE /api/v1/comissao-membros/{id}
#[utoipa::path(
    delete,
    path = "/api/v1/comissao-membros/{id}",
    tag = "Membros da Comissão",
    params(("id" = i64, Path, description = "ID da associação")),
    responses(
        (status = 204, description = "Membro removido da comissão"),
        (status = 404, description = "Associação não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_comissao_membro(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .comissao_membro_service
        .delete_association(id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(StatusCode::NO_CONTENT)
}
