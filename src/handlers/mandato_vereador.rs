// src/handlers/mandato_vereador.rs

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
    models::mandato_vereador::{
        MandatoVereadorCreate, MandatoVereadorPublic, MandatoVereadorUpdatePayload,
    },
};

// POST /api/v1/mandato-vereador
// Pode-se passar um 'vereador_id' para associar um existente, ou um
// objeto 'vereador' completo para criar um novo e associá-lo.
#[utoipa::path(
    post,
    path = "/api/v1/mandato-vereador",
    tag = "Associação Mandato/Vereador",
    request_body = MandatoVereadorCreate,
    responses(
        (status = 201, description = "Associação criada", body = MandatoVereadorPublic),
        (status = 400, description = "Vereador já cadastrado neste mandato"),
        (status = 404, description = "Vereador ou mandato não encontrados")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_association(
    State(app_state): State<AppState>,
    locale: Locale,
    Json(payload): Json<MandatoVereadorCreate>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let assoc = app_state
        .mandato_vereador_service
        .create_association(&payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(assoc)))
}

// GET /api/v1/mandato-vereador/{id}
#[utoipa::path(
    get,
    path = "/api/v1/mandato-vereador/{id}",
    tag = "Associação Mandato/Vereador",
    params(("id" = i64, Path, description = "ID da associação")),
    responses(
        (status = 200, description = "Associação encontrada", body = MandatoVereadorPublic),
        (status = 404, description = "Associação não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn read_association_by_id(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let assoc = app_state
        .mandato_vereador_service
        .get_association(id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(assoc))
}

// GET /api/v1/mandato-vereador/mandato/{mandato_id}
#[utoipa::path(
    get,
    path = "/api/v1/mandato-vereador/mandato/{mandato_id}",
    tag = "Associação Mandato/Vereador",
    params(("mandato_id" = i64, Path, description = "ID do mandato"), ListParams),
    responses(
        (status = 200, description = "Vereadores do mandato", body = Paginated<MandatoVereadorPublic>),
        (status = 404, description = "Mandato não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn read_associations_by_mandato(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(mandato_id): Path<i64>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, ApiError> {
    let items = app_state
        .mandato_vereador_service
        .get_associations_by_mandato(mandato_id, params.skip, params.limit, params.filtro.as_deref())
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    let total = app_state
        .mandato_vereador_service
        .get_total_associations_by_mandato(mandato_id, params.filtro.as_deref())
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(Paginated { items, total }))
}

// PUT /api/v1/mandato-vereador/{id}
// Atualiza a função na associação e os dados do vereador associado.
#[utoipa::path(
    put,
    path = "/api/v1/mandato-vereador/{id}",
    tag = "Associação Mandato/Vereador",
    params(("id" = i64, Path, description = "ID da associação")),
    request_body = MandatoVereadorUpdatePayload,
    responses(
        (status = 200, description = "Associação atualizada", body = MandatoVereadorPublic),
        (status = 404, description = "Associação não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_association(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<i64>,
    Json(payload): Json<MandatoVereadorUpdatePayload>,
) -> Result<impl IntoResponse, ApiError> {
    let assoc = app_state
        .mandato_vereador_service
        .update_association(id, &payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(assoc))
}

// DELETE /api/v1/mandato-vereador/{id}
#[utoipa::path(
    delete,
    path = "/api/v1/mandato-vereador/{id}",
    tag = "Associação Mandato/Vereador",
    params(("id" = i64, Path, description = "ID da associação")),
    responses(
        (status = 204, description = "Associação deletada"),
        (status = 404, description = "Associação não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_association(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .mandato_vereador_service
        .delete_association(id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(StatusCode::NO_CONTENT)
}
