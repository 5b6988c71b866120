// src/handlers/mandato.rs

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
    models::mandato::{MandatoCreate, MandatoPublic, MandatoUpdate, MensagemResposta},
};

// POST /api/v1/mandatos
#[utoipa::path(
    post,
    path = "/api/v1/mandatos",
    tag = "Mandatos",
    request_body = MandatoCreate,
    responses(
        (status = 201, description = "Mandato criado", body = MandatoPublic),
        (status = 404, description = "Câmara não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_mandato(
    State(app_state): State<AppState>,
    locale: Locale,
    Json(payload): Json<MandatoCreate>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let mandato = app_state
        .mandato_service
        .create_mandato(&payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(mandato)))
}

// GET /api/v1/mandatos/{id}
#[utoipa::path(
    get,
    path = "/api/v1/mandatos/{id}",
    tag = "Mandatos",
    params(("id" = i64, Path, description = "ID do mandato")),
    responses(
        (status = 200, description = "Mandato encontrado", body = MandatoPublic),
        (status = 404, description = "Mandato não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn read_mandato_by_id(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let mandato = app_state
        .mandato_service
        .get_mandato(id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(mandato))
}

// GET /api/v1/mandatos/camara/{camara_id}
#[utoipa::path(
    get,
    path = "/api/v1/mandatos/camara/{camara_id}",
    tag = "Mandatos",
    params(("camara_id" = i64, Path, description = "ID da câmara"), ListParams),
    responses(
        (status = 200, description = "Mandatos da câmara", body = Paginated<MandatoPublic>),
        (status = 404, description = "Câmara não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn read_mandatos_by_camara(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(camara_id): Path<i64>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, ApiError> {
    let items = app_state
        .mandato_service
        .get_all_mandatos_by_camara(camara_id, params.skip, params.limit, params.filtro.as_deref())
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    let total = app_state
        .mandato_service
        .get_total_mandatos_by_camara(camara_id, params.filtro.as_deref())
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(Paginated { items, total }))
}

// PUT /api/v1/mandatos/{id}
#[utoipa::path(
    put,
    path = "/api/v1/mandatos/{id}",
    tag = "Mandatos",
    params(("id" = i64, Path, description = "ID do mandato")),
    request_body = MandatoUpdate,
    responses(
        (status = 200, description = "Mandato atualizado", body = MandatoPublic),
        (status = 404, description = "Mandato não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_mandato(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<i64>,
    Json(payload): Json<MandatoUpdate>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let mandato = app_state
        .mandato_service
        .update_mandato(id, &payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(mandato))
}

// DELETE /api/v1/mandatos/{id}
// Exclusão física, com mensagem de confirmação.
#[utoipa::path(
    delete,
    path = "/api/v1/mandatos/{id}",
    tag = "Mandatos",
    params(("id" = i64, Path, description = "ID do mandato")),
    responses(
        (status = 200, description = "Mandato deletado", body = MensagemResposta),
        (status = 404, description = "Mandato não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_mandato(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .mandato_service
        .delete_mandato(id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(MensagemResposta {
        detalhe: "Mandato deletado com sucesso.".to_string(),
    }))
}
