// src/handlers/camara_usuario.rs

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
    models::camara_usuario::{
        CamaraUsuarioCreate, CamaraUsuarioPublic, CamaraUsuarioUpdatePayload,
    },
};

// POST /api/v1/usuario-camara
#[utoipa::path(
    post,
    path = "/api/v1/usuario-camara",
    tag = "Usuários da câmara",
    request_body = CamaraUsuarioCreate,
    responses(
        (status = 201, description = "Associação criada (ou reativada)", body = CamaraUsuarioPublic),
        (status = 400, description = "Usuário já associado ou dados inválidos"),
        (status = 404, description = "Usuário ou câmara não encontrados")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_association(
    State(app_state): State<AppState>,
    locale: Locale,
    Json(payload): Json<CamaraUsuarioCreate>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let assoc = app_state
        .camara_usuario_service
        .create_association(&payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(assoc)))
}

// GET /api/v1/usuario-camara/{id}
#[utoipa::path(
    get,
    path = "/api/v1/usuario-camara/{id}",
    tag = "Usuários da câmara",
    params(("id" = i64, Path, description = "ID da associação")),
    responses(
        (status = 200, description = "Associação encontrada", body = CamaraUsuarioPublic),
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
        .camara_usuario_service
        .get_association(id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(assoc))
}

// GET /api/v1/usuario-camara/camara/{camara_id}
#[utoipa::path(
    get,
    path = "/api/v1/usuario-camara/camara/{camara_id}",
    tag = "Usuários da câmara",
    params(("camara_id" = i64, Path, description = "ID da câmara"), ListParams),
    responses(
        (status = 200, description = "Usuários da câmara", body = Paginated<CamaraUsuarioPublic>),
        (status = 404, description = "Câmara não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn read_associations_by_camara(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(camara_id): Path<i64>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, ApiError> {
    let items = app_state
        .camara_usuario_service
        .get_associations_by_camara(camara_id, params.skip, params.limit, params.filtro.as_deref())
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    let total = app_state
        .camara_usuario_service
        .get_total_associations_by_camara(camara_id, params.filtro.as_deref())
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(Paginated { items, total }))
}

// PUT /api/v1/usuario-camara/{id}
// Atualiza a associação e o perfil do usuário vinculado de uma vez.
#[utoipa::path(
    put,
    path = "/api/v1/usuario-camara/{id}",
    tag = "Usuários da câmara",
    params(("id" = i64, Path, description = "ID da associação")),
    request_body = CamaraUsuarioUpdatePayload,
    responses(
        (status = 200, description = "Associação atualizada", body = CamaraUsuarioPublic),
        (status = 404, description = "Associação não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_association(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<i64>,
    Json(payload): Json<CamaraUsuarioUpdatePayload>,
) -> Result<impl IntoResponse, ApiError> {
    let assoc = app_state
        .camara_usuario_service
        .update_association(id, &payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(assoc))
}

// DELETE /api/v1/usuario-camara/{id}
// Exclusão lógica: a associação pode ser reativada por um novo POST.
#[utoipa::path(
    delete,
    path = "/api/v1/usuario-camara/{id}",
    tag = "Usuários da câmara",
    params(("id" = i64, Path, description = "ID da associação")),
    responses(
        (status = 200, description = "Associação excluída (logicamente)", body = CamaraUsuarioPublic),
        (status = 404, description = "Associação não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_association(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let assoc = app_state
        .camara_usuario_service
        .delete_association(id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(assoc))
}
