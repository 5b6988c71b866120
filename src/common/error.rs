// src/common/error.rs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use thiserror::Error;

use crate::common::i18n::I18nStore;
use crate::middleware::i18n::Locale;

// Nosso tipo de erro de domínio, com `thiserror` para melhor ergonomia.
// Cada variante conhece seu status HTTP e sua chave de mensagem nos
// catálogos de idioma.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    // Regras de negócio (400)
    #[error("As senhas não coincidem")]
    PasswordMismatch,

    #[error("Confirmação de senha é obrigatória")]
    PasswordConfirmationRequired,

    #[error("E-mail já cadastrado")]
    EmailAlreadyExists,

    #[error("Vereador já cadastrado (e-mail ou CPF)")]
    VereadorAlreadyExists,

    #[error("Câmara já cadastrada (CNPJ ou e-mail)")]
    CamaraAlreadyExists,

    #[error("Usuário já associado a esta câmara")]
    UsuarioJaAssociado,

    #[error("Vereador já cadastrado neste mandato")]
    VereadorJaNoMandato,

    #[error("O objeto 'usuario' é obrigatório")]
    UsuarioDataRequired,

    #[error("ID ou dados do vereador são necessários")]
    VereadorDataRequired,

    // Credenciais (401)
    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Token de autenticação inválido ou ausente")]
    InvalidToken,

    // Entidades não encontradas (404)
    #[error("Usuário não encontrado")]
    UsuarioNotFound,

    #[error("Câmara não encontrada")]
    CamaraNotFound,

    #[error("Vereador não encontrado")]
    VereadorNotFound,

    #[error("Mandato não encontrado")]
    MandatoNotFound,

    #[error("Comissão não encontrada")]
    ComissaoNotFound,

    #[error("Vereador do mandato não encontrado")]
    MandatoVereadorNotFound,

    #[error("Associação não encontrada")]
    AssociacaoNotFound,

    // Variante para erros de banco de dados
    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    #[error("Erro de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),
}

impl AppError {
    // Mapeia a variante para (status HTTP, chave de mensagem).
    fn status_and_key(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::ValidationError(_) => (StatusCode::BAD_REQUEST, "validation_error"),

            AppError::PasswordMismatch => (StatusCode::BAD_REQUEST, "password_mismatch"),
            AppError::PasswordConfirmationRequired => {
                (StatusCode::BAD_REQUEST, "password_confirmation_required")
            }
            AppError::EmailAlreadyExists => (StatusCode::BAD_REQUEST, "email_already_exists"),
            AppError::VereadorAlreadyExists => {
                (StatusCode::BAD_REQUEST, "vereador_already_exists")
            }
            AppError::CamaraAlreadyExists => (StatusCode::BAD_REQUEST, "camara_already_exists"),
            AppError::UsuarioJaAssociado => (StatusCode::BAD_REQUEST, "usuario_ja_associado"),
            AppError::VereadorJaNoMandato => (StatusCode::BAD_REQUEST, "vereador_ja_no_mandato"),
            AppError::UsuarioDataRequired => (StatusCode::BAD_REQUEST, "usuario_data_required"),
            AppError::VereadorDataRequired => (StatusCode::BAD_REQUEST, "vereador_data_required"),

            AppError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "invalid_credentials"),
            AppError::InvalidToken => (StatusCode::UNAUTHORIZED, "invalid_token"),

            AppError::UsuarioNotFound => (StatusCode::NOT_FOUND, "usuario_not_found"),
            AppError::CamaraNotFound => (StatusCode::NOT_FOUND, "camara_not_found"),
            AppError::VereadorNotFound => (StatusCode::NOT_FOUND, "vereador_not_found"),
            AppError::MandatoNotFound => (StatusCode::NOT_FOUND, "mandato_not_found"),
            AppError::ComissaoNotFound => (StatusCode::NOT_FOUND, "comissao_not_found"),
            AppError::MandatoVereadorNotFound => {
                (StatusCode::NOT_FOUND, "mandato_vereador_not_found")
            }
            AppError::AssociacaoNotFound => (StatusCode::NOT_FOUND, "associacao_not_found"),

            // Todos os outros (banco, bcrypt, jwt, inesperados) viram 500.
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }

    // Converte o erro de domínio na resposta HTTP localizada.
    // O `tracing` registra a mensagem detalhada dos erros internos antes
    // de achatá-los para o cliente.
    pub fn to_api_error(&self, locale: &Locale, store: &I18nStore) -> ApiError {
        let (status, key) = self.status_and_key();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Erro Interno do Servidor: {}", self);
        }

        let details = match self {
            AppError::ValidationError(errors) => Some(validation_details(errors)),
            _ => None,
        };

        ApiError {
            status,
            error: store.translate(&locale.0, key),
            details,
        }
    }
}

// Expande os erros de validação num mapa campo -> mensagens.
fn validation_details(errors: &validator::ValidationErrors) -> Value {
    let mut details = serde_json::Map::new();
    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors
            .iter()
            .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .collect();
        details.insert(field.to_string(), json!(messages));
    }
    Value::Object(details)
}

// O formato de erro que sai pela API.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub error: String,
    pub details: Option<Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self.details {
            Some(details) => Json(json!({ "error": self.error, "details": details })),
            None => Json(json!({ "error": self.error })),
        };
        (self.status, body).into_response()
    }
}

// Resposta sem localização, usada fora dos handlers (middleware de auth).
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, _) = self.status_and_key();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Erro Interno do Servidor: {}", self);
            let body = Json(json!({ "error": "Ocorreu um erro inesperado." }));
            return (status, body).into_response();
        }

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::i18n::I18nStore;
    use crate::middleware::i18n::Locale;

    fn api(err: AppError, lang: &str) -> ApiError {
        err.to_api_error(&Locale(lang.to_string()), &I18nStore::new())
    }

    #[test]
    fn nao_encontrado_vira_404() {
        let api_err = api(AppError::CamaraNotFound, "pt");
        assert_eq!(api_err.status, StatusCode::NOT_FOUND);
        assert_eq!(api_err.error, "Câmara não encontrada");
    }

    #[test]
    fn regra_de_negocio_vira_400() {
        let api_err = api(AppError::UsuarioJaAssociado, "pt");
        assert_eq!(api_err.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_err.error, "Este usuário já está associado a esta câmara.");
    }

    #[test]
    fn credenciais_invalidas_vira_401() {
        let api_err = api(AppError::InvalidCredentials, "en");
        assert_eq!(api_err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(api_err.error, "Incorrect e-mail or password");
    }

    #[test]
    fn erro_de_banco_vira_500_opaco() {
        let api_err = api(AppError::DatabaseError(sqlx::Error::RowNotFound), "en");
        assert_eq!(api_err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_err.error, "An unexpected error occurred.");
    }

    #[test]
    fn validacao_carrega_detalhes_por_campo() {
        use validator::Validate;

        #[derive(Validate)]
        struct Payload {
            #[validate(email(message = "O e-mail fornecido é inválido."))]
            email: String,
        }

        let payload = Payload { email: "nao-e-email".to_string() };
        let err = AppError::ValidationError(payload.validate().unwrap_err());
        let api_err = api(err, "pt");

        assert_eq!(api_err.status, StatusCode::BAD_REQUEST);
        let details = api_err.details.expect("deveria ter detalhes");
        assert_eq!(details["email"][0], "O e-mail fornecido é inválido.");
    }

    #[test]
    fn into_response_preserva_o_status() {
        let response = AppError::InvalidToken.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = api(AppError::MandatoNotFound, "pt").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
