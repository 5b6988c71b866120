// src/models/auth.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::usuario::UsuarioPublic;

// Formulário de login (form-encoded, como num fluxo OAuth2 password).
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginPayload {
    pub username: String,
    pub password: String,
}

// Resposta de autenticação: o token e os dados públicos de quem logou.
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenComUsuario {
    pub access_token: String,
    pub token_type: String,
    pub usuario: UsuarioPublic,
}

// Estrutura de dados ("claims") dentro do JWT
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject (e-mail do usuário)
    pub exp: usize,  // Expiration time (quando o token expira)
    pub iat: usize,  // Issued At (quando o token foi criado)
}
