// src/models/usuario.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::common::fmt;

// Representa um usuário vindo do banco de dados
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Usuario {
    pub id: i64,
    pub nome: String,
    pub email: String,

    #[serde(skip_serializing)] // IMPORTANTE para segurança
    pub senha_hash: String,

    pub ativo: bool,
    pub is_superuser: bool,
    pub dt_cadastro: DateTime<Utc>,
    pub dt_atualizado: Option<DateTime<Utc>>,
}

// Forma pública do usuário, com os campos de apresentação que o frontend
// espera (datas no padrão brasileiro, descrição do status).
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UsuarioPublic {
    pub id: i64,
    pub nome: String,
    pub email: String,
    pub ativo: bool,
    pub is_superuser: bool,
    pub dt_cadastro: DateTime<Utc>,
    pub dt_atualizado: Option<DateTime<Utc>>,
    pub ativo_desc: String,
    pub dt_cadastro_formatada: String,
    pub dt_atualizado_formatada: Option<String>,
}

impl From<Usuario> for UsuarioPublic {
    fn from(u: Usuario) -> Self {
        Self {
            id: u.id,
            nome: u.nome,
            email: u.email,
            ativo: u.ativo,
            is_superuser: u.is_superuser,
            dt_cadastro: u.dt_cadastro,
            dt_atualizado: u.dt_atualizado,
            ativo_desc: fmt::ativo_desc(u.ativo),
            dt_cadastro_formatada: fmt::data_hora_br(&u.dt_cadastro),
            dt_atualizado_formatada: fmt::data_hora_br_opt(u.dt_atualizado.as_ref()),
        }
    }
}

// Forma reduzida, usada em respostas aninhadas e nas buscas por id/e-mail.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UsuarioSimple {
    pub id: i64,
    pub nome: String,
    pub email: String,
    pub ativo: bool,
    pub is_superuser: bool,
}

impl From<Usuario> for UsuarioSimple {
    fn from(u: Usuario) -> Self {
        Self {
            id: u.id,
            nome: u.nome,
            email: u.email,
            ativo: u.ativo,
            is_superuser: u.is_superuser,
        }
    }
}

// Dados para criação de um usuário. O `id` opcional existe porque o mesmo
// payload é reaproveitado na associação usuário-câmara, que pode apontar
// para um usuário já existente.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UsuarioCreate {
    pub id: Option<i64>,

    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub nome: String,

    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: String,

    #[validate(length(min = 4, message = "A senha deve ter no mínimo 4 caracteres."))]
    pub senha: Option<String>,

    #[serde(rename = "confSenha")]
    pub conf_senha: Option<String>,

    #[serde(default = "default_true")]
    pub ativo: bool,

    #[serde(default)]
    pub is_superuser: bool,
}

fn default_true() -> bool {
    true
}

// Atualização parcial: campos ausentes permanecem como estão.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UsuarioUpdate {
    pub nome: Option<String>,

    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: Option<String>,

    pub senha: Option<String>,

    #[serde(rename = "confSenha")]
    pub conf_senha: Option<String>,

    pub ativo: Option<bool>,
    pub is_superuser: Option<bool>,
}

// Campos do usuário editáveis a partir da associação com a câmara
// (sem senha).
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UsuarioInUpdate {
    pub id: i64,
    pub nome: String,
    pub email: String,
    pub ativo: bool,
    pub is_superuser: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn conf_senha_usa_o_nome_de_campo_do_frontend() {
        let payload: UsuarioCreate = serde_json::from_value(json!({
            "nome": "Maria",
            "email": "maria@email.com",
            "senha": "1234",
            "confSenha": "1234"
        }))
        .unwrap();

        assert_eq!(payload.conf_senha.as_deref(), Some("1234"));
        assert!(payload.ativo);
        assert!(!payload.is_superuser);
    }

    #[test]
    fn senha_hash_nunca_e_serializado() {
        let usuario = Usuario {
            id: 1,
            nome: "Maria".to_string(),
            email: "maria@email.com".to_string(),
            senha_hash: "$2b$12$segredo".to_string(),
            ativo: true,
            is_superuser: false,
            dt_cadastro: chrono::Utc::now(),
            dt_atualizado: None,
        };

        let value = serde_json::to_value(&usuario).unwrap();
        assert!(value.get("senha_hash").is_none());
    }

    #[test]
    fn forma_publica_carrega_campos_de_apresentacao() {
        use chrono::TimeZone;

        let usuario = Usuario {
            id: 7,
            nome: "João".to_string(),
            email: "joao@email.com".to_string(),
            senha_hash: "hash".to_string(),
            ativo: false,
            is_superuser: false,
            dt_cadastro: chrono::Utc.with_ymd_and_hms(2024, 3, 10, 9, 5, 0).unwrap(),
            dt_atualizado: None,
        };

        let publico = UsuarioPublic::from(usuario);
        assert_eq!(publico.ativo_desc, "Não");
        assert_eq!(publico.dt_cadastro_formatada, "10/03/2024 às 09:05");
        assert!(publico.dt_atualizado_formatada.is_none());
    }
}
