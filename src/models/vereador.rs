// src/models/vereador.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::common::fmt;

// Representa um vereador vindo do banco de dados
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Vereador {
    pub id: i64,
    pub nome: String,
    pub email: String,
    pub cpf: String,
    pub telefone: String,
    pub partido: String,
    pub ativo: bool,
    pub dt_cadastro: DateTime<Utc>,
    pub dt_atualizado: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VereadorPublic {
    pub id: i64,
    pub nome: String,
    pub email: String,
    pub cpf: String,
    pub telefone: String,
    pub partido: String,
    pub ativo: bool,
    pub dt_cadastro: DateTime<Utc>,
    pub dt_atualizado: Option<DateTime<Utc>>,
    pub ativo_desc: String,
    pub dt_cadastro_formatada: String,
    pub dt_atualizado_formatada: Option<String>,
}

impl From<Vereador> for VereadorPublic {
    fn from(v: Vereador) -> Self {
        Self {
            id: v.id,
            nome: v.nome,
            email: v.email,
            cpf: v.cpf,
            telefone: v.telefone,
            partido: v.partido,
            ativo: v.ativo,
            dt_cadastro: v.dt_cadastro,
            dt_atualizado: v.dt_atualizado,
            ativo_desc: fmt::ativo_desc(v.ativo),
            dt_cadastro_formatada: fmt::data_hora_br(&v.dt_cadastro),
            dt_atualizado_formatada: fmt::data_hora_br_opt(v.dt_atualizado.as_ref()),
        }
    }
}

// O `id` opcional existe porque o mesmo payload é usado na associação com
// mandatos, que pode apontar para um vereador já existente.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct VereadorCreate {
    pub id: Option<i64>,

    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub nome: String,

    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: String,

    #[validate(length(min = 11, max = 14, message = "CPF inválido."))]
    pub cpf: String,

    #[validate(length(min = 1, message = "O telefone é obrigatório."))]
    pub telefone: String,

    #[validate(length(min = 1, max = 45, message = "O partido é obrigatório."))]
    pub partido: String,

    #[serde(default = "default_true")]
    pub ativo: bool,
}

fn default_true() -> bool {
    true
}

// Atualização parcial: campos ausentes permanecem como estão.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct VereadorUpdate {
    pub nome: Option<String>,

    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: Option<String>,

    pub cpf: Option<String>,
    pub telefone: Option<String>,
    pub partido: Option<String>,
    pub ativo: Option<bool>,
}

// Campos do vereador editáveis a partir da associação com o mandato.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct VereadorInUpdate {
    pub id: i64,
    pub nome: String,
    pub email: String,
    pub ativo: bool,
}

impl From<VereadorInUpdate> for VereadorUpdate {
    fn from(v: VereadorInUpdate) -> Self {
        Self {
            nome: Some(v.nome),
            email: Some(v.email),
            ativo: Some(v.ativo),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn cpf_curto_e_rejeitado() {
        let payload: VereadorCreate = serde_json::from_value(json!({
            "nome": "José",
            "email": "jose@camara.gov.br",
            "cpf": "123",
            "telefone": "(93) 99999-0000",
            "partido": "XYZ"
        }))
        .unwrap();

        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("cpf"));
    }

    #[test]
    fn ativo_por_padrao() {
        let payload: VereadorCreate = serde_json::from_value(json!({
            "nome": "José",
            "email": "jose@camara.gov.br",
            "cpf": "12345678900",
            "telefone": "(93) 99999-0000",
            "partido": "XYZ"
        }))
        .unwrap();

        assert!(payload.ativo);
        assert!(payload.validate().is_ok());
    }
}
