// src/models/camara.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::common::fmt;

// Representa uma câmara municipal vinda do banco de dados
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Camara {
    pub id: i64,
    pub nome: String,
    pub cnpj: Option<String>,
    pub email: Option<String>,
    pub telefone: Option<String>,
    pub endereco: Option<String>,
    pub municipio: Option<String>,
    pub uf: Option<String>,
    pub numero_cadeiras: Option<i32>,
    pub dt_cadastro: DateTime<Utc>,
    pub dt_atualizado: Option<DateTime<Utc>>,
    pub excluido: bool,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CamaraPublic {
    pub id: i64,
    pub nome: String,
    pub cnpj: Option<String>,
    pub email: Option<String>,
    pub telefone: Option<String>,
    pub endereco: Option<String>,
    pub municipio: Option<String>,
    pub uf: Option<String>,
    pub numero_cadeiras: Option<i32>,
    pub dt_cadastro: DateTime<Utc>,
    pub dt_atualizado: Option<DateTime<Utc>>,
    pub excluido: bool,
    pub dt_cadastro_formatada: String,
    pub dt_atualizado_formatada: Option<String>,
}

impl From<Camara> for CamaraPublic {
    fn from(c: Camara) -> Self {
        Self {
            id: c.id,
            nome: c.nome,
            cnpj: c.cnpj,
            email: c.email,
            telefone: c.telefone,
            endereco: c.endereco,
            municipio: c.municipio,
            uf: c.uf,
            numero_cadeiras: c.numero_cadeiras,
            dt_cadastro: c.dt_cadastro,
            dt_atualizado: c.dt_atualizado,
            excluido: c.excluido,
            dt_cadastro_formatada: fmt::data_hora_br(&c.dt_cadastro),
            dt_atualizado_formatada: fmt::data_hora_br_opt(c.dt_atualizado.as_ref()),
        }
    }
}

// Forma reduzida para respostas aninhadas (ex: mandato -> camara).
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CamaraSimple {
    pub id: i64,
    pub nome: String,
}

impl From<Camara> for CamaraSimple {
    fn from(c: Camara) -> Self {
        Self { id: c.id, nome: c.nome }
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CamaraCreate {
    #[validate(length(min = 1, max = 120, message = "O nome é obrigatório."))]
    pub nome: String,

    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: String,

    #[validate(length(max = 20, message = "CNPJ muito longo."))]
    pub cnpj: Option<String>,

    pub telefone: Option<String>,
    pub endereco: Option<String>,
    pub municipio: Option<String>,

    #[validate(length(equal = 2, message = "UF deve ter 2 caracteres."))]
    pub uf: Option<String>,

    pub numero_cadeiras: Option<i32>,
}

// Atualização parcial: campos ausentes permanecem como estão.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CamaraUpdate {
    #[validate(length(min = 1, max = 120, message = "O nome não pode ser vazio."))]
    pub nome: Option<String>,

    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: Option<String>,

    pub cnpj: Option<String>,
    pub telefone: Option<String>,
    pub endereco: Option<String>,
    pub municipio: Option<String>,

    #[validate(length(equal = 2, message = "UF deve ter 2 caracteres."))]
    pub uf: Option<String>,

    pub numero_cadeiras: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_invalido_e_rejeitado() {
        let payload = CamaraCreate {
            nome: "".to_string(),
            email: "nao-e-email".to_string(),
            cnpj: None,
            telefone: None,
            endereco: None,
            municipio: None,
            uf: Some("ABC".to_string()),
            numero_cadeiras: None,
        };

        let errors = payload.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("nome"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("uf"));
    }

    #[test]
    fn payload_valido_passa() {
        let payload = CamaraCreate {
            nome: "Câmara Municipal de Altamira".to_string(),
            email: "contato@camara.pa.gov.br".to_string(),
            cnpj: Some("12.345.678/0001-90".to_string()),
            telefone: None,
            endereco: None,
            municipio: Some("Altamira".to_string()),
            uf: Some("PA".to_string()),
            numero_cadeiras: Some(11),
        };

        assert!(payload.validate().is_ok());
    }
}
