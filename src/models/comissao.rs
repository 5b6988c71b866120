// src/models/comissao.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::common::fmt;

// Representa uma comissão vinda do banco de dados
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Comissao {
    pub id: i64,
    pub nome: String,
    pub ativa: bool,
    pub data_inicio: DateTime<Utc>,
    pub data_fim: Option<DateTime<Utc>>,
    pub camara_id: i64,
    pub dt_cadastro: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ComissaoPublic {
    pub id: i64,
    pub nome: String,
    pub ativa: bool,
    pub data_inicio: DateTime<Utc>,
    pub data_fim: Option<DateTime<Utc>>,
    pub camara_id: i64,
    pub dt_cadastro: DateTime<Utc>,
    pub data_inicio_formatada: String,
    pub data_fim_formatada: Option<String>,
    pub dt_cadastro_formatada: String,
}

impl From<Comissao> for ComissaoPublic {
    fn from(c: Comissao) -> Self {
        Self {
            id: c.id,
            nome: c.nome,
            ativa: c.ativa,
            data_inicio: c.data_inicio,
            data_fim: c.data_fim,
            camara_id: c.camara_id,
            dt_cadastro: c.dt_cadastro,
            data_inicio_formatada: fmt::data_br_dt(&c.data_inicio),
            data_fim_formatada: c.data_fim.as_ref().map(fmt::data_br_dt),
            dt_cadastro_formatada: fmt::data_hora_br(&c.dt_cadastro),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ComissaoCreate {
    #[validate(length(min = 1, max = 120, message = "O nome é obrigatório."))]
    pub nome: String,

    pub ativa: bool,
    pub data_inicio: DateTime<Utc>,
    pub data_fim: Option<DateTime<Utc>>,
    pub camara_id: i64,
}

// Atualização parcial: campos ausentes permanecem como estão.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct ComissaoUpdate {
    #[validate(length(min = 1, max = 120, message = "O nome não pode ser vazio."))]
    pub nome: Option<String>,

    pub ativa: Option<bool>,
    pub data_inicio: Option<DateTime<Utc>>,
    pub data_fim: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn data_fim_nula_nao_e_formatada() {
        let comissao = Comissao {
            id: 1,
            nome: "Comissão de Finanças".to_string(),
            ativa: true,
            data_inicio: Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap(),
            data_fim: None,
            camara_id: 9,
            dt_cadastro: Utc.with_ymd_and_hms(2025, 1, 15, 10, 0, 0).unwrap(),
        };

        let publica = ComissaoPublic::from(comissao);
        assert_eq!(publica.data_inicio_formatada, "01/02/2025");
        assert!(publica.data_fim_formatada.is_none());
        assert_eq!(publica.dt_cadastro_formatada, "15/01/2025 às 10:00");
    }
}
