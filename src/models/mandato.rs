// src/models/mandato.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::common::fmt;
use crate::models::camara::CamaraSimple;

// Representa um mandato (legislatura) vindo do banco de dados
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Mandato {
    pub id: i64,
    pub descricao: String,
    pub data_inicio: NaiveDate,
    pub data_fim: NaiveDate,
    pub ativo: bool,
    pub camara_id: i64,
    pub dt_cadastro: DateTime<Utc>,
    pub dt_atualizado: Option<DateTime<Utc>>,
}

// Resposta pública: aninha os dados básicos da câmara relacionada.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MandatoPublic {
    pub id: i64,
    pub descricao: String,
    pub data_inicio: NaiveDate,
    pub data_fim: NaiveDate,
    pub ativo: bool,
    pub camara_id: i64,
    pub dt_cadastro: DateTime<Utc>,
    pub dt_atualizado: Option<DateTime<Utc>>,
    pub camara: CamaraSimple,
    pub data_inicio_formatada: String,
    pub data_fim_formatada: String,
    pub dt_cadastro_formatada: String,
}

impl MandatoPublic {
    pub fn new(m: Mandato, camara: CamaraSimple) -> Self {
        Self {
            id: m.id,
            descricao: m.descricao,
            data_inicio: m.data_inicio,
            data_fim: m.data_fim,
            ativo: m.ativo,
            camara_id: m.camara_id,
            dt_cadastro: m.dt_cadastro,
            dt_atualizado: m.dt_atualizado,
            camara,
            data_inicio_formatada: fmt::data_br(&m.data_inicio),
            data_fim_formatada: fmt::data_br(&m.data_fim),
            dt_cadastro_formatada: fmt::data_hora_br(&m.dt_cadastro),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct MandatoCreate {
    #[validate(length(min = 1, max = 120, message = "A descrição é obrigatória."))]
    pub descricao: String,

    pub ativo: bool,
    pub data_inicio: NaiveDate,
    pub data_fim: NaiveDate,
    pub camara_id: i64,
}

// Atualização parcial: campos ausentes permanecem como estão.
// A câmara de um mandato não muda depois de criado.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct MandatoUpdate {
    #[validate(length(min = 1, max = 120, message = "A descrição não pode ser vazia."))]
    pub descricao: Option<String>,

    pub data_inicio: Option<NaiveDate>,
    pub data_fim: Option<NaiveDate>,
    pub ativo: Option<bool>,
}

// Mensagem simples de confirmação (ex: resposta do DELETE).
#[derive(Debug, Serialize, ToSchema)]
pub struct MensagemResposta {
    pub detalhe: String,
}
