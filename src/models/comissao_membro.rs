// src/models/comissao_membro.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::common::fmt;
use crate::models::comissao::ComissaoPublic;
use crate::models::mandato_vereador::MandatoVereadorPublic;

// Linha da tabela associativa entre comissão e mandato_vereador.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ComissaoMembro {
    pub id: i64,
    pub comissao_id: i64,
    pub mandato_vereador_id: i64,
    pub funcao: i32,
    pub data_inicio: NaiveDate,
    pub data_fim: NaiveDate,
    pub dt_cadastro: DateTime<Utc>,
}

// Resposta pública: aninha a comissão e o vínculo mandato/vereador
// completo (que por sua vez aninha o vereador e o mandato).
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ComissaoMembroPublic {
    pub id: i64,
    pub funcao: i32,
    pub data_inicio: NaiveDate,
    pub data_fim: NaiveDate,
    pub comissao_id: i64,
    pub mandato_vereador_id: i64,
    pub dt_cadastro: DateTime<Utc>,
    pub comissao: ComissaoPublic,
    pub mandato_vereador: MandatoVereadorPublic,
    pub data_inicio_formatada: String,
    pub data_fim_formatada: String,
    pub dt_cadastro_formatada: String,
}

impl ComissaoMembroPublic {
    pub fn new(
        membro: ComissaoMembro,
        comissao: ComissaoPublic,
        mandato_vereador: MandatoVereadorPublic,
    ) -> Self {
        Self {
            id: membro.id,
            funcao: membro.funcao,
            data_inicio: membro.data_inicio,
            data_fim: membro.data_fim,
            comissao_id: membro.comissao_id,
            mandato_vereador_id: membro.mandato_vereador_id,
            dt_cadastro: membro.dt_cadastro,
            comissao,
            mandato_vereador,
            data_inicio_formatada: fmt::data_br(&membro.data_inicio),
            data_fim_formatada: fmt::data_br(&membro.data_fim),
            dt_cadastro_formatada: fmt::data_hora_br(&membro.dt_cadastro),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ComissaoMembroCreate {
    pub comissao_id: i64,
    pub mandato_vereador_id: i64,
    pub funcao: i32,
    pub data_inicio: NaiveDate,
    pub data_fim: NaiveDate,
}

// Atualização parcial: campos ausentes permanecem como estão.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct ComissaoMembroUpdate {
    pub funcao: Option<i32>,
    pub data_inicio: Option<NaiveDate>,
    pub data_fim: Option<NaiveDate>,
}
