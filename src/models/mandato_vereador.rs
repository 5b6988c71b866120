// src/models/mandato_vereador.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::mandato::MandatoPublic;
use crate::models::vereador::{VereadorCreate, VereadorInUpdate, VereadorPublic};

// Linha da tabela associativa entre mandato e vereador.
// `funcao` é o código do papel do vereador no mandato.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct MandatoVereador {
    pub id: i64,
    pub mandato_id: i64,
    pub vereador_id: i64,
    pub funcao: i32,
}

// Resposta pública: aninha o vereador e o mandato (com a câmara).
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MandatoVereadorPublic {
    pub id: i64,
    pub vereador_id: i64,
    pub mandato_id: i64,
    pub funcao: i32,
    pub vereador: VereadorPublic,
    pub mandato: MandatoPublic,
}

impl MandatoVereadorPublic {
    pub fn new(assoc: MandatoVereador, vereador: VereadorPublic, mandato: MandatoPublic) -> Self {
        Self {
            id: assoc.id,
            vereador_id: assoc.vereador_id,
            mandato_id: assoc.mandato_id,
            funcao: assoc.funcao,
            vereador,
            mandato,
        }
    }
}

// Criação da associação: ou aponta para um vereador existente
// (`vereador_id`), ou traz o objeto `vereador` para criá-lo junto.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct MandatoVereadorCreate {
    pub mandato_id: i64,
    pub funcao: i32,

    #[validate(nested)]
    pub vereador: Option<VereadorCreate>,
    pub vereador_id: Option<i64>,
}

// Atualização: função na associação e dados do vereador vinculado.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct MandatoVereadorUpdatePayload {
    pub mandato_id: i64,
    pub funcao: i32,
    pub vereador: VereadorInUpdate,
}
