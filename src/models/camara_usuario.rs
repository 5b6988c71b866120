// src/models/camara_usuario.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::camara::CamaraPublic;
use crate::models::usuario::{UsuarioCreate, UsuarioInUpdate, UsuarioSimple};
use crate::models::vereador::VereadorPublic;

// Linha da tabela associativa entre câmara e usuário. O campo `permissao`
// guarda a lista de permissões serializada em JSON (texto livre).
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CamaraUsuario {
    pub id: i64,
    pub usuario_id: i64,
    pub camara_id: i64,
    pub vereador_id: Option<i64>,
    pub papel: i32,
    pub permissao: String,
    pub ativo: bool,
    pub excluido: bool,
    pub dt_cadastro: DateTime<Utc>,
    pub dt_atualizado: Option<DateTime<Utc>>,
}

// Resposta pública: aninha o usuário, a câmara e o vereador (se houver).
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CamaraUsuarioPublic {
    pub id: i64,
    pub usuario_id: i64,
    pub camara_id: i64,
    pub vereador_id: Option<i64>,
    pub papel: i32,
    pub permissao: String,
    pub ativo: bool,
    pub usuario: UsuarioSimple,
    pub camara: CamaraPublic,
    pub vereador: Option<VereadorPublic>,
}

impl CamaraUsuarioPublic {
    pub fn new(
        assoc: CamaraUsuario,
        usuario: UsuarioSimple,
        camara: CamaraPublic,
        vereador: Option<VereadorPublic>,
    ) -> Self {
        Self {
            id: assoc.id,
            usuario_id: assoc.usuario_id,
            camara_id: assoc.camara_id,
            vereador_id: assoc.vereador_id,
            papel: assoc.papel,
            permissao: assoc.permissao,
            ativo: assoc.ativo,
            usuario,
            camara,
            vereador,
        }
    }
}

// Criação da associação: ou aponta para um usuário existente
// (`usuario_id`), ou traz o objeto `usuario` para criá-lo junto.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CamaraUsuarioCreate {
    pub camara_id: i64,
    pub papel: i32,
    pub permissao: Vec<String>,

    pub ativo: Option<bool>,

    #[validate(nested)]
    pub usuario: Option<UsuarioCreate>,
    pub usuario_id: Option<i64>,
    pub vereador_id: Option<i64>,
}

// Atualização: dados da associação e do usuário vinculado, juntos.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CamaraUsuarioUpdatePayload {
    pub ativo: bool,
    pub camara_id: i64,
    pub papel: i32,
    pub vereador_id: Option<i64>,
    pub permissao: Vec<String>,
    pub usuario: UsuarioInUpdate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_aceita_usuario_embutido() {
        let payload: CamaraUsuarioCreate = serde_json::from_value(json!({
            "camara_id": 3,
            "papel": 1,
            "permissao": ["camara:read", "camara:write"],
            "usuario": {
                "nome": "Maria",
                "email": "maria@email.com",
                "senha": "1234",
                "confSenha": "1234"
            }
        }))
        .unwrap();

        assert!(payload.usuario_id.is_none());
        assert_eq!(payload.permissao.len(), 2);
        assert_eq!(payload.usuario.as_ref().unwrap().nome, "Maria");
    }

    #[test]
    fn create_aceita_usuario_por_id() {
        let payload: CamaraUsuarioCreate = serde_json::from_value(json!({
            "camara_id": 3,
            "papel": 2,
            "permissao": [],
            "usuario_id": 42
        }))
        .unwrap();

        assert_eq!(payload.usuario_id, Some(42));
        assert!(payload.usuario.is_none());
    }
}
