// src/common/pagination.rs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

// Parâmetros de listagem compartilhados por todas as rotas de coleção.
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListParams {
    // Quantos registros pular (offset)
    #[serde(default)]
    pub skip: i64,

    // Tamanho máximo da página
    #[serde(default = "default_limit")]
    pub limit: i64,

    // Texto de busca aplicado aos campos de cada entidade
    pub filtro: Option<String>,
}

fn default_limit() -> i64 {
    100
}

// Envelope padrão das respostas paginadas: os itens da página e o total
// de registros que casam com o filtro (ignorando a paginação).
#[derive(Debug, Serialize, ToSchema)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parametros_ausentes_usam_padrao() {
        let params: ListParams = serde_json::from_value(json!({})).unwrap();
        assert_eq!(params.skip, 0);
        assert_eq!(params.limit, 100);
        assert!(params.filtro.is_none());
    }

    #[test]
    fn parametros_explicitos_sao_respeitados() {
        let params: ListParams =
            serde_json::from_value(json!({"skip": 20, "limit": 10, "filtro": "maria"})).unwrap();
        assert_eq!(params.skip, 20);
        assert_eq!(params.limit, 10);
        assert_eq!(params.filtro.as_deref(), Some("maria"));
    }
}
