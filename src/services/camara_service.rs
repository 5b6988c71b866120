// src/services/camara_service.rs

use crate::{
    common::error::AppError,
    db::CamaraRepository,
    models::camara::{Camara, CamaraCreate, CamaraUpdate},
};

#[derive(Clone)]
pub struct CamaraService {
    repository: CamaraRepository,
}

impl CamaraService {
    pub fn new(repository: CamaraRepository) -> Self {
        Self { repository }
    }

    pub async fn create_camara(&self, payload: &CamaraCreate) -> Result<Camara, AppError> {
        self.repository.create(payload).await
    }

    pub async fn get_camara(&self, id: i64) -> Result<Camara, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(AppError::CamaraNotFound)
    }

    pub async fn get_all_camaras(
        &self,
        skip: i64,
        limit: i64,
        filtro: Option<&str>,
    ) -> Result<Vec<Camara>, AppError> {
        self.repository.list(skip, limit, filtro).await
    }

    pub async fn get_total_camaras(&self, filtro: Option<&str>) -> Result<i64, AppError> {
        self.repository.count(filtro).await
    }

    pub async fn update_camara(&self, id: i64, payload: &CamaraUpdate) -> Result<Camara, AppError> {
        // Garante o 404 antes de tentar o update
        self.get_camara(id).await?;
        self.repository.update(id, payload).await
    }

    // Exclusão lógica; a câmara some das listagens mas permanece nas
    // respostas aninhadas de registros antigos.
    pub async fn delete_camara(&self, id: i64) -> Result<Camara, AppError> {
        self.repository
            .soft_delete(id)
            .await?
            .ok_or(AppError::CamaraNotFound)
    }
}
