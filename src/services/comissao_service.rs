// src/services/comissao_service.rs

use crate::{
    common::error::AppError,
    db::{CamaraRepository, ComissaoRepository},
    models::comissao::{Comissao, ComissaoCreate, ComissaoUpdate},
};

#[derive(Clone)]
pub struct ComissaoService {
    repository: ComissaoRepository,
    camara_repo: CamaraRepository,
}

impl ComissaoService {
    pub fn new(repository: ComissaoRepository, camara_repo: CamaraRepository) -> Self {
        Self {
            repository,
            camara_repo,
        }
    }

    pub async fn get_comissao(&self, id: i64) -> Result<Comissao, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(AppError::ComissaoNotFound)
    }

    pub async fn create_comissao(&self, payload: &ComissaoCreate) -> Result<Comissao, AppError> {
        // Valida se a câmara associada à comissão existe
        self.camara_repo
            .find_by_id(payload.camara_id)
            .await?
            .ok_or(AppError::CamaraNotFound)?;

        self.repository.create(payload).await
    }

    pub async fn get_all_comissoes_by_camara(
        &self,
        camara_id: i64,
        skip: i64,
        limit: i64,
        filtro: Option<&str>,
    ) -> Result<Vec<Comissao>, AppError> {
        self.camara_repo
            .find_by_id(camara_id)
            .await?
            .ok_or(AppError::CamaraNotFound)?;

        self.repository
            .list_by_camara(camara_id, skip, limit, filtro)
            .await
    }

    pub async fn get_total_comissoes_by_camara(
        &self,
        camara_id: i64,
        filtro: Option<&str>,
    ) -> Result<i64, AppError> {
        self.repository.count_by_camara(camara_id, filtro).await
    }

    pub async fn update_comissao(
        &self,
        id: i64,
        payload: &ComissaoUpdate,
    ) -> Result<Comissao, AppError> {
        self.get_comissao(id).await?;
        self.repository.update(id, payload).await
    }

    // Exclusão física.
    pub async fn delete_comissao(&self, id: i64) -> Result<(), AppError> {
        let removidos = self.repository.delete(id).await?;
        if removidos == 0 {
            return Err(AppError::ComissaoNotFound);
        }
        Ok(())
    }
}
