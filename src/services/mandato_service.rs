// src/services/mandato_service.rs

use crate::{
    common::error::AppError,
    db::{CamaraRepository, MandatoRepository},
    models::{
        camara::CamaraSimple,
        mandato::{Mandato, MandatoCreate, MandatoPublic, MandatoUpdate},
    },
};

#[derive(Clone)]
pub struct MandatoService {
    repository: MandatoRepository,
    camara_repo: CamaraRepository,
}

impl MandatoService {
    pub fn new(repository: MandatoRepository, camara_repo: CamaraRepository) -> Self {
        Self {
            repository,
            camara_repo,
        }
    }

    // Monta a resposta pública buscando a câmara do mandato. O FK garante
    // que ela existe; se sumiu, é inconsistência de dados, não 404.
    async fn to_public(&self, mandato: Mandato) -> Result<MandatoPublic, AppError> {
        let camara = self
            .camara_repo
            .find_by_id_any(mandato.camara_id)
            .await?
            .ok_or_else(|| {
                anyhow::anyhow!("Câmara {} do mandato {} não existe", mandato.camara_id, mandato.id)
            })?;

        Ok(MandatoPublic::new(mandato, camara.into()))
    }

    pub async fn get_mandato(&self, id: i64) -> Result<MandatoPublic, AppError> {
        let mandato = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(AppError::MandatoNotFound)?;

        self.to_public(mandato).await
    }

    pub async fn create_mandato(&self, payload: &MandatoCreate) -> Result<MandatoPublic, AppError> {
        // Valida se a câmara associada ao mandato existe
        let camara = self
            .camara_repo
            .find_by_id(payload.camara_id)
            .await?
            .ok_or(AppError::CamaraNotFound)?;

        let mandato = self.repository.create(payload).await?;
        Ok(MandatoPublic::new(mandato, camara.into()))
    }

    pub async fn get_all_mandatos_by_camara(
        &self,
        camara_id: i64,
        skip: i64,
        limit: i64,
        filtro: Option<&str>,
    ) -> Result<Vec<MandatoPublic>, AppError> {
        // Valida se a câmara existe antes de buscar os mandatos
        let camara = self
            .camara_repo
            .find_by_id(camara_id)
            .await?
            .ok_or(AppError::CamaraNotFound)?;

        let camara_simple = CamaraSimple::from(camara);
        let mandatos = self
            .repository
            .list_by_camara(camara_id, skip, limit, filtro)
            .await?;

        // Todos os mandatos da página compartilham a mesma câmara
        Ok(mandatos
            .into_iter()
            .map(|m| MandatoPublic::new(m, camara_simple.clone()))
            .collect())
    }

    pub async fn get_total_mandatos_by_camara(
        &self,
        camara_id: i64,
        filtro: Option<&str>,
    ) -> Result<i64, AppError> {
        self.repository.count_by_camara(camara_id, filtro).await
    }

    pub async fn update_mandato(
        &self,
        id: i64,
        payload: &MandatoUpdate,
    ) -> Result<MandatoPublic, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(AppError::MandatoNotFound)?;

        let mandato = self.repository.update(id, payload).await?;
        self.to_public(mandato).await
    }

    // Exclusão física.
    pub async fn delete_mandato(&self, id: i64) -> Result<(), AppError> {
        let removidos = self.repository.delete(id).await?;
        if removidos == 0 {
            return Err(AppError::MandatoNotFound);
        }
        Ok(())
    }
}
