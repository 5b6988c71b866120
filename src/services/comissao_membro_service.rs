// src/services/comissao_membro_service.rs

use crate::{
    common::error::AppError,
    db::{ComissaoMembroRepository, ComissaoRepository, MandatoVereadorRepository},
    models::{
        comissao::Comissao,
        comissao_membro::{
            ComissaoMembro, ComissaoMembroCreate, ComissaoMembroPublic, ComissaoMembroUpdate,
        },
    },
    services::mandato_vereador_service::MandatoVereadorService,
};

#[derive(Clone)]
pub struct ComissaoMembroService {
    repository: ComissaoMembroRepository,
    comissao_repo: ComissaoRepository,
    mandato_vereador_repo: MandatoVereadorRepository,
    // A composição do vínculo mandato/vereador aninhado é delegada ao
    // serviço que já sabe montá-la.
    mandato_vereador_service: MandatoVereadorService,
}

impl ComissaoMembroService {
    pub fn new(
        repository: ComissaoMembroRepository,
        comissao_repo: ComissaoRepository,
        mandato_vereador_repo: MandatoVereadorRepository,
        mandato_vereador_service: MandatoVereadorService,
    ) -> Self {
        Self {
            repository,
            comissao_repo,
            mandato_vereador_repo,
            mandato_vereador_service,
        }
    }

    async fn to_public(
        &self,
        membro: ComissaoMembro,
        comissao: Comissao,
    ) -> Result<ComissaoMembroPublic, AppError> {
        let mandato_vereador = self
            .mandato_vereador_service
            .get_association(membro.mandato_vereador_id)
            .await?;

        Ok(ComissaoMembroPublic::new(membro, comissao.into(), mandato_vereador))
    }

    async fn comissao_de(&self, membro: &ComissaoMembro) -> Result<Comissao, AppError> {
        self.comissao_repo
            .find_by_id(membro.comissao_id)
            .await?
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Comissão {} do membro {} não existe",
                    membro.comissao_id,
                    membro.id
                )
                .into()
            })
    }

    pub async fn get_association(&self, id: i64) -> Result<ComissaoMembroPublic, AppError> {
        let membro = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(AppError::AssociacaoNotFound)?;

        let comissao = self.comissao_de(&membro).await?;
        self.to_public(membro, comissao).await
    }

    pub async fn get_all_by_comissao(
        &self,
        comissao_id: i64,
        skip: i64,
        limit: i64,
        filtro: Option<&str>,
    ) -> Result<Vec<ComissaoMembroPublic>, AppError> {
        let comissao = self
            .comissao_repo
            .find_by_id(comissao_id)
            .await?
            .ok_or(AppError::ComissaoNotFound)?;

        let membros = self
            .repository
            .list_by_comissao(comissao_id, skip, limit, filtro)
            .await?;

        let mut items = Vec::with_capacity(membros.len());
        for membro in membros {
            items.push(self.to_public(membro, comissao.clone()).await?);
        }
        Ok(items)
    }

    pub async fn get_total_by_comissao(
        &self,
        comissao_id: i64,
        filtro: Option<&str>,
    ) -> Result<i64, AppError> {
        self.repository.count_by_comissao(comissao_id, filtro).await
    }

    pub async fn create_association(
        &self,
        payload: &ComissaoMembroCreate,
    ) -> Result<ComissaoMembroPublic, AppError> {
        // Valida se a comissão existe
        let comissao = self
            .comissao_repo
            .find_by_id(payload.comissao_id)
            .await?
            .ok_or(AppError::ComissaoNotFound)?;

        // Valida se o vínculo mandato/vereador existe
        self.mandato_vereador_repo
            .find_by_id(payload.mandato_vereador_id)
            .await?
            .ok_or(AppError::MandatoVereadorNotFound)?;

        let membro = self.repository.create(payload).await?;
        self.to_public(membro, comissao).await
    }

    pub async fn update_association(
        &self,
        id: i64,
        payload: &ComissaoMembroUpdate,
    ) -> Result<ComissaoMembroPublic, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(AppError::AssociacaoNotFound)?;

        let membro = self.repository.update(id, payload).await?;
        let comissao = self.comissao_de(&membro).await?;
        self.to_public(membro, comissao).await
    }

    // Exclusão física.
    pub async fn delete_association(&self, id: i64) -> Result<(), AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(AppError::AssociacaoNotFound)?;

        self.repository.delete(id).await?;
        Ok(())
    }
}
