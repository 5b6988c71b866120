// src/services/mandato_vereador_service.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    db::{CamaraRepository, MandatoRepository, MandatoVereadorRepository, VereadorRepository},
    models::{
        mandato::{Mandato, MandatoPublic},
        mandato_vereador::{
            MandatoVereador, MandatoVereadorCreate, MandatoVereadorPublic,
            MandatoVereadorUpdatePayload,
        },
        vereador::VereadorUpdate,
    },
};

#[derive(Clone)]
pub struct MandatoVereadorService {
    repository: MandatoVereadorRepository,
    vereador_repo: VereadorRepository,
    mandato_repo: MandatoRepository,
    camara_repo: CamaraRepository,
    pool: PgPool,
}

impl MandatoVereadorService {
    pub fn new(
        repository: MandatoVereadorRepository,
        vereador_repo: VereadorRepository,
        mandato_repo: MandatoRepository,
        camara_repo: CamaraRepository,
        pool: PgPool,
    ) -> Self {
        Self {
            repository,
            vereador_repo,
            mandato_repo,
            camara_repo,
            pool,
        }
    }

    async fn mandato_public(&self, mandato: Mandato) -> Result<MandatoPublic, AppError> {
        let camara = self
            .camara_repo
            .find_by_id_any(mandato.camara_id)
            .await?
            .ok_or_else(|| {
                anyhow::anyhow!("Câmara {} do mandato {} não existe", mandato.camara_id, mandato.id)
            })?;
        Ok(MandatoPublic::new(mandato, camara.into()))
    }

    // Monta a resposta pública com o vereador e o mandato (com a câmara)
    // aninhados.
    pub(crate) async fn to_public(
        &self,
        assoc: MandatoVereador,
    ) -> Result<MandatoVereadorPublic, AppError> {
        let vereador = self
            .vereador_repo
            .find_by_id(assoc.vereador_id)
            .await?
            .ok_or_else(|| {
                anyhow::anyhow!("Vereador {} da associação {} não existe", assoc.vereador_id, assoc.id)
            })?;

        let mandato = self
            .mandato_repo
            .find_by_id(assoc.mandato_id)
            .await?
            .ok_or_else(|| {
                anyhow::anyhow!("Mandato {} da associação {} não existe", assoc.mandato_id, assoc.id)
            })?;

        let mandato = self.mandato_public(mandato).await?;
        Ok(MandatoVereadorPublic::new(assoc, vereador.into(), mandato))
    }

    pub async fn get_association(&self, id: i64) -> Result<MandatoVereadorPublic, AppError> {
        let assoc = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(AppError::AssociacaoNotFound)?;

        self.to_public(assoc).await
    }

    pub async fn get_associations_by_mandato(
        &self,
        mandato_id: i64,
        skip: i64,
        limit: i64,
        filtro: Option<&str>,
    ) -> Result<Vec<MandatoVereadorPublic>, AppError> {
        let mandato = self
            .mandato_repo
            .find_by_id(mandato_id)
            .await?
            .ok_or(AppError::MandatoNotFound)?;

        // Todos os itens da página compartilham o mesmo mandato
        let mandato_public = self.mandato_public(mandato).await?;

        let associacoes = self
            .repository
            .list_by_mandato(mandato_id, skip, limit, filtro)
            .await?;

        let mut items = Vec::with_capacity(associacoes.len());
        for assoc in associacoes {
            let vereador = self
                .vereador_repo
                .find_by_id(assoc.vereador_id)
                .await?
                .ok_or_else(|| {
                    anyhow::anyhow!(
                        "Vereador {} da associação {} não existe",
                        assoc.vereador_id,
                        assoc.id
                    )
                })?;
            items.push(MandatoVereadorPublic::new(
                assoc,
                vereador.into(),
                mandato_public.clone(),
            ));
        }
        Ok(items)
    }

    pub async fn get_total_associations_by_mandato(
        &self,
        mandato_id: i64,
        filtro: Option<&str>,
    ) -> Result<i64, AppError> {
        self.repository.count_by_mandato(mandato_id, filtro).await
    }

    // Cria a associação. Pode-se passar um `vereador_id` (ou um objeto
    // `vereador` com id) para associar um existente, ou um objeto
    // `vereador` sem id para criá-lo na mesma transação.
    pub async fn create_association(
        &self,
        payload: &MandatoVereadorCreate,
    ) -> Result<MandatoVereadorPublic, AppError> {
        let vereador_id = match &payload.vereador {
            Some(vereador_data) => vereador_data.id,
            None => payload.vereador_id,
        };

        let assoc = match vereador_id {
            Some(vereador_id) => {
                self.vereador_repo
                    .find_by_id(vereador_id)
                    .await?
                    .ok_or(AppError::VereadorNotFound)?;

                self.mandato_repo
                    .find_by_id(payload.mandato_id)
                    .await?
                    .ok_or(AppError::MandatoNotFound)?;

                // Um vereador só entra uma vez em cada mandato
                if self
                    .repository
                    .find_by_vereador_and_mandato(vereador_id, payload.mandato_id)
                    .await?
                    .is_some()
                {
                    return Err(AppError::VereadorJaNoMandato);
                }

                self.repository
                    .create(&self.pool, payload.mandato_id, vereador_id, payload.funcao)
                    .await?
            }
            None => {
                let vereador_data =
                    payload.vereador.as_ref().ok_or(AppError::VereadorDataRequired)?;

                // Mesmas regras do cadastro direto de vereador
                if self
                    .vereador_repo
                    .find_by_email(&vereador_data.email)
                    .await?
                    .is_some()
                    || self
                        .vereador_repo
                        .find_by_cpf(&vereador_data.cpf)
                        .await?
                        .is_some()
                {
                    return Err(AppError::VereadorAlreadyExists);
                }

                self.mandato_repo
                    .find_by_id(payload.mandato_id)
                    .await?
                    .ok_or(AppError::MandatoNotFound)?;

                let mut tx = self.pool.begin().await?;

                let novo_vereador = self.vereador_repo.create(&mut *tx, vereador_data).await?;

                let assoc = self
                    .repository
                    .create(&mut *tx, payload.mandato_id, novo_vereador.id, payload.funcao)
                    .await?;

                tx.commit().await?;
                assoc
            }
        };

        self.to_public(assoc).await
    }

    // Atualiza a função na associação e o perfil do vereador vinculado na
    // mesma transação.
    pub async fn update_association(
        &self,
        id: i64,
        payload: &MandatoVereadorUpdatePayload,
    ) -> Result<MandatoVereadorPublic, AppError> {
        let assoc = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(AppError::AssociacaoNotFound)?;

        let vereador_update = VereadorUpdate::from(payload.vereador.clone());

        let mut tx = self.pool.begin().await?;

        self.vereador_repo
            .update(&mut *tx, assoc.vereador_id, &vereador_update)
            .await?;

        let atualizada = self
            .repository
            .update_funcao(&mut *tx, id, payload.funcao)
            .await?;

        tx.commit().await?;

        self.to_public(atualizada).await
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
