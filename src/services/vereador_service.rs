// src/services/vereador_service.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    db::VereadorRepository,
    models::vereador::{Vereador, VereadorCreate, VereadorUpdate},
};

#[derive(Clone)]
pub struct VereadorService {
    repository: VereadorRepository,
    pool: PgPool,
}

impl VereadorService {
    pub fn new(repository: VereadorRepository, pool: PgPool) -> Self {
        Self { repository, pool }
    }

    pub async fn create_vereador(&self, payload: &VereadorCreate) -> Result<Vereador, AppError> {
        let existente_email = self.repository.find_by_email(&payload.email).await?;
        let existente_cpf = self.repository.find_by_cpf(&payload.cpf).await?;

        if existente_email.is_some() || existente_cpf.is_some() {
            return Err(AppError::VereadorAlreadyExists);
        }

        self.repository.create(&self.pool, payload).await
    }

    pub async fn get_vereador_by_id(&self, id: i64) -> Result<Vereador, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(AppError::VereadorNotFound)
    }

    pub async fn get_vereador_by_email(&self, email: &str) -> Result<Vereador, AppError> {
        self.repository
            .find_by_email(email)
            .await?
            .ok_or(AppError::VereadorNotFound)
    }

    pub async fn get_vereador_by_cpf(&self, cpf: &str) -> Result<Vereador, AppError> {
        self.repository
            .find_by_cpf(cpf)
            .await?
            .ok_or(AppError::VereadorNotFound)
    }

    pub async fn update_vereador(
        &self,
        id: i64,
        payload: &VereadorUpdate,
    ) -> Result<Vereador, AppError> {
        self.get_vereador_by_id(id).await?;
        self.repository.update(&self.pool, id, payload).await
    }

    pub async fn get_all_vereadores(
        &self,
        skip: i64,
        limit: i64,
        filtro: Option<&str>,
    ) -> Result<Vec<Vereador>, AppError> {
        self.repository.list(skip, limit, filtro).await
    }

    pub async fn get_total_vereadores(&self, filtro: Option<&str>) -> Result<i64, AppError> {
        self.repository.count(filtro).await
    }
}
