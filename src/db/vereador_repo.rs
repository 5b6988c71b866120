// src/db/vereador_repo.rs

use sqlx::{Executor, PgPool, Postgres};

use crate::{
    common::error::AppError,
    models::vereador::{Vereador, VereadorCreate, VereadorUpdate},
};

#[derive(Clone)]
pub struct VereadorRepository {
    pool: PgPool,
}

impl VereadorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Vereador>, AppError> {
        let maybe_vereador = sqlx::query_as::<_, Vereador>(
            r#"
            SELECT id, nome, email, cpf, telefone, partido, ativo, dt_cadastro, dt_atualizado
            FROM vereador
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(maybe_vereador)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Vereador>, AppError> {
        let maybe_vereador = sqlx::query_as::<_, Vereador>(
            r#"
            SELECT id, nome, email, cpf, telefone, partido, ativo, dt_cadastro, dt_atualizado
            FROM vereador
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(maybe_vereador)
    }

    pub async fn find_by_cpf(&self, cpf: &str) -> Result<Option<Vereador>, AppError> {
        let maybe_vereador = sqlx::query_as::<_, Vereador>(
            r#"
            SELECT id, nome, email, cpf, telefone, partido, ativo, dt_cadastro, dt_atualizado
            FROM vereador
            WHERE cpf = $1
            "#,
        )
        .bind(cpf)
        .fetch_optional(&self.pool)
        .await?;
        Ok(maybe_vereador)
    }

    pub async fn list(
        &self,
        skip: i64,
        limit: i64,
        filtro: Option<&str>,
    ) -> Result<Vec<Vereador>, AppError> {
        let like = filtro.map(|f| format!("%{f}%"));
        let vereadores = sqlx::query_as::<_, Vereador>(
            r#"
            SELECT id, nome, email, cpf, telefone, partido, ativo, dt_cadastro, dt_atualizado
            FROM vereador
            WHERE ($1::text IS NULL OR nome ILIKE $1 OR email ILIKE $1)
            ORDER BY id
            OFFSET $2 LIMIT $3
            "#,
        )
        .bind(like)
        .bind(skip)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(vereadores)
    }

    pub async fn count(&self, filtro: Option<&str>) -> Result<i64, AppError> {
        let like = filtro.map(|f| format!("%{f}%"));
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM vereador WHERE ($1::text IS NULL OR nome ILIKE $1 OR email ILIKE $1)",
        )
        .bind(like)
        .fetch_one(&self.pool)
        .await?;
        Ok(total)
    }

    // Recebe o executor para poder participar da transação que cria o
    // vereador junto com a associação ao mandato.
    pub async fn create<'e, E>(
        &self,
        executor: E,
        payload: &VereadorCreate,
    ) -> Result<Vereador, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let vereador = sqlx::query_as::<_, Vereador>(
            r#"
            INSERT INTO vereador (nome, email, cpf, telefone, partido, ativo)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, nome, email, cpf, telefone, partido, ativo, dt_cadastro, dt_atualizado
            "#,
        )
        .bind(&payload.nome)
        .bind(&payload.email)
        .bind(&payload.cpf)
        .bind(&payload.telefone)
        .bind(&payload.partido)
        .bind(payload.ativo)
        .fetch_one(executor)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                // e-mail e CPF possuem chaves únicas na tabela
                if db_err.is_unique_violation() {
                    return AppError::VereadorAlreadyExists;
                }
            }
            e.into()
        })?;

        Ok(vereador)
    }

    pub async fn update<'e, E>(
        &self,
        executor: E,
        id: i64,
        payload: &VereadorUpdate,
    ) -> Result<Vereador, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let vereador = sqlx::query_as::<_, Vereador>(
            r#"
            UPDATE vereador SET
                nome = COALESCE($2, nome),
                email = COALESCE($3, email),
                cpf = COALESCE($4, cpf),
                telefone = COALESCE($5, telefone),
                partido = COALESCE($6, partido),
                ativo = COALESCE($7, ativo),
                dt_atualizado = NOW()
            WHERE id = $1
            RETURNING id, nome, email, cpf, telefone, partido, ativo, dt_cadastro, dt_atualizado
            "#,
        )
        .bind(id)
        .bind(&payload.nome)
        .bind(&payload.email)
        .bind(&payload.cpf)
        .bind(&payload.telefone)
        .bind(&payload.partido)
        .bind(payload.ativo)
        .fetch_one(executor)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::VereadorAlreadyExists;
                }
            }
            e.into()
        })?;

        Ok(vereador)
    }
}
