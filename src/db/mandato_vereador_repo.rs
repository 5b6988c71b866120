// src/db/mandato_vereador_repo.rs

use sqlx::{Executor, PgPool, Postgres};

use crate::{common::error::AppError, models::mandato_vereador::MandatoVereador};

#[derive(Clone)]
pub struct MandatoVereadorRepository {
    pool: PgPool,
}

impl MandatoVereadorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<MandatoVereador>, AppError> {
        let maybe_assoc = sqlx::query_as::<_, MandatoVereador>(
            "SELECT id, mandato_id, vereador_id, funcao FROM mandato_vereador WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(maybe_assoc)
    }

    // A unicidade "um vereador por mandato" é verificada com esta busca
    // antes de criar a associação.
    pub async fn find_by_vereador_and_mandato(
        &self,
        vereador_id: i64,
        mandato_id: i64,
    ) -> Result<Option<MandatoVereador>, AppError> {
        let maybe_assoc = sqlx::query_as::<_, MandatoVereador>(
            r#"
            SELECT id, mandato_id, vereador_id, funcao
            FROM mandato_vereador
            WHERE vereador_id = $1 AND mandato_id = $2
            "#,
        )
        .bind(vereador_id)
        .bind(mandato_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(maybe_assoc)
    }

    // Lista as associações de um mandato. O filtro busca pelo nome ou
    // e-mail do vereador, por isso o JOIN.
    pub async fn list_by_mandato(
        &self,
        mandato_id: i64,
        skip: i64,
        limit: i64,
        filtro: Option<&str>,
    ) -> Result<Vec<MandatoVereador>, AppError> {
        let like = filtro.map(|f| format!("%{f}%"));
        let associacoes = sqlx::query_as::<_, MandatoVereador>(
            r#"
            SELECT mv.id, mv.mandato_id, mv.vereador_id, mv.funcao
            FROM mandato_vereador mv
            JOIN vereador v ON v.id = mv.vereador_id
            WHERE mv.mandato_id = $1
              AND ($2::text IS NULL OR v.nome ILIKE $2 OR v.email ILIKE $2)
            ORDER BY mv.id
            OFFSET $3 LIMIT $4
            "#,
        )
        .bind(mandato_id)
        .bind(like)
        .bind(skip)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(associacoes)
    }

    pub async fn count_by_mandato(
        &self,
        mandato_id: i64,
        filtro: Option<&str>,
    ) -> Result<i64, AppError> {
        let like = filtro.map(|f| format!("%{f}%"));
        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM mandato_vereador mv
            JOIN vereador v ON v.id = mv.vereador_id
            WHERE mv.mandato_id = $1
              AND ($2::text IS NULL OR v.nome ILIKE $2 OR v.email ILIKE $2)
            "#,
        )
        .bind(mandato_id)
        .bind(like)
        .fetch_one(&self.pool)
        .await?;
        Ok(total)
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        mandato_id: i64,
        vereador_id: i64,
        funcao: i32,
    ) -> Result<MandatoVereador, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let assoc = sqlx::query_as::<_, MandatoVereador>(
            r#"
            INSERT INTO mandato_vereador (mandato_id, vereador_id, funcao)
            VALUES ($1, $2, $3)
            RETURNING id, mandato_id, vereador_id, funcao
            "#,
        )
        .bind(mandato_id)
        .bind(vereador_id)
        .bind(funcao)
        .fetch_one(executor)
        .await?;
        Ok(assoc)
    }

    pub async fn update_funcao<'e, E>(
        &self,
        executor: E,
        id: i64,
        funcao: i32,
    ) -> Result<MandatoVereador, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let assoc = sqlx::query_as::<_, MandatoVereador>(
            r#"
            UPDATE mandato_vereador SET funcao = $2
            WHERE id = $1
            RETURNING id, mandato_id, vereador_id, funcao
            "#,
        )
        .bind(id)
        .bind(funcao)
        .fetch_one(executor)
        .await?;
        Ok(assoc)
    }

    pub async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM mandato_vereador WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
