// src/db/mandato_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::mandato::{Mandato, MandatoCreate, MandatoUpdate},
};

#[derive(Clone)]
pub struct MandatoRepository {
    pool: PgPool,
}

impl MandatoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Mandato>, AppError> {
        let maybe_mandato = sqlx::query_as::<_, Mandato>(
            r#"
            SELECT id, descricao, data_inicio, data_fim, ativo, camara_id, dt_cadastro, dt_atualizado
            FROM mandato
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(maybe_mandato)
    }

    // Lista os mandatos de uma câmara, com filtro pela descrição.
    pub async fn list_by_camara(
        &self,
        camara_id: i64,
        skip: i64,
        limit: i64,
        filtro: Option<&str>,
    ) -> Result<Vec<Mandato>, AppError> {
        let like = filtro.map(|f| format!("%{f}%"));
        let mandatos = sqlx::query_as::<_, Mandato>(
            r#"
            SELECT id, descricao, data_inicio, data_fim, ativo, camara_id, dt_cadastro, dt_atualizado
            FROM mandato
            WHERE camara_id = $1
              AND ($2::text IS NULL OR descricao ILIKE $2)
            ORDER BY id
            OFFSET $3 LIMIT $4
            "#,
        )
        .bind(camara_id)
        .bind(like)
        .bind(skip)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(mandatos)
    }

    pub async fn count_by_camara(
        &self,
        camara_id: i64,
        filtro: Option<&str>,
    ) -> Result<i64, AppError> {
        let like = filtro.map(|f| format!("%{f}%"));
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM mandato WHERE camara_id = $1 AND ($2::text IS NULL OR descricao ILIKE $2)",
        )
        .bind(camara_id)
        .bind(like)
        .fetch_one(&self.pool)
        .await?;
        Ok(total)
    }

    pub async fn create(&self, payload: &MandatoCreate) -> Result<Mandato, AppError> {
        let mandato = sqlx::query_as::<_, Mandato>(
            r#"
            INSERT INTO mandato (descricao, data_inicio, data_fim, ativo, camara_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, descricao, data_inicio, data_fim, ativo, camara_id, dt_cadastro, dt_atualizado
            "#,
        )
        .bind(&payload.descricao)
        .bind(payload.data_inicio)
        .bind(payload.data_fim)
        .bind(payload.ativo)
        .bind(payload.camara_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(mandato)
    }

    pub async fn update(&self, id: i64, payload: &MandatoUpdate) -> Result<Mandato, AppError> {
        let mandato = sqlx::query_as::<_, Mandato>(
            r#"
            UPDATE mandato SET
                descricao = COALESCE($2, descricao),
                data_inicio = COALESCE($3, data_inicio),
                data_fim = COALESCE($4, data_fim),
                ativo = COALESCE($5, ativo),
                dt_atualizado = NOW()
            WHERE id = $1
            RETURNING id, descricao, data_inicio, data_fim, ativo, camara_id, dt_cadastro, dt_atualizado
            "#,
        )
        .bind(id)
        .bind(&payload.descricao)
        .bind(payload.data_inicio)
        .bind(payload.data_fim)
        .bind(payload.ativo)
        .fetch_one(&self.pool)
        .await?;
        Ok(mandato)
    }

    // Exclusão física. Devolve quantas linhas foram removidas.
    pub async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM mandato WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
