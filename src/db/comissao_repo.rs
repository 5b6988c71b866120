// src/db/comissao_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::comissao::{Comissao, ComissaoCreate, ComissaoUpdate},
};

#[derive(Clone)]
pub struct ComissaoRepository {
    pool: PgPool,
}

impl ComissaoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Comissao>, AppError> {
        let maybe_comissao = sqlx::query_as::<_, Comissao>(
            r#"
            SELECT id, nome, ativa, data_inicio, data_fim, camara_id, dt_cadastro
            FROM comissao
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(maybe_comissao)
    }

    pub async fn list_by_camara(
        &self,
        camara_id: i64,
        skip: i64,
        limit: i64,
        filtro: Option<&str>,
    ) -> Result<Vec<Comissao>, AppError> {
        let like = filtro.map(|f| format!("%{f}%"));
        let comissoes = sqlx::query_as::<_, Comissao>(
            r#"
            SELECT id, nome, ativa, data_inicio, data_fim, camara_id, dt_cadastro
            FROM comissao
            WHERE camara_id = $1
              AND ($2::text IS NULL OR nome ILIKE $2)
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
        Ok(comissoes)
    }

    pub async fn count_by_camara(
        &self,
        camara_id: i64,
        filtro: Option<&str>,
    ) -> Result<i64, AppError> {
        let like = filtro.map(|f| format!("%{f}%"));
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM comissao WHERE camara_id = $1 AND ($2::text IS NULL OR nome ILIKE $2)",
        )
        .bind(camara_id)
        .bind(like)
        .fetch_one(&self.pool)
        .await?;
        Ok(total)
    }

    pub async fn create(&self, payload: &ComissaoCreate) -> Result<Comissao, AppError> {
        let comissao = sqlx::query_as::<_, Comissao>(
            r#"
            INSERT INTO comissao (nome, ativa, data_inicio, data_fim, camara_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, nome, ativa, data_inicio, data_fim, camara_id, dt_cadastro
            "#,
        )
        .bind(&payload.nome)
        .bind(payload.ativa)
        .bind(payload.data_inicio)
        .bind(payload.data_fim)
        .bind(payload.camara_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(comissao)
    }

    pub async fn update(&self, id: i64, payload: &ComissaoUpdate) -> Result<Comissao, AppError> {
        let comissao = sqlx::query_as::<_, Comissao>(
            r#"
            UPDATE comissao SET
                nome = COALESCE($2, nome),
                ativa = COALESCE($3, ativa),
                data_inicio = COALESCE($4, data_inicio),
                data_fim = COALESCE($5, data_fim)
            WHERE id = $1
            RETURNING id, nome, ativa, data_inicio, data_fim, camara_id, dt_cadastro
            "#,
        )
        .bind(id)
        .bind(&payload.nome)
        .bind(payload.ativa)
        .bind(payload.data_inicio)
        .bind(payload.data_fim)
        .fetch_one(&self.pool)
        .await?;
        Ok(comissao)
    }

    pub async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM comissao WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
