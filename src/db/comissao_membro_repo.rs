// src/db/comissao_membro_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::comissao_membro::{ComissaoMembro, ComissaoMembroCreate, ComissaoMembroUpdate},
};

#[derive(Clone)]
pub struct ComissaoMembroRepository {
    pool: PgPool,
}

impl ComissaoMembroRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<ComissaoMembro>, AppError> {
        let maybe_membro = sqlx::query_as::<_, ComissaoMembro>(
            r#"
            SELECT id, comissao_id, mandato_vereador_id, funcao, data_inicio, data_fim, dt_cadastro
            FROM comissao_membro
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(maybe_membro)
    }

    // Lista os membros de uma comissão. O filtro busca pelo nome ou
    // partido do vereador, atravessando o vínculo com o mandato.
    pub async fn list_by_comissao(
        &self,
        comissao_id: i64,
        skip: i64,
        limit: i64,
        filtro: Option<&str>,
    ) -> Result<Vec<ComissaoMembro>, AppError> {
        let like = filtro.map(|f| format!("%{f}%"));
        let membros = sqlx::query_as::<_, ComissaoMembro>(
            r#"
            SELECT cm.id, cm.comissao_id, cm.mandato_vereador_id, cm.funcao,
                   cm.data_inicio, cm.data_fim, cm.dt_cadastro
            FROM comissao_membro cm
            JOIN mandato_vereador mv ON mv.id = cm.mandato_vereador_id
            JOIN vereador v ON v.id = mv.vereador_id
            WHERE cm.comissao_id = $1
              AND ($2::text IS NULL OR v.nome ILIKE $2 OR v.partido ILIKE $2)
            ORDER BY cm.id
            OFFSET $3 LIMIT $4
            "#,
        )
        .bind(comissao_id)
        .bind(like)
        .bind(skip)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(membros)
    }

    pub async fn count_by_comissao(
        &self,
        comissao_id: i64,
        filtro: Option<&str>,
    ) -> Result<i64, AppError> {
        let like = filtro.map(|f| format!("%{f}%"));
        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM comissao_membro cm
            JOIN mandato_vereador mv ON mv.id = cm.mandato_vereador_id
            JOIN vereador v ON v.id = mv.vereador_id
            WHERE cm.comissao_id = $1
              AND ($2::text IS NULL OR v.nome ILIKE $2 OR v.partido ILIKE $2)
            "#,
        )
        .bind(comissao_id)
        .bind(like)
        .fetch_one(&self.pool)
        .await?;
        Ok(total)
    }

    pub async fn create(&self, payload: &ComissaoMembroCreate) -> Result<ComissaoMembro, AppError> {
        let membro = sqlx::query_as::<_, ComissaoMembro>(
            r#"
            INSERT INTO comissao_membro (comissao_id, mandato_vereador_id, funcao, data_inicio, data_fim)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, comissao_id, mandato_vereador_id, funcao, data_inicio, data_fim, dt_cadastro
            "#,
        )
        .bind(payload.comissao_id)
        .bind(payload.mandato_vereador_id)
        .bind(payload.funcao)
        .bind(payload.data_inicio)
        .bind(payload.data_fim)
        .fetch_one(&self.pool)
        .await?;
        Ok(membro)
    }

    pub async fn update(
        &self,
        id: i64,
        payload: &ComissaoMembroUpdate,
    ) -> Result<ComissaoMembro, AppError> {
        let membro = sqlx::query_as::<_, ComissaoMembro>(
            r#"
            UPDATE comissao_membro SET
                funcao = COALESCE($2, funcao),
                data_inicio = COALESCE($3, data_inicio),
                data_fim = COALESCE($4, data_fim)
            WHERE id = $1
            RETURNING id, comissao_id, mandato_vereador_id, funcao, data_inicio, data_fim, dt_cadastro
            "#,
        )
        .bind(id)
        .bind(payload.funcao)
        .bind(payload.data_inicio)
        .bind(payload.data_fim)
        .fetch_one(&self.pool)
        .await?;
        Ok(membro)
    }

    pub async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM comissao_membro WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
