// src/db/camara_usuario_repo.rs

use sqlx::{Executor, PgPool, Postgres};

use crate::{common::error::AppError, models::camara_usuario::CamaraUsuario};

const COLUNAS: &str = "id, usuario_id, camara_id, vereador_id, papel, permissao, ativo, excluido, dt_cadastro, dt_atualizado";

#[derive(Clone)]
pub struct CamaraUsuarioRepository {
    pool: PgPool,
}

impl CamaraUsuarioRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<CamaraUsuario>, AppError> {
        let maybe_assoc = sqlx::query_as::<_, CamaraUsuario>(&format!(
            "SELECT {COLUNAS} FROM camara_usuario WHERE id = $1 AND excluido = FALSE"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(maybe_assoc)
    }

    // Propositalmente NÃO filtra `excluido`: a criação usa esta busca para
    // decidir entre reativar uma associação excluída e rejeitar duplicata.
    pub async fn find_by_usuario_and_camara(
        &self,
        usuario_id: i64,
        camara_id: i64,
    ) -> Result<Option<CamaraUsuario>, AppError> {
        let maybe_assoc = sqlx::query_as::<_, CamaraUsuario>(&format!(
            "SELECT {COLUNAS} FROM camara_usuario WHERE usuario_id = $1 AND camara_id = $2"
        ))
        .bind(usuario_id)
        .bind(camara_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(maybe_assoc)
    }

    // Lista as associações de uma câmara. O filtro busca pelo nome ou
    // e-mail do usuário, por isso o JOIN.
    pub async fn list_by_camara(
        &self,
        camara_id: i64,
        skip: i64,
        limit: i64,
        filtro: Option<&str>,
    ) -> Result<Vec<CamaraUsuario>, AppError> {
        let like = filtro.map(|f| format!("%{f}%"));
        let associacoes = sqlx::query_as::<_, CamaraUsuario>(
            r#"
            SELECT cu.id, cu.usuario_id, cu.camara_id, cu.vereador_id, cu.papel,
                   cu.permissao, cu.ativo, cu.excluido, cu.dt_cadastro, cu.dt_atualizado
            FROM camara_usuario cu
            JOIN usuario u ON u.id = cu.usuario_id
            WHERE cu.camara_id = $1 AND cu.excluido = FALSE
              AND ($2::text IS NULL OR u.nome ILIKE $2 OR u.email ILIKE $2)
            ORDER BY cu.id
            OFFSET $3 LIMIT $4
            "#,
        )
        .bind(camara_id)
        .bind(like)
        .bind(skip)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(associacoes)
    }

    pub async fn count_by_camara(
        &self,
        camara_id: i64,
        filtro: Option<&str>,
    ) -> Result<i64, AppError> {
        let like = filtro.map(|f| format!("%{f}%"));
        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM camara_usuario cu
            JOIN usuario u ON u.id = cu.usuario_id
            WHERE cu.camara_id = $1 AND cu.excluido = FALSE
              AND ($2::text IS NULL OR u.nome ILIKE $2 OR u.email ILIKE $2)
            "#,
        )
        .bind(camara_id)
        .bind(like)
        .fetch_one(&self.pool)
        .await?;
        Ok(total)
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        usuario_id: i64,
        camara_id: i64,
        vereador_id: Option<i64>,
        papel: i32,
        permissao: &str,
        ativo: bool,
    ) -> Result<CamaraUsuario, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let assoc = sqlx::query_as::<_, CamaraUsuario>(&format!(
            r#"
            INSERT INTO camara_usuario (usuario_id, camara_id, vereador_id, papel, permissao, ativo)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {COLUNAS}
            "#
        ))
        .bind(usuario_id)
        .bind(camara_id)
        .bind(vereador_id)
        .bind(papel)
        .bind(permissao)
        .bind(ativo)
        .fetch_one(executor)
        .await?;
        Ok(assoc)
    }

    pub async fn update<'e, E>(
        &self,
        executor: E,
        id: i64,
        papel: i32,
        ativo: bool,
        vereador_id: Option<i64>,
        permissao: &str,
    ) -> Result<CamaraUsuario, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let assoc = sqlx::query_as::<_, CamaraUsuario>(&format!(
            r#"
            UPDATE camara_usuario SET
                papel = $2,
                ativo = $3,
                vereador_id = $4,
                permissao = $5,
                dt_atualizado = NOW()
            WHERE id = $1
            RETURNING {COLUNAS}
            "#
        ))
        .bind(id)
        .bind(papel)
        .bind(ativo)
        .bind(vereador_id)
        .bind(permissao)
        .fetch_one(executor)
        .await?;
        Ok(assoc)
    }

    // Reativa uma associação excluída logicamente, já com o novo papel e
    // as novas permissões.
    pub async fn reactivate(
        &self,
        id: i64,
        papel: i32,
        permissao: &str,
    ) -> Result<CamaraUsuario, AppError> {
        let assoc = sqlx::query_as::<_, CamaraUsuario>(&format!(
            r#"
            UPDATE camara_usuario SET
                excluido = FALSE,
                ativo = TRUE,
                papel = $2,
                permissao = $3,
                dt_atualizado = NOW()
            WHERE id = $1
            RETURNING {COLUNAS}
            "#
        ))
        .bind(id)
        .bind(papel)
        .bind(permissao)
        .fetch_one(&self.pool)
        .await?;
        Ok(assoc)
    }

    pub async fn soft_delete(&self, id: i64) -> Result<Option<CamaraUsuario>, AppError> {
        let maybe_assoc = sqlx::query_as::<_, CamaraUsuario>(&format!(
            r#"
            UPDATE camara_usuario SET excluido = TRUE, dt_atualizado = NOW()
            WHERE id = $1 AND excluido = FALSE
            RETURNING {COLUNAS}
            "#
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(maybe_assoc)
    }
}
