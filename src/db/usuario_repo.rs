// src/db/usuario_repo.rs

use sqlx::{Executor, PgPool, Postgres};

use crate::{
    common::error::AppError,
    models::usuario::{Usuario, UsuarioCreate, UsuarioUpdate},
};

const COLUNAS: &str = "id, nome, email, senha_hash, ativo, is_superuser, dt_cadastro, dt_atualizado";

// O repositório de usuários, responsável por todas as interações com a
// tabela 'usuario'.
#[derive(Clone)]
pub struct UsuarioRepository {
    pool: PgPool,
}

impl UsuarioRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Usuario>, AppError> {
        let maybe_usuario = sqlx::query_as::<_, Usuario>(&format!(
            "SELECT {COLUNAS} FROM usuario WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(maybe_usuario)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Usuario>, AppError> {
        let maybe_usuario = sqlx::query_as::<_, Usuario>(&format!(
            "SELECT {COLUNAS} FROM usuario WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(maybe_usuario)
    }

    pub async fn list(
        &self,
        skip: i64,
        limit: i64,
        filtro: Option<&str>,
    ) -> Result<Vec<Usuario>, AppError> {
        let like = filtro.map(|f| format!("%{f}%"));
        let usuarios = sqlx::query_as::<_, Usuario>(&format!(
            r#"
            SELECT {COLUNAS}
            FROM usuario
            WHERE ($1::text IS NULL OR nome ILIKE $1 OR email ILIKE $1)
            ORDER BY id
            OFFSET $2 LIMIT $3
            "#
        ))
        .bind(like)
        .bind(skip)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(usuarios)
    }

    pub async fn count(&self, filtro: Option<&str>) -> Result<i64, AppError> {
        let like = filtro.map(|f| format!("%{f}%"));
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM usuario WHERE ($1::text IS NULL OR nome ILIKE $1 OR email ILIKE $1)",
        )
        .bind(like)
        .fetch_one(&self.pool)
        .await?;
        Ok(total)
    }

    // Cria um novo usuário. Recebe o executor para poder participar de
    // transações maiores (ex: criação junto com a associação à câmara).
    pub async fn create<'e, E>(
        &self,
        executor: E,
        payload: &UsuarioCreate,
        senha_hash: &str,
    ) -> Result<Usuario, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let usuario = sqlx::query_as::<_, Usuario>(&format!(
            r#"
            INSERT INTO usuario (nome, email, senha_hash, ativo, is_superuser)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {COLUNAS}
            "#
        ))
        .bind(&payload.nome)
        .bind(&payload.email)
        .bind(senha_hash)
        .bind(payload.ativo)
        .bind(payload.is_superuser)
        .fetch_one(executor)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::EmailAlreadyExists;
                }
            }
            e.into()
        })?;

        Ok(usuario)
    }

    // Atualização parcial: o COALESCE mantém o valor atual para os campos
    // que vieram nulos no payload.
    pub async fn update<'e, E>(
        &self,
        executor: E,
        id: i64,
        payload: &UsuarioUpdate,
        senha_hash: Option<&str>,
    ) -> Result<Usuario, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let usuario = sqlx::query_as::<_, Usuario>(&format!(
            r#"
            UPDATE usuario SET
                nome = COALESCE($2, nome),
                email = COALESCE($3, email),
                senha_hash = COALESCE($4, senha_hash),
                ativo = COALESCE($5, ativo),
                is_superuser = COALESCE($6, is_superuser),
                dt_atualizado = NOW()
            WHERE id = $1
            RETURNING {COLUNAS}
            "#
        ))
        .bind(id)
        .bind(&payload.nome)
        .bind(&payload.email)
        .bind(senha_hash)
        .bind(payload.ativo)
        .bind(payload.is_superuser)
        .fetch_one(executor)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::EmailAlreadyExists;
                }
            }
            e.into()
        })?;

        Ok(usuario)
    }
}
