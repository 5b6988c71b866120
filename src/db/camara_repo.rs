// src/db/camara_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::camara::{Camara, CamaraCreate, CamaraUpdate},
};

#[derive(Clone)]
pub struct CamaraRepository {
    pool: PgPool,
}

impl CamaraRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Busca uma câmara pelo ID, ignorando as excluídas logicamente.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Camara>, AppError> {
        let maybe_camara = sqlx::query_as::<_, Camara>(
            r#"
            SELECT id, nome, cnpj, email, telefone, endereco, municipio, uf,
                   numero_cadeiras, dt_cadastro, dt_atualizado, excluido
            FROM camara
            WHERE id = $1 AND excluido = FALSE
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(maybe_camara)
    }

    // Variante sem o filtro de exclusão lógica, usada ao montar respostas
    // aninhadas de registros que continuam apontando para a câmara.
    pub async fn find_by_id_any(&self, id: i64) -> Result<Option<Camara>, AppError> {
        let maybe_camara = sqlx::query_as::<_, Camara>(
            r#"
            SELECT id, nome, cnpj, email, telefone, endereco, municipio, uf,
                   numero_cadeiras, dt_cadastro, dt_atualizado, excluido
            FROM camara
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(maybe_camara)
    }

    pub async fn list(
        &self,
        skip: i64,
        limit: i64,
        filtro: Option<&str>,
    ) -> Result<Vec<Camara>, AppError> {
        let like = filtro.map(|f| format!("%{f}%"));
        let camaras = sqlx::query_as::<_, Camara>(
            r#"
            SELECT id, nome, cnpj, email, telefone, endereco, municipio, uf,
                   numero_cadeiras, dt_cadastro, dt_atualizado, excluido
            FROM camara
            WHERE excluido = FALSE
              AND ($1::text IS NULL OR nome ILIKE $1 OR municipio ILIKE $1 OR uf ILIKE $1)
            ORDER BY id
            OFFSET $2 LIMIT $3
            "#,
        )
        .bind(like)
        .bind(skip)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(camaras)
    }

    pub async fn count(&self, filtro: Option<&str>) -> Result<i64, AppError> {
        let like = filtro.map(|f| format!("%{f}%"));
        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM camara
            WHERE excluido = FALSE
              AND ($1::text IS NULL OR nome ILIKE $1 OR municipio ILIKE $1 OR uf ILIKE $1)
            "#,
        )
        .bind(like)
        .fetch_one(&self.pool)
        .await?;
        Ok(total)
    }

    pub async fn create(&self, payload: &CamaraCreate) -> Result<Camara, AppError> {
        let camara = sqlx::query_as::<_, Camara>(
            r#"
            INSERT INTO camara (nome, cnpj, email, telefone, endereco, municipio, uf, numero_cadeiras)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, nome, cnpj, email, telefone, endereco, municipio, uf,
                      numero_cadeiras, dt_cadastro, dt_atualizado, excluido
            "#,
        )
        .bind(&payload.nome)
        .bind(&payload.cnpj)
        .bind(&payload.email)
        .bind(&payload.telefone)
        .bind(&payload.endereco)
        .bind(&payload.municipio)
        .bind(&payload.uf)
        .bind(payload.numero_cadeiras)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                // CNPJ e e-mail possuem chaves únicas na tabela
                if db_err.is_unique_violation() {
                    return AppError::CamaraAlreadyExists;
                }
            }
            e.into()
        })?;

        Ok(camara)
    }

    pub async fn update(&self, id: i64, payload: &CamaraUpdate) -> Result<Camara, AppError> {
        let camara = sqlx::query_as::<_, Camara>(
            r#"
            UPDATE camara SET
                nome = COALESCE($2, nome),
                cnpj = COALESCE($3, cnpj),
                email = COALESCE($4, email),
                telefone = COALESCE($5, telefone),
                endereco = COALESCE($6, endereco),
                municipio = COALESCE($7, municipio),
                uf = COALESCE($8, uf),
                numero_cadeiras = COALESCE($9, numero_cadeiras),
                dt_atualizado = NOW()
            WHERE id = $1 AND excluido = FALSE
            RETURNING id, nome, cnpj, email, telefone, endereco, municipio, uf,
                      numero_cadeiras, dt_cadastro, dt_atualizado, excluido
            "#,
        )
        .bind(id)
        .bind(&payload.nome)
        .bind(&payload.cnpj)
        .bind(&payload.email)
        .bind(&payload.telefone)
        .bind(&payload.endereco)
        .bind(&payload.municipio)
        .bind(&payload.uf)
        .bind(payload.numero_cadeiras)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::CamaraAlreadyExists;
                }
            }
            e.into()
        })?;

        Ok(camara)
    }

    // Exclusão lógica. Devolve None se a câmara já não existia (ou já
    // estava excluída).
    pub async fn soft_delete(&self, id: i64) -> Result<Option<Camara>, AppError> {
        let maybe_camara = sqlx::query_as::<_, Camara>(
            r#"
            UPDATE camara SET excluido = TRUE, dt_atualizado = NOW()
            WHERE id = $1 AND excluido = FALSE
            RETURNING id, nome, cnpj, email, telefone, endereco, municipio, uf,
                      numero_cadeiras, dt_cadastro, dt_atualizado, excluido
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(maybe_camara)
    }
}
