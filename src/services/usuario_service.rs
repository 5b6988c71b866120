// src/services/usuario_service.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    db::UsuarioRepository,
    models::usuario::{Usuario, UsuarioCreate, UsuarioUpdate},
    services::auth::hash_password,
};

// Regra de criação: senha e confirmação obrigatórias e iguais.
// Devolve a senha em claro, pronta para o hashing.
pub fn validar_senhas<'a>(
    senha: Option<&'a str>,
    conf_senha: Option<&'a str>,
) -> Result<&'a str, AppError> {
    match (senha, conf_senha) {
        (Some(s), Some(c)) if s == c => Ok(s),
        (Some(_), Some(_)) => Err(AppError::PasswordMismatch),
        _ => Err(AppError::PasswordConfirmationRequired),
    }
}

#[derive(Clone)]
pub struct UsuarioService {
    repository: UsuarioRepository,
    pool: PgPool,
}

impl UsuarioService {
    pub fn new(repository: UsuarioRepository, pool: PgPool) -> Self {
        Self { repository, pool }
    }

    pub async fn create_usuario(&self, payload: &UsuarioCreate) -> Result<Usuario, AppError> {
        let senha = validar_senhas(payload.senha.as_deref(), payload.conf_senha.as_deref())?;

        if self.repository.find_by_email(&payload.email).await?.is_some() {
            return Err(AppError::EmailAlreadyExists);
        }

        let senha_hash = hash_password(senha).await?;

        self.repository.create(&self.pool, payload, &senha_hash).await
    }

    pub async fn get_usuario_by_id(&self, id: i64) -> Result<Usuario, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(AppError::UsuarioNotFound)
    }

    pub async fn get_usuario_by_email(&self, email: &str) -> Result<Usuario, AppError> {
        self.repository
            .find_by_email(email)
            .await?
            .ok_or(AppError::UsuarioNotFound)
    }

    pub async fn update_usuario(
        &self,
        id: i64,
        payload: &UsuarioUpdate,
    ) -> Result<Usuario, AppError> {
        let db_usuario = self.get_usuario_by_id(id).await?;

        // Verifica se o novo e-mail já está em uso por outro usuário
        if let Some(email) = &payload.email {
            if email != &db_usuario.email
                && self.repository.find_by_email(email).await?.is_some()
            {
                return Err(AppError::EmailAlreadyExists);
            }
        }

        // Troca de senha é opcional, mas exige confirmação correta
        let senha_hash = match (&payload.senha, &payload.conf_senha) {
            (Some(senha), Some(conf)) => {
                if senha != conf {
                    return Err(AppError::PasswordMismatch);
                }
                Some(hash_password(senha).await?)
            }
            (Some(_), None) => return Err(AppError::PasswordConfirmationRequired),
            _ => None,
        };

        self.repository
            .update(&self.pool, id, payload, senha_hash.as_deref())
            .await
    }

    pub async fn get_all_usuarios(
        &self,
        skip: i64,
        limit: i64,
        filtro: Option<&str>,
    ) -> Result<Vec<Usuario>, AppError> {
        self.repository.list(skip, limit, filtro).await
    }

    pub async fn get_total_usuarios(&self, filtro: Option<&str>) -> Result<i64, AppError> {
        self.repository.count(filtro).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn senhas_iguais_passam() {
        assert_eq!(validar_senhas(Some("1234"), Some("1234")).unwrap(), "1234");
    }

    #[test]
    fn senhas_diferentes_sao_rejeitadas() {
        assert!(matches!(
            validar_senhas(Some("1234"), Some("4321")),
            Err(AppError::PasswordMismatch)
        ));
    }

    #[test]
    fn confirmacao_ausente_e_rejeitada() {
        assert!(matches!(
            validar_senhas(Some("1234"), None),
            Err(AppError::PasswordConfirmationRequired)
        ));
        assert!(matches!(
            validar_senhas(None, None),
            Err(AppError::PasswordConfirmationRequired)
        ));
    }
}
