// src/services/auth.rs

use bcrypt::{hash, verify};
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::{
    common::error::AppError,
    db::UsuarioRepository,
    models::{auth::Claims, usuario::Usuario},
};

// ---
// Helpers de senha e token
// ---
// Ficam como funções livres porque outros serviços também criam usuários
// (ex: a associação usuário-câmara) e os testes os exercitam sem banco.

// O bcrypt é caro de propósito; roda fora do runtime async.
pub async fn hash_password(senha: &str) -> Result<String, AppError> {
    let senha_clone = senha.to_owned();
    let hashed = tokio::task::spawn_blocking(move || hash(&senha_clone, bcrypt::DEFAULT_COST))
        .await
        .map_err(|e| anyhow::anyhow!("Falha na task de hashing: {}", e))??;
    Ok(hashed)
}

pub async fn verify_password(senha: &str, senha_hash: &str) -> Result<bool, AppError> {
    let senha_clone = senha.to_owned();
    let hash_clone = senha_hash.to_owned();
    let is_valid = tokio::task::spawn_blocking(move || verify(&senha_clone, &hash_clone))
        .await
        .map_err(|e| anyhow::anyhow!("Falha na task de verificação de senha: {}", e))??;
    Ok(is_valid)
}

pub fn create_access_token(
    email: &str,
    secret: &str,
    expire_minutes: i64,
) -> Result<String, AppError> {
    let now = Utc::now();
    let expires_at = now + chrono::Duration::minutes(expire_minutes);

    let claims = Claims {
        sub: email.to_string(),
        exp: expires_at.timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    Ok(encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )?)
}

pub fn decode_claims(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )?;
    Ok(token_data.claims)
}

// ---
// O serviço de autenticação
// ---
#[derive(Clone)]
pub struct AuthService {
    usuario_repo: UsuarioRepository,
    jwt_secret: String,
    token_expire_minutes: i64,
}

impl AuthService {
    pub fn new(usuario_repo: UsuarioRepository, jwt_secret: String, token_expire_minutes: i64) -> Self {
        Self {
            usuario_repo,
            jwt_secret,
            token_expire_minutes,
        }
    }

    // Login por e-mail + senha. Tanto o e-mail desconhecido quanto a senha
    // errada devolvem o mesmo erro, para não vazar quais contas existem.
    pub async fn login(&self, username: &str, password: &str) -> Result<(String, Usuario), AppError> {
        let usuario = self
            .usuario_repo
            .find_by_email(username)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        let is_valid = verify_password(password, &usuario.senha_hash).await?;
        if !is_valid {
            return Err(AppError::InvalidCredentials);
        }

        let token = create_access_token(&usuario.email, &self.jwt_secret, self.token_expire_minutes)?;
        Ok((token, usuario))
    }

    // Valida o token Bearer e carrega o usuário dono dele. Usado pelo
    // middleware de autenticação.
    pub async fn validate_token(&self, token: &str) -> Result<Usuario, AppError> {
        let claims = decode_claims(token, &self.jwt_secret).map_err(|_| AppError::InvalidToken)?;

        self.usuario_repo
            .find_by_email(&claims.sub)
            .await?
            .ok_or(AppError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "segredo-de-teste";

    #[test]
    fn token_criado_e_decodificado() {
        let token = create_access_token("maria@email.com", SECRET, 30).unwrap();
        let claims = decode_claims(&token, SECRET).unwrap();

        assert_eq!(claims.sub, "maria@email.com");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn segredo_errado_e_rejeitado() {
        let token = create_access_token("maria@email.com", SECRET, 30).unwrap();
        assert!(decode_claims(&token, "outro-segredo").is_err());
    }

    #[test]
    fn token_expirado_e_rejeitado() {
        // Expirado bem além da tolerância padrão de validação
        let token = create_access_token("maria@email.com", SECRET, -300).unwrap();
        assert!(decode_claims(&token, SECRET).is_err());
    }

    #[test]
    fn token_adulterado_e_rejeitado() {
        let token = create_access_token("maria@email.com", SECRET, 30).unwrap();
        let adulterado = format!("{}x", token);
        assert!(decode_claims(&adulterado, SECRET).is_err());
    }

    #[tokio::test]
    async fn hash_e_verificacao_de_senha() {
        let senha_hash = hash_password("1234").await.unwrap();

        assert!(verify_password("1234", &senha_hash).await.unwrap());
        assert!(!verify_password("4321", &senha_hash).await.unwrap());
    }
}
