// src/services/camara_usuario_service.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    db::{CamaraRepository, CamaraUsuarioRepository, UsuarioRepository, VereadorRepository},
    models::{
        camara_usuario::{
            CamaraUsuario, CamaraUsuarioCreate, CamaraUsuarioPublic, CamaraUsuarioUpdatePayload,
        },
        usuario::UsuarioUpdate,
    },
    services::{auth::hash_password, usuario_service::validar_senhas},
};

// Serializa a lista de permissões para o formato de texto da coluna.
pub fn encode_permissao(permissao: &[String]) -> Result<String, AppError> {
    serde_json::to_string(permissao)
        .map_err(|e| anyhow::anyhow!("Falha ao serializar permissões: {}", e).into())
}

#[derive(Clone)]
pub struct CamaraUsuarioService {
    repository: CamaraUsuarioRepository,
    usuario_repo: UsuarioRepository,
    camara_repo: CamaraRepository,
    vereador_repo: VereadorRepository,
    pool: PgPool,
}

impl CamaraUsuarioService {
    pub fn new(
        repository: CamaraUsuarioRepository,
        usuario_repo: UsuarioRepository,
        camara_repo: CamaraRepository,
        vereador_repo: VereadorRepository,
        pool: PgPool,
    ) -> Self {
        Self {
            repository,
            usuario_repo,
            camara_repo,
            vereador_repo,
            pool,
        }
    }

    // Monta a resposta pública com o usuário, a câmara e o vereador
    // aninhados. O FK garante que usuário e câmara existem; se sumiram,
    // é inconsistência de dados, não 404.
    async fn to_public(&self, assoc: CamaraUsuario) -> Result<CamaraUsuarioPublic, AppError> {
        let usuario = self
            .usuario_repo
            .find_by_id(assoc.usuario_id)
            .await?
            .ok_or_else(|| {
                anyhow::anyhow!("Usuário {} da associação {} não existe", assoc.usuario_id, assoc.id)
            })?;

        let camara = self
            .camara_repo
            .find_by_id_any(assoc.camara_id)
            .await?
            .ok_or_else(|| {
                anyhow::anyhow!("Câmara {} da associação {} não existe", assoc.camara_id, assoc.id)
            })?;

        let vereador = match assoc.vereador_id {
            Some(vereador_id) => self
                .vereador_repo
                .find_by_id(vereador_id)
                .await?
                .map(Into::into),
            None => None,
        };

        Ok(CamaraUsuarioPublic::new(assoc, usuario.into(), camara.into(), vereador))
    }

    pub async fn get_association(&self, id: i64) -> Result<CamaraUsuarioPublic, AppError> {
        let assoc = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(AppError::AssociacaoNotFound)?;

        self.to_public(assoc).await
    }

    pub async fn get_associations_by_camara(
        &self,
        camara_id: i64,
        skip: i64,
        limit: i64,
        filtro: Option<&str>,
    ) -> Result<Vec<CamaraUsuarioPublic>, AppError> {
        self.camara_repo
            .find_by_id(camara_id)
            .await?
            .ok_or(AppError::CamaraNotFound)?;

        let associacoes = self
            .repository
            .list_by_camara(camara_id, skip, limit, filtro)
            .await?;

        let mut items = Vec::with_capacity(associacoes.len());
        for assoc in associacoes {
            items.push(self.to_public(assoc).await?);
        }
        Ok(items)
    }

    pub async fn get_total_associations_by_camara(
        &self,
        camara_id: i64,
        filtro: Option<&str>,
    ) -> Result<i64, AppError> {
        self.repository.count_by_camara(camara_id, filtro).await
    }

    // Cria a associação. O payload traz o objeto `usuario`: com `id`,
    // associa um usuário existente; sem `id`, o usuário é criado na mesma
    // transação da associação. Uma associação excluída logicamente para o
    // mesmo par (usuário, câmara) é reativada em vez de duplicada.
    pub async fn create_association(
        &self,
        payload: &CamaraUsuarioCreate,
    ) -> Result<CamaraUsuarioPublic, AppError> {
        let usuario_data = payload.usuario.as_ref().ok_or(AppError::UsuarioDataRequired)?;

        self.camara_repo
            .find_by_id(payload.camara_id)
            .await?
            .ok_or(AppError::CamaraNotFound)?;

        let permissao = encode_permissao(&payload.permissao)?;
        let ativo = payload.ativo.unwrap_or(true);

        let assoc = match usuario_data.id {
            Some(usuario_id) => {
                self.usuario_repo
                    .find_by_id(usuario_id)
                    .await?
                    .ok_or(AppError::UsuarioNotFound)?;

                let existente = self
                    .repository
                    .find_by_usuario_and_camara(usuario_id, payload.camara_id)
                    .await?;

                match existente {
                    Some(existente) if existente.excluido => {
                        self.repository
                            .reactivate(existente.id, payload.papel, &permissao)
                            .await?
                    }
                    Some(_) => return Err(AppError::UsuarioJaAssociado),
                    None => {
                        self.repository
                            .create(
                                &self.pool,
                                usuario_id,
                                payload.camara_id,
                                payload.vereador_id,
                                payload.papel,
                                &permissao,
                                ativo,
                            )
                            .await?
                    }
                }
            }
            None => {
                // Usuário novo: mesmas regras de senha do cadastro direto
                let senha =
                    validar_senhas(usuario_data.senha.as_deref(), usuario_data.conf_senha.as_deref())?;

                if self
                    .usuario_repo
                    .find_by_email(&usuario_data.email)
                    .await?
                    .is_some()
                {
                    return Err(AppError::EmailAlreadyExists);
                }

                // O hashing fica fora da transação; só as escritas entram
                let senha_hash = hash_password(senha).await?;

                let mut tx = self.pool.begin().await?;

                let novo_usuario = self
                    .usuario_repo
                    .create(&mut *tx, usuario_data, &senha_hash)
                    .await?;

                let assoc = self
                    .repository
                    .create(
                        &mut *tx,
                        novo_usuario.id,
                        payload.camara_id,
                        payload.vereador_id,
                        payload.papel,
                        &permissao,
                        ativo,
                    )
                    .await?;

                tx.commit().await?;
                assoc
            }
        };

        self.to_public(assoc).await
    }

    // Atualiza o perfil do usuário vinculado e os dados da associação na
    // mesma transação.
    pub async fn update_association(
        &self,
        id: i64,
        payload: &CamaraUsuarioUpdatePayload,
    ) -> Result<CamaraUsuarioPublic, AppError> {
        let assoc = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(AppError::AssociacaoNotFound)?;

        let usuario_atual = self
            .usuario_repo
            .find_by_id(assoc.usuario_id)
            .await?
            .ok_or(AppError::UsuarioNotFound)?;

        // Verifica se o novo e-mail já está em uso por outro usuário
        if payload.usuario.email != usuario_atual.email
            && self
                .usuario_repo
                .find_by_email(&payload.usuario.email)
                .await?
                .is_some()
        {
            return Err(AppError::EmailAlreadyExists);
        }

        let permissao = encode_permissao(&payload.permissao)?;

        let usuario_update = UsuarioUpdate {
            nome: Some(payload.usuario.nome.clone()),
            email: Some(payload.usuario.email.clone()),
            ativo: Some(payload.usuario.ativo),
            is_superuser: Some(payload.usuario.is_superuser),
            ..Default::default()
        };

        let mut tx = self.pool.begin().await?;

        self.usuario_repo
            .update(&mut *tx, assoc.usuario_id, &usuario_update, None)
            .await?;

        let atualizada = self
            .repository
            .update(
                &mut *tx,
                id,
                payload.papel,
                payload.ativo,
                payload.vereador_id,
                &permissao,
            )
            .await?;

        tx.commit().await?;

        self.to_public(atualizada).await
    }

    // Exclusão lógica; a associação pode ser reativada depois.
    pub async fn delete_association(&self, id: i64) -> Result<CamaraUsuarioPublic, AppError> {
        let removida = self
            .repository
            .soft_delete(id)
            .await?
            .ok_or(AppError::AssociacaoNotFound)?;

        self.to_public(removida).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permissao_vira_json() {
        let lista = vec!["camara:read".to_string(), "camara:write".to_string()];
        let texto = encode_permissao(&lista).unwrap();
        assert_eq!(texto, r#"["camara:read","camara:write"]"#);

        // e volta
        let de_volta: Vec<String> = serde_json::from_str(&texto).unwrap();
        assert_eq!(de_volta, lista);
    }

    #[test]
    fn lista_vazia_vira_json_vazio() {
        assert_eq!(encode_permissao(&[]).unwrap(), "[]");
    }
}
