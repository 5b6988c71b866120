// src/docs.rs

use utoipa::OpenApi;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Autenticação ---
        handlers::auth::login,

        // --- Usuários ---
        handlers::usuario::create_usuario,
        handlers::usuario::read_usuarios,
        handlers::usuario::read_usuario_me,
        handlers::usuario::read_usuario_by_id,
        handlers::usuario::read_usuario_by_email,
        handlers::usuario::update_usuario,

        // --- Câmaras ---
        handlers::camara::create_camara,
        handlers::camara::read_camaras,
        handlers::camara::read_camara,
        handlers::camara::update_camara,
        handlers::camara::delete_camara,

        // --- Vereadores ---
        handlers::vereador::create_vereador,
        handlers::vereador::read_vereadores,
        handlers::vereador::read_vereador_by_id,
        handlers::vereador::read_vereador_by_cpf,
        handlers::vereador::read_vereador_by_email,
        handlers::vereador::update_vereador,

        // --- Mandatos ---
        handlers::mandato::create_mandato,
        handlers::mandato::read_mandato_by_id,
        handlers::mandato::read_mandatos_by_camara,
        handlers::mandato::update_mandato,
        handlers::mandato::delete_mandato,

        // --- Usuários da câmara ---
        handlers::camara_usuario::create_association,
        handlers::camara_usuario::read_association_by_id,
        handlers::camara_usuario::read_associations_by_camara,
        handlers::camara_usuario::update_association,
        handlers::camara_usuario::delete_association,

        // --- Associação Mandato/Vereador ---
        handlers::mandato_vereador::create_association,
        handlers::mandato_vereador::read_association_by_id,
        handlers::mandato_vereador::read_associations_by_mandato,
        handlers::mandato_vereador::update_association,
        handlers::mandato_vereador::delete_association,

        // --- Comissões ---
        handlers::comissao::create_comissao,
        handlers::comissao::read_comissao_by_id,
        handlers::comissao::read_comissoes_by_camara,
        handlers::comissao::update_comissao,
        handlers::comissao::delete_comissao,

        // --- Membros da Comissão ---
        handlers::comissao_membro::create_comissao_membro,
        handlers::comissao_membro::read_comissao_membros,
        handlers::comissao_membro::read_comissao_membro_by_id,
        handlers::comissao_membro::update_comissao_membro,
        handlers::comissao_membro::delete_comissao_membro,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::LoginPayload,
            models::auth::TokenComUsuario,

            // --- Usuários ---
            models::usuario::UsuarioPublic,
            models::usuario::UsuarioSimple,
            models::usuario::UsuarioCreate,
            models::usuario::UsuarioUpdate,
            models::usuario::UsuarioInUpdate,

            // --- Câmaras ---
            models::camara::CamaraPublic,
            models::camara::CamaraSimple,
            models::camara::CamaraCreate,
            models::camara::CamaraUpdate,

            // --- Vereadores ---
            models::vereador::VereadorPublic,
            models::vereador::VereadorCreate,
            models::vereador::VereadorUpdate,
            models::vereador::VereadorInUpdate,

            // --- Mandatos ---
            models::mandato::MandatoPublic,
            models::mandato::MandatoCreate,
            models::mandato::MandatoUpdate,
            models::mandato::MensagemResposta,

            // --- Usuários da câmara ---
            models::camara_usuario::CamaraUsuarioPublic,
            models::camara_usuario::CamaraUsuarioCreate,
            models::camara_usuario::CamaraUsuarioUpdatePayload,

            // --- Associação Mandato/Vereador ---
            models::mandato_vereador::MandatoVereadorPublic,
            models::mandato_vereador::MandatoVereadorCreate,
            models::mandato_vereador::MandatoVereadorUpdatePayload,

            // --- Comissões ---
            models::comissao::ComissaoPublic,
            models::comissao::ComissaoCreate,
            models::comissao::ComissaoUpdate,

            // --- Membros da Comissão ---
            models::comissao_membro::ComissaoMembroPublic,
            models::comissao_membro::ComissaoMembroCreate,
            models::comissao_membro::ComissaoMembroUpdate,
        )
    ),
    tags(
        (name = "Autenticação", description = "Login e emissão de tokens"),
        (name = "Usuários", description = "Cadastro e manutenção de usuários"),
        (name = "Câmaras", description = "Câmaras municipais"),
        (name = "Vereadores", description = "Vereadores"),
        (name = "Mandatos", description = "Mandatos (legislaturas) de cada câmara"),
        (name = "Usuários da câmara", description = "Associação de usuários às câmaras, com papel e permissões"),
        (name = "Associação Mandato/Vereador", description = "Vereadores de cada mandato"),
        (name = "Comissões", description = "Comissões de cada câmara"),
        (name = "Membros da Comissão", description = "Vereadores que compõem cada comissão")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}
