//src/main.rs

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post},
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod middleware;
mod models;
mod services;

use crate::config::AppState;
use crate::middleware::auth::auth_guard;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    // Roda as migrações do SQLx na inicialização
    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    // Rotas públicas: login e cadastro/listagem de usuários
    let rotas_publicas = Router::new()
        .route("/login", post(handlers::auth::login))
        .route(
            "/usuarios",
            post(handlers::usuario::create_usuario).get(handlers::usuario::read_usuarios),
        );

    let usuario_routes = Router::new()
        .route("/usuarios/me", get(handlers::usuario::read_usuario_me))
        .route(
            "/usuarios/{id}",
            get(handlers::usuario::read_usuario_by_id).put(handlers::usuario::update_usuario),
        )
        .route(
            "/usuarios/email/{email}",
            get(handlers::usuario::read_usuario_by_email),
        );

    let camara_routes = Router::new()
        .route(
            "/camaras",
            post(handlers::camara::create_camara).get(handlers::camara::read_camaras),
        )
        .route(
            "/camaras/{id}",
            get(handlers::camara::read_camara)
                .put(handlers::camara::update_camara)
                .delete(handlers::camara::delete_camara),
        );

    let vereador_routes = Router::new()
        .route(
            "/vereadores",
            post(handlers::vereador::create_vereador).get(handlers::vereador::read_vereadores),
        )
        .route(
            "/vereadores/{id}",
            get(handlers::vereador::read_vereador_by_id).put(handlers::vereador::update_vereador),
        )
        .route(
            "/vereadores/cpf/{cpf}",
            get(handlers::vereador::read_vereador_by_cpf),
        )
        .route(
            "/vereadores/email/{email}",
            get(handlers::vereador::read_vereador_by_email),
        );

    let mandato_routes = Router::new()
        .route("/mandatos", post(handlers::mandato::create_mandato))
        .route(
            "/mandatos/{id}",
            get(handlers::mandato::read_mandato_by_id)
                .put(handlers::mandato::update_mandato)
                .delete(handlers::mandato::delete_mandato),
        )
        .route(
            "/mandatos/camara/{camara_id}",
            get(handlers::mandato::read_mandatos_by_camara),
        );

    let camara_usuario_routes = Router::new()
        .route(
            "/usuario-camara",
            post(handlers::camara_usuario::create_association),
        )
        .route(
            "/usuario-camara/{id}",
            get(handlers::camara_usuario::read_association_by_id)
                .put(handlers::camara_usuario::update_association)
                .delete(handlers::camara_usuario::delete_association),
        )
        .route(
            "/usuario-camara/camara/{camara_id}",
            get(handlers::camara_usuario::read_associations_by_camara),
        );

    let mandato_vereador_routes = Router::new()
        .route(
            "/mandato-vereador",
            post(handlers::mandato_vereador::create_association),
        )
        .route(
            "/mandato-vereador/{id}",
            get(handlers::mandato_vereador::read_association_by_id)
                .put(handlers::mandato_vereador::update_association)
                .delete(handlers::mandato_vereador::delete_association),
        )
        .route(
            "/mandato-vereador/mandato/{mandato_id}",
            get(handlers::mandato_vereador::read_associations_by_mandato),
        );

    let comissao_routes = Router::new()
        .route("/comissoes", post(handlers::comissao::create_comissao))
        .route(
            "/comissoes/{id}",
            get(handlers::comissao::read_comissao_by_id)
                .put(handlers::comissao::update_comissao)
                .delete(handlers::comissao::delete_comissao),
        )
        .route(
            "/comissoes/camara/{camara_id}",
            get(handlers::comissao::read_comissoes_by_camara),
        );

    let comissao_membro_routes = Router::new()
        .route(
            "/comissao-membros",
            post(handlers::comissao_membro::create_comissao_membro),
        )
        .route(
            "/comissao-membros/{id}",
            get(handlers::comissao_membro::read_comissao_membro_by_id)
                .put(handlers::comissao_membro::update_comissao_membro)
                .delete(handlers::comissao_membro::delete_comissao_membro),
        )
        .route(
            "/comissao-membros/comissao/{comissao_id}",
            get(handlers::comissao_membro::read_comissao_membros),
        );

    // Tudo que exige o token Bearer fica atrás do auth_guard
    let rotas_protegidas = Router::new()
        .merge(usuario_routes)
        .merge(camara_routes)
        .merge(vereador_routes)
        .merge(mandato_routes)
        .merge(camara_usuario_routes)
        .merge(mandato_vereador_routes)
        .merge(comissao_routes)
        .merge(comissao_membro_routes)
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    // Combina tudo no router principal
    let app = Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", docs::ApiDoc::openapi()))
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/v1", rotas_publicas.merge(rotas_protegidas))
        .with_state(app_state);

    // Inicia o servidor
    let addr = "0.0.0.0:3000";
    let listener = TcpListener::bind(addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app)
        .await
        .expect("Erro no servidor Axum");
}
