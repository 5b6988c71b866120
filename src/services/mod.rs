pub mod auth;
pub use auth::AuthService;
pub mod camara_service;
pub use camara_service::CamaraService;
pub mod camara_usuario_service;
pub use camara_usuario_service::CamaraUsuarioService;
pub mod comissao_membro_service;
pub use comissao_membro_service::ComissaoMembroService;
pub mod comissao_service;
pub use comissao_service::ComissaoService;
pub mod mandato_service;
pub use mandato_service::MandatoService;
pub mod mandato_vereador_service;
pub use mandato_vereador_service::MandatoVereadorService;
pub mod usuario_service;
pub use usuario_service::UsuarioService;
pub mod vereador_service;
pub use vereador_service::VereadorService;
