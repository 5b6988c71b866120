pub mod camara_repo;
pub use camara_repo::CamaraRepository;
pub mod camara_usuario_repo;
pub use camara_usuario_repo::CamaraUsuarioRepository;
pub mod comissao_membro_repo;
pub use comissao_membro_repo::ComissaoMembroRepository;
pub mod comissao_repo;
pub use comissao_repo::ComissaoRepository;
pub mod mandato_repo;
pub use mandato_repo::MandatoRepository;
pub mod mandato_vereador_repo;
pub use mandato_vereador_repo::MandatoVereadorRepository;
pub mod usuario_repo;
pub use usuario_repo::UsuarioRepository;
pub mod vereador_repo;
pub use vereador_repo::VereadorRepository;
