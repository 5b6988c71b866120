pub mod auth;
pub mod camara;
pub mod camara_usuario;
pub mod comissao;
pub mod comissao_membro;
pub mod mandato;
pub mod mandato_vereador;
pub mod usuario;
pub mod vereador;
