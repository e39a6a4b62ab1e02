pub mod atendimento;
pub mod cliente;
pub mod mensagem;
pub mod perfil;
pub mod sessao;
pub mod setor;

pub use atendimento::*;
pub use cliente::*;
pub use mensagem::*;
pub use perfil::*;
pub use sessao::*;
pub use setor::*;
