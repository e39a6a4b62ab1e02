pub mod atendimentos;
pub mod kanban;
pub mod loader;
pub mod notificacoes;
pub mod perfil;
pub mod setores;

pub use atendimentos::*;
pub use kanban::*;
pub use loader::*;
pub use notificacoes::*;
pub use perfil::*;
pub use setores::*;
