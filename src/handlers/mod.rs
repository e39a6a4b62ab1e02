// Handlers do painel de atendimentos
pub mod atendimentos;
pub mod health;
pub mod perfil;
pub mod placeholders;
pub mod setores;

pub use atendimentos::*;
pub use health::*;
pub use perfil::*;
pub use placeholders::*;
pub use setores::*;
