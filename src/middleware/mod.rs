/// Middleware layer para o Axum router
///
/// Este módulo contém middleware customizados para:
/// - Gate de sessão das rotas protegidas
/// - Observabilidade das decisões de acesso

pub mod session_gate;

pub use session_gate::{decide, require_session, GateDecision};
