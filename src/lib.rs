// Biblioteca do serviço do painel de atendimentos
// Expõe módulos para uso em testes e binários

pub mod config;
pub mod middleware;
pub mod models;
pub mod services;
pub mod utils;

use std::sync::Arc;

// AppState é definido aqui para ser compartilhado
#[derive(Clone)]
pub struct AppState {
    pub settings: config::Settings,
    pub store: datastore::DataStoreClient,
    pub setores: services::SetorLoader,
    pub perfil: services::PerfilLoader,
    pub atendimentos: services::AtendimentoLoader,
    pub notificador: Arc<dyn services::Notificador>,
}
