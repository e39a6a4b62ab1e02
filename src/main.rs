/// Serviço do painel de atendimentos
///
/// Arquitetura:
/// - Gate de sessão na frente de todas as rotas /api
/// - Carregadores de recurso (setores, perfil, atendimentos) consultam o
///   data store gerenciado, uma consulta por disparo
/// - Adaptador do quadro converte os registros do store para o contrato do
///   componente kanban
///
/// SEM persistência própria, SEM retries: cada carga é um fetch único e toda
/// falha é terminal até o próximo disparo.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

// Importar módulos da biblioteca
use painel_atendimentos::{config, middleware as app_middleware, services, utils, AppState};

mod handlers;

use config::Settings;
use handlers::{
    health_check, listar_atendimentos, listar_setores, obter_perfil, pagina_canais,
    pagina_chamadas, pagina_configuracoes, pagina_login, pagina_relatorios, ready_check,
    recarregar_setores, status_check,
};
use utils::{logging::*, AppError};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Carregar variáveis de ambiente do arquivo .env (se existir)
    if dotenvy::dotenv().is_err() {
        // Em produção não existe .env - variáveis vêm do ambiente
        tracing::debug!("Arquivo .env não encontrado - usando variáveis de ambiente do sistema");
    }

    // Inicializar tracing
    tracing_subscriber::fmt::init();

    // Carregar configurações
    let settings = Settings::new()
        .map_err(|e| AppError::ConfigError(format!("Failed to load settings: {}", e)))?;

    log_config_loaded(&std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string()));

    // Cliente do data store, com timeout customizado quando configurado
    let store = match settings.store.timeout_seconds {
        Some(timeout) => datastore::DataStoreClient::with_timeouts(
            settings.store.url.clone(),
            settings.store.api_key.clone(),
            timeout,
            5,
        ),
        None => datastore::DataStoreClient::new(
            settings.store.url.clone(),
            settings.store.api_key.clone(),
        ),
    }
    .map_err(|e| AppError::ConfigError(format!("Failed to create data store client: {}", e)))?;
    log_info("⚡ Cliente do data store configurado");

    // Canal de notificações visíveis ao usuário
    let notificador: Arc<dyn services::Notificador> = Arc::new(services::NotificadorTracing);

    // Inicializar estado da aplicação
    let app_state = Arc::new(AppState {
        setores: services::SetorLoader::new(store.clone(), notificador.clone()),
        perfil: services::PerfilLoader::new(store.clone()),
        atendimentos: services::AtendimentoLoader::new(store.clone(), notificador.clone()),
        store,
        settings: settings.clone(),
        notificador,
    });

    log_info("Carregadores de recurso inicializados (setores, perfil, atendimentos)");

    // Rotas públicas
    let mut app = Router::new()
        // Health checks
        .route("/health", get(health_check))
        .route("/ready", get(ready_check))
        .route("/status", get(status_check))

        // View de login (o fluxo de autenticação em si é externo)
        .route("/login", get(pagina_login))

        .with_state(app_state.clone());

    // ✅ Rotas protegidas pelo gate de sessão
    let rotas_protegidas = Router::new()
        .route("/api/atendimentos", get(listar_atendimentos))
        .route("/api/setores", get(listar_setores))
        .route("/api/setores/recarregar", post(recarregar_setores))
        .route("/api/perfil", get(obter_perfil))
        .route("/api/chamadas", get(pagina_chamadas))
        .route("/api/relatorios", get(pagina_relatorios))
        .route("/api/configuracoes", get(pagina_configuracoes))
        .route("/api/canais", get(pagina_canais))
        .layer(middleware::from_fn_with_state(
            app_state.clone(),
            app_middleware::require_session,
        ))
        .with_state(app_state);

    app = app.merge(rotas_protegidas);

    // Observabilidade e CORS (o painel é servido de outra origem)
    let app = app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    // Iniciar servidor; em ambientes gerenciados a porta vem de PORT
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(settings.server.port);
    let listener = TcpListener::bind(format!("{}:{}", settings.server.host, port)).await?;

    log_server_startup(port);
    log_server_ready(port);

    // Graceful shutdown com signal handling
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log_info("🛑 Servidor encerrado");
    Ok(())
}

/// Signal handler para graceful shutdown
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            log_info("🛑 Recebido Ctrl+C, encerrando...");
        },
        _ = terminate => {
            log_info("🛑 Recebido SIGTERM, encerrando...");
        }
    }
}
