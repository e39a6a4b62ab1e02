use axum::{extract::State, response::Json, Extension};
use serde_json::{json, Value};
use std::sync::Arc;

use painel_atendimentos::models::SessaoAtual;
use painel_atendimentos::utils::logging::*;
use painel_atendimentos::utils::AppError;
use painel_atendimentos::AppState;

/// Handler do perfil do agente logado
///
/// Perfil ausente (sem identidade, zero ou múltiplas linhas) sai como null;
/// estado vazio silencioso, sem notificação.
pub async fn obter_perfil(
    State(state): State<Arc<AppState>>,
    Extension(SessaoAtual(sessao)): Extension<SessaoAtual>,
) -> Result<Json<Value>, AppError> {
    log_request_received("/api/perfil", "GET");

    let identidade = sessao.usuario.as_ref().map(|usuario| usuario.id);
    let perfil = state.perfil.load(identidade).await;

    Ok(Json(json!({
        "perfil": perfil,
        "timestamp": chrono::Utc::now().to_rfc3339()
    })))
}
