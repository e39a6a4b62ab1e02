use axum::{extract::State, response::Json};
use serde_json::{json, Value};
use std::sync::Arc;

use painel_atendimentos::utils::logging::*;
use painel_atendimentos::utils::AppError;
use painel_atendimentos::AppState;

/// Handler da lista de setores ativos
pub async fn listar_setores(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, AppError> {
    log_request_received("/api/setores", "GET");

    let setores = state.setores.load().await;
    let total = setores.len();

    Ok(Json(json!({
        "setores": setores,
        "total": total,
        "timestamp": chrono::Utc::now().to_rfc3339()
    })))
}

/// Recarga manual explícita da lista de setores
pub async fn recarregar_setores(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, AppError> {
    log_request_received("/api/setores/recarregar", "POST");

    let setores = state.setores.reload().await;
    let total = setores.len();

    Ok(Json(json!({
        "setores": setores,
        "total": total,
        "recarregado": true,
        "timestamp": chrono::Utc::now().to_rfc3339()
    })))
}
