use axum::{extract::State, response::Json, Extension};
use serde_json::Value;
use std::sync::Arc;
use tokio::time::Instant;

use painel_atendimentos::models::SessaoAtual;
use painel_atendimentos::services::montar_quadro;
use painel_atendimentos::utils::logging::*;
use painel_atendimentos::utils::AppError;
use painel_atendimentos::AppState;

/// Handler do quadro kanban
///
/// Carrega a coleção de atendimentos e devolve o contrato serializado do
/// quadro: cartões adaptados, identidade do usuário logado e flag de
/// não-administrador.
pub async fn listar_atendimentos(
    State(state): State<Arc<AppState>>,
    Extension(SessaoAtual(sessao)): Extension<SessaoAtual>,
) -> Result<Json<Value>, AppError> {
    let start_time = Instant::now();
    log_request_received("/api/atendimentos", "GET");

    let registros = state.atendimentos.load().await;

    let usuario_logado = sessao
        .usuario
        .as_ref()
        .and_then(|usuario| usuario.rotulo());

    let quadro = montar_quadro(&registros, usuario_logado)?;

    let processing_time = start_time.elapsed().as_millis() as u64;
    log_request_processed("/api/atendimentos", 200, processing_time);

    Ok(Json(serde_json::to_value(&quadro)?))
}
