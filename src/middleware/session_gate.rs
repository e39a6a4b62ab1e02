/// Gate de sessão para as rotas protegidas
///
/// Avalia, nesta ordem:
/// 1. Sessão ainda resolvendo → resposta de carregamento, nenhum conteúdo
///    protegido é liberado
/// 2. Sem identidade → redirecionamento para o login carregando a rota
///    originalmente pedida, para o fluxo de login devolver o usuário depois
/// 3. Identidade presente → a requisição segue para o handler com a sessão
///    injetada nas extensões
///
/// O gate não tem estado próprio: é função da sessão resolvida mais a rota
/// corrente. Cada decisão é logada.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

use crate::models::{Sessao, SessaoAtual};
use crate::AppState;

/// Resultado da avaliação do gate para uma requisição
#[derive(Debug, Clone, PartialEq)]
pub enum GateDecision {
    /// Sessão ainda resolvendo
    Loading,
    /// Sem identidade: redirecionar ao login carregando a rota de origem
    Redirect { destino: String, origem: String },
    /// Identidade presente: a requisição segue inalterada
    Allow,
}

/// Função pura de decisão do gate
pub fn decide(sessao: &Sessao, login_path: &str, origem: &str) -> GateDecision {
    if sessao.carregando {
        return GateDecision::Loading;
    }

    if sessao.usuario.is_none() {
        return GateDecision::Redirect {
            destino: format!("{}?redirect={}", login_path, urlencoding::encode(origem)),
            origem: origem.to_string(),
        };
    }

    GateDecision::Allow
}

/// Middleware que aplica o gate às rotas sob /api
pub async fn require_session(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Response {
    let origem = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());

    let sessao = resolver_sessao(&state, request.headers()).await;

    match decide(&sessao, &state.settings.auth.login_path, &origem) {
        GateDecision::Loading => {
            tracing::debug!("⏳ Sessão ainda resolvendo para {}", origem);
            loading_response()
        }
        GateDecision::Redirect { destino, origem } => {
            tracing::debug!("🔒 Sem identidade para {}; redirecionando ao login", origem);
            Redirect::temporary(&destino).into_response()
        }
        GateDecision::Allow => {
            tracing::debug!("✅ Acesso liberado para {}", origem);
            request.extensions_mut().insert(SessaoAtual(sessao));
            next.run(request).await
        }
    }
}

/// Resolve o bearer token da requisição na sessão corrente
///
/// Token ausente → sessão anônima. Resolução que estoura o timeout →
/// sessão ainda carregando. Token rejeitado pelo endpoint de auth →
/// sessão anônima, com o motivo logado.
async fn resolver_sessao(state: &AppState, headers: &HeaderMap) -> Sessao {
    let token = headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|valor| valor.to_str().ok())
        .and_then(|valor| valor.strip_prefix("Bearer "));

    let token = match token {
        Some(token) if !token.is_empty() => token,
        _ => return Sessao::anonima(),
    };

    let timeout = Duration::from_secs(state.settings.auth.timeout_seconds);
    match tokio::time::timeout(timeout, state.store.usuario_atual(token)).await {
        Ok(Ok(usuario)) => Sessao::resolvida(usuario),
        Ok(Err(e)) => {
            tracing::warn!("Token de sessão rejeitado: {}", e);
            Sessao::anonima()
        }
        Err(_) => Sessao::resolvendo(),
    }
}

/// Resposta de carregamento: nenhum conteúdo protegido
fn loading_response() -> Response {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        [("Retry-After", "1")],
        Json(json!({
            "status": "carregando",
            "message": "Sessão ainda sendo resolvida, tente novamente"
        })),
    )
        .into_response()
}
