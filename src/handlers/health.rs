use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use serde_json::{json, Value};
use std::sync::Arc;

use painel_atendimentos::utils::logging::*;
use painel_atendimentos::AppState;

pub async fn health_check() -> Json<Value> {
    log_health_check();

    Json(json!({
        "status": "healthy",
        "service": "painel-atendimentos",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

pub async fn ready_check(State(state): State<Arc<AppState>>) -> Result<Json<Value>, StatusCode> {
    log_integration_status_check();

    // Testa a conexão com o data store
    let store_status = match state.store.test_connection().await {
        Ok(_) => "connected",
        Err(_) => "disconnected",
    };

    let overall_ready = store_status == "connected";

    let response = json!({
        "ready": overall_ready,
        "service": "painel-atendimentos",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "dependencies": {
            "store": {
                "status": store_status,
                "url": state.settings.store.url
            }
        }
    });

    if overall_ready {
        Ok(Json(response))
    } else {
        Err(StatusCode::SERVICE_UNAVAILABLE)
    }
}

pub async fn status_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    log_integration_status_check();

    // Verificar se o data store está configurado
    let store_configured =
        !state.settings.store.url.is_empty() && !state.settings.store.api_key.is_empty();

    let mut store_info = json!({
        "configured": store_configured,
        "url": state.settings.store.url
    });

    let store_connected = if store_configured {
        match state.store.test_connection().await {
            Ok(_) => {
                store_info["connection"] = json!("success");
                true
            }
            Err(e) => {
                store_info["connection"] = json!("failed");
                store_info["error"] = json!(e.to_string());
                false
            }
        }
    } else {
        store_info["connection"] = json!("not_configured");
        false
    };

    Json(json!({
        "service": "painel-atendimentos",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "environment": std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string()),
        "store_connected": store_connected,
        "integrations": {
            "store": store_info,
            "auth": {
                "login_path": state.settings.auth.login_path,
                "timeout_seconds": state.settings.auth.timeout_seconds
            }
        }
    }))
}
