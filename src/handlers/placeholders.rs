//! Páginas ainda não implementadas
//!
//! Cada uma devolve cabeçalho, ícone e aviso estáticos; nenhuma depende de
//! dados nem tem modos de falha.

use axum::response::Json;
use serde_json::{json, Value};

use painel_atendimentos::utils::logging::*;

fn pagina_em_desenvolvimento(titulo: &str, icone: &str) -> Json<Value> {
    Json(json!({
        "titulo": titulo,
        "icone": icone,
        "mensagem": "Funcionalidade em desenvolvimento",
        "disponivel": false
    }))
}

pub async fn pagina_chamadas() -> Json<Value> {
    log_request_received("/api/chamadas", "GET");
    pagina_em_desenvolvimento("Chamadas", "phone")
}

pub async fn pagina_relatorios() -> Json<Value> {
    log_request_received("/api/relatorios", "GET");
    pagina_em_desenvolvimento("Relatórios", "bar-chart")
}

pub async fn pagina_configuracoes() -> Json<Value> {
    log_request_received("/api/configuracoes", "GET");
    pagina_em_desenvolvimento("Configurações", "settings")
}

pub async fn pagina_canais() -> Json<Value> {
    log_request_received("/api/canais", "GET");
    pagina_em_desenvolvimento("Canais de Atendimento", "message-square")
}

/// Página informativa de login; o fluxo de autenticação em si é externo
pub async fn pagina_login() -> Json<Value> {
    log_request_received("/login", "GET");

    Json(json!({
        "titulo": "Login",
        "mensagem": "Autentique-se pelo provedor gerenciado e envie o bearer token nas rotas /api"
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_paginas_sao_estaticas_e_indisponiveis() {
        let Json(corpo) = pagina_chamadas().await;
        assert_eq!(corpo["titulo"], "Chamadas");
        assert_eq!(corpo["disponivel"], false);
        assert_eq!(corpo["mensagem"], "Funcionalidade em desenvolvimento");
    }
}
