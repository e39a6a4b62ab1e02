//! Tipos de mensagem da conversa
//!
//! Declarados pelo contrato do painel; nenhum carregador desta camada os
//! popula; a conversa em si é servida por outra superfície.

use serde::{Deserialize, Serialize};

/// Autor de uma mensagem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AutorMensagem {
    Cliente,
    Agente,
}

/// Status de entrega de uma mensagem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusMensagem {
    Enviado,
    Entregue,
    Lido,
}

/// Anexo de uma mensagem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anexo {
    pub tipo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
}

/// Mensagem de uma conversa de atendimento
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mensagem {
    pub id: u64,
    pub texto: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anexo: Option<Anexo>,
    pub autor: AutorMensagem,
    pub tempo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusMensagem>,
}
