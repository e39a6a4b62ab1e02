//! Notificações transitórias visíveis ao usuário
//!
//! O contrato aceita `{ titulo, descricao, variante }`, com a variante
//! destrutiva reservada para erros. A implementação de produção publica pelo
//! tracing; a implementação em memória registra as notificações para
//! inspeção em testes, sem captura de saída.

use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// Variante visual da notificação
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variante {
    Padrao,
    Destrutiva,
}

/// Notificação transitória exibida ao usuário
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notificacao {
    pub titulo: String,
    pub descricao: String,
    pub variante: Variante,
}

impl Notificacao {
    /// Notificação destrutiva (erros)
    pub fn destrutiva(titulo: impl Into<String>, descricao: impl Into<String>) -> Self {
        Self {
            titulo: titulo.into(),
            descricao: descricao.into(),
            variante: Variante::Destrutiva,
        }
    }
}

/// Canal de notificações visíveis ao usuário
pub trait Notificador: Send + Sync {
    fn notificar(&self, notificacao: Notificacao);
}

/// Implementação de produção: publica estruturado via tracing
pub struct NotificadorTracing;

impl Notificador for NotificadorTracing {
    fn notificar(&self, notificacao: Notificacao) {
        match notificacao.variante {
            Variante::Destrutiva => {
                tracing::error!(titulo = %notificacao.titulo, "🔔 {}", notificacao.descricao)
            }
            Variante::Padrao => {
                tracing::info!(titulo = %notificacao.titulo, "🔔 {}", notificacao.descricao)
            }
        }
    }
}

/// Implementação em memória; registra as notificações emitidas
#[derive(Default)]
pub struct NotificadorMemoria {
    registros: Mutex<Vec<Notificacao>>,
}

impl NotificadorMemoria {
    /// Cópia das notificações registradas até aqui
    pub fn registros(&self) -> Vec<Notificacao> {
        self.registros.lock().unwrap().clone()
    }
}

impl Notificador for NotificadorMemoria {
    fn notificar(&self, notificacao: Notificacao) {
        self.registros.lock().unwrap().push(notificacao);
    }
}
