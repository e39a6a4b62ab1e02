//! Tipos de erro para o crate datastore

use thiserror::Error;

/// Erros do cliente do data store
#[derive(Debug, Error)]
pub enum DataStoreError {
    /// Erro de requisição HTTP
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Erro da API do data store (status não-2xx), com a mensagem legível
    /// extraída do corpo da resposta
    #[error("data store API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Erro de parsing JSON
    #[error("JSON parsing failed: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Consulta em modo "exatamente uma linha" não retornou nenhuma
    #[error("expected exactly one row, got none")]
    NoRows,

    /// Consulta em modo "exatamente uma linha" retornou mais de uma
    #[error("expected exactly one row, got {0}")]
    MultipleRows(usize),

    /// Erro de configuração
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Tipo Result padrão para o crate
pub type Result<T> = std::result::Result<T, DataStoreError>;
