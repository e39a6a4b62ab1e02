//! Cliente HTTP para o data store gerenciado

use crate::error::{DataStoreError, Result};
use crate::query::Consulta;
use reqwest::{Client as HttpClient, Response};
use serde_json::Value;
use std::time::Duration;

/// Cliente para o data store gerenciado
///
/// Um único cliente atende as duas superfícies do serviço:
/// - REST: consultas sobre coleções nomeadas (`/rest/v1`)
/// - Auth: resolução de identidade a partir de um bearer token (`/auth/v1`)
#[derive(Clone)]
pub struct DataStoreClient {
    http_client: HttpClient,
    base_url: String,
    api_key: String,
}

impl DataStoreClient {
    /// Cria um novo cliente do data store
    ///
    /// # Argumentos
    ///
    /// * `base_url` - URL do projeto no serviço gerenciado
    /// * `api_key` - Chave de API do projeto
    ///
    /// # Timeouts
    ///
    /// - Total: 30s
    /// - Connect: 5s
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        Self::with_timeouts(base_url, api_key, 30, 5)
    }

    /// Cria um novo cliente com timeouts customizados
    pub fn with_timeouts(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        total_timeout_secs: u64,
        connect_timeout_secs: u64,
    ) -> Result<Self> {
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(total_timeout_secs))
            .connect_timeout(Duration::from_secs(connect_timeout_secs))
            .build()
            .map_err(|e| DataStoreError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    /// Inicia uma consulta sobre uma coleção nomeada
    pub fn from(&self, colecao: &str) -> Consulta {
        Consulta::nova(self.clone(), colecao)
    }

    /// Verifica conectividade com a superfície REST do serviço
    pub async fn test_connection(&self) -> Result<()> {
        self.get_rest("").await.map(|_| ())
    }

    /// Executa uma requisição GET na superfície REST
    pub(crate) async fn get_rest(&self, caminho_e_query: &str) -> Result<Response> {
        let url = format!("{}/rest/v1/{}", self.base_url, caminho_e_query);

        tracing::debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Executa uma requisição GET na superfície de auth, com o bearer token do usuário
    pub(crate) async fn get_auth(&self, caminho: &str, bearer: &str) -> Result<Response> {
        let url = format!("{}/auth/v1/{}", self.base_url, caminho);

        tracing::debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", bearer))
            .header("Content-Type", "application/json")
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Processa a resposta HTTP e trata erros
    async fn handle_response(&self, response: Response) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            Ok(response)
        } else {
            let status_code = status.as_u16();
            let error_body = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

            tracing::error!("Data store API error ({}): {}", status_code, error_body);

            // Tentar extrair mensagem legível do corpo JSON
            let message = if let Ok(json) = serde_json::from_str::<Value>(&error_body) {
                json.get("message")
                    .or_else(|| json.get("error"))
                    .or_else(|| json.get("msg"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(&error_body)
                    .to_string()
            } else {
                error_body
            };

            Err(DataStoreError::ApiError {
                status: status_code,
                message,
            })
        }
    }

    /// Obtém a URL base do projeto
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Obtém a chave de API
    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = DataStoreClient::new("https://projeto.exemplo.co", "chave-teste").unwrap();
        assert_eq!(client.base_url(), "https://projeto.exemplo.co");
        assert_eq!(client.api_key(), "chave-teste");
    }

    #[test]
    fn test_client_normaliza_barra_final() {
        let client = DataStoreClient::new("https://projeto.exemplo.co/", "chave-teste").unwrap();
        assert_eq!(client.base_url(), "https://projeto.exemplo.co");
    }

    #[test]
    fn test_client_with_custom_timeouts() {
        let client = DataStoreClient::with_timeouts("https://projeto.exemplo.co", "chave-teste", 60, 10).unwrap();
        assert_eq!(client.api_key(), "chave-teste");
    }
}
