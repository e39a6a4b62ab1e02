//! Superfície de autenticação do data store
//!
//! Resolve um bearer token na identidade correspondente. A camada acima nunca
//! grava nada aqui; a sessão é propriedade do provedor gerenciado.

use crate::client::DataStoreClient;
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identidade autenticada retornada pela superfície de auth
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Usuario {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_sign_in_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Usuario {
    /// Rótulo exibível da identidade (email, quando presente)
    pub fn rotulo(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

impl DataStoreClient {
    /// Resolve o bearer token do usuário na identidade correspondente
    pub async fn usuario_atual(&self, bearer: &str) -> Result<Usuario> {
        let response = self.get_auth("user", bearer).await?;
        let usuario = response.json().await?;
        Ok(usuario)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DataStoreError;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_usuario_atual_resolve_token() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/auth/v1/user")
                .header("Authorization", "Bearer token-do-usuario");
            then.status(200).json_body(json!({
                "id": "9f2c6a2e-6f6b-4c4b-9d3e-1b2a3c4d5e6f",
                "email": "ana@empresa.com.br",
                "role": "authenticated"
            }));
        });

        let client = DataStoreClient::new(server.base_url(), "chave-teste").unwrap();
        let usuario = client.usuario_atual("token-do-usuario").await.unwrap();

        mock.assert();
        assert_eq!(usuario.email.as_deref(), Some("ana@empresa.com.br"));
        assert_eq!(usuario.rotulo(), Some("ana@empresa.com.br"));
    }

    #[tokio::test]
    async fn test_token_rejeitado() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/auth/v1/user");
            then.status(401).json_body(json!({"message": "invalid JWT"}));
        });

        let client = DataStoreClient::new(server.base_url(), "chave-teste").unwrap();
        let resultado = client.usuario_atual("token-invalido").await;

        assert!(matches!(
            resultado,
            Err(DataStoreError::ApiError { status: 401, .. })
        ));
    }
}
