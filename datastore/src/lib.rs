//! Cliente do data store gerenciado
//!
//! Este crate fornece uma interface tipo-segura para o backend gerenciado que
//! serve o painel de atendimentos. Expõe duas superfícies do mesmo serviço:
//!
//! - **REST** (`/rest/v1`): consultas sobre coleções nomeadas com seleção de
//!   colunas, filtros de igualdade, ordenação ascendente e dois modos de
//!   resultado ("muitas linhas" e "exatamente uma linha")
//! - **Auth** (`/auth/v1`): resolução de um bearer token na identidade
//!   correspondente
//!
//! O construtor de consultas espelha o vocabulário do próprio serviço, de modo
//! que o contrato de consulta fica legível no ponto de uso:
//!
//! ```rust,ignore
//! use datastore::DataStoreClient;
//!
//! #[tokio::main]
//! async fn main() -> datastore::Result<()> {
//!     let url = std::env::var("STORE_URL").expect("STORE_URL não configurado");
//!     let api_key = std::env::var("STORE_API_KEY").expect("STORE_API_KEY não configurado");
//!
//!     let client = DataStoreClient::new(url, api_key)?;
//!
//!     let setores: Vec<serde_json::Value> = client
//!         .from("setores")
//!         .select("*")
//!         .eq("ativo", true)
//!         .order("nome")
//!         .fetch()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

// Módulos públicos
pub mod auth;
pub mod client;
pub mod error;
pub mod query;

// Re-exports principais
pub use auth::Usuario;
pub use client::DataStoreClient;
pub use error::{DataStoreError, Result};
pub use query::Consulta;
