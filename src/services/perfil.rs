//! Carregador de perfil
//!
//! Dispara a cada mudança da identidade resolvida, inclusive na transição
//! para ausente. A consulta espera exatamente uma linha; zero ou múltiplas
//! linhas viram perfil ausente, apenas logado; não há notificação ao usuário.

use crate::models::Perfil;
use crate::services::{Geracao, LoaderState};
use crate::utils::logging::*;
use datastore::DataStoreClient;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Clone)]
pub struct PerfilLoader {
    store: DataStoreClient,
    estado: Arc<RwLock<LoaderState<Option<Perfil>>>>,
    geracao: Arc<Geracao>,
}

impl PerfilLoader {
    pub fn new(store: DataStoreClient) -> Self {
        Self {
            store,
            estado: Arc::new(RwLock::new(LoaderState::default())),
            geracao: Arc::new(Geracao::default()),
        }
    }

    /// Disparo com a identidade corrente
    ///
    /// Identidade ausente zera o perfil sem consultar o store.
    pub async fn load(&self, identidade: Option<Uuid>) -> Option<Perfil> {
        let minha_geracao = self.geracao.proximo();
        {
            let mut estado = self.estado.write().await;
            estado.loading = true;
        }

        let resultado = match identidade {
            Some(id) => Some(self.fetch_perfil(id).await),
            None => None,
        };

        let mut estado = self.estado.write().await;
        if !self.geracao.corrente(minha_geracao) {
            log_info("Resposta obsoleta de perfil descartada");
            return estado.data.clone();
        }

        match resultado {
            None => {
                log_info("Sem identidade resolvida; perfil ausente");
                estado.data = None;
            }
            Some(Ok(perfil)) => {
                log_info(&format!("✅ Perfil carregado: {}", perfil.nome));
                estado.data = Some(perfil);
            }
            Some(Err(e)) => {
                log_store_api_error("perfis", &e.to_string());
                estado.data = None;
            }
        }
        estado.loading = false;
        estado.data.clone()
    }

    /// Consulta: todas as colunas, exatamente uma linha com o id da identidade
    async fn fetch_perfil(&self, identidade: Uuid) -> datastore::Result<Perfil> {
        self.store
            .from("perfis")
            .select("*")
            .eq("id", identidade)
            .single()
            .await
    }

    /// Snapshot do estado corrente (dados + flag de carregamento)
    pub async fn snapshot(&self) -> LoaderState<Option<Perfil>> {
        self.estado.read().await.clone()
    }
}
