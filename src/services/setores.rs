//! Carregador de setores
//!
//! Instância do padrão de carregamento de recurso: estado próprio (dados +
//! flag de carregamento), uma consulta por disparo e recarga manual
//! explícita. Falhas nunca escapam do carregador: a lista é zerada, o erro é
//! logado e uma notificação destrutiva é emitida com a mensagem do store.

use crate::models::Setor;
use crate::services::{Geracao, LoaderState, Notificacao, Notificador};
use crate::utils::logging::*;
use datastore::DataStoreClient;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct SetorLoader {
    store: DataStoreClient,
    notificador: Arc<dyn Notificador>,
    estado: Arc<RwLock<LoaderState<Vec<Setor>>>>,
    geracao: Arc<Geracao>,
}

impl SetorLoader {
    pub fn new(store: DataStoreClient, notificador: Arc<dyn Notificador>) -> Self {
        Self {
            store,
            notificador,
            estado: Arc::new(RwLock::new(LoaderState::default())),
            geracao: Arc::new(Geracao::default()),
        }
    }

    /// Disparo padrão: carrega a lista de setores ativos ordenada por nome
    pub async fn load(&self) -> Vec<Setor> {
        let minha_geracao = self.geracao.proximo();
        {
            let mut estado = self.estado.write().await;
            estado.loading = true;
        }

        let resultado = self.fetch_setores().await;

        let mut estado = self.estado.write().await;
        if !self.geracao.corrente(minha_geracao) {
            // resposta obsoleta: o disparo mais novo é dono do estado
            log_info("Resposta obsoleta de setores descartada");
            return estado.data.clone();
        }

        match resultado {
            Ok(setores) => {
                log_info(&format!("✅ {} setores carregados", setores.len()));
                estado.data = setores;
            }
            Err(e) => {
                log_store_api_error("setores", &e.to_string());
                self.notificador.notificar(Notificacao::destrutiva(
                    "Erro ao carregar setores",
                    e.to_string(),
                ));
                estado.data = Vec::new();
            }
        }
        estado.loading = false;
        estado.data.clone()
    }

    /// Recarga manual explícita; mesmo contrato do disparo padrão
    pub async fn reload(&self) -> Vec<Setor> {
        log_info("🔄 Recarga manual de setores");
        self.load().await
    }

    /// Consulta: todas as colunas, apenas ativos, ordem ascendente por nome
    async fn fetch_setores(&self) -> datastore::Result<Vec<Setor>> {
        let mut setores: Vec<Setor> = self
            .store
            .from("setores")
            .select("*")
            .eq("ativo", true)
            .order("nome")
            .fetch()
            .await?;

        // invariante da lista exposta: somente ativos, ordenados por nome,
        // independente do que o backend devolver
        setores.retain(|setor| setor.ativo);
        setores.sort_by(|a, b| a.nome.cmp(&b.nome));
        Ok(setores)
    }

    /// Snapshot do estado corrente (dados + flag de carregamento)
    pub async fn snapshot(&self) -> LoaderState<Vec<Setor>> {
        self.estado.read().await.clone()
    }
}
