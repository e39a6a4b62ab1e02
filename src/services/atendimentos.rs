//! Carregador de atendimentos
//!
//! Mesma disciplina do carregador de setores: a coleção inteira é
//! substituída a cada disparo, e falha vira lista vazia mais notificação
//! destrutiva. Os registros saem daqui na forma do store (id textual, etapa
//! do pipeline); a conversão para o quadro fica no adaptador.

use crate::models::AtendimentoRegistro;
use crate::services::{Geracao, LoaderState, Notificacao, Notificador};
use crate::utils::logging::*;
use datastore::DataStoreClient;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct AtendimentoLoader {
    store: DataStoreClient,
    notificador: Arc<dyn Notificador>,
    estado: Arc<RwLock<LoaderState<Vec<AtendimentoRegistro>>>>,
    geracao: Arc<Geracao>,
}

impl AtendimentoLoader {
    pub fn new(store: DataStoreClient, notificador: Arc<dyn Notificador>) -> Self {
        Self {
            store,
            notificador,
            estado: Arc::new(RwLock::new(LoaderState::default())),
            geracao: Arc::new(Geracao::default()),
        }
    }

    /// Disparo padrão: carrega a coleção de atendimentos
    pub async fn load(&self) -> Vec<AtendimentoRegistro> {
        let minha_geracao = self.geracao.proximo();
        {
            let mut estado = self.estado.write().await;
            estado.loading = true;
        }

        let resultado = self.fetch_atendimentos().await;

        let mut estado = self.estado.write().await;
        if !self.geracao.corrente(minha_geracao) {
            log_info("Resposta obsoleta de atendimentos descartada");
            return estado.data.clone();
        }

        match resultado {
            Ok(registros) => {
                log_info(&format!("✅ {} atendimentos carregados", registros.len()));
                estado.data = registros;
            }
            Err(e) => {
                log_store_api_error("atendimentos", &e.to_string());
                self.notificador.notificar(Notificacao::destrutiva(
                    "Erro ao carregar atendimentos",
                    e.to_string(),
                ));
                estado.data = Vec::new();
            }
        }
        estado.loading = false;
        estado.data.clone()
    }

    /// Consulta: todas as colunas da coleção
    ///
    /// O registro não carrega um carimbo ordenável; o quadro agrupa por
    /// status do lado de quem consome.
    async fn fetch_atendimentos(&self) -> datastore::Result<Vec<AtendimentoRegistro>> {
        self.store.from("atendimentos").select("*").fetch().await
    }

    /// Snapshot do estado corrente (dados + flag de carregamento)
    pub async fn snapshot(&self) -> LoaderState<Vec<AtendimentoRegistro>> {
        self.estado.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EtapaPipeline;
    use crate::services::NotificadorMemoria;
    use httpmock::prelude::*;
    use serde_json::json;

    fn loader_para(server: &MockServer) -> (AtendimentoLoader, Arc<NotificadorMemoria>) {
        let store = DataStoreClient::new(server.base_url(), "chave-teste").unwrap();
        let notificador = Arc::new(NotificadorMemoria::default());
        (AtendimentoLoader::new(store, notificador.clone()), notificador)
    }

    #[tokio::test]
    async fn test_load_substitui_a_colecao() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/rest/v1/atendimentos");
            then.status(200).json_body(json!([{
                "id": "7",
                "cliente": "Maria Silva",
                "telefone": "+55 11 99999-0001",
                "ultima_mensagem": "Preciso de ajuda com o pedido",
                "tempo": "10m",
                "setor": "Suporte",
                "status": "aguardando-cliente"
            }]));
        });

        let (loader, notificador) = loader_para(&server);
        let registros = loader.load().await;

        assert_eq!(registros.len(), 1);
        assert_eq!(registros[0].id, "7");
        assert_eq!(registros[0].status, EtapaPipeline::AguardandoCliente);
        assert!(registros[0].tags.is_empty());
        assert!(notificador.registros().is_empty());
        assert!(!loader.snapshot().await.loading);
    }

    #[tokio::test]
    async fn test_falha_zera_colecao_e_notifica() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/rest/v1/atendimentos");
            then.status(503).json_body(json!({"message": "serviço indisponível"}));
        });

        let (loader, notificador) = loader_para(&server);
        let registros = loader.load().await;

        assert!(registros.is_empty());
        assert!(!loader.snapshot().await.loading);

        let notificacoes = notificador.registros();
        assert_eq!(notificacoes.len(), 1);
        assert_eq!(notificacoes[0].titulo, "Erro ao carregar atendimentos");
    }
}
