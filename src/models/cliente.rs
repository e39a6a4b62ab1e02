//! Tipos de cliente do painel
//!
//! Declarados pelo contrato do painel; nenhum carregador desta camada os
//! popula.

use serde::{Deserialize, Serialize};

/// Presença do cliente no canal de atendimento
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusCliente {
    Online,
    Offline,
}

/// Item do histórico de atendimentos de um cliente
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricoAtendimento {
    pub id: u64,
    pub data: String,
    pub assunto: String,
    pub status: String,
}

/// Cliente atendido pelo painel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cliente {
    pub id: u64,
    pub nome: String,
    pub telefone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusCliente>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ultimo_acesso: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_cadastro: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub historico: Option<Vec<HistoricoAtendimento>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cliente_minimo() {
        let cliente: Cliente = serde_json::from_value(json!({
            "id": 42,
            "nome": "João Pereira",
            "telefone": "+55 11 98888-0002"
        }))
        .unwrap();

        assert_eq!(cliente.id, 42);
        assert!(cliente.historico.is_none());
    }

    #[test]
    fn test_cliente_serializa_em_camel_case() {
        let cliente = Cliente {
            id: 42,
            nome: "João Pereira".to_string(),
            telefone: "+55 11 98888-0002".to_string(),
            email: None,
            status: Some(StatusCliente::Online),
            ultimo_acesso: Some("há 2 horas".to_string()),
            data_cadastro: None,
            tags: None,
            historico: Some(vec![HistoricoAtendimento {
                id: 1,
                data: "2026-07-02".to_string(),
                assunto: "Troca de produto".to_string(),
                status: "finalizado".to_string(),
            }]),
        };

        let json = serde_json::to_value(&cliente).unwrap();
        assert_eq!(json["ultimoAcesso"], "há 2 horas");
        assert_eq!(json["status"], "online");
        assert_eq!(json["historico"][0]["assunto"], "Troca de produto");
    }
}
