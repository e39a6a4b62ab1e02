//! Registros de atendimento e suas três formas
//!
//! O data store devolve o registro com identificador textual e o vocabulário
//! de etapas do pipeline ("aguardando-cliente"). Internamente o serviço fala
//! um único vocabulário canônico de status ("pendentes"); a conversão entre
//! os dois acontece uma única vez, na fronteira do adaptador do quadro.

use serde::{Deserialize, Serialize};

/// Status canônico de um atendimento
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusAtendimento {
    Novos,
    EmAtendimento,
    Pendentes,
    Finalizados,
}

/// Etapa do pipeline no vocabulário gravado no data store
///
/// Difere do vocabulário canônico na terceira etapa: o store grava
/// "aguardando-cliente" onde o domínio fala "pendentes".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EtapaPipeline {
    Novos,
    EmAtendimento,
    AguardandoCliente,
    Finalizados,
}

impl EtapaPipeline {
    /// Mapeamento total etapa → status canônico
    pub fn para_status(self) -> StatusAtendimento {
        match self {
            EtapaPipeline::Novos => StatusAtendimento::Novos,
            EtapaPipeline::EmAtendimento => StatusAtendimento::EmAtendimento,
            EtapaPipeline::AguardandoCliente => StatusAtendimento::Pendentes,
            EtapaPipeline::Finalizados => StatusAtendimento::Finalizados,
        }
    }
}

impl From<EtapaPipeline> for StatusAtendimento {
    fn from(etapa: EtapaPipeline) -> Self {
        etapa.para_status()
    }
}

/// Registro de atendimento como chega do data store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtendimentoRegistro {
    pub id: String,
    pub cliente: String,
    pub telefone: String,
    pub ultima_mensagem: String,
    pub tempo: String,
    pub setor: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agente: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub status: EtapaPipeline,
}

/// Atendimento no domínio canônico: identificador numérico e status canônico
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Atendimento {
    pub id: u64,
    pub cliente: String,
    pub telefone: String,
    pub ultima_mensagem: String,
    pub tempo: String,
    pub setor: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agente: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub status: StatusAtendimento,
}

/// Cartão do quadro kanban, no contrato serializado do componente visual
///
/// `tempo_aberto` é duplicado de `tempo`; é o nome que o quadro espera.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartaoQuadro {
    pub id: u64,
    pub cliente: String,
    pub telefone: String,
    pub ultima_mensagem: String,
    pub tempo: String,
    pub tempo_aberto: String,
    pub setor: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agente: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub status: StatusAtendimento,
}

impl CartaoQuadro {
    /// Constrói o cartão a partir do atendimento canônico
    pub fn de_atendimento(atendimento: Atendimento) -> Self {
        Self {
            id: atendimento.id,
            cliente: atendimento.cliente,
            telefone: atendimento.telefone,
            ultima_mensagem: atendimento.ultima_mensagem,
            tempo: atendimento.tempo.clone(),
            tempo_aberto: atendimento.tempo,
            setor: atendimento.setor,
            agente: atendimento.agente,
            tags: atendimento.tags,
            status: atendimento.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializa_em_kebab_case() {
        let json = serde_json::to_string(&StatusAtendimento::EmAtendimento).unwrap();
        assert_eq!(json, "\"em-atendimento\"");

        let status: StatusAtendimento = serde_json::from_str("\"pendentes\"").unwrap();
        assert_eq!(status, StatusAtendimento::Pendentes);
    }

    #[test]
    fn test_etapa_serializa_em_kebab_case() {
        let etapa: EtapaPipeline = serde_json::from_str("\"aguardando-cliente\"").unwrap();
        assert_eq!(etapa, EtapaPipeline::AguardandoCliente);
    }

    #[test]
    fn test_mapeamento_total_de_etapas() {
        assert_eq!(EtapaPipeline::Novos.para_status(), StatusAtendimento::Novos);
        assert_eq!(
            EtapaPipeline::EmAtendimento.para_status(),
            StatusAtendimento::EmAtendimento
        );
        assert_eq!(
            EtapaPipeline::AguardandoCliente.para_status(),
            StatusAtendimento::Pendentes
        );
        assert_eq!(
            EtapaPipeline::Finalizados.para_status(),
            StatusAtendimento::Finalizados
        );
    }

    #[test]
    fn test_cartao_serializa_em_camel_case() {
        let cartao = CartaoQuadro::de_atendimento(Atendimento {
            id: 7,
            cliente: "Maria Silva".to_string(),
            telefone: "+55 11 99999-0001".to_string(),
            ultima_mensagem: "Preciso de ajuda com o pedido".to_string(),
            tempo: "10m".to_string(),
            setor: "Suporte".to_string(),
            agente: None,
            tags: vec!["vip".to_string()],
            status: StatusAtendimento::Novos,
        });

        let json = serde_json::to_value(&cartao).unwrap();
        assert_eq!(json["ultimaMensagem"], "Preciso de ajuda com o pedido");
        assert_eq!(json["tempoAberto"], "10m");
        assert_eq!(json["tempo"], "10m");
        assert_eq!(json["status"], "novos");
    }
}
