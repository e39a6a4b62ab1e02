//! Adaptação dos registros de atendimento para o quadro kanban
//!
//! Única fronteira onde o identificador textual vira numérico e a etapa do
//! pipeline vira o status canônico. Identificador que não é um número
//! decimal é rejeitado aqui; não existe valor sentinela.

use crate::models::{Atendimento, AtendimentoRegistro, CartaoQuadro};
use serde::Serialize;
use thiserror::Error;

/// Identidade usada no quadro quando a sessão não tem rótulo utilizável
pub const USUARIO_PADRAO: &str = "Agente";

/// Erros de adaptação para o quadro
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AdapterError {
    /// Identificador textual que não representa um número decimal
    #[error("identificador de atendimento inválido: '{0}'")]
    InvalidId(String),
}

/// Contrato serializado consumido pelo componente do quadro
///
/// A seleção de cartão é a metade do contrato que pertence ao consumidor;
/// não há representação dela neste payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuadroKanban {
    pub atendimentos: Vec<CartaoQuadro>,
    pub usuario_logado: String,
    pub is_admin: bool,
}

/// Converte um registro do store para o domínio canônico
fn converter_registro(registro: &AtendimentoRegistro) -> Result<Atendimento, AdapterError> {
    let id = registro
        .id
        .parse::<u64>()
        .map_err(|_| AdapterError::InvalidId(registro.id.clone()))?;

    Ok(Atendimento {
        id,
        cliente: registro.cliente.clone(),
        telefone: registro.telefone.clone(),
        ultima_mensagem: registro.ultima_mensagem.clone(),
        tempo: registro.tempo.clone(),
        setor: registro.setor.clone(),
        agente: registro.agente.clone(),
        tags: registro.tags.clone(),
        status: registro.status.para_status(),
    })
}

/// Adapta a coleção preservando tamanho e ordem, sem tocar na entrada
pub fn adapt_atendimentos(
    registros: &[AtendimentoRegistro],
) -> Result<Vec<CartaoQuadro>, AdapterError> {
    registros
        .iter()
        .map(|registro| converter_registro(registro).map(CartaoQuadro::de_atendimento))
        .collect()
}

/// Monta o contrato do quadro: cartões adaptados, identidade do usuário
/// (com valor padrão quando ausente) e flag fixa de não-administrador
pub fn montar_quadro(
    registros: &[AtendimentoRegistro],
    usuario_logado: Option<&str>,
) -> Result<QuadroKanban, AdapterError> {
    Ok(QuadroKanban {
        atendimentos: adapt_atendimentos(registros)?,
        usuario_logado: usuario_logado.unwrap_or(USUARIO_PADRAO).to_string(),
        is_admin: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EtapaPipeline, StatusAtendimento};

    fn registro(id: &str, cliente: &str, etapa: EtapaPipeline) -> AtendimentoRegistro {
        AtendimentoRegistro {
            id: id.to_string(),
            cliente: cliente.to_string(),
            telefone: "+55 11 99999-0001".to_string(),
            ultima_mensagem: "Olá".to_string(),
            tempo: "10m".to_string(),
            setor: "Suporte".to_string(),
            agente: Some("Carlos".to_string()),
            tags: vec!["vip".to_string()],
            status: etapa,
        }
    }

    #[test]
    fn test_adapta_id_e_duplica_tempo() {
        let entrada = vec![registro("7", "Maria Silva", EtapaPipeline::Novos)];
        let cartoes = adapt_atendimentos(&entrada).unwrap();

        assert_eq!(cartoes.len(), 1);
        assert_eq!(cartoes[0].id, 7);
        assert_eq!(cartoes[0].tempo, "10m");
        assert_eq!(cartoes[0].tempo_aberto, "10m");
    }

    #[test]
    fn test_preserva_tamanho_ordem_e_campos() {
        let entrada = vec![
            registro("3", "Maria Silva", EtapaPipeline::Novos),
            registro("1", "João Pereira", EtapaPipeline::Finalizados),
            registro("2", "Ana Souza", EtapaPipeline::EmAtendimento),
        ];
        let antes = entrada.clone();

        let cartoes = adapt_atendimentos(&entrada).unwrap();

        assert_eq!(cartoes.len(), entrada.len());
        for (cartao, original) in cartoes.iter().zip(&entrada) {
            assert_eq!(cartao.id.to_string(), original.id);
            assert_eq!(cartao.cliente, original.cliente);
            assert_eq!(cartao.telefone, original.telefone);
            assert_eq!(cartao.ultima_mensagem, original.ultima_mensagem);
            assert_eq!(cartao.tempo, original.tempo);
            assert_eq!(cartao.setor, original.setor);
            assert_eq!(cartao.agente, original.agente);
            assert_eq!(cartao.tags, original.tags);
            assert_eq!(cartao.tempo_aberto, original.tempo);
        }
        // a entrada permanece intacta
        assert_eq!(entrada, antes);
    }

    #[test]
    fn test_mapeia_etapa_para_status_canonico() {
        let entrada = vec![registro("5", "Maria Silva", EtapaPipeline::AguardandoCliente)];
        let cartoes = adapt_atendimentos(&entrada).unwrap();
        assert_eq!(cartoes[0].status, StatusAtendimento::Pendentes);
    }

    #[test]
    fn test_identificador_nao_numerico_rejeitado() {
        let entrada = vec![registro("abc", "Maria Silva", EtapaPipeline::Novos)];
        let resultado = adapt_atendimentos(&entrada);
        assert_eq!(resultado, Err(AdapterError::InvalidId("abc".to_string())));
    }

    #[test]
    fn test_identificador_parcialmente_numerico_rejeitado() {
        // "7b" não é aceito: a conversão exige o identificador inteiro numérico
        let entrada = vec![registro("7b", "Maria Silva", EtapaPipeline::Novos)];
        assert!(adapt_atendimentos(&entrada).is_err());
    }

    #[test]
    fn test_montar_quadro_com_usuario_padrao() {
        let entrada = vec![registro("7", "Maria Silva", EtapaPipeline::Novos)];
        let quadro = montar_quadro(&entrada, None).unwrap();

        assert_eq!(quadro.usuario_logado, USUARIO_PADRAO);
        assert!(!quadro.is_admin);
        assert_eq!(quadro.atendimentos.len(), 1);
    }

    #[test]
    fn test_montar_quadro_serializa_o_contrato() {
        let entrada = vec![registro("7", "Maria Silva", EtapaPipeline::AguardandoCliente)];
        let quadro = montar_quadro(&entrada, Some("ana@empresa.com.br")).unwrap();
        let json = serde_json::to_value(&quadro).unwrap();

        assert_eq!(json["usuarioLogado"], "ana@empresa.com.br");
        assert_eq!(json["isAdmin"], false);
        assert_eq!(json["atendimentos"][0]["tempoAberto"], "10m");
        assert_eq!(json["atendimentos"][0]["status"], "pendentes");
    }
}
