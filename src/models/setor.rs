use serde::{Deserialize, Serialize};

/// Unidade organizacional de roteamento de atendimentos
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Setor {
    pub id: String,
    pub nome: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,
    pub ativo: bool,
}
