use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Perfil do agente, um-para-um com a identidade da sessão
///
/// O `id` é o mesmo identificador da identidade resolvida pela superfície de
/// auth; a linha correspondente na coleção `perfis` é única.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Perfil {
    pub id: Uuid,
    pub nome: String,
    pub email: String,
    pub cargo: String,
    pub empresa_id: String,
    pub setor: String,
    pub status: String,
}
