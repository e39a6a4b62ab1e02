use datastore::Usuario;

/// Sessão corrente: identidade resolvida e o estado dessa resolução
///
/// Propriedade do passo de resolução de sessão; o gate apenas lê.
#[derive(Debug, Clone, PartialEq)]
pub struct Sessao {
    pub usuario: Option<Usuario>,
    pub carregando: bool,
}

impl Sessao {
    /// Sessão com identidade resolvida
    pub fn resolvida(usuario: Usuario) -> Self {
        Self {
            usuario: Some(usuario),
            carregando: false,
        }
    }

    /// Sessão sem identidade (token ausente ou rejeitado)
    pub fn anonima() -> Self {
        Self {
            usuario: None,
            carregando: false,
        }
    }

    /// Sessão cuja resolução ainda não assentou
    pub fn resolvendo() -> Self {
        Self {
            usuario: None,
            carregando: true,
        }
    }
}

/// Sessão injetada nas extensões da requisição depois que o gate libera o acesso
#[derive(Debug, Clone)]
pub struct SessaoAtual(pub Sessao);
