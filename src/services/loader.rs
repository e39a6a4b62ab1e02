//! Padrão comum dos carregadores de recurso
//!
//! Cada recurso instancia: um contêiner de resultado, uma flag de
//! carregamento e um token de geração. O token impede que uma resposta
//! obsoleta sobrescreva o estado escrito por um disparo mais novo: cada
//! disparo incrementa a geração e só a geração corrente assenta o estado.

use std::sync::atomic::{AtomicU64, Ordering};

/// Estado exposto por um carregador de recurso
#[derive(Debug, Clone, Default)]
pub struct LoaderState<T> {
    pub data: T,
    pub loading: bool,
}

/// Token de geração por instância de carregador
#[derive(Debug, Default)]
pub struct Geracao(AtomicU64);

impl Geracao {
    /// Registra um novo disparo e devolve a geração dele
    pub fn proximo(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Verifica se a geração dada ainda é a corrente
    pub fn corrente(&self, geracao: u64) -> bool {
        self.0.load(Ordering::SeqCst) == geracao
    }
}
