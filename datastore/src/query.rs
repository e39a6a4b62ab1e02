//! Construtor de consultas sobre coleções nomeadas
//!
//! Espelha o vocabulário da superfície REST do serviço
//! (`from(...).select(...).eq(...).order(...)`) com dois modos de resultado:
//! muitas linhas (`fetch`) ou exatamente uma (`single`).

use crate::client::DataStoreClient;
use crate::error::{DataStoreError, Result};
use serde::de::DeserializeOwned;

/// Consulta em construção sobre uma coleção do data store
#[derive(Clone)]
pub struct Consulta {
    client: DataStoreClient,
    colecao: String,
    colunas: String,
    filtros: Vec<(String, String)>,
    ordem: Option<String>,
}

impl Consulta {
    pub(crate) fn nova(client: DataStoreClient, colecao: &str) -> Self {
        Self {
            client,
            colecao: colecao.to_string(),
            colunas: "*".to_string(),
            filtros: Vec::new(),
            ordem: None,
        }
    }

    /// Seleção de colunas (`"*"` por padrão)
    pub fn select(mut self, colunas: &str) -> Self {
        self.colunas = colunas.to_string();
        self
    }

    /// Filtro de igualdade (`coluna = valor`); booleanos passam como "true"/"false"
    pub fn eq(mut self, coluna: &str, valor: impl ToString) -> Self {
        self.filtros.push((coluna.to_string(), valor.to_string()));
        self
    }

    /// Ordenação ascendente pela coluna
    pub fn order(mut self, coluna: &str) -> Self {
        self.ordem = Some(coluna.to_string());
        self
    }

    /// Monta o caminho + query string da consulta
    pub fn build_path(&self) -> String {
        let mut partes = vec![format!("select={}", urlencoding::encode(&self.colunas))];

        for (coluna, valor) in &self.filtros {
            partes.push(format!("{}=eq.{}", coluna, urlencoding::encode(valor)));
        }

        if let Some(coluna) = &self.ordem {
            partes.push(format!("order={}.asc", coluna));
        }

        format!("{}?{}", self.colecao, partes.join("&"))
    }

    /// Executa a consulta esperando zero ou mais linhas
    pub async fn fetch<T: DeserializeOwned>(self) -> Result<Vec<T>> {
        let caminho = self.build_path();
        let response = self.client.get_rest(&caminho).await?;
        let linhas = response.json().await?;
        Ok(linhas)
    }

    /// Executa a consulta esperando exatamente uma linha
    pub async fn single<T: DeserializeOwned>(self) -> Result<T> {
        let mut linhas: Vec<T> = self.fetch().await?;
        match linhas.len() {
            1 => Ok(linhas.remove(0)),
            0 => Err(DataStoreError::NoRows),
            n => Err(DataStoreError::MultipleRows(n)),
        }
    }
}
