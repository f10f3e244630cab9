//! Configuração do FEIRA carregada a partir de `feira.toml`.
//!
//! A struct [`FeiraConfig`] contém todos os parâmetros configuráveis.
//! Valores não presentes no arquivo usam defaults sensíveis.
//! A variável de ambiente `FEIRA_TRANSACTIONS_FILE` tem precedência sobre
//! o arquivo.

use serde::Deserialize;
use std::path::Path;

use crate::error::FeiraError;

/// Configuração de nível superior carregada de `feira.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct FeiraConfig {
    /// Aba mostrada quando nenhuma é pedida na CLI: "orders" ou "sales".
    #[serde(default = "default_tab")]
    pub default_tab: String,

    /// Caminho do arquivo JSON com as transações.
    #[serde(default = "default_transactions_file")]
    pub transactions_file: String,
}

// Valor padrão para a aba: "orders".
fn default_tab() -> String {
    "orders".to_string()
}

// Valor padrão para o arquivo de transações.
fn default_transactions_file() -> String {
    "transactions.json".to_string()
}

impl Default for FeiraConfig {
    fn default() -> Self {
        Self {
            default_tab: default_tab(),
            transactions_file: default_transactions_file(),
        }
    }
}

impl FeiraConfig {
    /// Carrega a configuração de `feira.toml` no diretório atual.
    /// Usa valores padrão se o arquivo não existir.
    pub fn load() -> Result<Self, FeiraError> {
        let config = Self::load_from(Path::new("feira.toml"))?;
        Ok(config.with_env_override(std::env::var("FEIRA_TRANSACTIONS_FILE").ok()))
    }

    fn load_from(path: &Path) -> Result<Self, FeiraError> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            Ok(toml::from_str::<FeiraConfig>(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    // A variável de ambiente tem precedência sobre o arquivo de configuração
    // para o caminho das transações.
    fn with_env_override(mut self, transactions_file: Option<String>) -> Self {
        if let Some(file) = transactions_file
            && !file.is_empty()
        {
            self.transactions_file = file;
        }
        self
    }
}
