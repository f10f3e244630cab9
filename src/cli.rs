//! Interface de linha de comando do FEIRA baseada em clap.
//!
//! Define a struct [`Cli`] com subcomandos [`Command`] (inbox, classify,
//! states, demo) e flags globais (--file, --verbose).

use clap::{Parser, Subcommand, ValueEnum};
use uuid::Uuid;

use crate::inbox::Tab;
use crate::transaction::Role;

/// FEIRA — Classificador de estados de transações de marketplace.
#[derive(Debug, Parser)]
#[command(name = "feira", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Caminho do arquivo JSON com as transações (sobrepõe `feira.toml`).
    #[arg(long, global = true)]
    pub file: Option<String>,

    /// Habilita saída detalhada (verbose).
    #[arg(long, short, global = true, default_value_t = false)]
    pub verbose: bool,
}

/// Aba aceita pela CLI, mapeada para [`Tab`](crate::inbox::Tab) internamente.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TabArg {
    /// Transações em que o usuário é o comprador.
    Orders,
    /// Transações em que o usuário é o vendedor.
    Sales,
}

impl From<TabArg> for Tab {
    fn from(arg: TabArg) -> Self {
        match arg {
            TabArg::Orders => Tab::Orders,
            TabArg::Sales => Tab::Sales,
        }
    }
}

/// Papel do usuário aceito pela CLI.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RoleArg {
    Customer,
    Provider,
}

impl From<RoleArg> for Role {
    fn from(arg: RoleArg) -> Self {
        match arg {
            RoleArg::Customer => Role::Customer,
            RoleArg::Provider => Role::Provider,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Lista a caixa de entrada para uma aba (orders ou sales).
    Inbox {
        /// Aba a mostrar; usa o default da configuração quando omitida.
        #[arg(value_enum)]
        tab: Option<TabArg>,
    },

    /// Classifica uma transação e imprime o descritor em JSON.
    Classify {
        /// Id da transação no arquivo.
        id: Uuid,

        /// Papel do usuário ao visualizar a transação.
        #[arg(long, value_enum)]
        role: RoleArg,
    },

    /// Mostra os estados de um processo registrado.
    States {
        /// Nome do processo, ex.: flex-product-default-process.
        /// Omitido, lista os processos registrados.
        process: Option<String>,
    },

    /// Executa a demonstração embutida do classificador.
    Demo,
}
