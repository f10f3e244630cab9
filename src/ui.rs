//! Interface de terminal do FEIRA — saída colorida da caixa de entrada.
//!
//! Usa a crate `console` para estilização com cores. O [`InboxRenderer`]
//! traduz os flags de cada descritor em ênfase visual: estado que pede ação
//! em ciano, estado terminal esmaecido, ponto de notificação de venda em
//! vermelho e momento de transição em negrito.

use console::Style;

use crate::classifier::StateDescriptor;
use crate::inbox::{InboxRow, Tab};

/// Renderizador da caixa de entrada no terminal.
pub struct InboxRenderer {
    // Estilo para estados que pedem ação do usuário.
    cyan: Style,
    // Estilo para estados terminais.
    dim: Style,
    // Estilo para o ponto de notificação de venda.
    red: Style,
    // Estilo para timestamps enfatizados.
    bold: Style,
}

impl Default for InboxRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl InboxRenderer {
    pub fn new() -> Self {
        Self {
            cyan: Style::new().cyan().bold(),
            dim: Style::new().dim(),
            red: Style::new().red().bold(),
            bold: Style::new().bold(),
        }
    }

    /// Imprime a listagem de uma aba, uma linha por transação.
    pub fn render(&self, rows: &[InboxRow], tab: Tab, verbose: bool) {
        println!("─── {tab} ───");
        if rows.is_empty() {
            println!("  {}", self.dim.apply_to("nothing here yet"));
            return;
        }
        for row in rows {
            println!("{}", self.format_row(row, verbose));
        }
    }

    fn format_row(&self, row: &InboxRow, verbose: bool) -> String {
        let descriptor = &row.descriptor;

        let dot = if descriptor.is_sale_notification {
            format!("{}", self.red.apply_to("●"))
        } else {
            " ".to_string()
        };

        let state = descriptor.process_state.as_deref().unwrap_or("—");
        let state = if descriptor.action_needed {
            format!("{}", self.cyan.apply_to(state))
        } else if descriptor.is_final {
            format!("{}", self.dim.apply_to(state))
        } else {
            state.to_string()
        };

        let when = match row.last_transitioned_at {
            Some(at) => {
                let formatted = at.format("%d %b %Y %H:%M").to_string();
                if descriptor.emphasize_transition_moment {
                    format!("{}", self.bold.apply_to(formatted))
                } else {
                    formatted
                }
            }
            None => String::new(),
        };

        let mut line = format!("{dot} {:<20} {state:<32} {when}", row.other_party);
        if verbose && let Some(key) = &row.status_key {
            line.push_str(&format!("\n      {}", self.dim.apply_to(key)));
        }
        line
    }

    /// Imprime um descritor formatado em JSON.
    pub fn print_descriptor(&self, descriptor: &StateDescriptor) {
        println!(
            "{}",
            serde_json::to_string_pretty(descriptor).unwrap_or_default()
        );
    }

    /// Imprime a enumeração ordenada de estados de um processo.
    pub fn print_states(&self, process_name: &str, states: &[&str]) {
        println!("{}", self.bold.apply_to(process_name));
        for state in states {
            println!("  {state}");
        }
    }

    /// Imprime os nomes dos processos registrados.
    pub fn print_process_list(&self, names: &[&str]) {
        for name in names {
            println!("{name}");
        }
    }
}
