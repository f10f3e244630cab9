mod classifier;
mod cli;
mod config;
mod error;
mod inbox;
mod process;
mod transaction;
mod ui;

use std::path::Path;

use chrono::{Duration, Utc};
use clap::Parser;

use classifier::StateClassifier;
use cli::{Cli, Command};
use config::FeiraConfig;
use error::FeiraError;
use inbox::Tab;
use process::ProcessDefinition;
use transaction::{Participant, Transaction};
use ui::InboxRenderer;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = FeiraConfig::load()?;
    let classifier = StateClassifier::with_defaults().map_err(FeiraError::from)?;
    let renderer = InboxRenderer::new();

    match cli.command {
        Command::Inbox { tab } => {
            let tab = match tab {
                Some(tab) => tab.into(),
                None => parse_tab(&config.default_tab)?,
            };
            let file = cli.file.unwrap_or(config.transactions_file);
            let transactions = inbox::load_transactions(Path::new(&file))?;
            let rows = inbox::build(&classifier, &transactions, tab);
            renderer.render(&rows, tab, cli.verbose);
        }
        Command::Classify { id, role } => {
            let file = cli.file.unwrap_or(config.transactions_file);
            let transactions = inbox::load_transactions(Path::new(&file))?;
            let tx = transactions
                .iter()
                .find(|tx| tx.id == id)
                .ok_or(FeiraError::TransactionNotFound(id))?;
            renderer.print_descriptor(&classifier.classify(tx, role.into()));
        }
        Command::States { process } => match process {
            Some(process) => {
                let definition = classifier
                    .registry()
                    .lookup(&process)
                    .ok_or_else(|| FeiraError::UnknownProcess(process.clone()))?;
                renderer.print_states(definition.name(), definition.states());
            }
            None => renderer.print_process_list(&classifier.registry().names()),
        },
        Command::Demo => {
            let transactions = demo_transactions();
            for tab in [Tab::Orders, Tab::Sales] {
                let rows = inbox::build(&classifier, &transactions, tab);
                renderer.render(&rows, tab, cli.verbose);
                println!();
            }
        }
    }

    Ok(())
}

fn parse_tab(name: &str) -> Result<Tab, FeiraError> {
    match name {
        "orders" => Ok(Tab::Orders),
        "sales" => Ok(Tab::Sales),
        other => Err(FeiraError::Config(format!("unknown tab: {other}"))),
    }
}

/// Sample transactions for the embedded demo: a fresh sale, an accepted
/// booking, a canceled order and one transaction from an unknown process
/// that the inbox silently skips.
fn demo_transactions() -> Vec<Transaction> {
    let now = Utc::now();

    let mut sale = Transaction::new(
        process::PRODUCT_PROCESS,
        Participant::new("Ana"),
        Participant::new("Bruno"),
    );
    sale.transition("request-payment", now - Duration::hours(5))
        .transition("confirm-payment", now - Duration::hours(4));

    let mut booking = Transaction::new(
        process::DAILY_PROCESS,
        Participant::new("Carla"),
        Participant::new("Bruno"),
    );
    booking
        .transition("request-payment", now - Duration::days(2))
        .transition("confirm-payment", now - Duration::days(2))
        .transition("accept", now - Duration::hours(20));

    let mut canceled = Transaction::new(
        process::PRODUCT_PROCESS,
        Participant::new("Davi"),
        Participant::new("Bruno"),
    );
    canceled
        .transition("request-payment", now - Duration::days(7))
        .transition("expire-payment", now - Duration::days(6));

    let mut stray = Transaction::new(
        "negotiated-offer-process",
        Participant::new("Eva"),
        Participant::new("Bruno"),
    );
    stray.transition("make-offer", now - Duration::hours(1));

    vec![sale, booking, canceled, stray]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::Role;

    #[test]
    fn parse_tab_accepts_known_tabs() {
        assert_eq!(parse_tab("orders").unwrap(), Tab::Orders);
        assert_eq!(parse_tab("sales").unwrap(), Tab::Sales);
    }

    #[test]
    fn parse_tab_rejects_unknown_tab() {
        assert!(matches!(
            parse_tab("archive"),
            Err(FeiraError::Config(_))
        ));
    }

    #[test]
    fn demo_covers_both_processes_and_a_miss() {
        let classifier = StateClassifier::with_defaults().unwrap();
        let transactions = demo_transactions();

        let rows = inbox::build(&classifier, &transactions, Tab::Sales);
        // The unknown process is skipped, everything else shows up.
        assert_eq!(rows.len(), 3);

        let sale = classifier.classify(&transactions[0], Role::Provider);
        assert!(sale.is_sale_notification);

        let booking = classifier.classify(&transactions[1], Role::Provider);
        assert!(booking.action_needed);
        assert!(booking.emphasize_transition_moment);

        let canceled = classifier.classify(&transactions[2], Role::Customer);
        assert!(canceled.is_final);
    }
}
