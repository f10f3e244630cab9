//! Inbox assembly: transactions in, renderable rows out.
//!
//! Maps the selected tab to the viewing role, classifies each transaction
//! and keeps only the ones the classifier recognizes. Rows carry everything
//! presentation needs: the counterpart's name, the descriptor flags, the
//! status-string key and the last transition timestamp.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::classifier::{StateClassifier, StateDescriptor};
use crate::error::FeiraError;
use crate::transaction::{Role, Transaction};

/// Which side of the marketplace the inbox shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    /// Transactions where the viewer is the customer.
    Orders,
    /// Transactions where the viewer is the provider.
    Sales,
}

impl Tab {
    /// The viewing role this tab asserts.
    pub fn role(self) -> Role {
        match self {
            Tab::Orders => Role::Customer,
            Tab::Sales => Role::Provider,
        }
    }
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tab::Orders => write!(f, "orders"),
            Tab::Sales => write!(f, "sales"),
        }
    }
}

/// One renderable inbox line.
#[derive(Debug, Clone, Serialize)]
pub struct InboxRow {
    pub transaction_id: Uuid,
    pub other_party: String,
    pub status_key: Option<String>,
    pub last_transitioned_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub descriptor: StateDescriptor,
}

/// Localization key for the status label, of the shape
/// `<processName>.<role>.<processState>.status`.
///
/// `None` when either identifier is unresolved; the renderer then falls
/// back to showing the raw state.
pub fn status_key(descriptor: &StateDescriptor, role: Role) -> Option<String> {
    let name = descriptor.process_name.as_deref()?;
    let state = descriptor.process_state.as_deref()?;
    Some(format!("{name}.{role}.{state}.status"))
}

/// Classify every transaction for the tab's role and assemble rows.
///
/// Transactions whose process the classifier does not recognize produce no
/// row at all.
pub fn build(classifier: &StateClassifier, transactions: &[Transaction], tab: Tab) -> Vec<InboxRow> {
    let role = tab.role();
    transactions
        .iter()
        .filter_map(|tx| {
            let descriptor = classifier.classify(tx, role);
            if descriptor.is_empty() {
                return None;
            }
            Some(InboxRow {
                transaction_id: tx.id,
                other_party: tx.other_party(role).display_name.clone(),
                status_key: status_key(&descriptor, role),
                last_transitioned_at: tx.last_transitioned_at(),
                descriptor,
            })
        })
        .collect()
}

/// Load transaction records from a JSON file (an array of transactions).
pub fn load_transactions(path: &Path) -> Result<Vec<Transaction>, FeiraError> {
    let contents = std::fs::read_to_string(path)?;
    let transactions = serde_json::from_str(&contents)?;
    Ok(transactions)
}
