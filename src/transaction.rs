use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The viewing party's relationship to a transaction.
///
/// Exactly two sides exist: the customer who ordered and the provider who
/// sold. A third value is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Provider,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Customer => write!(f, "customer"),
            Role::Provider => write!(f, "provider"),
        }
    }
}

/// One entry in a transaction's transition history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    /// Transition name, e.g. `request-payment`.
    pub name: String,
    /// When the transition happened.
    pub at: DateTime<Utc>,
}

/// A party referenced by a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: Uuid,
    pub display_name: String,
}

/// A marketplace transaction record.
///
/// Owned and mutated entirely outside this crate; the classifier only reads
/// the process name and the transition history. Internal consistency beyond
/// what state derivation reports is not validated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub process_name: String,
    pub customer: Participant,
    pub provider: Participant,
    #[serde(default)]
    pub transitions: Vec<Transition>,
}

impl Transaction {
    pub fn new(process_name: impl Into<String>, customer: Participant, provider: Participant) -> Self {
        Self {
            id: Uuid::new_v4(),
            process_name: process_name.into(),
            customer,
            provider,
            transitions: Vec::new(),
        }
    }

    /// Append a transition to the history.
    pub fn transition(&mut self, name: impl Into<String>, at: DateTime<Utc>) -> &mut Self {
        self.transitions.push(Transition {
            name: name.into(),
            at,
        });
        self
    }

    /// The most recent transition, if any.
    pub fn last_transition(&self) -> Option<&Transition> {
        self.transitions.last()
    }

    /// Timestamp of the most recent transition.
    ///
    /// Callers that cache classification results should key on
    /// `(id, role, last_transitioned_at)` — the descriptor is a pure
    /// function of those.
    pub fn last_transitioned_at(&self) -> Option<DateTime<Utc>> {
        self.last_transition().map(|t| t.at)
    }

    /// The participant on the other side from the given viewer.
    pub fn other_party(&self, viewer: Role) -> &Participant {
        match viewer {
            Role::Customer => &self.provider,
            Role::Provider => &self.customer,
        }
    }
}

impl Participant {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            display_name: display_name.into(),
        }
    }
}
