use crate::transaction::Transaction;

/// A named transaction process: a closed, ordered set of states plus the
/// derivation of "current state" from a transaction's history.
///
/// Implementations are injected into the registry at startup. `derive_state`
/// must be total over transactions carrying this process's name: it may
/// return `None` for an empty or unrecognized history, but it never fails,
/// and any `Some` value is a member of `states()`.
pub trait ProcessDefinition {
    /// Unique process name, e.g. `flex-product-default-process`.
    fn name(&self) -> &'static str;

    /// The closed set of state identifiers, in process order.
    fn states(&self) -> &'static [&'static str];

    /// Current state derived from the transaction's transition history.
    fn derive_state(&self, tx: &Transaction) -> Option<&'static str>;
}
