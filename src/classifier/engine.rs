use std::collections::HashMap;

use super::descriptor::StateDescriptor;
use super::error::TableError;
use super::matcher::RuleTable;
use super::tables;
use crate::process::{DailyProcess, ProcessDefinition, ProcessRegistry, ProductProcess};
use crate::transaction::{Role, Transaction};

/// The classification entry point.
///
/// Holds the process registry and one rule table per registered process.
/// Both are populated at initialization and read-only afterwards, so
/// `classify` may be called concurrently without coordination.
pub struct StateClassifier {
    registry: ProcessRegistry,
    tables: HashMap<&'static str, RuleTable>,
}

impl Default for StateClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl StateClassifier {
    /// An empty classifier. Every classification is a miss until processes
    /// are registered.
    pub fn new() -> Self {
        Self {
            registry: ProcessRegistry::new(),
            tables: HashMap::new(),
        }
    }

    /// Classifier with both supported processes and their rule tables.
    pub fn with_defaults() -> Result<Self, TableError> {
        let mut classifier = Self::new();
        classifier.register(Box::new(ProductProcess), tables::product_table()?);
        classifier.register(Box::new(DailyProcess), tables::daily_table()?);
        Ok(classifier)
    }

    /// Register a process definition together with its rule table.
    ///
    /// Initialization-time only; a later registration under the same name
    /// replaces the earlier one.
    pub fn register(&mut self, definition: Box<dyn ProcessDefinition>, table: RuleTable) {
        self.tables.insert(definition.name(), table);
        self.registry.register(definition);
    }

    pub fn registry(&self) -> &ProcessRegistry {
        &self.registry
    }

    /// Classify a transaction as seen by the given role.
    ///
    /// Total over all well-formed inputs: an unregistered process yields the
    /// empty descriptor, an underivable state falls through to the table's
    /// default, and nothing in between can fail.
    pub fn classify(&self, tx: &Transaction, role: Role) -> StateDescriptor {
        let Some(definition) = self.registry.lookup(&tx.process_name) else {
            return StateDescriptor::default();
        };

        let state = definition.derive_state(tx);
        let bare = StateDescriptor::bare(definition.name(), state);

        match self.tables.get(definition.name()) {
            Some(table) => table.evaluate(state, role, bare),
            None => StateDescriptor::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::matcher::Pattern::{Any, Is};
    use crate::process::states;
    use crate::transaction::Participant;
    use chrono::{TimeZone, Utc};

    fn tx(process_name: &str, transitions: &[&str]) -> Transaction {
        let mut tx = Transaction::new(
            process_name,
            Participant::new("Ana"),
            Participant::new("Bruno"),
        );
        for (i, name) in transitions.iter().enumerate() {
            let at = Utc.with_ymd_and_hms(2024, 3, 10, 9, i as u32, 0).unwrap();
            tx.transition(*name, at);
        }
        tx
    }

    #[test]
    fn registry_miss_yields_empty_descriptor() {
        let classifier = StateClassifier::with_defaults().unwrap();
        let tx = tx("unknown-process", &["enquire"]);

        for role in [Role::Customer, Role::Provider] {
            let descriptor = classifier.classify(&tx, role);
            assert!(descriptor.is_empty());
        }
    }

    #[test]
    fn underivable_state_falls_through_to_bare_descriptor() {
        let classifier = StateClassifier::with_defaults().unwrap();

        // Empty history: process resolves, state does not.
        let tx = tx("flex-product-default-process", &[]);
        let descriptor = classifier.classify(&tx, Role::Customer);
        assert_eq!(
            descriptor.process_name.as_deref(),
            Some("flex-product-default-process")
        );
        assert_eq!(descriptor.process_state, None);
        assert!(!descriptor.action_needed);
        assert!(!descriptor.is_final);
    }

    #[test]
    fn canceled_is_final_for_both_roles() {
        let classifier = StateClassifier::with_defaults().unwrap();
        let tx = tx("flex-product-default-process", &["request-payment", "cancel"]);

        let customer = classifier.classify(&tx, Role::Customer);
        let provider = classifier.classify(&tx, Role::Provider);

        assert_eq!(customer, provider);
        assert_eq!(
            customer,
            StateDescriptor::bare("flex-product-default-process", Some(states::CANCELED))
                .finalized()
        );
    }

    #[test]
    fn purchase_notifies_provider_only() {
        let classifier = StateClassifier::with_defaults().unwrap();
        let tx = tx(
            "flex-product-default-process",
            &["request-payment", "confirm-payment"],
        );

        let provider = classifier.classify(&tx, Role::Provider);
        assert!(provider.action_needed);
        assert!(provider.is_sale_notification);

        let customer = classifier.classify(&tx, Role::Customer);
        assert!(!customer.is_sale_notification);
        assert!(!customer.action_needed);
    }

    #[test]
    fn accepted_booking_emphasizes_moment_for_provider() {
        let classifier = StateClassifier::with_defaults().unwrap();
        let tx = tx(
            "flex-default-process",
            &["request-payment", "confirm-payment", "accept"],
        );

        let descriptor = classifier.classify(&tx, Role::Provider);
        assert_eq!(
            descriptor,
            StateDescriptor::bare("flex-default-process", Some(states::ACCEPTED))
                .needs_action()
                .emphasized()
        );
    }

    #[test]
    fn classify_is_idempotent() {
        let classifier = StateClassifier::with_defaults().unwrap();
        let tx = tx("flex-default-process", &["enquire"]);

        let first = classifier.classify(&tx, Role::Customer);
        let second = classifier.classify(&tx, Role::Customer);
        assert_eq!(first, second);
    }

    #[test]
    fn sale_notification_never_leaks_into_daily_process() {
        let classifier = StateClassifier::with_defaults().unwrap();
        let histories: &[&[&str]] = &[
            &[],
            &["enquire"],
            &["request-payment"],
            &["confirm-payment"],
            &["confirm-payment", "accept"],
            &["confirm-payment", "decline"],
            &["confirm-payment", "accept", "complete"],
            &["cancel"],
            &["complete", "review-1-by-customer"],
            &["complete", "review-1-by-customer", "review-2-by-provider"],
        ];
        for history in histories {
            let tx = tx("flex-default-process", history);
            for role in [Role::Customer, Role::Provider] {
                assert!(!classifier.classify(&tx, role).is_sale_notification);
            }
        }
    }

    // A deterministic fake: always derives the same state, whatever the
    // history says.
    struct FixedProcess {
        state: &'static str,
    }

    impl ProcessDefinition for FixedProcess {
        fn name(&self) -> &'static str {
            "fixed-process"
        }

        fn states(&self) -> &'static [&'static str] {
            &["frozen"]
        }

        fn derive_state(&self, _tx: &Transaction) -> Option<&'static str> {
            Some(self.state)
        }
    }

    #[test]
    fn third_process_registers_without_touching_the_matcher() {
        let mut classifier = StateClassifier::with_defaults().unwrap();
        let table = RuleTable::builder("fixed-process")
            .rule(Is("frozen"), Any, |d| d.finalized())
            .default(|d| d)
            .build()
            .unwrap();
        classifier.register(Box::new(FixedProcess { state: "frozen" }), table);

        let fixed_tx = tx("fixed-process", &[]);
        let descriptor = classifier.classify(&fixed_tx, Role::Customer);
        assert_eq!(
            descriptor,
            StateDescriptor::bare("fixed-process", Some("frozen")).finalized()
        );

        // The defaults keep working alongside it.
        let flex_tx = tx("flex-product-default-process", &["enquire"]);
        assert!(classifier.classify(&flex_tx, Role::Customer).action_needed);
    }

    #[test]
    fn unmapped_state_lands_on_bare_default() {
        // A definition that derives a state no rule in the table mentions:
        // every typed rule falls through and the default hands back the
        // bare descriptor, flags untouched.
        let mut classifier = StateClassifier::new();
        classifier.register(
            Box::new(FixedProcess {
                state: "some-unmapped-state",
            }),
            tables::product_table().unwrap(),
        );

        let tx = tx("fixed-process", &[]);
        let descriptor = classifier.classify(&tx, Role::Customer);
        assert_eq!(
            descriptor,
            StateDescriptor::bare("fixed-process", Some("some-unmapped-state"))
        );
    }

    #[test]
    fn empty_classifier_misses_everything() {
        let classifier = StateClassifier::new();
        let tx = tx("flex-product-default-process", &["enquire"]);
        assert!(classifier.classify(&tx, Role::Customer).is_empty());
    }
}
