use std::collections::HashMap;

use super::definition::ProcessDefinition;

/// Registry of known transaction processes, keyed by exact process name.
///
/// Populated once at startup and read-only afterwards. An unregistered name
/// is a classification miss, never an error.
#[derive(Default)]
pub struct ProcessRegistry {
    definitions: HashMap<&'static str, Box<dyn ProcessDefinition>>,
}

impl ProcessRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a process definition under its own name.
    pub fn register(&mut self, definition: Box<dyn ProcessDefinition>) {
        self.definitions.insert(definition.name(), definition);
    }

    /// Exact-name lookup. `None` for unknown processes.
    pub fn lookup(&self, process_name: &str) -> Option<&dyn ProcessDefinition> {
        self.definitions
            .get(process_name)
            .map(|definition| definition.as_ref())
    }

    /// Names of all registered processes.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.definitions.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::{DAILY_PROCESS, DailyProcess, PRODUCT_PROCESS, ProductProcess};

    fn registry_with_defaults() -> ProcessRegistry {
        let mut registry = ProcessRegistry::new();
        registry.register(Box::new(ProductProcess));
        registry.register(Box::new(DailyProcess));
        registry
    }

    #[test]
    fn lookup_hits_registered_process() {
        let registry = registry_with_defaults();
        let def = registry.lookup(PRODUCT_PROCESS).unwrap();
        assert_eq!(def.name(), PRODUCT_PROCESS);
    }

    #[test]
    fn lookup_is_exact_match() {
        let registry = registry_with_defaults();
        assert!(registry.lookup("unknown-process").is_none());
        assert!(registry.lookup("FLEX-PRODUCT-DEFAULT-PROCESS").is_none());
        assert!(registry.lookup("").is_none());
    }

    #[test]
    fn names_are_sorted() {
        let registry = registry_with_defaults();
        assert_eq!(registry.names(), vec![DAILY_PROCESS, PRODUCT_PROCESS]);
    }
}
