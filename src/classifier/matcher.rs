use super::descriptor::StateDescriptor;
use super::error::TableError;
use crate::transaction::Role;

/// One position of a rule's condition tuple: either a concrete value or a
/// wildcard matching anything at that position, including an absent state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern<T> {
    Any,
    Is(T),
}

/// Decorates the bare `{process_name, process_state}` descriptor with the
/// flags a matching rule grants.
pub type Producer = fn(StateDescriptor) -> StateDescriptor;

/// A condition tuple paired with its result producer.
pub struct Rule {
    state: Pattern<&'static str>,
    role: Pattern<Role>,
    produce: Producer,
}

impl Rule {
    fn matches(&self, state: Option<&str>, role: Role) -> bool {
        let state_matches = match self.state {
            Pattern::Any => true,
            Pattern::Is(expected) => state == Some(expected),
        };
        let role_matches = match self.role {
            Pattern::Any => true,
            Pattern::Is(expected) => expected == role,
        };
        state_matches && role_matches
    }

    fn condition(&self) -> (Pattern<&'static str>, Pattern<Role>) {
        (self.state, self.role)
    }
}

/// An ordered, first-match-wins rule table over `(state, role)` inputs.
///
/// Built once through [`RuleTable::builder`] and read-only afterwards.
/// Evaluation is a pure function of the inputs: no side effects, identical
/// results on re-invocation.
pub struct RuleTable {
    rules: Vec<Rule>,
    default: Producer,
}

impl RuleTable {
    pub fn builder(name: &'static str) -> TableBuilder {
        TableBuilder {
            name,
            rules: Vec::new(),
            default: None,
        }
    }

    /// Scan rules in declaration order and apply the first one whose
    /// condition tuple fully matches; fall back to the default producer.
    ///
    /// An absent state matches only wildcard positions, so unrecognized
    /// states fall through every typed rule and land on the default.
    pub fn evaluate(
        &self,
        state: Option<&str>,
        role: Role,
        bare: StateDescriptor,
    ) -> StateDescriptor {
        let producer = self
            .rules
            .iter()
            .find(|rule| rule.matches(state, role))
            .map(|rule| rule.produce)
            .unwrap_or(self.default);
        producer(bare)
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Builds a [`RuleTable`], validating it before use.
///
/// `build` fails fast on authoring defects: a missing default producer, or
/// two rules with identical condition tuples (the second would be dead
/// code). Overlapping rules that differ in some position remain legal and
/// order-significant; shadowing by an earlier wildcard is the table
/// author's precedence mechanism.
pub struct TableBuilder {
    name: &'static str,
    rules: Vec<Rule>,
    default: Option<Producer>,
}

impl TableBuilder {
    /// Append a rule; declaration order is evaluation order.
    pub fn rule(
        mut self,
        state: Pattern<&'static str>,
        role: Pattern<Role>,
        produce: Producer,
    ) -> Self {
        self.rules.push(Rule {
            state,
            role,
            produce,
        });
        self
    }

    /// Set the mandatory default producer.
    pub fn default(mut self, produce: Producer) -> Self {
        self.default = Some(produce);
        self
    }

    pub fn build(self) -> Result<RuleTable, TableError> {
        let Some(default) = self.default else {
            return Err(TableError::MissingDefault { table: self.name });
        };

        for (second, rule) in self.rules.iter().enumerate() {
            for (first, earlier) in self.rules[..second].iter().enumerate() {
                if earlier.condition() == rule.condition() {
                    return Err(TableError::DuplicateRule {
                        table: self.name,
                        first,
                        second,
                    });
                }
            }
        }

        Ok(RuleTable {
            rules: self.rules,
            default,
        })
    }
}
