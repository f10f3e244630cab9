use thiserror::Error;

/// Rule-table authoring defects, surfaced when the table is built at
/// startup rather than at classification time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("rule table `{table}` was built without a default producer")]
    MissingDefault { table: &'static str },

    #[error("rule table `{table}`: rule #{second} repeats the condition of rule #{first}")]
    DuplicateRule {
        table: &'static str,
        first: usize,
        second: usize,
    },
}
