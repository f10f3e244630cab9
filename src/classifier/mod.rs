mod descriptor;
mod engine;
mod error;
mod matcher;
mod tables;

pub use descriptor::StateDescriptor;
pub use engine::StateClassifier;
pub use error::TableError;
pub use matcher::{Pattern, Rule, RuleTable, TableBuilder};
pub use tables::{daily_table, product_table};
