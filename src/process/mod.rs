mod daily;
mod definition;
mod product;
mod registry;
pub mod states;

pub use daily::{DAILY_PROCESS, DailyProcess};
pub use definition::ProcessDefinition;
pub use product::{PRODUCT_PROCESS, ProductProcess};
pub use registry::ProcessRegistry;
