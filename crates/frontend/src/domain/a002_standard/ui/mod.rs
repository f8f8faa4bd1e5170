pub mod selector;
pub mod table;

pub use selector::{StandardsSelector, StandardsSelectorViewModel};
pub use table::StandardsTable;
