//! Searchable multi-select over a standards catalog.
//!
//! - state.rs: selection state machine and catalog bookkeeping (no signals)
//! - view_model.rs: signals, catalog loading and the commit workflow
//! - view.rs: Leptos component

mod state;
mod view;
mod view_model;

pub use state::{visible_options, CatalogState, SelectionState};
pub use view::StandardsSelector;
pub use view_model::StandardsSelectorViewModel;
