//! Unit page
//!
//! - view_model.rs: loading the unit and saving it back
//! - page.rs: route component
//! - sections/: one component per planning section

mod page;
pub mod sections;
mod view_model;

pub use page::UnitDetailsPage;
pub use view_model::{save_via_api, SaveCompletion, SaveScope, UnitDetailsViewModel};
