pub mod aggregate;
pub mod planning;

pub use aggregate::{Unit, UnitDto, UnitError, UnitId};
pub use planning::{AssessmentKind, UnitPlanning};
