pub mod aggregate;
pub mod option;

pub use aggregate::{Standard, StandardError, StandardsSet, StandardsSetId};
pub use option::{StandardOption, CODE_DESCRIPTION_DELIMITER};
