pub mod card;
pub mod details;
pub mod nav;

pub use card::UnitCard;
pub use nav::UnitFormNav;
