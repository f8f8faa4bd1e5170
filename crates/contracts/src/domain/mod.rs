pub mod a001_unit;
pub mod a002_standard;
pub mod common;
