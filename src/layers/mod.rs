pub mod base;
pub mod control;
pub mod macros;
pub mod marker;
pub mod tile;
