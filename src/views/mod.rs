//! View models consumed by the list screens.

pub mod cards;
pub mod pagination;
