//! Business logic services.

pub mod catalog;
pub mod currency;
pub mod lookup;
pub mod search;
pub mod store;
