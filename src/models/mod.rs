//! Domain models, wire DTOs and the pagination primitives.

pub mod badge;
pub mod owner;
pub mod pagination;
pub mod property;
pub mod record;
pub mod rent;
pub mod room;
pub mod tenant;
