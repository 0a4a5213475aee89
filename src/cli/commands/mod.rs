//! Command implementations.

pub mod ask;
pub mod categories;
pub mod load;
pub mod search;
