//! Game implementations.

pub mod islands;
