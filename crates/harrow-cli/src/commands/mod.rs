//! Command implementations.

pub mod genetics;
pub mod models;
pub mod weather;
