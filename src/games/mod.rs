//! Game implementations.

pub mod easy21;
