//! Game implementations.

pub mod sternhalma;
