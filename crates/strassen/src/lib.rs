//! strassen library: application logic for the Strassen multiplier binary.

pub mod app;
pub mod config;
pub mod errors;
pub mod payload;
pub mod version;
