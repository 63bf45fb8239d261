//! Library surface of the mission-prep CLI, exposed for integration tests.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
