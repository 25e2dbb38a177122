//! CLI command implementations.

pub mod check;
pub mod extract;
pub mod generate;
pub mod init;
