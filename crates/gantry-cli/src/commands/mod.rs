//! CLI command definitions.

pub mod init;
pub mod serve;
pub(crate) mod templates;
