//! Logger setup for binaries built on `kiln-math`.
//!
//! The library itself only emits through the `log` facade; `env_logger` is
//! wired up here so every front end configures it the same way.

mod init;

pub use init::{init_logging, LoggingConfig};
