//! Configuration module for skelhub
//!
//! Concentrates the user-facing knobs of the shell: the strict-mode
//! toggle and the route-miss fallback path, with defaults matching the
//! shipped application.

pub mod shell;

pub use shell::{ShellConfig, ShellConfigError};
