//! Core library for the stackup dev-stack launcher.
//!
//! Everything the `stackup` binary does lives here: the task-group model
//! and command joining, the terminal-window capability with its platform
//! backends, the launch driver, `stackup.toml` loading, and the doctor
//! checks.

pub mod config;
pub mod doctor;
pub mod group;
pub mod launch;
pub mod terminal;
pub mod utils;
