//! Subcommand implementations.
//!
//! Each `run` returns `Ok(true)` unless the operation came back with an
//! `Error` notification, which maps to a non-zero exit code in `main`.

pub mod audit;
pub mod matrix;
pub mod perms;
pub mod roles;
pub mod users;
