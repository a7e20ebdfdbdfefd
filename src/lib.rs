//! Keep version pins written in YAML configuration comments in sync with
//! the versions recorded in package manager lockfiles.
//!
//! A line opts in with a trailing directive:
//!
//! ```text
//!   - "prettier@2.8.0"  # sync:yarn.lock
//!   rev: v4.0.0  # sync:pre-commit-hooks:poetry.lock
//! ```
//!
//! # Modules
//!
//! - [`parser`]: classifies annotated lines and extracts their fields
//! - [`lockfile`]: per-ecosystem lockfile readers, cache and registry
//! - [`sync`]: rebuilds matched lines and drives a whole file
//! - [`app`]: file selection, print/write/check modes
//! - [`config`]: constants and run options

pub mod app;
pub mod config;
pub mod lockfile;
pub mod parser;
pub mod sync;
