//! Lockfile layer for resolving installed package versions
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Registry   │────▶│    Cache    │────▶│   Readers   │
//! │ (dispatch)  │     │ (per path)  │     │(yarn,poetry)│
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`registry`]: lockfile name → reader table, version resolution
//! - [`cache`]: parsed lockfiles keyed by ecosystem and canonical path
//! - [`reader`]: `LockfileReader` trait
//! - [`readers`]: yarn.lock, poetry.lock and package-lock.json readers
//! - [`error`]: resolution errors
//! - [`types`]: `LockedPackages`, `Resolution`

pub mod cache;
pub mod error;
pub mod reader;
pub mod readers;
pub mod registry;
pub mod types;

pub use error::ResolveError;
pub use registry::{ResolverRegistry, create_default_registry};
pub use types::{LockedPackages, Resolution};
