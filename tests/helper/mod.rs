//! Shared test utilities

#![allow(dead_code)]

mod fixtures;

pub use fixtures::*;
