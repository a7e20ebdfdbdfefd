//! Lockfile readers, one per supported package manager

mod npm;
mod poetry;
mod yarn;

pub use npm::NpmLockfileReader;
pub use poetry::PoetryLockfileReader;
pub use yarn::YarnLockfileReader;
