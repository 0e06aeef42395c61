//! # bl-app
//!
//! Application layer for BimaLink: the comparison engine service plus one
//! use case per user-visible operation. Everything here depends on the
//! ports declared in `bl-core`; concrete adapters are wired in by the
//! composition root.

pub mod deps;
pub mod engine;
pub mod usecases;

pub use deps::AppDeps;
pub use engine::{ComparisonEngine, ComparisonError};
