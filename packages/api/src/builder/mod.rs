//! Fluent path builder
//!
//! Chains segment calls on one owned buffer and reports the first invalid
//! segment when the chain is finished with `build()`.

pub mod core;
pub mod segments;

pub use self::core::PathBuilder;
