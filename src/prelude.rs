//! Prelude module for tabular_hijri crate.
//!
//! Re-exports the derive_more macros used by the value types.

#[allow(unused_imports)]
pub use derive_more::Display;
