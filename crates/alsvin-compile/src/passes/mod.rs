//! Built-in compilation passes.
//!
//! Passes come in two flavors:
//! - [`translation`]: rewriting into the target gate vocabulary
//! - [`optimization`]: peephole passes that cancel or merge redundant
//!   instructions

pub mod optimization;
pub mod translation;

pub use optimization::{CancelSelfInverse, MergeRotations};
pub use translation::BasisTranslation;
