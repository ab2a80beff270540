//! Branchless sorting of small fixed-size integer arrays.
//!
//! Comparison sorts with good asymptotics never amortize their setup for
//! arrays of 2 to 6 elements whose length is known at compile time. Such
//! arrays want a sorting network: a fixed sequence of compare-exchange steps
//! that is correct for every input order and contains no data-dependent
//! control flow.
//!
//! Two engines consume the same network definitions:
//!
//! - [`scalar`] applies each comparator as a branchless compare-exchange,
//!   one after the other. Works for any `Copy + Ord` element type on any
//!   architecture.
//! - [`simd`] collapses the network into whole-vector passes. Each pass
//!   shuffles every lane's comparison partner into place, does one per-lane
//!   signed compare, folds the resulting mask into a per-lane source index
//!   and applies it with a single permute. Four i32 sort in 3 passes, six
//!   i8 in 5.
//!
//! Buffer lengths are part of the types, so calling an engine with the wrong
//! length does not compile.

pub mod network;
pub mod patterns;
pub mod scalar;
pub mod simd;

pub use simd::{sort4_i32, sort6_i8};
