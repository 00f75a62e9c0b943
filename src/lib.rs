//! Natural run detection and adaptive merging.
//!
//! The sorts in this crate first decompose a slice into its pre-existing monotonic runs
//! (reversing strictly decreasing ones) and then merge those runs back together with one
//! of four strategies:
//!
//! - [`Strategy::HeapKWay`]: all runs at once through a priority queue (not stable)
//! - [`Strategy::BalancedStack`]: a balanced run stack merged linearly through a buffer
//! - [`Strategy::SymmetricInPlace`]: the same stack, merged in place by rotations
//! - [`Strategy::HybridBuffered`]: the same stack, merged through a `√n` sized buffer
//!   with a rotation based fallback
//!
//! ```
//! let mut values = [5, 3, 2, 4, 6, 8, 7, 1];
//! runsort::sort(&mut values, runsort::Strategy::HybridBuffered);
//! assert_eq!(values, [1, 2, 3, 4, 5, 6, 7, 8]);
//! ```

pub mod algorithms;
pub mod data;

#[cfg(test)]
mod test;

pub use algorithms::{Sort, Strategy, sort};
