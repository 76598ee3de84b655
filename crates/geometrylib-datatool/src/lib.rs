//! # `geometrylib_datatool`
//!
//! Growable sample arrays used to accumulate `(x, y[, z, ...])` data points.
//!
//! Every array starts out with [`INLINE_CAPACITY`] slots stored inline, and is
//! promoted to an owned heap buffer the first time it outgrows them. Capacity
//! doubles on every growth, and promotion is never undone.

#![warn(missing_docs)]

pub mod array;
pub mod array_n;
pub mod columns;
pub mod error;
pub mod sample;
#[cfg(test)]
mod tests;

pub use array::{DataArray, DataArray1, DataArray2, DataArray3, Storage, INLINE_CAPACITY};
pub use array_n::DataArrayN;
pub use columns::Columns;
pub use error::DataToolError;
pub use sample::Sample;
