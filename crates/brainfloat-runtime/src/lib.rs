#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

//! Runtime support for the brainfloat kernel.
//!
//! Loads the global configuration, builds the exception signal it selects, and exposes the
//! element functions an array library needs to host [`bfloat16`] as a data type.

extern crate alloc;

#[macro_use]
extern crate derive_new;

/// Array element functions.
pub mod array;
/// Runtime configuration.
pub mod config;
/// Exception signals driven by configuration.
pub mod signal;

mod kernel;

pub use brainfloat::{RoundingMode, bfloat16};
pub use kernel::*;
