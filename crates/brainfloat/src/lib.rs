#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

//! Packed 16-bit floating point kernel.
//!
//! The packed format is bfloat16: the upper half of an IEEE-754 binary32 word.
//!
//! ```text
//! f32:      SEEEEEEE EMMMMMMM MMMMMMMM MMMMMMMM
//! bfloat16: SEEEEEEE EMMMMMMM
//! ```
//!
//! One sign bit, eight exponent bits and seven mantissa bits. Every predicate, conversion and
//! comparison constant in this crate uses that layout, and nothing else.

#[macro_use]
extern crate derive_new;

/// Packed float type, conversions, predicates and ordering.
pub mod float;

/// Floating point exception signaling.
pub mod signal;

mod kernel;

pub use float::{FloatInfo, RoundingMode, bfloat16};
pub use kernel::*;
