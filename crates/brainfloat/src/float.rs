use core::fmt::{Debug, Display};
use core::str::FromStr;

use bytemuck::{Pod, Zeroable};

mod convert;
mod info;
mod numeric;
mod ordering;
mod predicate;

pub use convert::RoundingMode;
pub use info::FloatInfo;

pub(crate) const SIGN_MASK: u16 = 0x8000;
pub(crate) const EXPONENT_MASK: u16 = 0x7F80;
pub(crate) const MANTISSA_MASK: u16 = 0x007F;
pub(crate) const MAGNITUDE_MASK: u16 = 0x7FFF;

/// A 16-bit floating point type with 8 exponent bits and 7 mantissa bits.
///
/// The value is stored as the raw bit pattern and is never mutated in place: every operation
/// produces a new value. Equality and ordering follow IEEE-754, so `+0 == -0` and NaN is
/// unordered with everything, itself included.
///
/// [`bfloat16`]: https://en.wikipedia.org/wiki/Bfloat16_floating-point_format
#[allow(non_camel_case_types)]
#[repr(transparent)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Default, Zeroable, Pod)]
pub struct bfloat16(u16);

impl bfloat16 {
    /// Positive zero.
    pub const ZERO: bfloat16 = bfloat16(0x0000);
    /// Negative zero.
    pub const NEG_ZERO: bfloat16 = bfloat16(0x8000);
    /// One.
    pub const ONE: bfloat16 = bfloat16(0x3F80);
    /// Negative one.
    pub const NEG_ONE: bfloat16 = bfloat16(0xBF80);
    /// Positive infinity.
    pub const INFINITY: bfloat16 = bfloat16(0x7F80);
    /// Negative infinity.
    pub const NEG_INFINITY: bfloat16 = bfloat16(0xFF80);
    /// Quiet NaN.
    pub const NAN: bfloat16 = bfloat16(0x7FC0);
    /// Largest finite value, `0x1.FEp127`.
    pub const MAX: bfloat16 = bfloat16(0x7F7F);
    /// Smallest finite value, `-0x1.FEp127`.
    pub const MIN: bfloat16 = bfloat16(0xFF7F);
    /// Smallest positive normal value, `2^-126`.
    pub const MIN_POSITIVE: bfloat16 = bfloat16(0x0080);
    /// Smallest positive subnormal value, `2^-133`.
    pub const MIN_POSITIVE_SUBNORMAL: bfloat16 = bfloat16(0x0001);
    /// Difference between one and the next larger value, `2^-7`.
    pub const EPSILON: bfloat16 = bfloat16(0x3C00);
    /// Difference between one and the next smaller value, `2^-8`.
    pub const EPSILON_NEG: bfloat16 = bfloat16(0x3B80);

    /// Constructs a [`bfloat16`] value from the raw bits.
    #[inline]
    #[must_use]
    pub const fn from_bits(bits: u16) -> bfloat16 {
        bfloat16(bits)
    }

    /// Converts a [`bfloat16`] into the underlying bit representation.
    #[inline]
    #[must_use]
    pub const fn to_bits(self) -> u16 {
        self.0
    }

    /// Returns the bit pattern with the sign bit cleared.
    #[inline]
    #[must_use]
    pub(crate) const fn magnitude(self) -> u16 {
        self.0 & MAGNITUDE_MASK
    }

    /// Returns a value with the magnitude of `self` and the sign of `sign`.
    ///
    /// NaN payloads are carried over untouched, only the sign bit changes.
    #[inline]
    #[must_use]
    pub const fn copysign(self, sign: bfloat16) -> bfloat16 {
        bfloat16((self.0 & MAGNITUDE_MASK) | (sign.0 & SIGN_MASK))
    }

    /// Returns the absolute value by clearing the sign bit.
    #[inline]
    #[must_use]
    pub const fn abs(self) -> bfloat16 {
        bfloat16(self.0 & MAGNITUDE_MASK)
    }

    /// Returns the memory representation in native byte order.
    #[inline]
    #[must_use]
    pub const fn to_ne_bytes(self) -> [u8; 2] {
        self.0.to_ne_bytes()
    }

    /// Returns the memory representation in little-endian byte order.
    #[inline]
    #[must_use]
    pub const fn to_le_bytes(self) -> [u8; 2] {
        self.0.to_le_bytes()
    }

    /// Returns the memory representation in big-endian byte order.
    #[inline]
    #[must_use]
    pub const fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }

    /// Creates a value from its memory representation in native byte order.
    #[inline]
    #[must_use]
    pub const fn from_ne_bytes(bytes: [u8; 2]) -> bfloat16 {
        bfloat16(u16::from_ne_bytes(bytes))
    }

    /// Creates a value from its memory representation in little-endian byte order.
    #[inline]
    #[must_use]
    pub const fn from_le_bytes(bytes: [u8; 2]) -> bfloat16 {
        bfloat16(u16::from_le_bytes(bytes))
    }

    /// Creates a value from its memory representation in big-endian byte order.
    #[inline]
    #[must_use]
    pub const fn from_be_bytes(bytes: [u8; 2]) -> bfloat16 {
        bfloat16(u16::from_be_bytes(bytes))
    }
}

impl Display for bfloat16 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        Display::fmt(&self.to_f32(), f)
    }
}

impl Debug for bfloat16 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "bfloat16({:?})", self.to_f32())
    }
}

impl FromStr for bfloat16 {
    type Err = core::num::ParseFloatError;

    fn from_str(src: &str) -> Result<bfloat16, Self::Err> {
        f64::from_str(src).map(bfloat16::from_f64)
    }
}
