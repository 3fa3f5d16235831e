use derive_more::derive::Display;

use super::bfloat16;

/// How exact halfway cases are resolved when narrowing to [`bfloat16`].
///
/// Values that are not exactly halfway between two representable neighbours always round to the
/// nearest one.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundingMode {
    /// Ties go to the neighbour with an even mantissa.
    #[default]
    #[display("ties-to-even")]
    #[cfg_attr(feature = "serde", serde(rename = "ties-to-even"))]
    TiesToEven,

    /// Ties go to the neighbour with the larger magnitude.
    #[display("ties-away")]
    #[cfg_attr(feature = "serde", serde(rename = "ties-away"))]
    TiesAway,
}

impl RoundingMode {
    /// Rounding bias added to the binary32 word before its lower half is dropped.
    #[inline]
    const fn bias(self, f32_bits: u32) -> u32 {
        match self {
            RoundingMode::TiesToEven => 0x7FFF + ((f32_bits >> 16) & 1),
            RoundingMode::TiesAway => 0x8000,
        }
    }

    /// Narrows a binary32 bit pattern to a bfloat16 bit pattern.
    ///
    /// The bias is added to the full word and the upper half is kept, so a mantissa carry
    /// propagates into the exponent and finite values round to infinity when they should.
    /// NaNs skip the add: the carry could otherwise turn them into an infinity, or wrap a
    /// negative NaN around to zero. A NaN keeps its upper half as is, unless that half has no
    /// mantissa bit left, in which case the quiet bit is set so it doesn't truncate to infinity.
    #[inline]
    pub const fn narrow_bits(self, f32_bits: u32) -> u16 {
        if f32_bits & 0x7FFF_FFFF > 0x7F80_0000 {
            let upper = (f32_bits >> 16) as u16;
            if upper & 0x007F != 0 {
                return upper;
            }
            return upper | 0x0040;
        }

        ((f32_bits + self.bias(f32_bits)) >> 16) as u16
    }
}

impl bfloat16 {
    /// Constructs a [`bfloat16`] value from a 32-bit floating point value, ties to even.
    ///
    /// This operation is lossy. Values too large to fit round to ±∞, NaN values stay NaN with the
    /// same sign.
    #[inline]
    #[must_use]
    pub fn from_f32(value: f32) -> bfloat16 {
        Self::from_f32_with(value, RoundingMode::TiesToEven)
    }

    /// Constructs a [`bfloat16`] value from a 32-bit floating point value with the given
    /// rounding mode.
    #[inline]
    #[must_use]
    pub fn from_f32_with(value: f32, mode: RoundingMode) -> bfloat16 {
        bfloat16(mode.narrow_bits(value.to_bits()))
    }

    /// Constructs a [`bfloat16`] value from a 64-bit floating point value, ties to even.
    ///
    /// The value is first narrowed to [`f32`] by the IEEE cast, then to [`bfloat16`].
    #[inline]
    #[must_use]
    pub fn from_f64(value: f64) -> bfloat16 {
        Self::from_f64_with(value, RoundingMode::TiesToEven)
    }

    /// Constructs a [`bfloat16`] value from a 64-bit floating point value with the given
    /// rounding mode for the last narrowing step.
    #[inline]
    #[must_use]
    pub fn from_f64_with(value: f64, mode: RoundingMode) -> bfloat16 {
        Self::from_f32_with(value as f32, mode)
    }

    /// Converts a [`bfloat16`] value into an [`f32`] value.
    ///
    /// This conversion is lossless as all values can be represented exactly in [`f32`].
    #[inline]
    #[must_use]
    pub fn to_f32(self) -> f32 {
        f32::from_bits((self.0 as u32) << 16)
    }

    /// Converts a [`bfloat16`] value into an [`f64`] value.
    ///
    /// This conversion is lossless as all values can be represented exactly in [`f64`].
    #[inline]
    #[must_use]
    pub fn to_f64(self) -> f64 {
        self.to_f32() as f64
    }
}

impl From<bfloat16> for f32 {
    fn from(value: bfloat16) -> Self {
        value.to_f32()
    }
}

impl From<bfloat16> for f64 {
    fn from(value: bfloat16) -> Self {
        value.to_f64()
    }
}

impl From<half::bf16> for bfloat16 {
    fn from(value: half::bf16) -> Self {
        bfloat16(value.to_bits())
    }
}

impl From<bfloat16> for half::bf16 {
    fn from(value: bfloat16) -> Self {
        half::bf16::from_bits(value.0)
    }
}
