use core::num::FpCategory;

use super::{EXPONENT_MASK, MAGNITUDE_MASK, MANTISSA_MASK, SIGN_MASK, bfloat16};

impl bfloat16 {
    /// Returns `true` if any of the 15 non-sign bits is set.
    ///
    /// Both signed zeros are "zero", every NaN is "nonzero".
    #[inline]
    #[must_use]
    pub const fn is_nonzero(self) -> bool {
        self.0 & MAGNITUDE_MASK != 0
    }

    /// Returns `true` if this value is NaN.
    #[inline]
    #[must_use]
    pub const fn is_nan(self) -> bool {
        self.0 & EXPONENT_MASK == EXPONENT_MASK && self.0 & MANTISSA_MASK != 0
    }

    /// Returns `true` if this value is positive or negative infinity.
    #[inline]
    #[must_use]
    pub const fn is_infinite(self) -> bool {
        self.0 & EXPONENT_MASK == EXPONENT_MASK && self.0 & MANTISSA_MASK == 0
    }

    /// Returns `true` if this value is neither infinite nor NaN.
    #[inline]
    #[must_use]
    pub const fn is_finite(self) -> bool {
        self.0 & EXPONENT_MASK != EXPONENT_MASK
    }

    /// Returns `true` if the sign bit is set, including `-0.0` and NaNs with a negative sign.
    #[inline]
    #[must_use]
    pub const fn is_sign_negative(self) -> bool {
        self.0 & SIGN_MASK != 0
    }

    /// Returns `true` if the sign bit is clear.
    #[inline]
    #[must_use]
    pub const fn is_sign_positive(self) -> bool {
        !self.is_sign_negative()
    }

    /// Returns `true` if the exponent field is zero and the mantissa is not.
    #[inline]
    #[must_use]
    pub const fn is_subnormal(self) -> bool {
        self.0 & EXPONENT_MASK == 0 && self.0 & MANTISSA_MASK != 0
    }

    /// Returns `true` if the value is neither zero, infinite, subnormal nor NaN.
    #[inline]
    #[must_use]
    pub const fn is_normal(self) -> bool {
        let exponent = self.0 & EXPONENT_MASK;
        exponent != 0 && exponent != EXPONENT_MASK
    }

    /// Returns the floating point category of the number.
    #[must_use]
    pub const fn classify(self) -> FpCategory {
        let exponent = self.0 & EXPONENT_MASK;
        let mantissa = self.0 & MANTISSA_MASK;

        match (exponent, mantissa) {
            (EXPONENT_MASK, 0) => FpCategory::Infinite,
            (EXPONENT_MASK, _) => FpCategory::Nan,
            (0, 0) => FpCategory::Zero,
            (0, _) => FpCategory::Subnormal,
            _ => FpCategory::Normal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::pos_zero(0x0000, FpCategory::Zero)]
    #[case::neg_zero(0x8000, FpCategory::Zero)]
    #[case::smallest_subnormal(0x0001, FpCategory::Subnormal)]
    #[case::largest_subnormal(0x807F, FpCategory::Subnormal)]
    #[case::smallest_normal(0x0080, FpCategory::Normal)]
    #[case::one(0x3F80, FpCategory::Normal)]
    #[case::max(0x7F7F, FpCategory::Normal)]
    #[case::pos_inf(0x7F80, FpCategory::Infinite)]
    #[case::neg_inf(0xFF80, FpCategory::Infinite)]
    #[case::quiet_nan(0x7FC0, FpCategory::Nan)]
    #[case::signaling_nan(0x7F81, FpCategory::Nan)]
    #[case::neg_nan(0xFFFF, FpCategory::Nan)]
    #[test_log::test]
    fn classify_matches_predicates(#[case] bits: u16, #[case] category: FpCategory) {
        let value = bfloat16::from_bits(bits);

        assert_eq!(value.classify(), category);
        assert_eq!(value.is_nan(), category == FpCategory::Nan);
        assert_eq!(value.is_infinite(), category == FpCategory::Infinite);
        assert_eq!(
            value.is_finite(),
            !matches!(category, FpCategory::Nan | FpCategory::Infinite)
        );
        assert_eq!(value.is_subnormal(), category == FpCategory::Subnormal);
        assert_eq!(value.is_normal(), category == FpCategory::Normal);
        assert_eq!(value.is_nonzero(), category != FpCategory::Zero);
    }

    #[test_log::test]
    fn predicates_agree_with_f32_for_every_pattern() {
        for bits in 0..=u16::MAX {
            let value = bfloat16::from_bits(bits);
            let wide = value.to_f32();

            assert_eq!(value.is_nan(), wide.is_nan(), "{bits:#06x}");
            assert_eq!(value.is_infinite(), wide.is_infinite(), "{bits:#06x}");
            assert_eq!(value.is_finite(), wide.is_finite(), "{bits:#06x}");
            assert_eq!(value.is_sign_negative(), wide.is_sign_negative(), "{bits:#06x}");
            assert_eq!(value.classify(), wide.classify(), "{bits:#06x}");
        }
    }
}
