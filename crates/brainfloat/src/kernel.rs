use crate::float::{EXPONENT_MASK, MANTISSA_MASK, SIGN_MASK};
use crate::signal::{FpExceptionSignal, FpuSignal};
use crate::{RoundingMode, bfloat16};

/// Exponent field above which half an ulp is still a normal number.
const HALF_ULP_NORMAL: u16 = 0x0400;
/// Exponent field above which one ulp is still a normal number.
const ULP_NORMAL: u16 = 0x0380;
/// Exponent field of the smallest normal numbers.
const MIN_NORMAL_EXPONENT: u16 = 0x0080;

/// Narrowing and ulp utilities parameterized by a rounding mode and an exception signal.
///
/// The kernel holds no other state. Every operation is `O(1)`, allocation free, and the kernel
/// is [`Sync`] whenever its signal is.
#[derive(new, Debug, Clone)]
pub struct NumericKernel<S: FpExceptionSignal = FpuSignal> {
    rounding: RoundingMode,
    signal: S,
}

impl Default for NumericKernel<FpuSignal> {
    fn default() -> Self {
        Self::new(RoundingMode::default(), FpuSignal)
    }
}

impl<S: FpExceptionSignal> NumericKernel<S> {
    /// The rounding mode used by [`Self::narrow_f32`] and [`Self::narrow_f64`].
    pub fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    /// The signal receiving exception events.
    pub fn signal(&self) -> &S {
        &self.signal
    }

    /// Narrows an [`f32`] with the kernel's rounding mode.
    #[inline]
    pub fn narrow_f32(&self, value: f32) -> bfloat16 {
        bfloat16::from_f32_with(value, self.rounding)
    }

    /// Narrows an [`f64`] with the kernel's rounding mode.
    #[inline]
    pub fn narrow_f64(&self, value: f64) -> bfloat16 {
        bfloat16::from_f64_with(value, self.rounding)
    }

    /// Returns the magnitude of `x` with the sign of `y`.
    #[inline]
    pub fn copysign(&self, x: bfloat16, y: bfloat16) -> bfloat16 {
        x.copysign(y)
    }

    /// Returns the next representable value after `x` in the direction of `y`.
    ///
    /// A non-finite `x` or a NaN `y` signals `invalid` and returns NaN. Stepping onto an infinity
    /// signals `overflow`, stepping onto a subnormal or a zero signals `underflow`; the stepped
    /// value is returned in both cases.
    pub fn next_after(&self, x: bfloat16, y: bfloat16) -> bfloat16 {
        if !x.is_finite() || y.is_nan() {
            self.signal.invalid();
            return bfloat16::NAN;
        }

        if x.eq_non_nan(y) {
            return x;
        }

        let bits = x.to_bits();
        let result = if !x.is_nonzero() {
            bfloat16::from_bits((y.to_bits() & SIGN_MASK) | 0x0001)
        } else if x.is_sign_positive() {
            // Positive bits grow with the value.
            if y.lt_non_nan(x) {
                bfloat16::from_bits(bits - 1)
            } else {
                bfloat16::from_bits(bits + 1)
            }
        } else if x.lt_non_nan(y) {
            // Negative bits grow with the magnitude.
            bfloat16::from_bits(bits - 1)
        } else {
            bfloat16::from_bits(bits + 1)
        };

        if result.is_infinite() {
            self.signal.overflow();
        } else if result.to_bits() & EXPONENT_MASK == 0 {
            self.signal.underflow();
        }

        result
    }

    /// Returns the distance between `x` and the adjacent representable value towards `+∞`, as
    /// a non-negative magnitude.
    ///
    /// For a negative power of two that neighbour has a smaller magnitude, so the spacing is half
    /// an ulp of `x`. NaN, infinities and [`bfloat16::MAX`] signal `invalid` and return NaN: the
    /// neighbour of the largest finite value is an infinity.
    pub fn spacing(&self, x: bfloat16) -> bfloat16 {
        let bits = x.to_bits();
        let exponent = bits & EXPONENT_MASK;
        let mantissa = bits & MANTISSA_MASK;

        let spacing = if exponent == EXPONENT_MASK || bits == bfloat16::MAX.to_bits() {
            self.signal.invalid();
            return bfloat16::NAN;
        } else if bits & SIGN_MASK != 0 && mantissa == 0 {
            if exponent > HALF_ULP_NORMAL {
                exponent - HALF_ULP_NORMAL
            } else if exponent > MIN_NORMAL_EXPONENT {
                1 << ((exponent >> 7) - 2)
            } else {
                0x0001
            }
        } else if exponent > ULP_NORMAL {
            exponent - ULP_NORMAL
        } else if exponent > MIN_NORMAL_EXPONENT {
            1 << ((exponent >> 7) - 1)
        } else {
            0x0001
        };

        bfloat16::from_bits(spacing)
    }
}
