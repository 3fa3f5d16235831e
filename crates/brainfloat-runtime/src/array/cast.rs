use brainfloat::{NumericKernel, bfloat16, signal::FpExceptionSignal};

/// A host element type that bfloat16 buffers can be cast from and to.
pub trait HostElement: Copy {
    /// Converts a host value to bfloat16 with the rounding mode of `kernel`.
    fn narrow<S: FpExceptionSignal>(self, kernel: &NumericKernel<S>) -> bfloat16;

    /// Converts a bfloat16 value to the host type.
    fn widen(value: bfloat16) -> Self;
}

// Integers go through f32. Casting back uses `as`, which saturates and maps NaN to zero.
macro_rules! host_integer {
    ($($ty:ty),*) => {
        $(
            impl HostElement for $ty {
                fn narrow<S: FpExceptionSignal>(self, kernel: &NumericKernel<S>) -> bfloat16 {
                    kernel.narrow_f32(self as f32)
                }

                fn widen(value: bfloat16) -> Self {
                    value.to_f32() as $ty
                }
            }
        )*
    };
}

host_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl HostElement for f32 {
    fn narrow<S: FpExceptionSignal>(self, kernel: &NumericKernel<S>) -> bfloat16 {
        kernel.narrow_f32(self)
    }

    fn widen(value: bfloat16) -> Self {
        value.to_f32()
    }
}

impl HostElement for f64 {
    fn narrow<S: FpExceptionSignal>(self, kernel: &NumericKernel<S>) -> bfloat16 {
        kernel.narrow_f64(self)
    }

    fn widen(value: bfloat16) -> Self {
        value.to_f64()
    }
}

impl HostElement for bfloat16 {
    fn narrow<S: FpExceptionSignal>(self, _kernel: &NumericKernel<S>) -> bfloat16 {
        self
    }

    fn widen(value: bfloat16) -> Self {
        value
    }
}

impl HostElement for bool {
    fn narrow<S: FpExceptionSignal>(self, _kernel: &NumericKernel<S>) -> bfloat16 {
        if self { bfloat16::ONE } else { bfloat16::ZERO }
    }

    fn widen(value: bfloat16) -> Self {
        value.is_nonzero()
    }
}

/// Complex numbers as `[real, imaginary]`. Only the real part is kept when narrowing.
impl HostElement for [f32; 2] {
    fn narrow<S: FpExceptionSignal>(self, kernel: &NumericKernel<S>) -> bfloat16 {
        kernel.narrow_f32(self[0])
    }

    fn widen(value: bfloat16) -> Self {
        [value.to_f32(), 0.0]
    }
}

/// Complex numbers as `[real, imaginary]`. Only the real part is kept when narrowing.
impl HostElement for [f64; 2] {
    fn narrow<S: FpExceptionSignal>(self, kernel: &NumericKernel<S>) -> bfloat16 {
        kernel.narrow_f64(self[0])
    }

    fn widen(value: bfloat16) -> Self {
        [value.to_f64(), 0.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brainfloat::{RoundingMode, signal::SilentSignal};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn kernel(rounding: RoundingMode) -> NumericKernel<SilentSignal> {
        NumericKernel::new(rounding, SilentSignal)
    }

    #[rstest]
    #[case::zero(0, 0x0000)]
    #[case::one(1, 0x3F80)]
    #[case::negative(-3, 0xC040)]
    #[case::exact_large(256, 0x4380)]
    #[case::rounded(257, 0x4380)]
    #[case::tie_up(259, 0x4382)]
    #[test_log::test]
    fn integers_narrow_through_f32(#[case] value: i32, #[case] bits: u16) {
        let kernel = kernel(RoundingMode::TiesToEven);

        assert_eq!(value.narrow(&kernel).to_bits(), bits);
    }

    #[test_log::test]
    fn ties_away_applies_to_integers() {
        let kernel = kernel(RoundingMode::TiesAway);

        assert_eq!(257u16.narrow(&kernel).to_bits(), 0x4381);
    }

    #[rstest]
    #[case::truncates(bfloat16::from_f32(2.75), 2)]
    #[case::negative(bfloat16::from_f32(-1.5), -1)]
    #[case::saturates(bfloat16::INFINITY, i8::MAX)]
    #[case::saturates_low(bfloat16::NEG_INFINITY, i8::MIN)]
    #[case::nan_is_zero(bfloat16::NAN, 0)]
    #[test_log::test]
    fn integers_widen_with_saturation(#[case] value: bfloat16, #[case] expected: i8) {
        assert_eq!(i8::widen(value), expected);
    }

    #[test_log::test]
    fn unsigned_widening_clamps_negatives() {
        assert_eq!(u32::widen(bfloat16::NEG_ONE), 0);
        assert_eq!(u64::widen(bfloat16::MAX), u64::MAX);
    }

    #[test_log::test]
    fn bool_uses_nonzero() {
        let kernel = kernel(RoundingMode::TiesToEven);

        assert_eq!(true.narrow(&kernel).to_bits(), 0x3F80);
        assert_eq!(false.narrow(&kernel).to_bits(), 0x0000);
        assert!(bool::widen(bfloat16::NAN));
        assert!(bool::widen(bfloat16::MIN_POSITIVE_SUBNORMAL));
        assert!(!bool::widen(bfloat16::NEG_ZERO));
    }

    #[test_log::test]
    fn complex_keeps_real_part() {
        let kernel = kernel(RoundingMode::TiesToEven);

        assert_eq!([1.0f32, 5.0].narrow(&kernel).to_bits(), 0x3F80);
        assert_eq!([-2.0f64, 5.0].narrow(&kernel).to_bits(), 0xC000);
        assert_eq!(<[f32; 2]>::widen(bfloat16::ONE), [1.0, 0.0]);
        assert_eq!(<[f64; 2]>::widen(bfloat16::NEG_ONE), [-1.0, 0.0]);
    }

    #[test_log::test]
    fn floats_use_kernel_rounding() {
        let tie = f32::from_bits(0x3F80_8000);

        assert_eq!(tie.narrow(&kernel(RoundingMode::TiesToEven)).to_bits(), 0x3F80);
        assert_eq!(tie.narrow(&kernel(RoundingMode::TiesAway)).to_bits(), 0x3F81);
        assert_eq!(f64::widen(bfloat16::ONE), 1.0);
    }
}
