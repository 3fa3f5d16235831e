use super::bfloat16;

/// Machine limits of the [`bfloat16`] format.
#[derive(Clone, Copy, Debug)]
pub struct FloatInfo {
    /// Number of bits in the type.
    pub bits: u32,
    /// Difference between one and the next larger representable value.
    pub eps: bfloat16,
    /// Difference between one and the next smaller representable value.
    pub epsneg: bfloat16,
    /// Exponent of two giving `eps`.
    pub machep: i32,
    /// Exponent of two giving `epsneg`.
    pub negep: i32,
    /// Largest finite value.
    pub max: bfloat16,
    /// Most negative finite value.
    pub min: bfloat16,
    /// Number of bits in the exponent field.
    pub nexp: u32,
    /// Number of bits in the mantissa field, the implicit leading bit excluded.
    pub nmant: u32,
    /// Number of bits in the exponent field, as reported by `iexp`.
    pub iexp: u32,
    /// Approximate number of decimal digits of precision.
    pub precision: u32,
    /// Approximate decimal resolution, `10^-precision`.
    pub resolution: bfloat16,
    /// Smallest positive normal value.
    pub tiny: bfloat16,
}

impl bfloat16 {
    /// Returns the machine limits of the format.
    pub const fn info() -> FloatInfo {
        FloatInfo {
            bits: 16,
            eps: bfloat16::EPSILON,
            epsneg: bfloat16::EPSILON_NEG,
            machep: -7,
            negep: -8,
            max: bfloat16::MAX,
            min: bfloat16::MIN,
            nexp: 8,
            nmant: 7,
            iexp: 8,
            precision: 2,
            // 0.01 rounded to nearest.
            resolution: bfloat16::from_bits(0x3C24),
            tiny: bfloat16::MIN_POSITIVE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test_log::test]
    fn limits_agree_with_constructed_values() {
        let info = bfloat16::info();

        assert_eq!(info.eps.to_f64(), 2f64.powi(info.machep));
        assert_eq!(info.epsneg.to_f64(), 2f64.powi(info.negep));
        assert_eq!(info.resolution.to_bits(), bfloat16::from_f64(0.01).to_bits());
        assert_eq!(info.tiny.to_f64(), 2f64.powi(-126));
        assert_eq!(info.max.to_f32(), f32::from_bits(0x7F7F_0000));
        assert_eq!(info.min.to_f32(), -info.max.to_f32());
        assert_eq!(info.nexp + info.nmant + 1, info.bits);
        assert_eq!(
            (bfloat16::ONE + info.eps).to_f32() - 1.0,
            info.eps.to_f32()
        );
    }
}
