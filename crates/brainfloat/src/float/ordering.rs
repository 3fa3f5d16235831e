use core::cmp::Ordering;

use super::{MAGNITUDE_MASK, SIGN_MASK, bfloat16};

impl bfloat16 {
    /// Equality assuming neither operand is NaN: identical bits, or both zeros of any sign.
    #[inline]
    #[must_use]
    pub const fn eq_non_nan(self, other: bfloat16) -> bool {
        self.0 == other.0 || (self.0 | other.0) & MAGNITUDE_MASK == 0
    }

    /// Strict less-than assuming neither operand is NaN.
    ///
    /// Compares sign bits first and then the remaining 15 bits as an unsigned magnitude, which
    /// orders non-negative values correctly because exponent sits above mantissa.
    #[inline]
    #[must_use]
    pub const fn lt_non_nan(self, other: bfloat16) -> bool {
        match (self.is_sign_negative(), other.is_sign_negative()) {
            (true, true) => self.magnitude() > other.magnitude(),
            // -0 < +0 does not hold, every other negative is below every non-negative.
            (true, false) => self.0 != SIGN_MASK || other.0 != 0,
            (false, true) => false,
            (false, false) => self.magnitude() < other.magnitude(),
        }
    }

    /// Less-than-or-equal assuming neither operand is NaN.
    ///
    /// Signed zeros are equal in both directions.
    #[inline]
    #[must_use]
    pub const fn le_non_nan(self, other: bfloat16) -> bool {
        match (self.is_sign_negative(), other.is_sign_negative()) {
            (true, true) => self.magnitude() >= other.magnitude(),
            (true, false) => true,
            (false, true) => self.0 == 0 && other.0 == SIGN_MASK,
            (false, false) => self.magnitude() <= other.magnitude(),
        }
    }
}

impl PartialEq for bfloat16 {
    fn eq(&self, other: &bfloat16) -> bool {
        !self.is_nan() && !other.is_nan() && self.eq_non_nan(*other)
    }
}

impl PartialOrd for bfloat16 {
    fn partial_cmp(&self, other: &bfloat16) -> Option<Ordering> {
        if self.is_nan() || other.is_nan() {
            None
        } else if self.lt_non_nan(*other) {
            Some(Ordering::Less)
        } else if other.lt_non_nan(*self) {
            Some(Ordering::Greater)
        } else {
            Some(Ordering::Equal)
        }
    }

    fn lt(&self, other: &bfloat16) -> bool {
        !self.is_nan() && !other.is_nan() && self.lt_non_nan(*other)
    }

    fn le(&self, other: &bfloat16) -> bool {
        !self.is_nan() && !other.is_nan() && self.le_non_nan(*other)
    }

    fn gt(&self, other: &bfloat16) -> bool {
        other.lt(self)
    }

    fn ge(&self, other: &bfloat16) -> bool {
        other.le(self)
    }
}
