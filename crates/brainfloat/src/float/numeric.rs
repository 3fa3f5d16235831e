use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{NumCast, One, ToPrimitive, Zero};

use super::{SIGN_MASK, bfloat16};

impl Neg for bfloat16 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        bfloat16(self.0 ^ SIGN_MASK)
    }
}

impl Mul for bfloat16 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::from_f32(self.to_f32() * rhs.to_f32())
    }
}

impl MulAssign for bfloat16 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Div for bfloat16 {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self::from_f32(self.to_f32() / rhs.to_f32())
    }
}

impl DivAssign for bfloat16 {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl Add for bfloat16 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::from_f32(self.to_f32() + rhs.to_f32())
    }
}

impl AddAssign for bfloat16 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for bfloat16 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_f32(self.to_f32() - rhs.to_f32())
    }
}

impl SubAssign for bfloat16 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl ToPrimitive for bfloat16 {
    fn to_i64(&self) -> Option<i64> {
        bfloat16::to_f32(*self).to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        bfloat16::to_f32(*self).to_u64()
    }

    fn to_f32(&self) -> Option<f32> {
        Some(bfloat16::to_f32(*self))
    }

    fn to_f64(&self) -> Option<f64> {
        Some(bfloat16::to_f64(*self))
    }
}

impl NumCast for bfloat16 {
    fn from<T: num_traits::ToPrimitive>(n: T) -> Option<Self> {
        Some(Self::from_f32(n.to_f32()?))
    }
}

impl Zero for bfloat16 {
    fn zero() -> Self {
        bfloat16::ZERO
    }

    fn is_zero(&self) -> bool {
        !self.is_nonzero()
    }
}

impl One for bfloat16 {
    fn one() -> Self {
        bfloat16::ONE
    }
}
