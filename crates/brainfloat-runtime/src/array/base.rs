use super::{
    cast::HostElement,
    error::{ArrayError, check_lengths},
};
use crate::{config::GlobalConfig, kernel::create_kernel, signal::RuntimeSignal};
use alloc::vec::Vec;
use brainfloat::{NumericKernel, bfloat16, signal::FpExceptionSignal};
use core::cmp::Ordering;
use num_traits::ToPrimitive;

/// Element functions an array library needs to store bfloat16 values.
///
/// Every function that produces a bfloat16 from a wider value narrows with the rounding mode of
/// the wrapped kernel, and reports exceptions to its signal.
#[derive(new, Debug)]
pub struct ArrayFunctions<S: FpExceptionSignal = RuntimeSignal> {
    kernel: NumericKernel<S>,
}

impl Default for ArrayFunctions<RuntimeSignal> {
    fn default() -> Self {
        Self::from_config(&GlobalConfig::default())
    }
}

impl ArrayFunctions<RuntimeSignal> {
    /// Creates the functions with a kernel built from `config`.
    pub fn from_config(config: &GlobalConfig) -> Self {
        Self::new(create_kernel(config))
    }

    /// Creates the functions with a kernel built from the global configuration.
    pub fn from_global_config() -> Self {
        Self::from_config(&GlobalConfig::get())
    }
}

impl<S: FpExceptionSignal> ArrayFunctions<S> {
    /// The wrapped kernel.
    pub fn kernel(&self) -> &NumericKernel<S> {
        &self.kernel
    }

    /// Reads one element as a host double.
    pub fn get_item(&self, value: bfloat16) -> f64 {
        value.to_f64()
    }

    /// Converts a host value to the element stored in an array.
    ///
    /// A missing value, or one that can't be represented as a double, is stored as NaN.
    pub fn set_item<T: ToPrimitive>(&self, value: Option<T>) -> bfloat16 {
        match value.and_then(|value| value.to_f64()) {
            Some(value) => self.kernel.narrow_f64(value),
            None => bfloat16::NAN,
        }
    }

    /// Total order used for sorting: NaN sorts after every other value and equal to another NaN.
    pub fn compare(&self, a: bfloat16, b: bfloat16) -> Ordering {
        match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) if a.lt_non_nan(b) => Ordering::Less,
            (false, false) if b.lt_non_nan(a) => Ordering::Greater,
            (false, false) => Ordering::Equal,
        }
    }

    /// Index of the largest element, or of the first NaN.
    ///
    /// Returns `None` for an empty slice.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn arg_max(&self, values: &[bfloat16]) -> Option<usize> {
        let (&first, rest) = values.split_first()?;
        let mut max = first;
        let mut max_index = 0;

        if max.is_nan() {
            return Some(max_index);
        }

        for (index, &value) in rest.iter().enumerate() {
            // NaN fails every comparison, so the first NaN always becomes the candidate.
            if !(value <= max) {
                max = value;
                max_index = index + 1;

                if max.is_nan() {
                    break;
                }
            }
        }

        Some(max_index)
    }

    /// Dot product accumulated in f32 from left to right, then narrowed once.
    pub fn dot(&self, a: &[bfloat16], b: &[bfloat16]) -> Result<bfloat16, ArrayError> {
        check_lengths(a.len(), b.len())?;

        let sum = a
            .iter()
            .zip(b)
            .fold(0.0f32, |sum, (&a, &b)| sum + a.to_f32() * b.to_f32());

        Ok(self.kernel.narrow_f32(sum))
    }

    /// Extends the ramp defined by the first two elements over the rest of the buffer.
    ///
    /// Buffers with fewer than two elements are left untouched.
    pub fn fill(&self, buffer: &mut [bfloat16]) {
        let [start, next, ..] = *buffer else {
            return;
        };
        let start = start.to_f32();
        let delta = next.to_f32() - start;

        for (index, value) in buffer.iter_mut().enumerate().skip(2) {
            *value = self.kernel.narrow_f32(start + index as f32 * delta);
        }
    }

    /// Sets every element of the buffer to `value`.
    pub fn fill_with_scalar(&self, buffer: &mut [bfloat16], value: bfloat16) {
        buffer.fill(value);
    }

    /// Whether the element is truthy, NaN included.
    pub fn nonzero(&self, value: bfloat16) -> bool {
        value.is_nonzero()
    }

    /// Copies `src` into `dst`, swapping the byte order of every element when `swap` is set.
    pub fn copy_swap(
        &self,
        dst: &mut [bfloat16],
        src: &[bfloat16],
        swap: bool,
    ) -> Result<(), ArrayError> {
        check_lengths(dst.len(), src.len())?;

        if swap {
            for (dst, src) in dst.iter_mut().zip(src) {
                *dst = swap_bytes(*src);
            }
        } else {
            dst.copy_from_slice(src);
        }

        Ok(())
    }

    /// Swaps the byte order of every element in place.
    pub fn swap_in_place(&self, buffer: &mut [bfloat16]) {
        for value in buffer.iter_mut() {
            *value = swap_bytes(*value);
        }
    }

    /// Views native order bytes as elements.
    pub fn from_bytes<'a>(&self, bytes: &'a [u8]) -> Result<&'a [bfloat16], ArrayError> {
        Ok(bytemuck::try_cast_slice(bytes)?)
    }

    /// Views native order bytes as mutable elements.
    pub fn from_bytes_mut<'a>(
        &self,
        bytes: &'a mut [u8],
    ) -> Result<&'a mut [bfloat16], ArrayError> {
        Ok(bytemuck::try_cast_slice_mut(bytes)?)
    }

    /// Narrows host values into `dst`.
    pub fn cast_from<T: HostElement>(
        &self,
        src: &[T],
        dst: &mut [bfloat16],
    ) -> Result<(), ArrayError> {
        check_lengths(src.len(), dst.len())?;

        for (dst, src) in dst.iter_mut().zip(src) {
            *dst = src.narrow(&self.kernel);
        }

        Ok(())
    }

    /// Widens elements into `dst`.
    pub fn cast_to<T: HostElement>(
        &self,
        src: &[bfloat16],
        dst: &mut [T],
    ) -> Result<(), ArrayError> {
        check_lengths(src.len(), dst.len())?;

        for (dst, src) in dst.iter_mut().zip(src) {
            *dst = T::widen(*src);
        }

        Ok(())
    }

    /// Narrows host values into a new buffer.
    pub fn cast_vec_from<T: HostElement>(&self, src: &[T]) -> Vec<bfloat16> {
        src.iter().map(|value| value.narrow(&self.kernel)).collect()
    }

    /// Widens elements into a new buffer.
    pub fn cast_vec_to<T: HostElement>(&self, src: &[bfloat16]) -> Vec<T> {
        src.iter().map(|value| T::widen(*value)).collect()
    }
}

fn swap_bytes(value: bfloat16) -> bfloat16 {
    bfloat16::from_bits(value.to_bits().swap_bytes())
}
