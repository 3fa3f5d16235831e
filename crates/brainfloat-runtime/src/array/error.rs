/// Errors raised by the array element functions.
#[derive(thiserror::Error, Clone, PartialEq, Eq)]
pub enum ArrayError {
    /// Two buffers that must have the same number of elements don't.
    #[error("Buffers have different lengths: expected {expected} elements, got {actual}")]
    LengthMismatch {
        /// Length of the first buffer.
        expected: usize,
        /// Length of the second buffer.
        actual: usize,
    },

    /// Raw bytes can't be viewed as bfloat16 elements.
    #[error("Can't view the bytes as bfloat16 elements\nCaused by:\n  {reason}")]
    Cast {
        /// Why the view was refused.
        reason: bytemuck::PodCastError,
    },
}

impl core::fmt::Debug for ArrayError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!("{self}"))
    }
}

impl From<bytemuck::PodCastError> for ArrayError {
    fn from(reason: bytemuck::PodCastError) -> Self {
        Self::Cast { reason }
    }
}

/// Returns an error unless both lengths are equal.
pub(crate) fn check_lengths(expected: usize, actual: usize) -> Result<(), ArrayError> {
    if expected != actual {
        return Err(ArrayError::LengthMismatch { expected, actual });
    }

    Ok(())
}
