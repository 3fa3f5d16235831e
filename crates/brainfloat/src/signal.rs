use core::hint::black_box;
use core::sync::atomic::{AtomicUsize, Ordering};

use derive_more::derive::Display;

/// Floating point exceptions the kernel may report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum FpException {
    /// A finite operand produced an infinite result.
    #[display("overflow")]
    Overflow,
    /// A nonzero operand produced a subnormal or zero result.
    #[display("underflow")]
    Underflow,
    /// An operand was outside the domain of the operation.
    #[display("invalid")]
    Invalid,
}

/// Receives floating point exception events.
///
/// Hooks are purely observational: they never change the value an operation returns, and the
/// kernel never branches on them.
pub trait FpExceptionSignal {
    /// An operation overflowed to infinity.
    fn overflow(&self);
    /// An operation underflowed to a subnormal or zero.
    fn underflow(&self);
    /// An operation received an operand outside of its domain.
    fn invalid(&self);

    /// Dispatches an exception to the matching hook.
    fn raise(&self, exception: FpException) {
        match exception {
            FpException::Overflow => self.overflow(),
            FpException::Underflow => self.underflow(),
            FpException::Invalid => self.invalid(),
        }
    }
}

impl<S: FpExceptionSignal + ?Sized> FpExceptionSignal for &S {
    fn overflow(&self) {
        (**self).overflow()
    }

    fn underflow(&self) {
        (**self).underflow()
    }

    fn invalid(&self) {
        (**self).invalid()
    }
}

/// Raises the matching IEEE-754 flag in the floating point unit.
///
/// Each hook performs arithmetic on host doubles that is guaranteed to set the flag. The operands
/// go through [`black_box`] so the computation is not folded away at compile time.
#[derive(Default, Debug, Clone, Copy)]
pub struct FpuSignal;

impl FpExceptionSignal for FpuSignal {
    fn overflow(&self) {
        black_box(black_box(1e300f64) * 1e300);
    }

    fn underflow(&self) {
        black_box(black_box(1e-300f64) * 1e-300);
    }

    fn invalid(&self) {
        let infinity = black_box(f64::INFINITY);
        black_box(infinity - f64::INFINITY);
    }
}

/// Ignores every event.
#[derive(Default, Debug, Clone, Copy)]
pub struct SilentSignal;

impl FpExceptionSignal for SilentSignal {
    fn overflow(&self) {}

    fn underflow(&self) {}

    fn invalid(&self) {}
}

/// Counts events per exception kind.
///
/// Counters are relaxed atomics, so a shared instance may be used from several threads.
#[derive(Default, Debug)]
pub struct CountingSignal {
    overflow: AtomicUsize,
    underflow: AtomicUsize,
    invalid: AtomicUsize,
}

/// Point in time copy of the counters of a [`CountingSignal`].
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignalCounts {
    /// Number of overflow events.
    pub overflow: usize,
    /// Number of underflow events.
    pub underflow: usize,
    /// Number of invalid events.
    pub invalid: usize,
}

impl SignalCounts {
    /// Sum of all counters.
    pub fn total(&self) -> usize {
        self.overflow + self.underflow + self.invalid
    }

    /// Counter for a single exception kind.
    pub fn get(&self, exception: FpException) -> usize {
        match exception {
            FpException::Overflow => self.overflow,
            FpException::Underflow => self.underflow,
            FpException::Invalid => self.invalid,
        }
    }
}

impl CountingSignal {
    /// Reads the current counters.
    pub fn snapshot(&self) -> SignalCounts {
        SignalCounts {
            overflow: self.overflow.load(Ordering::Relaxed),
            underflow: self.underflow.load(Ordering::Relaxed),
            invalid: self.invalid.load(Ordering::Relaxed),
        }
    }

    /// Increments the counter of `exception` and returns its new value.
    pub fn record(&self, exception: FpException) -> usize {
        let counter = match exception {
            FpException::Overflow => &self.overflow,
            FpException::Underflow => &self.underflow,
            FpException::Invalid => &self.invalid,
        };

        counter.fetch_add(1, Ordering::Relaxed) + 1
    }
}

impl FpExceptionSignal for CountingSignal {
    fn overflow(&self) {
        self.record(FpException::Overflow);
    }

    fn underflow(&self) {
        self.record(FpException::Underflow);
    }

    fn invalid(&self) {
        self.record(FpException::Invalid);
    }
}
