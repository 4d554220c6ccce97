//! Logging shim.
//!
//! With the `tracing` feature this re-exports the `tracing` macros. Without
//! it, the same names expand to nothing so call sites never need `cfg`
//! guards and the core stays dependency-free at runtime.

#[cfg(feature = "tracing")]
pub use tracing::{debug, debug_span, error, info, trace, trace_span, warn};

#[cfg(not(feature = "tracing"))]
mod noop {
    #[doc(hidden)]
    #[macro_export]
    macro_rules! __heapmap_noop_event {
        ($($arg:tt)*) => {{}};
    }

    #[doc(hidden)]
    #[macro_export]
    macro_rules! __heapmap_noop_span {
        ($($arg:tt)*) => {
            $crate::logging::NoopSpan
        };
    }
}

#[cfg(not(feature = "tracing"))]
pub use crate::{
    __heapmap_noop_event as debug, __heapmap_noop_event as error, __heapmap_noop_event as info,
    __heapmap_noop_event as trace, __heapmap_noop_event as warn, __heapmap_noop_span as debug_span,
    __heapmap_noop_span as trace_span,
};

/// Stand-in span used when tracing is compiled out.
#[cfg(not(feature = "tracing"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    #[inline]
    #[must_use]
    pub fn entered(self) -> Self {
        self
    }
}
