//! Logging facilities for Vesper core.
//!
//! Vesper uses the `tracing` crate for instrumentation. The library never
//! installs a subscriber; applications that want to see events install one
//! themselves:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("vesper_core::text=trace")
//!         .init();
//! }
//! ```
//!
//! Value types only log at decision points (a format result spilling to the
//! heap, a tokenizer cap being hit, a rejected calendar edit). Hot paths such
//! as arithmetic stay silent.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "vesper_core";
    /// Text buffer and tokenizer target.
    pub const TEXT: &str = "vesper_core::text";
    /// Time family target.
    pub const TIME: &str = "vesper_core::time";
    /// Clock reads through a [`TimeSource`](crate::time::TimeSource).
    pub const CLOCK: &str = "vesper_core::time::clock";
}

/// Macros for common tracing patterns.
///
/// These are thin wrappers around the `tracing` macros. Without a `target:`
/// they log under [`targets::CORE`]; pass one of the [`targets`] constants to
/// log under a subsystem.
#[macro_export]
macro_rules! vesper_trace {
    (target: $target:expr, $($arg:tt)+) => {
        $crate::__tracing::trace!(target: $target, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__tracing::trace!(target: $crate::logging::targets::CORE, $($arg)+)
    };
}

#[macro_export]
macro_rules! vesper_debug {
    (target: $target:expr, $($arg:tt)+) => {
        $crate::__tracing::debug!(target: $target, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__tracing::debug!(target: $crate::logging::targets::CORE, $($arg)+)
    };
}

#[macro_export]
macro_rules! vesper_warn {
    (target: $target:expr, $($arg:tt)+) => {
        $crate::__tracing::warn!(target: $target, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__tracing::warn!(target: $crate::logging::targets::CORE, $($arg)+)
    };
}
