///! Named sample counters with a sliding statistics window.
///!
///! Every operation goes through a macro so that builds without the
///! `enabled` feature compile the calls away entirely. The cfg has to sit
///! on the macro definitions, not inside their bodies, because the bodies
///! expand in the consuming crate where this feature does not exist.

#[cfg(feature = "enabled")]
mod counters;

#[cfg(feature = "enabled")]
pub use counters::{Counters, CounterRecord};

#[cfg(feature = "enabled")]
mod macros {
    /// Sets up the global counter table. Call once before the first `register!`.
    #[macro_export]
    macro_rules! init {
        () => { $crate::Counters::init() };
    }

    /// Drops the global counter table.
    #[macro_export]
    macro_rules! deinit {
        () => { $crate::Counters::deinit() };
    }

    /// Creates a named counter. Registering the same name twice is a no-op.
    #[macro_export]
    macro_rules! register {
        ($name:expr) => { $crate::Counters::register($name) };
    }

    /// Records one sample on the named counter.
    #[macro_export]
    macro_rules! sample {
        ($name:expr, $value:expr) => { $crate::Counters::sample($name, $value) };
    }

    /// Runs a closure over the whole counter table, for display code.
    #[macro_export]
    macro_rules! with_counters {
        ($consumer:expr) => { $crate::Counters::with_counters($consumer) };
    }

    /// Drops all samples of the named counter, keeps the registration.
    #[macro_export]
    macro_rules! clear {
        ($name:expr) => { $crate::Counters::clear($name) };
    }

    /// Drops the samples of every registered counter.
    #[macro_export]
    macro_rules! clear_all {
        () => { $crate::Counters::clear_all() };
    }
}

#[cfg(not(feature = "enabled"))]
mod macros {
    #[macro_export]
    macro_rules! init {
        () => {};
    }

    #[macro_export]
    macro_rules! deinit {
        () => {};
    }

    #[macro_export]
    macro_rules! register {
        ($name:expr) => {};
    }

    #[macro_export]
    macro_rules! sample {
        ($name:expr, $value:expr) => {};
    }

    #[macro_export]
    macro_rules! with_counters {
        ($consumer:expr) => {};
    }

    #[macro_export]
    macro_rules! clear {
        ($name:expr) => {};
    }

    #[macro_export]
    macro_rules! clear_all {
        () => {};
    }
}
