///! Scope timing instrumentation.
///!
///! Two independent backends hang off the same macros: `json_trace` writes
///! a chrome://tracing compatible event file, `stats` keeps in-memory
///! per-scope statistics for live display. With neither feature enabled
///! every macro expands to nothing.

pub use instrumentation_macro::*;

#[cfg(feature = "stats")]
pub use runtime_stats::*;

#[cfg(feature = "json_trace")]
pub use json_trace::*;

/// Suffixes a scope name with the file and line of the macro use.
#[macro_export]
macro_rules! add_file_line {
    ($name:expr) => { concat!($name, " (", file!(), ":", line!() ,")") }
}

/// Opens the tracing session. The returned guards live to the end of the
/// enclosing scope, ending the session when dropped.
#[macro_export]
macro_rules! session_begin {
    ($name:expr) => {
        #[cfg(feature = "json_trace")]
        let _session_guard = $crate::SessionGuard::new($name);
        #[cfg(feature = "stats")]
        $crate::init_statistics();
    };
}

/// Measures the rest of the enclosing scope under the given name.
/// The `pinned` form additionally pins the scope in the statistics view.
#[macro_export]
macro_rules! scope {
    ($name:expr) => {
        #[cfg(feature = "json_trace")]
        let _trace_guard = $crate::EventGuard::new::<()>($crate::add_file_line!($name), $crate::EventCategory::Performance, None);
        #[cfg(feature = "stats")]
        let _stats_guard = $crate::TimedScope::new($crate::add_file_line!($name), false);
    };
    ($name:expr, pinned) => {
        #[cfg(feature = "json_trace")]
        let _trace_guard = $crate::EventGuard::new::<()>($crate::add_file_line!($name), $crate::EventCategory::Performance, None);
        #[cfg(feature = "stats")]
        let _stats_guard = $crate::TimedScope::new($crate::add_file_line!($name), true);
    };
}

/// Names the current thread in the trace output.
#[macro_export]
macro_rules! register_thread {
    ($name:expr) => {
        #[cfg(feature = "json_trace")]
        let _thread_guard = $crate::ThreadGuard::new($name);
    };
}

/// Measures a single expression, named by its own source text.
#[macro_export]
macro_rules! call {
    ($($body:tt)*) => {
        {
            #[cfg(feature = "json_trace")]
            $crate::scope!(stringify!($($body)*));
            $($body)*
        }
    };
}
