// Wrappers over the log crate macros so that time spent formatting and
// writing a record shows up in profiler sessions.

#[macro_export]
macro_rules! profiled_log_scope {
    ($level:ident, $($args:tt)*) => {
        {
            profiler::scope!(concat!("log::", stringify!($level), "!(", stringify!($($args)*), ")"));
            ::log::$level!($($args)*);
        }
    };
}

#[macro_export(local_inner_macros)]
macro_rules! debug {
    ($($args:tt)*) => { profiled_log_scope!(debug, $($args)*) };
}

#[macro_export(local_inner_macros)]
macro_rules! info {
    ($($args:tt)*) => { profiled_log_scope!(info, $($args)*) };
}

#[macro_export(local_inner_macros)]
macro_rules! warn {
    ($($args:tt)*) => { profiled_log_scope!(warn, $($args)*) };
}

#[macro_export(local_inner_macros)]
macro_rules! error {
    ($($args:tt)*) => { profiled_log_scope!(error, $($args)*) };
}
