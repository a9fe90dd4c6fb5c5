/// Conditional logging module for development builds
///
/// The `log!` macro provides informational logging that is compiled out
/// in production (release) builds by default. Row diagnostics and failures
/// use `leptos::logging::warn!` and `leptos::logging::error!` directly.
///
/// Output goes to the browser console on wasm and to stderr elsewhere, so
/// the core modules can log from native tests and benchmarks.
///
/// Logging is enabled when either:
/// - Building in debug mode (`cfg(debug_assertions)`)
/// - The `console_logging` feature is explicitly enabled
///
/// # Examples
///
/// ```rust
/// use rail_map::logging::log;
///
/// log!("Parsed {} nodes", 12);
/// ```
#[macro_export]
macro_rules! log {
    ($($arg:expr),+ $(,)?) => {
        #[cfg(any(debug_assertions, feature = "console_logging"))]
        {
            leptos::logging::log!($($arg),+);
        }
    };
}

pub use crate::log;
