//! Small crate-wide convenience macros.

/// Debug-level console line.  Compiled out of release builds so hot paths
/// (rendering, attachment updates) stay quiet in production.
///
/// ```rust,ignore
/// debug_log!("Fetched {} agents", agents.len());
/// ```
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        if cfg!(debug_assertions) {
            $crate::logging::emit($crate::logging::Level::Debug, &format!($($arg)*));
        }
    };
}

/// Warning-level console line (`console.warn`).
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        $crate::logging::emit($crate::logging::Level::Warn, &format!($($arg)*))
    };
}

/// Error-level console line (`console.error`).
#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => {
        $crate::logging::emit($crate::logging::Level::Error, &format!($($arg)*))
    };
}

/// Quick helper to embed CSS custom-properties (`var(--token)`) without
/// sprinkling `format!("var(--{})", token)` everywhere.
///
/// ```rust,ignore
/// let color = css_var!("color-primary");          // "var(--color-primary)"
/// ```
#[macro_export]
macro_rules! css_var {
    ($name:expr) => {
        format!("var(--{})", $name)
    };
}
