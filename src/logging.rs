// src/logging.rs
//! Crate logging macros. Everything goes through the `log` facade; the binary
//! decides where it ends up (the CLI installs `colog`).

/// Internal logging function
pub fn write_log(level: ::log::Level, msg: &str) {
    ::log::log!(target: "metallum_scrape", level, "{msg}");
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::logging::write_log(::log::Level::Info, &format!($($arg)*))
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::logging::write_log(::log::Level::Debug, &format!($($arg)*))
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        $crate::logging::write_log(::log::Level::Warn, &format!($($arg)*))
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::logging::write_log(::log::Level::Error, &format!($($arg)*))
    };
}
