//! Error macros for graphwalk

/// Macro for returning a parse error at a given line
#[macro_export]
macro_rules! bail_parse {
    ($line:expr, $($arg:tt)*) => {
        return Err($crate::error::GraphwalkError::parse($line, format!($($arg)*)))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::GraphwalkError::UsageError($msg.to_string()))
    };
}
