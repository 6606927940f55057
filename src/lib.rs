pub mod catalog;
pub mod error;
pub mod executor;
pub mod planner;
pub mod store;
pub mod types;

/// format an error message with the position it was raised from
#[macro_export]
macro_rules! fmt_err {
    ($($arg:tt)*) => {
        format!("{}:{} {}", file!(), line!(), format!($($arg)*))
    };
}
