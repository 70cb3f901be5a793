//! Custom assertion macros and utilities
//!
//! Provides enhanced assertion macros for better test output and
//! more descriptive error messages.

use xftodo::shared::Todo;

/// Assert that a result is ok and return the value
///
/// This macro unwraps a Result, providing a better error message
/// if the result is an error.
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
    ($result:expr, $message:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $message, e),
        }
    };
}

/// Assert that a value is within a range
#[macro_export]
macro_rules! assert_in_range {
    ($value:expr, $min:expr, $max:expr) => {
        assert!(
            $value >= $min && $value <= $max,
            "Value {} is not in range [{}, {}]",
            $value,
            $min,
            $max
        );
    };
}

/// Assert the fields of a todo whose timer is not running
pub fn assert_idle(todo: &Todo, saved_time: u64) {
    assert!(!todo.timer_started, "timer should be stopped: {:?}", todo);
    assert_eq!(todo.timer_start_time, None, "start time should be cleared: {:?}", todo);
    assert_eq!(todo.saved_time, saved_time, "saved time of {:?}", todo);
}

/// Assert the fields of a todo whose timer started at `start_ms`
pub fn assert_running(todo: &Todo, start_ms: i64, saved_time: u64) {
    assert!(todo.timer_started, "timer should be running: {:?}", todo);
    assert_eq!(todo.timer_start_time, Some(start_ms), "start time of {:?}", todo);
    assert_eq!(todo.saved_time, saved_time, "saved time of {:?}", todo);
}
