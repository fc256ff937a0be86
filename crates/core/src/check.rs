//! Check macros for scenario bodies
//!
//! Scenario bodies return [`CheckResult`]; a failed check returns early with a
//! `CheckError` instead of panicking, so the runner can report it and move on.

use std::fmt::Debug;

use crate::error::{CheckError, CheckResult, SequenceError};

/// Return `CheckError::Assertion` from the enclosing function unless `cond` holds
#[macro_export]
macro_rules! check {
    ($cond:expr $(,)?) => {
        if !$cond {
            return Err($crate::CheckError::Assertion(
                stringify!($cond).to_string(),
            ));
        }
    };
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            return Err($crate::CheckError::Assertion(format!($($arg)+)));
        }
    };
}

/// Return `CheckError::Assertion` from the enclosing function unless `left == right`
#[macro_export]
macro_rules! check_eq {
    ($left:expr, $right:expr $(,)?) => {
        match (&$left, &$right) {
            (left, right) => {
                if *left != *right {
                    return Err($crate::CheckError::Assertion(format!(
                        "{} == {} ({:?} != {:?})",
                        stringify!($left),
                        stringify!($right),
                        left,
                        right
                    )));
                }
            }
        }
    };
}

/// Require `result` to be a failure accepted by `accept`
///
/// Returns the error so the caller can inspect its fields.
pub fn expect_error<T: Debug>(
    result: Result<T, SequenceError>,
    expected: &'static str,
    accept: impl FnOnce(&SequenceError) -> bool,
) -> CheckResult<SequenceError> {
    match result {
        Ok(_) => Err(CheckError::MissingError { expected }),
        Err(actual) if accept(&actual) => Ok(actual),
        Err(actual) => Err(CheckError::WrongError { expected, actual }),
    }
}
