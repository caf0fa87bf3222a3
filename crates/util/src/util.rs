//! Shared utilities for paneterm.

/// Panic in debug builds, log error with backtrace in release.
///
/// Use for broken layout invariants: a test run should stop on them,
/// a user session should keep going with the last good layout.
#[macro_export]
macro_rules! debug_panic {
    ( $($fmt_arg:tt)* ) => {
        if cfg!(debug_assertions) {
            panic!( $($fmt_arg)* );
        } else {
            let backtrace = std::backtrace::Backtrace::capture();
            tracing::error!("{}\n{:?}", format_args!($($fmt_arg)*), backtrace);
        }
    };
}

/// Compare two floats with an absolute tolerance.
#[inline]
pub fn approx_eq(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() <= epsilon
}

/// Sum a sequence of `f32` values in `f64` to keep rounding error out of
/// share bookkeeping.
pub fn precise_sum(values: impl IntoIterator<Item = f32>) -> f32 {
    values.into_iter().map(f64::from).sum::<f64>() as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approx_eq_respects_epsilon() {
        assert!(approx_eq(100.0, 100.005, 0.01));
        assert!(!approx_eq(100.0, 100.02, 0.01));
    }

    #[test]
    fn precise_sum_of_thirds_is_close_to_whole() {
        let third = 100.0_f32 / 3.0;
        assert!(approx_eq(precise_sum([third, third, third]), 100.0, 1e-4));
    }

    #[test]
    fn precise_sum_of_nothing_is_zero() {
        assert_eq!(precise_sum(std::iter::empty()), 0.0);
    }
}
