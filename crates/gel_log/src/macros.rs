//! Logging macros.

/// Evaluates the expression and returns a tuple of its value and the wall
/// time it took in milliseconds.
#[macro_export]
macro_rules! timed {
    ($expression:expr) => {{
        let _start_time = ::std::time::Instant::now();
        let _result = $expression;
        (_result, _start_time.elapsed().as_secs_f64() * 1e3)
    }};
}

/// Evaluates the expression and logs how long it took at the info level.
#[macro_export]
macro_rules! with_timing_info_logging {
    ($message:expr $(,$arg:expr)*; $expression:expr) => {{
        let (_result, _milliseconds) = $crate::timed!($expression);
        $crate::info!(concat!($message, " took {:.2} ms")$(,$arg)*, _milliseconds);
        _result
    }};
}

/// Evaluates the expression between a pair of trace level messages, the
/// second one carrying the elapsed time.
#[macro_export]
macro_rules! with_trace_logging {
    ($message:expr $(,$arg:expr)*; $expression:expr) => {{
        $crate::trace!(concat!("Begin: ", $message)$(,$arg)*);
        let (_result, _milliseconds) = $crate::timed!($expression);
        $crate::trace!(concat!("({:.2} ms) Done: ", $message), _milliseconds $(,$arg)*);
        _result
    }};
}
