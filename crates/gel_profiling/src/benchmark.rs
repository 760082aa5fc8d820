//! Running benchmark targets for a fixed wall time or through `criterion`.

#[cfg(feature = "criterion")]
pub mod criterion;

use std::{
    hint::black_box,
    time::{Duration, Instant},
};

/// Something that can repeatedly execute a closure and measure it.
pub trait Benchmarker {
    fn benchmark<T>(self, f: &mut impl FnMut() -> T);
}

/// Executes a closure in a loop until a given duration has passed, after an
/// optional delay measured from program start. Useful together with an
/// external profiler.
#[derive(Clone, Debug)]
pub struct LoopingBenchmarker {
    program_start: Instant,
    delay: Duration,
    duration: Duration,
}

impl LoopingBenchmarker {
    pub fn new(program_start: Instant, delay_seconds: f64, duration_seconds: f64) -> Self {
        Self {
            program_start,
            delay: Duration::from_secs_f64(delay_seconds),
            duration: Duration::from_secs_f64(duration_seconds),
        }
    }

    fn wait_for_delay(&self) {
        let remaining = self.delay.saturating_sub(self.program_start.elapsed());
        if !remaining.is_zero() {
            gel_log::debug!("Waiting {:.2} s before benchmarking", remaining.as_secs_f64());
            std::thread::sleep(remaining);
        }
    }
}

impl Benchmarker for LoopingBenchmarker {
    fn benchmark<T>(self, f: &mut impl FnMut() -> T) {
        self.wait_for_delay();

        let start = Instant::now();
        let mut iterations: u64 = 0;

        // The target always runs at least once
        loop {
            black_box(f());
            iterations += 1;

            if start.elapsed() > self.duration {
                break;
            }
        }

        let elapsed = start.elapsed();
        gel_log::info!(
            "Ran {} iterations in {:.3} s ({:.1} ns per iteration)",
            iterations,
            elapsed.as_secs_f64(),
            elapsed.as_secs_f64() * 1e9 / iterations as f64
        );
    }
}

/// Defines an enum with one variant per benchmark function, named by joining
/// the module and function names in camel case, and an `execute` method
/// dispatching to the function.
#[macro_export]
macro_rules! define_target_enum {
    (
        $name:ident,
        $benchmarks_mod:path,
        $(
            $module:ident => {
                $($func:ident),* $(,)?
            }
        ),* $(,)?
    ) => {
        ::pastey::paste! {
            #[allow(clippy::enum_variant_names)]
            #[cfg_attr(feature = "cli", derive(::clap::ValueEnum))]
            #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
            pub enum $name {
                $(
                    $( [<$module:camel $func:camel>] ),*
                ),*
            }

            impl $name {
                pub fn execute(&self, benchmarker: impl $crate::benchmark::Benchmarker) {
                    match self {
                        $(
                            $( Self::[<$module:camel $func:camel>] => $benchmarks_mod::$module::$func(benchmarker), )*
                        )*
                    }
                }
            }
        }
    };
}

/// Runs the given benchmark execution with a [`LoopingBenchmarker`].
pub fn benchmark(execute: impl FnOnce(LoopingBenchmarker), duration: f64, delay: f64) {
    execute(LoopingBenchmarker::new(Instant::now(), delay, duration));
}
