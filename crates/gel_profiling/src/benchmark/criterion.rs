//! Benchmarking using `criterion`.

pub use criterion::*;

use crate::benchmark::Benchmarker;

/// Defines a `criterion` benchmark function with the given name that runs
/// the function of the same name in the given benchmark module.
#[macro_export]
macro_rules! define_criterion_target {
    ($group:ident, $name:ident) => {
        pub fn $name(c: &mut $crate::benchmark::criterion::Criterion) {
            $group::$name($crate::benchmark::criterion::CriterionBenchmarker::new(
                c,
                stringify!($name),
            ));
        }
    };
}

#[allow(missing_debug_implementations)]
pub struct CriterionBenchmarker<'a> {
    c: &'a mut Criterion,
    id: &'static str,
}

impl<'a> CriterionBenchmarker<'a> {
    pub fn new(c: &'a mut Criterion, id: &'static str) -> Self {
        Self { c, id }
    }
}

impl Benchmarker for CriterionBenchmarker<'_> {
    fn benchmark<T>(self, f: &mut impl FnMut() -> T) {
        self.c.bench_function(self.id, |b| b.iter(&mut *f));
    }
}

pub fn config() -> Criterion {
    Criterion::default()
}
