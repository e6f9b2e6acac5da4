// src/measure/timer.rs

//! Implements a [`Timer`], an elapsed wall-clock time measurement.

use std::time::{Duration, Instant};

/// Units that a [`Timer`] elapsed duration may be converted to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TimeUnit {
    Nanos,
    Micros,
    Millis,
    Secs,
    Mins,
    Hours,
}

impl TimeUnit {
    /// Count of this unit within one second.
    pub fn per_sec(&self) -> f64 {
        match self {
            TimeUnit::Nanos => 1_000_000_000.0,
            TimeUnit::Micros => 1_000_000.0,
            TimeUnit::Millis => 1_000.0,
            TimeUnit::Secs => 1.0,
            TimeUnit::Mins => 1.0 / 60.0,
            TimeUnit::Hours => 1.0 / 3_600.0,
        }
    }

    /// Convert `duration` to a count of this unit.
    pub fn convert(&self, duration: Duration) -> f64 {
        duration.as_secs_f64() * self.per_sec()
    }
}

/// Elapsed wall-clock time since creation.
///
/// A `Timer` is started when it is created and cannot be reset; create a new
/// `Timer` to measure again. It may be read any number of times.
#[derive(Clone, Copy, Debug)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    pub fn start() -> Timer {
        Timer {
            start: Instant::now(),
        }
    }

    /// Time elapsed since this `Timer` was created.
    #[inline(always)]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Time elapsed converted to `unit`.
    pub fn elapsed_as(&self, unit: TimeUnit) -> f64 {
        unit.convert(self.elapsed())
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_as(TimeUnit::Secs)
    }

    pub fn elapsed_micros(&self) -> f64 {
        self.elapsed_as(TimeUnit::Micros)
    }

    /// Call `f` and measure it. The duration is captured however `f` returns,
    /// so an `f` that returns an `Err` is still measured.
    pub fn measure<T, F>(f: F) -> (T, Duration)
    where
        F: FnOnce() -> T,
    {
        let timer = Timer::start();
        let ret = f();
        let elapsed = timer.elapsed();

        (ret, elapsed)
    }
}

impl Default for Timer {
    fn default() -> Self {
        Timer::start()
    }
}
