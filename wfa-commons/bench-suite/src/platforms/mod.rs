/// A measurement result from a benchmark.
#[derive(Clone, Copy, Debug)]
pub struct Measurement {
    /// Elapsed time in microseconds.
    pub micros: f64,
}

/// Abstracts the host's clock and output so the suite body stays
/// platform-neutral.
pub trait BenchmarkHost {
    /// The type representing a point in time.
    type TimePoint: Copy;

    /// Returns the current time point.
    fn now() -> Self::TimePoint;

    /// Calculates the duration between `start` and now.
    fn measure(start: Self::TimePoint) -> Measurement;

    /// Prints a result line.
    fn print(s: &str);

    /// Returns a human-readable name of the platform.
    fn platform_name() -> &'static str;
}

mod native;
pub use native::Platform;
