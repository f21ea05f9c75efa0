use super::{BenchmarkHost, Measurement};
use std::time::Instant;

/// Hosted environments (Linux, macOS, Windows).
pub struct Platform;

impl BenchmarkHost for Platform {
    type TimePoint = Instant;

    fn now() -> Self::TimePoint {
        Instant::now()
    }

    fn measure(start: Self::TimePoint) -> Measurement {
        Measurement {
            micros: start.elapsed().as_secs_f64() * 1_000_000.0,
        }
    }

    fn print(s: &str) {
        println!("{}", s);
    }

    fn platform_name() -> &'static str {
        #[cfg(target_arch = "aarch64")]
        return "Host (aarch64)";
        #[cfg(target_arch = "x86_64")]
        return "Host (x86_64)";
        #[cfg(not(any(target_arch = "aarch64", target_arch = "x86_64")))]
        return "Host (Generic)";
    }
}
