use crate::platforms::Measurement;

/// Latency summary over one backend's timed sweeps, in microseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatencyStats {
    pub avg_us: f64,
    pub min_us: f64,
    pub max_us: f64,
    pub p50_us: f64,
    pub p95_us: f64,
    pub p99_us: f64,
}

pub fn calculate_percentiles(measurements: &[Measurement]) -> LatencyStats {
    if measurements.is_empty() {
        return LatencyStats {
            avg_us: 0.0,
            min_us: 0.0,
            max_us: 0.0,
            p50_us: 0.0,
            p95_us: 0.0,
            p99_us: 0.0,
        };
    }

    let mut sorted: Vec<f64> = measurements.iter().map(|m| m.micros).collect();
    sorted.sort_by(f64::total_cmp);

    let n = sorted.len();
    let sum: f64 = sorted.iter().sum();

    LatencyStats {
        avg_us: sum / n as f64,
        min_us: sorted[0],
        max_us: sorted[n - 1],
        p50_us: percentile(&sorted, 50.0),
        p95_us: percentile(&sorted, 95.0),
        p99_us: percentile(&sorted, 99.0),
    }
}

/// Nearest-rank percentile of an ascending slice.
fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let idx = ((p / 100.0) * sorted.len() as f64) as usize;
    sorted[idx.min(sorted.len() - 1)]
}
