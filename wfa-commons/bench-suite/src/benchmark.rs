use std::hint::black_box;

use anyhow::{bail, Result};
use rand_chacha::ChaCha8Rng;
use rand_core::{RngCore, SeedableRng};

use wfa_commons::numeric::NominalLadder;
use wfa_commons::{BitBackend, BitOps};

use crate::platforms::{BenchmarkHost, Platform};
use crate::stats::{calculate_percentiles, LatencyStats};

/// Words every agreement sweep checks on top of the random ones.
const BOUNDARY_WORDS: [u64; 6] = [0, 1, u64::MAX, u64::MAX / 2, 1 << 63, 1 << 31];

/// Maximum number of individual mismatches reported before summarising.
const MAX_REPORTED: usize = 8;

/// Settings for one suite run, filled from the command line.
#[derive(Clone, Debug)]
pub struct SuiteConfig {
    /// Backends to time. Agreement is always checked hardware vs software.
    pub backends: Vec<BitBackend>,
    pub words: usize,
    pub seed: u64,
    pub iterations: usize,
    pub growth_base: u64,
    pub growth_steps: usize,
}

/// One primitive timed over a slice of words.
#[derive(Clone, Copy)]
enum Primitive {
    Popcount32,
    Popcount64,
    Lzcnt32,
    Lzcnt64,
    Tzcnt32,
    Tzcnt64,
}

impl Primitive {
    const ALL: [Primitive; 6] = [
        Primitive::Popcount32,
        Primitive::Popcount64,
        Primitive::Lzcnt32,
        Primitive::Lzcnt64,
        Primitive::Tzcnt32,
        Primitive::Tzcnt64,
    ];

    fn name(self) -> &'static str {
        match self {
            Primitive::Popcount32 => "popcount_u32",
            Primitive::Popcount64 => "popcount_u64",
            Primitive::Lzcnt32 => "lzcnt_u32",
            Primitive::Lzcnt64 => "lzcnt_u64",
            Primitive::Tzcnt32 => "tzcnt_u32",
            Primitive::Tzcnt64 => "tzcnt_u64",
        }
    }

    /// Sum of the primitive over every word; zero words are skipped for
    /// the zero counts.
    fn sweep(self, ops: &BitOps, words: &[u64]) -> u64 {
        let mut acc = 0u64;
        for &w in words {
            let lo = w as u32;
            let r = match self {
                Primitive::Popcount32 => ops.popcount_u32(lo),
                Primitive::Popcount64 => ops.popcount_u64(w),
                Primitive::Lzcnt32 if lo != 0 => ops.lzcnt_u32(lo),
                Primitive::Lzcnt64 if w != 0 => ops.lzcnt_u64(w),
                Primitive::Tzcnt32 if lo != 0 => ops.tzcnt_u32(lo),
                Primitive::Tzcnt64 if w != 0 => ops.tzcnt_u64(w),
                _ => 0,
            };
            acc += u64::from(r);
        }
        acc
    }
}

/// Generates `count` random words followed by the boundary words.
pub fn generate_words(count: usize, seed: u64) -> Vec<u64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut words: Vec<u64> = (0..count).map(|_| rng.next_u64()).collect();
    words.extend_from_slice(&BOUNDARY_WORDS);
    words
}

/// Compares every primitive of `a` and `b` on every word.
///
/// Returns the number of disagreeing (primitive, word) pairs.
pub fn count_disagreements(a: &BitOps, b: &BitOps, words: &[u64]) -> usize {
    let mut mismatches = 0;
    let mut report = |name: &str, x: u64, left: u32, right: u32| {
        if mismatches < MAX_REPORTED {
            log::error!(
                "{} disagrees on {:#018x}: {} = {}, {} = {}",
                name,
                x,
                a.backend(),
                left,
                b.backend(),
                right
            );
        }
        mismatches += 1;
    };

    for &x in words {
        let lo = x as u32;
        let (l, r) = (a.popcount_u64(x), b.popcount_u64(x));
        if l != r {
            report("popcount_u64", x, l, r);
        }
        let (l, r) = (a.popcount_u32(lo), b.popcount_u32(lo));
        if l != r {
            report("popcount_u32", x, l, r);
        }
        if x != 0 {
            let (l, r) = (a.lzcnt_u64(x), b.lzcnt_u64(x));
            if l != r {
                report("lzcnt_u64", x, l, r);
            }
            let (l, r) = (a.tzcnt_u64(x), b.tzcnt_u64(x));
            if l != r {
                report("tzcnt_u64", x, l, r);
            }
        }
        if lo != 0 {
            let (l, r) = (a.lzcnt_u32(lo), b.lzcnt_u32(lo));
            if l != r {
                report("lzcnt_u32", x, l, r);
            }
            let (l, r) = (a.tzcnt_u32(lo), b.tzcnt_u32(lo));
            if l != r {
                report("tzcnt_u32", x, l, r);
            }
        }
    }
    mismatches
}

/// Times `primitive` over `words`, once per iteration, after one warmup sweep.
fn time_primitive(ops: &BitOps, primitive: Primitive, words: &[u64], iterations: usize) -> LatencyStats {
    black_box(primitive.sweep(ops, words));

    let mut measurements = Vec::with_capacity(iterations);
    for _ in 0..iterations {
        let t0 = Platform::now();
        black_box(primitive.sweep(black_box(ops), black_box(words)));
        measurements.push(Platform::measure(t0));
    }
    calculate_percentiles(&measurements)
}

fn timing_header() -> String {
    format!(
        "{:<10} | {:<13} | {:>9} | {:>9} | {:>9} | {:>9} | {:>9} | {:>9} | {:>9}",
        "Backend", "Primitive", "Avg(us)", "Min", "p50", "p95", "p99", "Max", "ns/word"
    )
}

fn timing_row(backend: BitBackend, primitive: Primitive, stats: &LatencyStats, words: usize) -> String {
    let ns_per_word = stats.avg_us * 1_000.0 / words.max(1) as f64;
    format!(
        "{:<10} | {:<13} | {:>9.2} | {:>9.2} | {:>9.2} | {:>9.2} | {:>9.2} | {:>9.2} | {:>9.3}",
        backend.name(),
        primitive.name(),
        stats.avg_us,
        stats.min_us,
        stats.p50_us,
        stats.p95_us,
        stats.p99_us,
        stats.max_us,
        ns_per_word
    )
}

fn print_timing_table(config: &SuiteConfig, words: &[u64]) {
    let header = timing_header();
    Platform::print(&header);
    Platform::print(&"-".repeat(header.len()));

    for &backend in &config.backends {
        let ops = BitOps::new(backend);
        for primitive in Primitive::ALL {
            let stats = time_primitive(&ops, primitive, words, config.iterations);
            Platform::print(&timing_row(backend, primitive, &stats, words.len()));
        }
    }
}

fn print_growth_ladder(base: u64, steps: usize) {
    let ladder: Vec<String> = NominalLadder::telescopic(base)
        .take(steps)
        .map(|v| v.to_string())
        .collect();
    Platform::print(&format!("Telescopic growth from {}: {}", base, ladder.join(" -> ")));
}

/// Runs the agreement check, the timing table and the growth ladder.
///
/// Fails if any hardware/software pair disagrees.
pub fn run_suite(config: &SuiteConfig) -> Result<()> {
    let words = generate_words(config.words, config.seed);
    log::info!(
        "generated {} words (seed {:#x}), {} iterations per primitive",
        words.len(),
        config.seed,
        config.iterations
    );

    let hardware = BitOps::new(BitBackend::Hardware);
    let software = BitOps::new(BitBackend::Software);
    let mismatches = count_disagreements(&hardware, &software, &words);
    if mismatches == 0 {
        Platform::print(&format!(
            "Agreement: hardware and software match on {} words",
            words.len()
        ));
    }

    Platform::print("");
    print_timing_table(config, &words);
    Platform::print("");
    print_growth_ladder(config.growth_base, config.growth_steps);

    if mismatches > 0 {
        bail!(
            "{} hardware/software disagreements over {} words",
            mismatches,
            words.len()
        );
    }
    Ok(())
}
