//! # Bit Intrinsics Benchmark Suite
//!
//! Checks that the hardware and software backends of `wfa-commons` agree on a
//! seeded set of random words, times each primitive per backend, and prints
//! the telescopic capacity ladder. Exits non-zero on any disagreement.

mod benchmark;
mod platforms;
mod stats;

use anyhow::Result;
use clap::Parser;
use wfa_commons::{BitBackend, BitOps};

use crate::benchmark::{run_suite, SuiteConfig};
use crate::platforms::{BenchmarkHost, Platform};

#[derive(Parser)]
#[command(about = "Hardware vs software bit intrinsics: agreement and timing")]
struct Cli {
    /// Only time this backend (auto, hardware, software). Times both if omitted.
    #[arg(short, long)]
    backend: Option<BitBackend>,

    /// Number of random words per sweep (boundary words are added on top)
    #[arg(short, long, default_value_t = 65_536)]
    words: usize,

    /// Seed for the word generator
    #[arg(short, long, default_value_t = 0x5EED)]
    seed: u64,

    /// Timed sweeps per primitive
    #[arg(short, long, default_value_t = 1_000)]
    iterations: usize,

    /// First capacity of the printed growth ladder
    #[arg(long, default_value_t = 100)]
    growth_base: u64,

    /// Number of ladder entries to print
    #[arg(long, default_value_t = 12)]
    growth_steps: usize,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Cli::parse();

    let backends = match args.backend {
        Some(backend) => vec![backend],
        None => vec![BitBackend::Hardware, BitBackend::Software],
    };

    Platform::print("[Bit Intrinsics] Hardware vs Software");
    Platform::print(Platform::platform_name());
    Platform::print(&format!(
        "Detected: {} | Process default: {}",
        BitBackend::detect(),
        BitOps::get().backend()
    ));
    Platform::print(&format!(
        "Words: {} | Iterations: {}",
        args.words, args.iterations
    ));
    Platform::print(
        "----------------------------------------------------------------------------------",
    );

    run_suite(&SuiteConfig {
        backends,
        words: args.words,
        seed: args.seed,
        iterations: args.iterations,
        growth_base: args.growth_base,
        growth_steps: args.growth_steps,
    })
}
