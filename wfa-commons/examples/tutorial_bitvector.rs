//! # Tutorial: Scanning Bitvectors and Growing Buffers
//!
//! This example walks through the two jobs `wfa-commons` does inside an
//! alignment kernel: scanning match bitvectors with popcount and zero counts,
//! and growing a wavefront buffer through nominal sizes.
//!
//! ## What You'll Learn
//!
//! 1. **Backends**: how the hardware and software paths are chosen
//! 2. **Bit scans**: walking the set bits of a word with `tzcnt`
//! 3. **Nominal growth**: why buffers grow 100, 150, 230, ... instead of 100, 150, 225
//!
//! ## Running This Example
//!
//! ```bash
//! cargo run --example tutorial_bitvector
//! WFA_BIT_BACKEND=software cargo run --example tutorial_bitvector
//! ```

use wfa_commons::numeric::{grow_nominal_u32, NominalLadder};
use wfa_commons::{popcount_u64, tzcnt_u64, BitBackend, BitOps, UniformSampler};

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Seed for the random match bitvector
const SEED: u64 = 2024;
/// Initial wavefront buffer capacity
const INITIAL_CAPACITY: u32 = 100;
/// Diagonals the wavefront must reach
const TARGET_DIAGONALS: u32 = 5_000;

fn main() {
    // =========================================================================
    // STEP 1: Backend selection
    // =========================================================================
    println!("Detected backend:        {}", BitBackend::detect());
    println!("Compiled free functions: {}", BitBackend::COMPILED);
    match BitOps::from_env() {
        Ok(ops) => println!("{} resolves to:    {}", BitBackend::ENV_VAR, ops.backend()),
        Err(e) => println!("{} is invalid: {}", BitBackend::ENV_VAR, e),
    }
    let ops = BitOps::get();

    // =========================================================================
    // STEP 2: A match bitvector
    // =========================================================================
    // Bit i set means characters at offset i match along the diagonal.
    let mut sampler = UniformSampler::from_seed(SEED);
    let matches = sampler.sample_inclusive(1, u64::MAX);
    println!("\nMatch word: {:064b}", matches);
    println!("Matches:    {}", ops.popcount_u64(matches));
    // tzcnt is undefined for zero, so an all-match word is handled apart.
    let run = if matches == u64::MAX { 64 } else { tzcnt_u64(!matches) };
    println!("Run length: {} (leading matches before first mismatch)", run);

    // =========================================================================
    // STEP 3: Walk the set bits
    // =========================================================================
    let mut remaining = matches;
    let mut positions = Vec::with_capacity(popcount_u64(matches) as usize);
    while remaining != 0 {
        positions.push(ops.tzcnt_u64(remaining));
        remaining &= remaining - 1;
    }
    println!("First positions: {:?}", &positions[..positions.len().min(8)]);

    // =========================================================================
    // STEP 4: Growing the wavefront buffer
    // =========================================================================
    let mut capacity = INITIAL_CAPACITY;
    let mut reallocations = 0;
    while capacity < TARGET_DIAGONALS {
        capacity = grow_nominal_u32(capacity);
        reallocations += 1;
    }
    println!(
        "\nBuffer reached {} after {} reallocations",
        capacity, reallocations
    );

    let ladder: Vec<u64> = NominalLadder::telescopic(u64::from(INITIAL_CAPACITY))
        .take(10)
        .collect();
    println!("Ladder: {:?}", ladder);
}
