//! Kani formal verification proofs for the intrinsics module.
//!
//! These proofs show the software fallbacks agree with the native
//! instructions over the whole input space, not just sampled words.
//!
//! Run with: `cargo kani --package wfa-commons` (or `cargo run -p xtask -- kani`)

use super::popcount::{swar_popcount_u32, swar_popcount_u64};
use super::zeros::{
    bit_scan_forward_u64, bit_scan_reverse_u64, soft_lzcnt_u32, soft_lzcnt_u64, soft_tzcnt_u32,
    soft_tzcnt_u64,
};

// ============================================================================
// Proof 1: SWAR popcount is exact
// ============================================================================
// File: popcount.rs
// What: swar_popcount_* == count_ones for every word
// Why: the fallback must be indistinguishable from POPCNT

#[kani::proof]
fn verify_swar_popcount_u64_exact() {
    let x: u64 = kani::any();
    kani::assert(
        swar_popcount_u64(x) == x.count_ones(),
        "SWAR popcount must match count_ones",
    );
}

#[kani::proof]
fn verify_swar_popcount_u32_exact() {
    let x: u32 = kani::any();
    kani::assert(
        swar_popcount_u32(x) == x.count_ones(),
        "SWAR popcount must match count_ones",
    );
}

// ============================================================================
// Proof 2: software zero counts match the native ones on nonzero input
// ============================================================================
// File: zeros.rs
// What: soft_lzcnt/soft_tzcnt == leading_zeros/trailing_zeros for x != 0

#[kani::proof]
fn verify_soft_zero_counts_u64() {
    let x: u64 = kani::any();
    kani::assume(x != 0);

    kani::assert(soft_lzcnt_u64(x) == x.leading_zeros(), "lzcnt fallback mismatch");
    kani::assert(soft_tzcnt_u64(x) == x.trailing_zeros(), "tzcnt fallback mismatch");
}

#[kani::proof]
fn verify_soft_zero_counts_u32() {
    let x: u32 = kani::any();
    kani::assume(x != 0);

    kani::assert(soft_lzcnt_u32(x) == x.leading_zeros(), "lzcnt fallback mismatch");
    kani::assert(soft_tzcnt_u32(x) == x.trailing_zeros(), "tzcnt fallback mismatch");
}

// ============================================================================
// Proof 3: bit scans land on set bits
// ============================================================================
// File: zeros.rs
// What: forward scan hits the lowest set bit, reverse scan the highest
// Why: callers index bit arrays with these positions

#[kani::proof]
fn verify_bit_scans_in_bounds() {
    let x: u64 = kani::any();
    kani::assume(x != 0);

    let lo = bit_scan_forward_u64(x);
    let hi = bit_scan_reverse_u64(x);

    kani::assert(lo <= hi && hi < 64, "scan positions must be ordered and in range");
    kani::assert((x >> lo) & 1 == 1, "forward scan must land on a set bit");
    kani::assert((x >> hi) & 1 == 1, "reverse scan must land on a set bit");
    kani::assert(x & ((1u64 << lo) - 1) == 0, "no set bit below forward scan");
    kani::assert(hi == 63 || x >> (hi + 1) == 0, "no set bit above reverse scan");
}
