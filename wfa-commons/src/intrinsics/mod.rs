// =============================================================================
// Intrinsics Module
// =============================================================================
//
// Population count, zero counts and hints, each with a hardware path and a
// software fallback that produce identical results.

/// Population count: native instruction and SWAR fallback.
pub mod popcount;

/// Leading/trailing zero count: native instruction and bit-scan fallback.
pub mod zeros;

/// Prefetch and branch-likelihood hints.
pub mod hints;

/// Build-time and runtime backend selection.
pub mod backend;

/// Kani formal verification proofs.
#[cfg(kani)]
mod kani_proofs;

// =============================================================================
// Public Re-exports
// =============================================================================

pub use backend::{BitBackend, BitOps};
pub use hints::{likely, prefetch_l1, prefetch_ref, unlikely};
pub use popcount::{popcount_u32, popcount_u64, swar_popcount_u32, swar_popcount_u64};
pub use zeros::{
    bit_scan_forward_u32, bit_scan_forward_u64, bit_scan_reverse_u32, bit_scan_reverse_u64,
    lzcnt_u32, lzcnt_u64, soft_lzcnt_u32, soft_lzcnt_u64, soft_tzcnt_u32, soft_tzcnt_u64,
    tzcnt_u32, tzcnt_u64,
};
