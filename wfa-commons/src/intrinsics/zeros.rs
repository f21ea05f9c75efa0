// =============================================================================
// Leading/Trailing Zero Count
// =============================================================================
//
// Software path: a bit scan finds the position of the lowest/highest set bit,
// then the zero count is derived from it. Both scans reduce to a SWAR popcount,
// so they are branch-free.
//
// Precondition for every function here: the input is nonzero. Zero input trips
// a debug assertion; in release builds the result is whatever the selected path
// happens to produce and must not be relied on.

use super::popcount::{swar_popcount_u32, swar_popcount_u64};

// =============================================================================
// Bit Scans
// =============================================================================

/// Position of the lowest set bit.
///
/// `(x & -x) - 1` leaves a mask of exactly the trailing zeros.
#[inline(always)]
pub const fn bit_scan_forward_u64(x: u64) -> u32 {
    debug_assert!(x != 0, "bit scan of zero word");
    swar_popcount_u64((x & x.wrapping_neg()).wrapping_sub(1))
}

/// Position of the lowest set bit.
#[inline(always)]
pub const fn bit_scan_forward_u32(x: u32) -> u32 {
    debug_assert!(x != 0, "bit scan of zero word");
    swar_popcount_u32((x & x.wrapping_neg()).wrapping_sub(1))
}

/// Position of the highest set bit.
///
/// Smears the top bit into every lower position, then counts the run.
#[inline(always)]
pub const fn bit_scan_reverse_u64(mut x: u64) -> u32 {
    debug_assert!(x != 0, "bit scan of zero word");
    x |= x >> 1;
    x |= x >> 2;
    x |= x >> 4;
    x |= x >> 8;
    x |= x >> 16;
    x |= x >> 32;
    swar_popcount_u64(x).wrapping_sub(1)
}

/// Position of the highest set bit.
#[inline(always)]
pub const fn bit_scan_reverse_u32(mut x: u32) -> u32 {
    debug_assert!(x != 0, "bit scan of zero word");
    x |= x >> 1;
    x |= x >> 2;
    x |= x >> 4;
    x |= x >> 8;
    x |= x >> 16;
    swar_popcount_u32(x).wrapping_sub(1)
}

// =============================================================================
// Software Fallback
// =============================================================================

/// Leading zeros via reverse bit scan: `63 - position`.
#[inline(always)]
pub const fn soft_lzcnt_u64(x: u64) -> u32 {
    63u32.wrapping_sub(bit_scan_reverse_u64(x))
}

/// Leading zeros via reverse bit scan: `31 - position`.
#[inline(always)]
pub const fn soft_lzcnt_u32(x: u32) -> u32 {
    31u32.wrapping_sub(bit_scan_reverse_u32(x))
}

/// Trailing zeros via forward bit scan.
#[inline(always)]
pub const fn soft_tzcnt_u64(x: u64) -> u32 {
    bit_scan_forward_u64(x)
}

/// Trailing zeros via forward bit scan.
#[inline(always)]
pub const fn soft_tzcnt_u32(x: u32) -> u32 {
    bit_scan_forward_u32(x)
}

// =============================================================================
// Hardware Path
// =============================================================================

/// Leading zeros with the native instruction (`LZCNT`/`BSR`, `CLZ`).
#[inline(always)]
pub const fn hw_lzcnt_u64(x: u64) -> u32 {
    debug_assert!(x != 0, "leading zero count of zero word");
    x.leading_zeros()
}

/// Leading zeros with the native instruction.
#[inline(always)]
pub const fn hw_lzcnt_u32(x: u32) -> u32 {
    debug_assert!(x != 0, "leading zero count of zero word");
    x.leading_zeros()
}

/// Trailing zeros with the native instruction (`TZCNT`/`BSF`, `RBIT+CLZ`).
#[inline(always)]
pub const fn hw_tzcnt_u64(x: u64) -> u32 {
    debug_assert!(x != 0, "trailing zero count of zero word");
    x.trailing_zeros()
}

/// Trailing zeros with the native instruction.
#[inline(always)]
pub const fn hw_tzcnt_u32(x: u32) -> u32 {
    debug_assert!(x != 0, "trailing zero count of zero word");
    x.trailing_zeros()
}

// =============================================================================
// Build-time Selection
// =============================================================================

/// Count leading zeros in a nonzero 64-bit word.
///
/// # Precondition
/// `x != 0`. Checked only in debug builds; the result for zero is unspecified.
#[inline(always)]
pub const fn lzcnt_u64(x: u64) -> u32 {
    #[cfg(feature = "software-fallback")]
    {
        soft_lzcnt_u64(x)
    }
    #[cfg(not(feature = "software-fallback"))]
    {
        hw_lzcnt_u64(x)
    }
}

/// Count leading zeros in a nonzero 32-bit word.
///
/// # Precondition
/// `x != 0`. Checked only in debug builds; the result for zero is unspecified.
#[inline(always)]
pub const fn lzcnt_u32(x: u32) -> u32 {
    #[cfg(feature = "software-fallback")]
    {
        soft_lzcnt_u32(x)
    }
    #[cfg(not(feature = "software-fallback"))]
    {
        hw_lzcnt_u32(x)
    }
}

/// Count trailing zeros in a nonzero 64-bit word.
///
/// # Precondition
/// `x != 0`. Checked only in debug builds; the result for zero is unspecified.
#[inline(always)]
pub const fn tzcnt_u64(x: u64) -> u32 {
    #[cfg(feature = "software-fallback")]
    {
        soft_tzcnt_u64(x)
    }
    #[cfg(not(feature = "software-fallback"))]
    {
        hw_tzcnt_u64(x)
    }
}

/// Count trailing zeros in a nonzero 32-bit word.
///
/// # Precondition
/// `x != 0`. Checked only in debug builds; the result for zero is unspecified.
#[inline(always)]
pub const fn tzcnt_u32(x: u32) -> u32 {
    #[cfg(feature = "software-fallback")]
    {
        soft_tzcnt_u32(x)
    }
    #[cfg(not(feature = "software-fallback"))]
    {
        hw_tzcnt_u32(x)
    }
}
