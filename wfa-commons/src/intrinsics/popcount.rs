// =============================================================================
// Population Count
// =============================================================================
//
// Hardware path forwards to the native count instruction. Software path is the
// pairwise SWAR reduction: each round sums adjacent fields of width w into a
// field of width 2w until a single field holds the total.

const M01_64: u64 = 0x5555_5555_5555_5555;
const M02_64: u64 = 0x3333_3333_3333_3333;
const M04_64: u64 = 0x0f0f_0f0f_0f0f_0f0f;
const M08_64: u64 = 0x00ff_00ff_00ff_00ff;
const M16_64: u64 = 0x0000_ffff_0000_ffff;
const M32_64: u64 = 0x0000_0000_ffff_ffff;

const M01_32: u32 = 0x5555_5555;
const M02_32: u32 = 0x3333_3333;
const M04_32: u32 = 0x0f0f_0f0f;
const M08_32: u32 = 0x00ff_00ff;
const M16_32: u32 = 0x0000_ffff;

/// Count set bits in a 64-bit word using six SWAR rounds (1→2→4→8→16→32).
#[inline(always)]
pub const fn swar_popcount_u64(mut x: u64) -> u32 {
    x = (x & M01_64) + ((x >> 1) & M01_64);
    x = (x & M02_64) + ((x >> 2) & M02_64);
    x = (x & M04_64) + ((x >> 4) & M04_64);
    x = (x & M08_64) + ((x >> 8) & M08_64);
    x = (x & M16_64) + ((x >> 16) & M16_64);
    x = (x & M32_64) + ((x >> 32) & M32_64);
    x as u32
}

/// Count set bits in a 32-bit word using five SWAR rounds (1→2→4→8→16).
#[inline(always)]
pub const fn swar_popcount_u32(mut x: u32) -> u32 {
    x = (x & M01_32) + ((x >> 1) & M01_32);
    x = (x & M02_32) + ((x >> 2) & M02_32);
    x = (x & M04_32) + ((x >> 4) & M04_32);
    x = (x & M08_32) + ((x >> 8) & M08_32);
    x = (x & M16_32) + ((x >> 16) & M16_32);
    x
}

/// Count set bits with the native instruction.
///
/// Lowers to `POPCNT` on x86_64 when the target enables it, `CNT` on aarch64,
/// and to LLVM's own expansion elsewhere.
#[inline(always)]
pub const fn hw_popcount_u64(x: u64) -> u32 {
    x.count_ones()
}

/// Count set bits with the native instruction.
#[inline(always)]
pub const fn hw_popcount_u32(x: u32) -> u32 {
    x.count_ones()
}

/// Number of set bits in `x`. Defined for every input, including zero.
///
/// Uses the path chosen at build time (see the `software-fallback` feature).
#[inline(always)]
pub const fn popcount_u64(x: u64) -> u32 {
    #[cfg(feature = "software-fallback")]
    {
        swar_popcount_u64(x)
    }
    #[cfg(not(feature = "software-fallback"))]
    {
        hw_popcount_u64(x)
    }
}

/// Number of set bits in `x`. Defined for every input, including zero.
#[inline(always)]
pub const fn popcount_u32(x: u32) -> u32 {
    #[cfg(feature = "software-fallback")]
    {
        swar_popcount_u32(x)
    }
    #[cfg(not(feature = "software-fallback"))]
    {
        hw_popcount_u32(x)
    }
}
