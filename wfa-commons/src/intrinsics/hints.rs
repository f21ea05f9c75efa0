// =============================================================================
// Cache and Branch Hints
// =============================================================================
//
// Hints never change results. Where the target has no matching instruction
// they compile to nothing.

#[cfg(all(target_arch = "x86_64", target_feature = "sse"))]
use core::arch::x86_64::{_mm_prefetch, _MM_HINT_T0};

/// Prefetch the cache line holding `ptr` into L1.
///
/// The pointer is never dereferenced, so dangling or null pointers are fine.
/// Supported architectures:
/// - x86_64: SSE `PREFETCHT0`
/// - aarch64: `PRFM PLDL1KEEP`
/// - arm (v7): `PLD` via inline assembly
/// - others: no-op
#[inline(always)]
pub fn prefetch_l1(ptr: *const u8) {
    #[cfg(all(target_arch = "x86_64", target_feature = "sse"))]
    unsafe {
        _mm_prefetch::<_MM_HINT_T0>(ptr as *const i8);
    }

    #[cfg(target_arch = "aarch64")]
    unsafe {
        core::arch::asm!("prfm pldl1keep, [{0}]", in(reg) ptr, options(readonly, nostack, preserves_flags));
    }

    #[cfg(all(target_arch = "arm", target_feature = "v7"))]
    unsafe {
        core::arch::asm!("pld [{0}]", in(reg) ptr, options(readonly, nostack, preserves_flags));
    }

    #[cfg(not(any(
        all(target_arch = "x86_64", target_feature = "sse"),
        target_arch = "aarch64",
        all(target_arch = "arm", target_feature = "v7")
    )))]
    {
        let _ = ptr;
    }
}

/// Prefetch the cache line holding `value`.
#[inline(always)]
pub fn prefetch_ref<T>(value: &T) {
    prefetch_l1((value as *const T).cast::<u8>());
}

#[inline(always)]
#[cold]
fn cold_path() {}

/// Hint that `b` is usually `true`. Returns `b`.
#[inline(always)]
pub fn likely(b: bool) -> bool {
    if !b {
        cold_path();
    }
    b
}

/// Hint that `b` is usually `false`. Returns `b`.
#[inline(always)]
pub fn unlikely(b: bool) -> bool {
    if b {
        cold_path();
    }
    b
}
