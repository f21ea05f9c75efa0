//! Property-based tests for wfa-commons intrinsics module.
//!
//! Uses proptest to check that every software fallback agrees with the
//! native instruction across random inputs.

use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(4096))]

    // =========================================================================
    // popcount.rs properties
    // =========================================================================

    #[test]
    fn prop_swar_popcount_u64_matches_native(x in any::<u64>()) {
        use wfa_commons::intrinsics::swar_popcount_u64;

        prop_assert_eq!(swar_popcount_u64(x), x.count_ones());
    }

    #[test]
    fn prop_swar_popcount_u32_matches_native(x in any::<u32>()) {
        use wfa_commons::intrinsics::swar_popcount_u32;

        prop_assert_eq!(swar_popcount_u32(x), x.count_ones());
    }

    #[test]
    fn prop_popcount_in_width(x in any::<u64>()) {
        use wfa_commons::popcount_u64;

        prop_assert!(popcount_u64(x) <= 64);
    }

    #[test]
    fn prop_popcount_complement_sums_to_width(x in any::<u64>()) {
        use wfa_commons::intrinsics::swar_popcount_u64;

        prop_assert_eq!(swar_popcount_u64(x) + swar_popcount_u64(!x), 64);
    }

    // =========================================================================
    // zeros.rs properties
    // =========================================================================

    #[test]
    fn prop_soft_lzcnt_u64_matches_native(x in 1u64..=u64::MAX) {
        use wfa_commons::intrinsics::soft_lzcnt_u64;

        prop_assert_eq!(soft_lzcnt_u64(x), x.leading_zeros());
    }

    #[test]
    fn prop_soft_tzcnt_u64_matches_native(x in 1u64..=u64::MAX) {
        use wfa_commons::intrinsics::soft_tzcnt_u64;

        prop_assert_eq!(soft_tzcnt_u64(x), x.trailing_zeros());
    }

    #[test]
    fn prop_soft_zero_counts_u32_match_native(x in 1u32..=u32::MAX) {
        use wfa_commons::intrinsics::{soft_lzcnt_u32, soft_tzcnt_u32};

        prop_assert_eq!(soft_lzcnt_u32(x), x.leading_zeros());
        prop_assert_eq!(soft_tzcnt_u32(x), x.trailing_zeros());
    }

    #[test]
    fn prop_tzcnt_finds_lowest_set_bit(x in 1u64..=u64::MAX) {
        use wfa_commons::tzcnt_u64;

        let tz = tzcnt_u64(x);
        prop_assert!(tz < 64);
        prop_assert!((x & (1u64 << tz)) != 0, "Bit at tz position must be set");
        if tz > 0 {
            prop_assert_eq!(x & ((1u64 << tz) - 1), 0, "All bits below tz must be zero");
        }
    }

    #[test]
    fn prop_lzcnt_finds_highest_set_bit(x in 1u32..=u32::MAX) {
        use wfa_commons::lzcnt_u32;

        let lz = lzcnt_u32(x);
        prop_assert!(lz < 32);
        prop_assert_eq!((x >> (31 - lz)) & 1, 1, "Bit 31 - lz must be set");
        prop_assert_eq!(x.checked_shr(32 - lz).unwrap_or(0), 0, "No bit above 31 - lz");
    }

    #[test]
    fn prop_zero_counts_bound_single_run(x in 1u32..=u32::MAX) {
        use wfa_commons::{lzcnt_u32, tzcnt_u32};

        // The span between the outermost set bits holds at least one bit.
        prop_assert!(lzcnt_u32(x) + tzcnt_u32(x) + 1 <= 32);
    }

    // =========================================================================
    // backend.rs properties
    // =========================================================================

    #[test]
    fn prop_dispatched_backends_agree(x in 1u64..=u64::MAX) {
        use wfa_commons::{BitBackend, BitOps};

        let hw = BitOps::new(BitBackend::Hardware);
        let sw = BitOps::new(BitBackend::Software);
        prop_assert_eq!(hw.popcount_u64(x), sw.popcount_u64(x));
        prop_assert_eq!(hw.lzcnt_u64(x), sw.lzcnt_u64(x));
        prop_assert_eq!(hw.tzcnt_u64(x), sw.tzcnt_u64(x));
    }
}
