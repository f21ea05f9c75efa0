//! Unit tests for wfa-commons numeric module.
//!
//! Tests cover: random.rs, nominal.rs, arith.rs
//! Focus: the pinned nominal rounding table, saturation, sampler bounds.

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;
    use wfa_commons::numeric::{
        grow_nominal_u32, grow_nominal_u64, nominal_prop_u32, nominal_prop_u64, percentage,
        rand_iid, reseed_thread_rng, round_up_nominal, with_thread_sampler, BoundedArith,
        NominalLadder, UniformSampler, TELESCOPIC_FACTOR,
    };

    const DRAWS: usize = 100_000;

    // =========================================================================
    // random.rs
    // =========================================================================

    #[test]
    fn test_sampler_stays_in_closed_interval() {
        let mut sampler = UniformSampler::from_seed(0xC0FFEE);
        for (min, max) in [(0, 1), (10, 20), (5, 5), (u64::MAX - 3, u64::MAX), (0, u64::MAX)] {
            for _ in 0..DRAWS / 5 {
                let v = sampler.sample_inclusive(min, max);
                assert!(min <= v && v <= max, "{} outside [{}, {}]", v, min, max);
            }
        }
    }

    #[test]
    fn test_sampler_degenerate_range() {
        let mut sampler = UniformSampler::from_clock();
        for _ in 0..DRAWS {
            assert_eq!(sampler.sample_inclusive(77, 77), 77);
        }
    }

    #[test]
    fn test_sampler_hits_both_endpoints() {
        let mut sampler = UniformSampler::from_seed(11);
        let mut seen = [false; 4];
        for _ in 0..10_000 {
            seen[(sampler.sample_inclusive(100, 103) - 100) as usize] = true;
        }
        assert_eq!(seen, [true; 4]);
    }

    #[test]
    fn test_sampler_is_roughly_uniform() {
        let mut sampler = UniformSampler::from_seed(12);
        let mut buckets = [0usize; 10];
        for _ in 0..DRAWS {
            buckets[sampler.sample_inclusive(0, 9) as usize] += 1;
        }
        // Expected 10_000 per bucket, sigma ~95.
        for count in buckets {
            assert!((9_500..=10_500).contains(&count), "bucket count {}", count);
        }
    }

    #[test]
    fn test_seeded_samplers_are_reproducible() {
        let mut a = UniformSampler::from_seed(99);
        let mut b = UniformSampler::new(Xoshiro256PlusPlus::seed_from_u64(99));
        for _ in 0..1000 {
            assert_eq!(a.sample_inclusive(0, 1 << 40), b.sample_inclusive(0, 1 << 40));
        }
    }

    #[test]
    fn test_thread_sampler_reseed_is_reproducible() {
        reseed_thread_rng(5);
        let first: Vec<u64> = (0..32).map(|_| rand_iid(1, 6)).collect();
        reseed_thread_rng(5);
        let second: Vec<u64> = (0..32).map(|_| rand_iid(1, 6)).collect();
        assert_eq!(first, second);
        assert!(first.iter().all(|&v| (1..=6).contains(&v)));
    }

    #[test]
    fn test_threads_get_independent_samplers() {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                std::thread::spawn(|| {
                    with_thread_sampler(|s| {
                        (0..8).map(|_| s.sample_inclusive(0, u64::MAX)).collect::<Vec<_>>()
                    })
                })
            })
            .collect();
        let streams: Vec<Vec<u64>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for i in 0..streams.len() {
            for j in i + 1..streams.len() {
                assert_ne!(streams[i], streams[j], "threads {} and {} share a stream", i, j);
            }
        }
    }

    #[test]
    #[should_panic(expected = "already borrowed")]
    fn test_thread_sampler_nested_draw_panics() {
        with_thread_sampler(|s| s.sample_inclusive(0, 9) + rand_iid(0, 9));
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "min > max")]
    fn test_sampler_rejects_inverted_range_in_debug() {
        let mut sampler = UniformSampler::from_seed(1);
        let _ = sampler.sample_inclusive(10, 9);
    }

    // =========================================================================
    // nominal.rs
    // =========================================================================

    #[test]
    fn test_nominal_reference_values() {
        assert_eq!(nominal_prop_u32(1000, 1.5), 1500);
        assert_eq!(nominal_prop_u32(87, 1.0), 90);
        assert_eq!(nominal_prop_u64(0, 2.0), 0);
        assert_eq!(nominal_prop_u64(1_230_000, 1.0), 1_300_000);
        assert_eq!(nominal_prop_u64(820_000, 1.5), 1_300_000);
    }

    #[test]
    fn test_nominal_small_values_are_unchanged() {
        for base in 1..10u32 {
            assert_eq!(nominal_prop_u32(base, 1.0), base);
        }
        assert_eq!(nominal_prop_u32(3, 1.5), 5);
        assert_eq!(nominal_prop_u32(1, 0.5), 1);
    }

    #[test]
    fn test_nominal_two_digit_values_snap_to_tens() {
        assert_eq!(nominal_prop_u32(10, 1.0), 10);
        assert_eq!(nominal_prop_u32(11, 1.0), 20);
        assert_eq!(nominal_prop_u32(50, 1.5), 80);
        assert_eq!(nominal_prop_u32(95, 1.0), 100);
    }

    #[test]
    fn test_nominal_two_significant_digits() {
        assert_eq!(nominal_prop_u64(123, 1.0), 130);
        assert_eq!(nominal_prop_u64(1_501, 1.0), 1_600);
        assert_eq!(nominal_prop_u64(9_901, 1.0), 10_000);
        assert_eq!(nominal_prop_u64(45_000, 1.0), 45_000);
        assert_eq!(round_up_nominal(1_000_000_001), 1_100_000_000);
    }

    #[test]
    fn test_nominal_absorbs_float_noise() {
        // 1.1 is stored slightly above 1.1, so 100 * 1.1 overshoots 110.
        assert_eq!(nominal_prop_u32(100, 1.1), 110);
        assert_eq!(nominal_prop_u32(1000, 1.1), 1100);
    }

    #[test]
    fn test_nominal_zero_factor() {
        assert_eq!(nominal_prop_u32(1234, 0.0), 0);
    }

    #[test]
    fn test_nominal_u32_saturates() {
        assert_eq!(nominal_prop_u32(u32::MAX, 2.0), u32::MAX);
        assert_eq!(nominal_prop_u32(u32::MAX / 2, 3.0), u32::MAX);
        // Product fits, but rounding up to 4.3e9 would not.
        assert_eq!(nominal_prop_u32(4_290_000_000, 1.0), u32::MAX);
        // Just below the rounding cliff stays exact.
        assert_eq!(nominal_prop_u32(4_200_000_000, 1.0), 4_200_000_000);
    }

    #[test]
    fn test_nominal_u64_saturates() {
        assert_eq!(nominal_prop_u64(u64::MAX, 1.5), u64::MAX);
        assert_eq!(nominal_prop_u64(1 << 62, 8.0), u64::MAX);
        assert_eq!(nominal_prop_u64(17_000_000_000_000_000_000, 1.0), 17_000_000_000_000_000_000);
        assert_eq!(nominal_prop_u64(18_100_000_000_000_000_000, 1.0), u64::MAX);
    }

    #[test]
    fn test_nominal_exact_half_rounds_up() {
        // 1e15 + 0.5 is exact in f64; the half must not be dropped.
        assert_eq!(
            nominal_prop_u64(666_666_666_666_667, 1.5),
            1_100_000_000_000_000
        );
        assert_eq!(nominal_prop_u64(666_666_666_666_666, 1.5), 1_000_000_000_000_000);
    }

    #[test]
    fn test_nominal_never_below_base_above_f64_precision() {
        // 1e17 + 1 converts to 1e17 in f64.
        assert_eq!(
            nominal_prop_u64(100_000_000_000_000_001, 1.0),
            110_000_000_000_000_000
        );
        assert_eq!(nominal_prop_u64((1 << 53) + 1, 1.0), 9_100_000_000_000_000);
        let base = (1u64 << 60) + 1;
        assert!(nominal_prop_u64(base, 1.5) >= base);
    }

    #[test]
    fn test_telescopic_growth() {
        assert_eq!(TELESCOPIC_FACTOR, 1.5);
        assert_eq!(grow_nominal_u32(100), 150);
        assert_eq!(grow_nominal_u32(150), 230);
        assert_eq!(grow_nominal_u64(1_000_000), 1_500_000);
    }

    #[test]
    fn test_telescopic_ladder() {
        let ladder: Vec<u64> = NominalLadder::telescopic(100).take(8).collect();
        assert_eq!(ladder, vec![100, 150, 230, 350, 530, 800, 1200, 1800]);
    }

    #[test]
    fn test_ladder_is_strictly_increasing_until_saturation() {
        let ladder: Vec<u64> = NominalLadder::telescopic(1).collect();
        assert_eq!(ladder.last(), Some(&u64::MAX));
        assert!(ladder.windows(2).all(|w| w[0] < w[1]));
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "growth factor")]
    fn test_nominal_rejects_negative_factor_in_debug() {
        let _ = nominal_prop_u64(10, -1.0);
    }

    // =========================================================================
    // arith.rs
    // =========================================================================

    #[test]
    fn test_bounded_sub() {
        assert_eq!(100u64.bounded_sub(30, 50), 70);
        assert_eq!(100u64.bounded_sub(60, 50), 50);
        assert_eq!(5u32.bounded_sub(10, 1), 1);
        assert_eq!(0usize.bounded_sub(usize::MAX, 0), 0);
    }

    #[test]
    fn test_bounded_add() {
        assert_eq!(10u32.bounded_add(20, 100), 30);
        assert_eq!(90u32.bounded_add(20, 100), 100);
        assert_eq!(u32::MAX.bounded_add(u32::MAX, 7), 7);
    }

    #[test]
    fn test_division_helpers() {
        assert_eq!(17u64.div_floor(5), 3);
        assert_eq!(17u64.div_ceil_up(5), 4);
        assert_eq!(15u64.div_ceil_up(5), 3);
        assert_eq!(17u64.divc_floor(0), 0);
        assert_eq!(17u64.divc_ceil(0), 0);
        assert_eq!(17usize.divc_ceil(5), 4);
        assert_eq!(0u32.divc_ceil(5), 0);
    }

    #[test]
    #[should_panic]
    fn test_unchecked_division_by_zero_panics() {
        let _ = 1u32.div_ceil_up(std::hint::black_box(0));
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(1, 4), 25.0);
        assert_eq!(percentage(7, 0), 0.0);
        assert_eq!(percentage(0, 9), 0.0);
        assert!((percentage(1, 3) - 33.333_333).abs() < 1e-4);
    }
}
