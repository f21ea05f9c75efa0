// =============================================================================
// Inclusive-range Uniform Sampling
// =============================================================================
//
// Non-cryptographic. Generators are either owned by the caller or held per
// thread; no generator state is ever shared between threads.

use rand::{Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Uniform sampler over closed integer ranges.
///
/// Wraps any [`RngCore`]; the default generator is `Xoshiro256PlusPlus`.
#[derive(Clone, Debug)]
pub struct UniformSampler<R = Xoshiro256PlusPlus> {
    rng: R,
}

impl UniformSampler<Xoshiro256PlusPlus> {
    /// Reproducible sampler: the same seed yields the same stream.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }

    /// Sampler seeded from the wall clock.
    ///
    /// Two samplers created in the same instant still get different seeds.
    /// The stream is not reproducible.
    #[cfg(feature = "std")]
    pub fn from_clock() -> Self {
        Self::from_seed(clock_seed())
    }
}

impl<R: RngCore> UniformSampler<R> {
    /// Wrap an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draw uniformly from `[min, max]`, both ends included.
    ///
    /// `min == max` returns `min` without consuming randomness. The full
    /// range `0..=u64::MAX` is allowed.
    ///
    /// # Panics
    /// If `min > max`. This is a caller bug, not an input to be repaired.
    #[inline]
    pub fn sample_inclusive(&mut self, min: u64, max: u64) -> u64 {
        debug_assert!(min <= max, "inclusive range with min > max");
        if min == max {
            return min;
        }
        self.rng.random_range(min..=max)
    }

    /// The wrapped generator.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Unwrap the generator.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

// =============================================================================
// Thread-local Default
// =============================================================================

#[cfg(feature = "std")]
std::thread_local! {
    static THREAD_SAMPLER: core::cell::RefCell<UniformSampler> =
        core::cell::RefCell::new(UniformSampler::from_clock());
}

/// Draw uniformly from `[min, max]` with the calling thread's generator.
///
/// The generator is seeded from the clock on the thread's first draw; use
/// [`reseed_thread_rng`] for a reproducible stream.
///
/// # Panics
/// If `min > max`.
#[cfg(feature = "std")]
pub fn rand_iid(min: u64, max: u64) -> u64 {
    THREAD_SAMPLER.with(|sampler| sampler.borrow_mut().sample_inclusive(min, max))
}

/// Replace the calling thread's generator with one seeded from `seed`.
#[cfg(feature = "std")]
pub fn reseed_thread_rng(seed: u64) {
    log::trace!("reseeding thread sampler with {:#x}", seed);
    THREAD_SAMPLER.with(|sampler| *sampler.borrow_mut() = UniformSampler::from_seed(seed));
}

/// Run `f` with the calling thread's sampler, for batches of draws.
///
/// # Panics
/// If `f` calls [`rand_iid`], [`reseed_thread_rng`] or `with_thread_sampler`,
/// since the sampler is already borrowed. Draw from the `&mut` argument instead.
#[cfg(feature = "std")]
pub fn with_thread_sampler<T>(f: impl FnOnce(&mut UniformSampler) -> T) -> T {
    THREAD_SAMPLER.with(|sampler| f(&mut sampler.borrow_mut()))
}

/// Clock nanoseconds mixed with a process-wide stream counter.
#[cfg(feature = "std")]
fn clock_seed() -> u64 {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static STREAM: AtomicU64 = AtomicU64::new(0);

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    let stream = STREAM.fetch_add(1, Ordering::Relaxed);
    // Golden-ratio increment spreads consecutive stream ids across the word.
    let seed = nanos ^ stream.wrapping_mul(0x9E37_79B9_7F4A_7C15);
    log::trace!("seeding sampler stream {} with {:#x}", stream, seed);
    seed
}
