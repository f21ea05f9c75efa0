// =============================================================================
// Numeric Module
// =============================================================================
//
// Inclusive random sampling, nominal capacity growth and clamped arithmetic.

/// Inclusive-range uniform sampling.
pub mod random;

/// Nominal proportional growth.
pub mod nominal;

/// Bounded add/sub, floor/ceil division, percentage.
pub mod arith;

// =============================================================================
// Public Re-exports
// =============================================================================

pub use arith::{percentage, BoundedArith};
pub use nominal::{
    grow_nominal_u32, grow_nominal_u64, nominal_prop_u32, nominal_prop_u64, round_up_nominal,
    NominalLadder, TELESCOPIC_FACTOR,
};
pub use random::UniformSampler;

#[cfg(feature = "std")]
pub use random::{rand_iid, reseed_thread_rng, with_thread_sampler};
