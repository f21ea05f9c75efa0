//! # wfa-commons: Portable Bit Intrinsics and Capacity Numerics
//!
//! `wfa-commons` is a `no_std` utility layer for performance-sensitive kernels such as
//! wavefront sequence alignment. It provides primitives that behave identically whether
//! the target exposes native instructions or not:
//!
//! 1. **Population count** - `POPCNT`/`CNT` or a SWAR bit-field reduction
//! 2. **Leading/trailing zero count** - `LZCNT`/`TZCNT` or a software bit scan
//! 3. **Hints** - L1 prefetch and branch-likelihood hints
//! 4. **Numerics** - inclusive random sampling, nominal capacity growth, bounded arithmetic
//!
//! ## Choosing a Backend
//!
//! The free functions ([`popcount_u64`], [`lzcnt_u32`], ...) use the path fixed at build
//! time: the hardware path by default, the software path with the `software-fallback`
//! feature. [`BitOps`] resolves a backend at runtime instead, from CPU detection or the
//! `WFA_BIT_BACKEND` environment variable.
//!
//! ```
//! use wfa_commons::{popcount_u64, tzcnt_u32, BitBackend, BitOps};
//!
//! assert_eq!(popcount_u64(0xF0F0), 8);
//! assert_eq!(tzcnt_u32(0b1000), 3);
//!
//! let soft = BitOps::new(BitBackend::Software);
//! assert_eq!(soft.lzcnt_u64(1), 63);
//! ```
//!
//! ## Capacity Growth
//!
//! ```
//! use wfa_commons::numeric::{nominal_prop_u32, nominal_prop_u64};
//!
//! assert_eq!(nominal_prop_u32(1000, 1.5), 1500);
//! assert_eq!(nominal_prop_u32(87, 1.0), 90);
//! assert_eq!(nominal_prop_u64(820_000, 1.5), 1_300_000);
//! ```
//!
//! ## Module Organization
//!
//! - [`intrinsics`] - popcount, zero counts, hints and backend selection
//! - [`numeric`] - random sampling, nominal growth, bounded arithmetic
//! - [`error`] - errors for the few fallible (configuration) operations

#![no_std]
#![deny(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

// =============================================================================
// Module Declarations
// =============================================================================

/// Error types for backend configuration.
pub mod error;

/// Bit intrinsics with hardware and software paths.
pub mod intrinsics;

/// Random sampling, nominal growth and bounded arithmetic.
pub mod numeric;

// =============================================================================
// Convenience Re-exports
// =============================================================================

pub use error::ParseBackendError;

pub use intrinsics::{
    likely, lzcnt_u32, lzcnt_u64, popcount_u32, popcount_u64, prefetch_l1, tzcnt_u32, tzcnt_u64,
    unlikely, BitBackend, BitOps,
};

pub use numeric::{nominal_prop_u32, nominal_prop_u64, BoundedArith, UniformSampler};

#[cfg(feature = "std")]
pub use numeric::rand_iid;
