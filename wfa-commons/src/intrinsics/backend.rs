// =============================================================================
// Backend Selection
// =============================================================================
//
// Two ways to pick between the hardware and software paths:
// - build time: the `software-fallback` feature fixes the free functions
// - runtime: `BitOps` resolves a function table from CPU detection or config
//
// Both backends return identical results for every valid input.

use core::fmt;
use core::str::FromStr;

use super::popcount::{hw_popcount_u32, hw_popcount_u64, swar_popcount_u32, swar_popcount_u64};
use super::zeros::{
    hw_lzcnt_u32, hw_lzcnt_u64, hw_tzcnt_u32, hw_tzcnt_u64, soft_lzcnt_u32, soft_lzcnt_u64,
    soft_tzcnt_u32, soft_tzcnt_u64,
};
use crate::error::ParseBackendError;

/// Which implementation answers a BitOps call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BitBackend {
    /// Native count/scan instructions.
    Hardware,
    /// Portable SWAR reduction and software bit scans.
    Software,
}

impl BitBackend {
    /// Backend used by the free functions, fixed at build time.
    pub const COMPILED: BitBackend = if cfg!(feature = "software-fallback") {
        BitBackend::Software
    } else {
        BitBackend::Hardware
    };

    /// Environment variable read by [`BitBackend::from_env`].
    pub const ENV_VAR: &'static str = "WFA_BIT_BACKEND";

    /// Pick the backend the running CPU supports natively.
    ///
    /// - x86_64 with `std`: runtime check for `popcnt`, `lzcnt` and `bmi1`
    /// - x86_64 without `std`: the enabled target features
    /// - aarch64: always hardware (`CNT`, `CLZ`, `RBIT` are baseline)
    /// - others: [`BitBackend::COMPILED`]
    pub fn detect() -> Self {
        #[cfg(all(feature = "std", target_arch = "x86_64"))]
        {
            if x86::supported() {
                BitBackend::Hardware
            } else {
                BitBackend::Software
            }
        }

        #[cfg(all(not(feature = "std"), target_arch = "x86_64"))]
        {
            if cfg!(all(
                target_feature = "popcnt",
                target_feature = "lzcnt",
                target_feature = "bmi1"
            )) {
                BitBackend::Hardware
            } else {
                BitBackend::Software
            }
        }

        #[cfg(target_arch = "aarch64")]
        {
            BitBackend::Hardware
        }

        #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
        {
            Self::COMPILED
        }
    }

    /// Read the backend from `WFA_BIT_BACKEND`, detecting when it is unset.
    ///
    /// Accepted values are those of [`FromStr`]; `auto` also means detect.
    /// A value that is set but not UTF-8 is an error, not "unset".
    #[cfg(feature = "std")]
    pub fn from_env() -> Result<Self, ParseBackendError> {
        match std::env::var(Self::ENV_VAR) {
            Ok(value) => {
                let backend = value.parse()?;
                log::debug!("{}={} selects {} backend", Self::ENV_VAR, value, backend);
                Ok(backend)
            }
            Err(std::env::VarError::NotPresent) => Ok(Self::detect()),
            Err(std::env::VarError::NotUnicode(_)) => Err(ParseBackendError::NotUnicode),
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            BitBackend::Hardware => "hardware",
            BitBackend::Software => "software",
        }
    }
}

impl fmt::Display for BitBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BitBackend {
    type Err = ParseBackendError;

    /// Parse `auto`, `hardware` (`hw`, `native`) or `software` (`sw`, `swar`,
    /// `fallback`), ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseBackendError::Empty);
        }
        let is = |name: &str| trimmed.eq_ignore_ascii_case(name);
        if is("auto") {
            Ok(BitBackend::detect())
        } else if is("hardware") || is("hw") || is("native") {
            Ok(BitBackend::Hardware)
        } else if is("software") || is("sw") || is("swar") || is("fallback") {
            Ok(BitBackend::Software)
        } else {
            Err(ParseBackendError::unknown(trimmed))
        }
    }
}

// =============================================================================
// Resolved Function Table
// =============================================================================

/// BitOps resolved for one backend.
///
/// Resolution happens once; each call is a plain indirect call with no
/// feature checks on the hot path.
#[derive(Clone, Copy, Debug)]
pub struct BitOps {
    backend: BitBackend,
    popcount_u32: fn(u32) -> u32,
    popcount_u64: fn(u64) -> u32,
    lzcnt_u32: fn(u32) -> u32,
    lzcnt_u64: fn(u64) -> u32,
    tzcnt_u32: fn(u32) -> u32,
    tzcnt_u64: fn(u64) -> u32,
}

impl BitOps {
    /// Resolve the table for `backend`.
    ///
    /// Asking for [`BitBackend::Hardware`] on a CPU without the instructions
    /// still works: the portable `count_ones`/`leading_zeros` family is used.
    pub fn new(backend: BitBackend) -> Self {
        let ops = match backend {
            BitBackend::Software => Self {
                backend,
                popcount_u32: swar_popcount_u32,
                popcount_u64: swar_popcount_u64,
                lzcnt_u32: soft_lzcnt_u32,
                lzcnt_u64: soft_lzcnt_u64,
                tzcnt_u32: soft_tzcnt_u32,
                tzcnt_u64: soft_tzcnt_u64,
            },
            BitBackend::Hardware => Self::hardware(),
        };
        log::debug!("resolved {} bit backend", backend);
        ops
    }

    #[cfg(all(feature = "std", target_arch = "x86_64"))]
    fn hardware() -> Self {
        if x86::supported() {
            Self {
                backend: BitBackend::Hardware,
                popcount_u32: x86::popcount_u32,
                popcount_u64: x86::popcount_u64,
                lzcnt_u32: x86::lzcnt_u32,
                lzcnt_u64: x86::lzcnt_u64,
                tzcnt_u32: x86::tzcnt_u32,
                tzcnt_u64: x86::tzcnt_u64,
            }
        } else {
            log::debug!("popcnt/lzcnt/bmi1 unavailable, using portable hardware path");
            Self::portable_hardware()
        }
    }

    #[cfg(not(all(feature = "std", target_arch = "x86_64")))]
    fn hardware() -> Self {
        Self::portable_hardware()
    }

    fn portable_hardware() -> Self {
        Self {
            backend: BitBackend::Hardware,
            popcount_u32: hw_popcount_u32,
            popcount_u64: hw_popcount_u64,
            lzcnt_u32: hw_lzcnt_u32,
            lzcnt_u64: hw_lzcnt_u64,
            tzcnt_u32: hw_tzcnt_u32,
            tzcnt_u64: hw_tzcnt_u64,
        }
    }

    /// Resolve the table for the detected backend.
    pub fn detect() -> Self {
        Self::new(BitBackend::detect())
    }

    /// Resolve the table from `WFA_BIT_BACKEND`.
    #[cfg(feature = "std")]
    pub fn from_env() -> Result<Self, ParseBackendError> {
        BitBackend::from_env().map(Self::new)
    }

    /// Process-wide table, resolved on first use from `WFA_BIT_BACKEND`.
    ///
    /// An unparseable variable is logged and ignored in favour of detection.
    #[cfg(feature = "std")]
    pub fn get() -> &'static BitOps {
        static OPS: std::sync::OnceLock<BitOps> = std::sync::OnceLock::new();
        OPS.get_or_init(|| {
            Self::from_env().unwrap_or_else(|err| {
                log::warn!("ignoring {}: {}", BitBackend::ENV_VAR, err);
                Self::detect()
            })
        })
    }

    /// Backend this table was resolved for.
    #[inline(always)]
    pub fn backend(&self) -> BitBackend {
        self.backend
    }

    /// Number of set bits.
    #[inline(always)]
    pub fn popcount_u32(&self, x: u32) -> u32 {
        (self.popcount_u32)(x)
    }

    /// Number of set bits.
    #[inline(always)]
    pub fn popcount_u64(&self, x: u64) -> u32 {
        (self.popcount_u64)(x)
    }

    /// Leading zeros of a nonzero word.
    #[inline(always)]
    pub fn lzcnt_u32(&self, x: u32) -> u32 {
        debug_assert!(x != 0, "leading zero count of zero word");
        (self.lzcnt_u32)(x)
    }

    /// Leading zeros of a nonzero word.
    #[inline(always)]
    pub fn lzcnt_u64(&self, x: u64) -> u32 {
        debug_assert!(x != 0, "leading zero count of zero word");
        (self.lzcnt_u64)(x)
    }

    /// Trailing zeros of a nonzero word.
    #[inline(always)]
    pub fn tzcnt_u32(&self, x: u32) -> u32 {
        debug_assert!(x != 0, "trailing zero count of zero word");
        (self.tzcnt_u32)(x)
    }

    /// Trailing zeros of a nonzero word.
    #[inline(always)]
    pub fn tzcnt_u64(&self, x: u64) -> u32 {
        debug_assert!(x != 0, "trailing zero count of zero word");
        (self.tzcnt_u64)(x)
    }
}

impl Default for BitOps {
    fn default() -> Self {
        Self::new(BitBackend::COMPILED)
    }
}

// =============================================================================
// x86_64 Runtime-dispatched Instructions
// =============================================================================

#[cfg(all(feature = "std", target_arch = "x86_64"))]
mod x86 {
    use core::arch::x86_64::{
        _lzcnt_u32, _lzcnt_u64, _popcnt32, _popcnt64, _tzcnt_u32, _tzcnt_u64,
    };

    pub(super) fn supported() -> bool {
        std::is_x86_feature_detected!("popcnt")
            && std::is_x86_feature_detected!("lzcnt")
            && std::is_x86_feature_detected!("bmi1")
    }

    #[target_feature(enable = "popcnt")]
    unsafe fn popcnt32(x: u32) -> u32 {
        _popcnt32(x as i32) as u32
    }

    #[target_feature(enable = "popcnt")]
    unsafe fn popcnt64(x: u64) -> u32 {
        _popcnt64(x as i64) as u32
    }

    #[target_feature(enable = "lzcnt")]
    unsafe fn lzcnt32(x: u32) -> u32 {
        _lzcnt_u32(x)
    }

    #[target_feature(enable = "lzcnt")]
    unsafe fn lzcnt64(x: u64) -> u32 {
        _lzcnt_u64(x) as u32
    }

    #[target_feature(enable = "bmi1")]
    unsafe fn tzcnt32(x: u32) -> u32 {
        _tzcnt_u32(x)
    }

    #[target_feature(enable = "bmi1")]
    unsafe fn tzcnt64(x: u64) -> u32 {
        _tzcnt_u64(x) as u32
    }

    // SAFETY (all wrappers below): only installed into a `BitOps` table after
    // `supported()` returned true, so the required CPU features are present.

    pub(super) fn popcount_u32(x: u32) -> u32 {
        unsafe { popcnt32(x) }
    }

    pub(super) fn popcount_u64(x: u64) -> u32 {
        unsafe { popcnt64(x) }
    }

    pub(super) fn lzcnt_u32(x: u32) -> u32 {
        unsafe { lzcnt32(x) }
    }

    pub(super) fn lzcnt_u64(x: u64) -> u32 {
        unsafe { lzcnt64(x) }
    }

    pub(super) fn tzcnt_u32(x: u32) -> u32 {
        unsafe { tzcnt32(x) }
    }

    pub(super) fn tzcnt_u64(x: u64) -> u32 {
        unsafe { tzcnt64(x) }
    }
}
