// =============================================================================
// Nominal Proportional Growth
// =============================================================================
//
// Scale a capacity by a factor, then round *up* to a "round" number so that
// repeated growth walks through readable sizes (100, 150, 230, 350, 530, 800,
// 1200, ...) instead of arbitrary magnitudes.
//
// Rounding table for an integer value v:
//
//   v < 10        unchanged                 7 -> 7
//   10 <= v < 100 next multiple of 10       87 -> 90
//   v >= 100      two significant digits    1230 -> 1300, 1500 -> 1500
//
// Results above the return width saturate at its maximum.

/// Growth factor for telescopic buffers (3/2).
pub const TELESCOPIC_FACTOR: f64 = 3.0 / 2.0;

/// Round `value` up to the nearest nominal number (see the module table).
///
/// Saturates at `u64::MAX` when the rounded value does not fit.
#[inline]
pub fn round_up_nominal(value: u64) -> u64 {
    if value < 10 {
        return value;
    }
    let exponent = value.ilog10().saturating_sub(1).max(1);
    let step = 10u64.pow(exponent);
    value
        .div_ceil(step)
        .checked_mul(step)
        .unwrap_or(u64::MAX)
}

/// `ceil(base * factor)` for a positive `factor`, or `None` above `max`.
///
/// The product is formed exactly from the factor's mantissa and exponent. A
/// remainder below `base` times half an ULP of `factor` is representation
/// noise of the factor and is dropped, so `100 * 1.1` is 110 rather than 111.
fn ceil_product(base: u64, factor: f64, max: u64) -> Option<u64> {
    let bits = factor.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1 << 52) - 1);
    let (mantissa, exponent) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1 << 52), biased - 1075)
    };
    // At most 64 + 53 bits.
    let product = u128::from(base) * u128::from(mantissa);

    if exponent >= 0 {
        let shift = exponent as u32;
        if shift >= 64 || product > u128::from(max) >> shift {
            return None;
        }
        return Some((product << shift) as u64);
    }

    let shift = exponent.unsigned_abs();
    let (whole, rem) = if shift >= 128 {
        (0, product)
    } else {
        (product >> shift, product & ((1u128 << shift) - 1))
    };
    // rem / 2^shift against base * 2^exponent / 2.
    let ceil = if rem == 0 || 2 * rem < u128::from(base) {
        whole
    } else {
        whole + 1
    };
    u64::try_from(ceil).ok().filter(|&v| v <= max)
}

#[inline]
fn nominal_prop(base: u64, factor: f64, max: u64) -> u64 {
    debug_assert!(
        factor.is_finite() && factor >= 0.0,
        "growth factor must be finite and non-negative"
    );
    // Also catches NaN and negative factors in release builds.
    if base == 0 || !(factor > 0.0) {
        return 0;
    }
    match ceil_product(base, factor, max) {
        Some(ceil) => round_up_nominal(ceil).min(max),
        None => max,
    }
}

/// Scale `base` by `factor` and round up to a nominal number.
///
/// - `base == 0` returns 0
/// - never returns less than `base * factor`, except for a remainder below
///   `base` times half an ULP of `factor` (so `100 * 1.1` gives 110)
/// - never returns less than `base` when `factor >= 1.0`
/// - saturates at `u32::MAX` instead of wrapping
///
/// `factor` must be finite and non-negative (checked in debug builds).
///
/// ```
/// use wfa_commons::numeric::nominal_prop_u32;
///
/// assert_eq!(nominal_prop_u32(1000, 1.5), 1500);
/// assert_eq!(nominal_prop_u32(87, 1.0), 90);
/// assert_eq!(nominal_prop_u32(u32::MAX / 2, 3.0), u32::MAX);
/// ```
#[inline]
pub fn nominal_prop_u32(base: u32, factor: f64) -> u32 {
    nominal_prop(u64::from(base), factor, u64::from(u32::MAX)) as u32
}

/// Scale `base` by `factor` and round up to a nominal number.
///
/// Same contract as [`nominal_prop_u32`], saturating at `u64::MAX`. The
/// product is exact for every base, including those above 2^53.
#[inline]
pub fn nominal_prop_u64(base: u64, factor: f64) -> u64 {
    nominal_prop(base, factor, u64::MAX)
}

/// Next telescopic capacity after `current`.
#[inline]
pub fn grow_nominal_u32(current: u32) -> u32 {
    nominal_prop_u32(current, TELESCOPIC_FACTOR)
}

/// Next telescopic capacity after `current`.
#[inline]
pub fn grow_nominal_u64(current: u64) -> u64 {
    nominal_prop_u64(current, TELESCOPIC_FACTOR)
}

// =============================================================================
// Growth Ladder
// =============================================================================

/// Successive nominal capacities: `start`, then repeated growth by `factor`.
///
/// Ends after the value stops increasing (saturation, or a factor that does
/// not grow the current value).
#[derive(Clone, Debug)]
pub struct NominalLadder {
    next: Option<u64>,
    factor: f64,
}

impl NominalLadder {
    /// Ladder starting at `start`, growing by `factor`.
    pub fn new(start: u64, factor: f64) -> Self {
        Self {
            next: Some(start),
            factor,
        }
    }

    /// Ladder growing by [`TELESCOPIC_FACTOR`].
    pub fn telescopic(start: u64) -> Self {
        Self::new(start, TELESCOPIC_FACTOR)
    }
}

impl Iterator for NominalLadder {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let current = self.next?;
        let grown = nominal_prop_u64(current, self.factor);
        self.next = (grown > current).then_some(grown);
        Some(current)
    }
}

impl core::iter::FusedIterator for NominalLadder {}
