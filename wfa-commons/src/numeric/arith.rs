// =============================================================================
// Bounded Arithmetic and Division Helpers
// =============================================================================

/// Clamped add/sub and floor/ceil division for unsigned words.
pub trait BoundedArith: Copy {
    /// `self - subtrahend` if that stays above `limit`, otherwise `limit`.
    ///
    /// Never underflows, even when `subtrahend > self`.
    fn bounded_sub(self, subtrahend: Self, limit: Self) -> Self;

    /// `self + summand` if that stays below `limit`, otherwise `limit`.
    ///
    /// Never overflows.
    fn bounded_add(self, summand: Self, limit: Self) -> Self;

    /// `self / denominator`, rounded down.
    ///
    /// # Panics
    /// If `denominator` is zero.
    fn div_floor(self, denominator: Self) -> Self;

    /// `self / denominator`, rounded up.
    ///
    /// # Panics
    /// If `denominator` is zero.
    fn div_ceil_up(self, denominator: Self) -> Self;

    /// Like [`div_floor`](Self::div_floor), but a zero denominator yields 0.
    fn divc_floor(self, denominator: Self) -> Self;

    /// Like [`div_ceil_up`](Self::div_ceil_up), but a zero denominator yields 0.
    fn divc_ceil(self, denominator: Self) -> Self;
}

macro_rules! impl_bounded_arith {
    ( $( $type: ty ),* ) => ($(
        impl BoundedArith for $type {
            #[inline(always)]
            fn bounded_sub(self, subtrahend: $type, limit: $type) -> $type {
                match self.checked_sub(subtrahend) {
                    Some(diff) if diff > limit => diff,
                    _ => limit,
                }
            }

            #[inline(always)]
            fn bounded_add(self, summand: $type, limit: $type) -> $type {
                match self.checked_add(summand) {
                    Some(sum) if sum < limit => sum,
                    _ => limit,
                }
            }

            #[inline(always)]
            fn div_floor(self, denominator: $type) -> $type {
                self / denominator
            }

            #[inline(always)]
            fn div_ceil_up(self, denominator: $type) -> $type {
                self.div_ceil(denominator)
            }

            #[inline(always)]
            fn divc_floor(self, denominator: $type) -> $type {
                self.checked_div(denominator).unwrap_or(0)
            }

            #[inline(always)]
            fn divc_ceil(self, denominator: $type) -> $type {
                if denominator == 0 {
                    0
                } else {
                    self.div_ceil(denominator)
                }
            }
        }
    )*);
}

impl_bounded_arith!(u32, u64, usize);

/// `100 * amount / total`, or `0.0` when `total` is zero.
#[inline]
pub fn percentage(amount: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        100.0 * amount as f64 / total as f64
    }
}
