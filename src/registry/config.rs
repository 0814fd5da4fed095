// ============================================================================
// Type Configuration
// Per-type category, range, and display precision
// ============================================================================

use crate::value::RawValue;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of fractional digits in the internal fixed-point encoding.
///
/// Every Decimal-category value is stored as `real × 10^DECIMAL_DIGITS`,
/// independent of the precision any individual type declares for display.
pub const DECIMAL_DIGITS: u8 = 3;

/// The fixed-point scale factor (`10^DECIMAL_DIGITS`).
pub const DECIMAL_SCALE: RawValue = pow10(DECIMAL_DIGITS);

/// Compute 10^n at compile time
pub(crate) const fn pow10(n: u8) -> RawValue {
    let mut result: RawValue = 1;
    let mut i = 0;
    while i < n {
        result *= 10;
        i += 1;
    }
    result
}

/// Convert a floating-point literal to its raw fixed-point encoding.
///
/// Truncates toward zero. Intended for expressing Decimal range bounds when
/// building a [`TypeConfig`]; runtime values go through
/// [`TypedValue::set_decimal`](crate::value::TypedValue::set_decimal).
#[inline]
pub fn dec_raw(v: f64) -> RawValue {
    (v * DECIMAL_SCALE as f64) as RawValue
}

// ============================================================================
// Category
// ============================================================================

/// The kind of domain a registered type belongs to.
///
/// The category governs which operations are legal: Nominal values can only
/// be assigned and compared, Integer and Decimal values additionally support
/// the arithmetic engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Category {
    /// Categorical codes; comparable and assignable only, no arithmetic
    Nominal,
    /// Whole-number domain
    Integer,
    /// Fixed-point domain with a declared display precision
    Decimal,
}

// ============================================================================
// Type Configuration
// ============================================================================

/// Declaration of a single value domain: category, inclusive range, and
/// (for Decimal types) the number of fractional digits exposed externally.
///
/// Range bounds are expressed in raw-store units; use [`dec_raw`] to encode
/// Decimal bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TypeConfig {
    pub category: Category,
    pub range_min: RawValue,
    pub range_max: RawValue,
    /// Display precision: `0` for Nominal/Integer, `1..=DECIMAL_DIGITS`
    /// for Decimal
    pub precision: u8,
}

impl TypeConfig {
    /// Declare an Integer type over the inclusive range `[min, max]`.
    pub fn integer(min: RawValue, max: RawValue) -> Self {
        Self {
            category: Category::Integer,
            range_min: min,
            range_max: max,
            precision: 0,
        }
    }

    /// Declare a Decimal type over the inclusive raw range `[min, max]`
    /// with `precision` fractional digits shown externally.
    ///
    /// # Panics
    /// Panics if `precision` is not in `1..=DECIMAL_DIGITS`.
    pub fn decimal(min: RawValue, max: RawValue, precision: u8) -> Self {
        assert!(
            precision >= 1 && precision <= DECIMAL_DIGITS,
            "decimal precision {precision} outside 1..={DECIMAL_DIGITS}"
        );
        Self {
            category: Category::Decimal,
            range_min: min,
            range_max: max,
            precision,
        }
    }

    /// Declare a Nominal type with `count` categorical codes.
    ///
    /// The valid codes are `0..=count`; a count of one models a type with a
    /// single state.
    ///
    /// # Panics
    /// Panics if `count` is zero or negative.
    pub fn nominal(count: RawValue) -> Self {
        assert!(count > 0, "nominal type needs at least one code");
        Self {
            category: Category::Nominal,
            range_min: 0,
            range_max: count,
            precision: 0,
        }
    }

    /// Whether `raw` falls inside the declared inclusive range.
    #[inline]
    pub fn contains(&self, raw: RawValue) -> bool {
        raw >= self.range_min && raw <= self.range_max
    }
}
