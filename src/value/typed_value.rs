// ============================================================================
// Typed Value
// Immutable tagged scalar with validated setters and canonical formatting
// ============================================================================

use super::errors::{TypeError, TypeResult};
use crate::registry::{self, Category, DECIMAL_DIGITS, DECIMAL_SCALE};
use arrayvec::ArrayString;
use std::fmt;
use std::fmt::Write as _;
use std::hash::{Hash, Hasher};

#[cfg(feature = "timestamp")]
use crate::clock::{self, Millis};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The fixed-width integer backing every value. Integer and Nominal values
/// are stored directly; Decimal values as `real × DECIMAL_SCALE`.
pub type RawValue = i64;

/// Maximum length of the canonical text form, including the sign.
pub const TEXT_LEN: usize = 24;

// ============================================================================
// Type Identifier
// ============================================================================

/// Index of a registered type. Valid ids are `0..table.len()` for the table
/// passed to [`registry::configure`]; harnesses typically declare them as
/// constants next to the table itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TypeId(usize);

impl TypeId {
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

// ============================================================================
// Typed Value
// ============================================================================

/// An immutable scalar tagged with its registered type.
///
/// A value is born as a zeroed placeholder via [`TypedValue::new`] and
/// becomes valid through exactly one setter; from then on it is only read or
/// combined through the arithmetic engine, each operation producing a fresh
/// value. Any value obtained through a validated entry point satisfies
/// `range_min <= raw <= range_max` for its declared type.
///
/// Equality and hashing consider the type and the raw store only; the
/// modification stamp is metadata.
///
/// # Example
/// ```ignore
/// let level = TypedValue::new(LEVEL).set_integer(42)?;
/// let doubled = level.sum(level)?;
/// assert_eq!(doubled.as_integer(), 84);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TypedValue {
    pub(crate) ty: TypeId,
    pub(crate) raw: RawValue,
    #[cfg(feature = "timestamp")]
    pub(crate) last_modified: Millis,
}

impl TypedValue {
    /// Create a placeholder with `raw = 0` for the given type.
    ///
    /// The placeholder is unvalidated (its range may not include zero) and
    /// must immediately pass through the matching setter.
    ///
    /// # Panics
    /// Panics on an unregistered id. Ids come from the harness that declared
    /// the table, never from user input, so this is a programmer error.
    pub fn new(ty: TypeId) -> Self {
        assert!(
            registry::is_registered(ty),
            "unregistered type id {}",
            ty.index()
        );
        Self {
            ty,
            raw: 0,
            #[cfg(feature = "timestamp")]
            last_modified: 0,
        }
    }

    /// Build a candidate carrying the current clock reading. One clock read
    /// per mutating operation, taken before validation, as the stamp must
    /// reflect the call time.
    #[inline]
    pub(crate) fn stamped(ty: TypeId, raw: RawValue) -> Self {
        Self {
            ty,
            raw,
            #[cfg(feature = "timestamp")]
            last_modified: clock::now(),
        }
    }

    #[inline]
    pub(crate) fn in_range(self) -> bool {
        registry::config_for(self.ty).contains(self.raw)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The type this value belongs to.
    #[inline]
    pub fn type_id(self) -> TypeId {
        debug_assert!(registry::is_registered(self.ty));
        self.ty
    }

    /// The integer value of an Integer-category value.
    #[inline]
    pub fn as_integer(self) -> RawValue {
        debug_assert!(self.in_range(), "value violates its range invariant");
        self.raw
    }

    /// The categorical code of a Nominal-category value.
    #[inline]
    pub fn as_nominal(self) -> RawValue {
        debug_assert!(self.in_range(), "value violates its range invariant");
        self.raw
    }

    /// A floating-point approximation: the raw store divided by the scale.
    #[inline]
    pub fn as_f64(self) -> f64 {
        debug_assert!(self.in_range(), "value violates its range invariant");
        self.raw as f64 / DECIMAL_SCALE as f64
    }

    /// Whole units of a Decimal-category value, truncated toward zero.
    ///
    /// # Panics
    /// Panics when the value is not Decimal-category.
    #[inline]
    pub fn decimal_units(self) -> RawValue {
        assert_eq!(registry::config_for(self.ty).category, Category::Decimal);
        self.raw / DECIMAL_SCALE
    }

    /// Fractional digits of a Decimal-category value at the type's declared
    /// precision. Negative for negative values, like the units.
    ///
    /// # Panics
    /// Panics when the value is not Decimal-category.
    #[inline]
    pub fn decimal_fraction(self) -> RawValue {
        let cfg = registry::config_for(self.ty);
        assert_eq!(cfg.category, Category::Decimal);
        let cut = registry::pow10(DECIMAL_DIGITS - cfg.precision);
        (self.raw % DECIMAL_SCALE) / cut
    }

    /// Clock reading of the last mutating operation; `0` for a fresh
    /// placeholder.
    #[cfg(feature = "timestamp")]
    #[inline]
    pub fn last_modified(self) -> Millis {
        self.last_modified
    }

    // ========================================================================
    // Setters
    // ========================================================================

    /// Return a copy with the integer value set.
    ///
    /// # Errors
    /// `Incompatible` on a non-Integer type; `OutOfRange` when `n` falls
    /// outside the declared range.
    pub fn set_integer(self, n: RawValue) -> TypeResult {
        let candidate = Self::stamped(self.ty, n);
        let cfg = registry::config_for(self.ty);

        if cfg.category != Category::Integer {
            return Err(TypeError::Incompatible);
        }
        if !cfg.contains(candidate.raw) {
            return Err(TypeError::OutOfRange);
        }
        Ok(candidate)
    }

    /// Return a copy with the decimal value set, truncated toward zero to
    /// the type's declared precision.
    ///
    /// Truncation zeroes the low `DECIMAL_DIGITS - precision` digits of the
    /// raw store; with precision 2, `3.1477` stores as `3.14`, never `3.15`.
    ///
    /// # Errors
    /// `Incompatible` on a non-Decimal type; `OutOfRange` when the truncated
    /// raw store falls outside the declared range, or when `f` is not finite
    /// (NaN would otherwise cast to a valid-looking zero).
    pub fn set_decimal(self, f: f64) -> TypeResult {
        let cfg = registry::config_for(self.ty);

        let cut = registry::pow10(DECIMAL_DIGITS - cfg.precision);
        let raw = registry::dec_raw(f) / cut * cut;
        let candidate = Self::stamped(self.ty, raw);

        if cfg.category != Category::Decimal {
            return Err(TypeError::Incompatible);
        }
        // NaN casts to a valid-looking zero, infinities saturate; neither
        // may reach the store
        if !f.is_finite() || !cfg.contains(candidate.raw) {
            return Err(TypeError::OutOfRange);
        }
        Ok(candidate)
    }

    /// Return a copy with the categorical code set.
    ///
    /// # Errors
    /// `Incompatible` on a non-Nominal type; `OutOfRange` when `code` falls
    /// outside `0..=count`.
    pub fn set_nominal(self, code: RawValue) -> TypeResult {
        let candidate = Self::stamped(self.ty, code);
        let cfg = registry::config_for(self.ty);

        if cfg.category != Category::Nominal {
            return Err(TypeError::Incompatible);
        }
        if !cfg.contains(candidate.raw) {
            return Err(TypeError::OutOfRange);
        }
        Ok(candidate)
    }

    // ========================================================================
    // Canonical text form
    // ========================================================================

    /// Render into the fixed-capacity canonical buffer.
    ///
    /// Every representable value fits: 19 digits plus sign for the widest
    /// integer, and units, point and fraction for decimals.
    pub fn to_text(self) -> ArrayString<TEXT_LEN> {
        let mut buf = ArrayString::new();
        write!(buf, "{self}").expect("canonical text exceeds TEXT_LEN");
        buf
    }

    // ========================================================================
    // Boundary interop
    // ========================================================================

    /// Convert a Decimal-category value to a `rust_decimal::Decimal`.
    ///
    /// Intended for display and tooling boundaries only; the exposed scale
    /// is `DECIMAL_DIGITS`, not the type's display precision.
    ///
    /// # Panics
    /// Panics when the value is not Decimal-category.
    pub fn to_decimal(self) -> rust_decimal::Decimal {
        assert_eq!(registry::config_for(self.ty).category, Category::Decimal);
        let mut d = rust_decimal::Decimal::from(self.raw);
        d.set_scale(DECIMAL_DIGITS as u32).expect("valid scale");
        d
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl PartialEq for TypedValue {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.ty == other.ty && self.raw == other.raw
    }
}

impl Eq for TypedValue {}

impl Hash for TypedValue {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ty.hash(state);
        self.raw.hash(state);
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cfg = registry::config_for(self.ty);
        match cfg.category {
            Category::Nominal | Category::Integer => write!(f, "{}", self.raw),
            Category::Decimal => {
                let units = self.raw / DECIMAL_SCALE;
                let cut = registry::pow10(DECIMAL_DIGITS - cfg.precision);
                let frac = ((self.raw % DECIMAL_SCALE) / cut).unsigned_abs();
                let width = cfg.precision as usize;
                if self.raw < 0 && units == 0 {
                    // sign would be lost on a zero units part
                    write!(f, "-0.{:0>width$}", frac)
                } else {
                    write!(f, "{}.{:0>width$}", units, frac)
                }
            },
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;
    use proptest::prelude::*;

    #[test]
    fn test_placeholder() {
        testing::install();

        let lev = TypedValue::new(testing::LEVEL);
        assert_eq!(lev.type_id(), testing::LEVEL);
        assert_eq!(lev.as_integer(), 0);
    }

    #[test]
    #[should_panic(expected = "unregistered")]
    fn test_unregistered_id_is_fatal() {
        testing::install();
        let _ = TypedValue::new(TypeId::new(usize::MAX));
    }

    #[test]
    fn test_set_integer() {
        testing::install();

        let lev = TypedValue::new(testing::LEVEL);
        assert_eq!(lev.set_decimal(3.0), Err(TypeError::Incompatible));
        assert_eq!(lev.set_nominal(0), Err(TypeError::Incompatible));
        assert_eq!(lev.set_integer(-1000), Err(TypeError::OutOfRange));
        assert_eq!(lev.set_integer(1001), Err(TypeError::OutOfRange));

        let lev = lev.set_integer(1000).unwrap();
        assert_eq!(lev.as_integer(), 1000);
        assert_eq!(lev.type_id(), testing::LEVEL);
    }

    #[test]
    fn test_set_decimal_truncates_not_rounds() {
        testing::install();

        let coef = TypedValue::new(testing::COEF);
        assert_eq!(coef.set_integer(-1000), Err(TypeError::Incompatible));
        assert_eq!(coef.set_nominal(0), Err(TypeError::Incompatible));

        // precision 2: 3.1477 stores as 3.14
        let v = coef.set_decimal(3.1477).unwrap();
        assert_eq!(v.as_f64(), 3.14);
        assert_eq!(v.decimal_units(), 3);
        assert_eq!(v.decimal_fraction(), 14);

        let neg = coef.set_decimal(-3.1477).unwrap();
        assert_eq!(neg.as_f64(), -3.14);

        assert_eq!(coef.set_decimal(3.21), Err(TypeError::OutOfRange));
        assert_eq!(coef.set_decimal(-3.21), Err(TypeError::OutOfRange));
    }

    #[test]
    fn test_set_decimal_rejects_non_finite() {
        testing::install();

        // NaN would cast to a valid-looking zero
        let coef = TypedValue::new(testing::COEF);
        assert_eq!(coef.set_decimal(f64::NAN), Err(TypeError::OutOfRange));
        assert_eq!(coef.set_decimal(f64::INFINITY), Err(TypeError::OutOfRange));
        assert_eq!(coef.set_decimal(f64::NEG_INFINITY), Err(TypeError::OutOfRange));

        // even on a type whose range covers the whole raw store, where the
        // saturating cast would otherwise slip through the range check
        let wide = TypedValue::new(testing::WIDE);
        assert_eq!(wide.set_decimal(f64::NAN), Err(TypeError::OutOfRange));
        assert_eq!(wide.set_decimal(f64::INFINITY), Err(TypeError::OutOfRange));
        assert_eq!(wide.set_decimal(f64::NEG_INFINITY), Err(TypeError::OutOfRange));

        // wrong category still wins for non-finite input
        let lev = TypedValue::new(testing::LEVEL);
        assert_eq!(lev.set_decimal(f64::NAN), Err(TypeError::Incompatible));
    }

    #[test]
    fn test_set_nominal() {
        testing::install();

        let state = TypedValue::new(testing::STATE);
        assert_eq!(state.set_decimal(3.0), Err(TypeError::Incompatible));
        assert_eq!(state.set_integer(-1000), Err(TypeError::Incompatible));
        assert_eq!(state.set_nominal(10), Err(TypeError::OutOfRange));
        assert_eq!(state.set_nominal(-1), Err(TypeError::OutOfRange));

        let on = state.set_nominal(testing::STATE_ON).unwrap();
        assert_eq!(on.as_nominal(), testing::STATE_ON);
        assert_eq!(on.type_id(), testing::STATE);
    }

    #[test]
    fn test_setters_never_mutate_receiver() {
        testing::install();

        let lev = TypedValue::new(testing::LEVEL).set_integer(7).unwrap();
        let _ = lev.set_integer(9).unwrap();
        assert_eq!(lev.as_integer(), 7);
    }

    #[test]
    fn test_equality_ignores_stamp() {
        testing::install();

        let a = TypedValue::new(testing::LEVEL).set_integer(5).unwrap();
        let b = TypedValue::new(testing::LEVEL).set_integer(5).unwrap();
        assert_eq!(a, b);

        let c = TypedValue::new(testing::LEVEL).set_integer(6).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_text_integer_and_nominal() {
        testing::install();

        let huge = TypedValue::new(testing::HUGE)
            .set_integer(1234567890)
            .unwrap();
        assert_eq!(huge.to_text().as_str(), "1234567890");

        let neg = TypedValue::new(testing::HUGE).set_integer(-42).unwrap();
        assert_eq!(neg.to_text().as_str(), "-42");

        let off = TypedValue::new(testing::STATE)
            .set_nominal(testing::STATE_OFF)
            .unwrap();
        assert_eq!(off.to_text().as_str(), "1");
    }

    #[test]
    fn test_text_decimal_pads_to_precision() {
        testing::install();

        let khz = TypedValue::new(testing::KHZ);
        assert_eq!(khz.set_decimal(61234.32).unwrap().to_text().as_str(), "61234.320");
        assert_eq!(khz.set_decimal(61234.0).unwrap().to_text().as_str(), "61234.000");
        assert_eq!(khz.set_decimal(-2.125).unwrap().to_text().as_str(), "-2.125");
        // sign survives a zero units part
        assert_eq!(khz.set_decimal(-0.47).unwrap().to_text().as_str(), "-0.470");

        // precision 2: only two fraction digits rendered
        let coef = TypedValue::new(testing::COEF).set_decimal(3.1).unwrap();
        assert_eq!(coef.to_text().as_str(), "3.10");
    }

    #[test]
    fn test_text_fits_widest_values() {
        testing::install();

        let min = TypedValue::new(testing::HUGE).set_integer(i64::MIN).unwrap();
        assert_eq!(min.to_text().as_str(), "-9223372036854775808");
        assert!(min.to_text().len() <= TEXT_LEN);
    }

    #[test]
    fn test_to_decimal() {
        testing::install();

        let v = TypedValue::new(testing::KHZ).set_decimal(61234.32).unwrap();
        assert_eq!(v.to_decimal().to_string(), "61234.320");
    }

    proptest! {
        #[test]
        fn prop_integer_round_trip(n in -999i64..=1000) {
            testing::install();
            let v = TypedValue::new(testing::LEVEL).set_integer(n).unwrap();
            prop_assert_eq!(v.as_integer(), n);
        }

        #[test]
        fn prop_nominal_round_trip(code in 0i64..=2) {
            testing::install();
            let v = TypedValue::new(testing::STATE).set_nominal(code).unwrap();
            prop_assert_eq!(v.as_nominal(), code);
        }

        #[test]
        fn prop_decimal_truncates_toward_zero(f in -3.2f64..3.2) {
            testing::install();
            let v = TypedValue::new(testing::COEF).set_decimal(f).unwrap();
            let got = v.as_f64();
            // precision 2 loses strictly less than 0.01, always toward zero
            prop_assert!((f - got).abs() < 0.01 + 1e-9);
            prop_assert!(got.abs() <= f.abs() + 1e-9);
            prop_assert!(f == 0.0 || got == 0.0 || got.signum() == f.signum());
        }
    }
}
