// ============================================================================
// Arithmetic Engine
// Overflow-aware sum / mul / div over same-typed values
// ============================================================================

use super::errors::{TypeError, TypeResult};
use super::typed_value::{RawValue, TypeId, TypedValue};
use crate::registry::{self, Category, TypeConfig, DECIMAL_DIGITS, DECIMAL_SCALE};

impl TypedValue {
    /// Range-check a computed raw store and stamp the output.
    fn checked(ty: TypeId, raw: RawValue, cfg: &TypeConfig) -> TypeResult {
        let out = Self::stamped(ty, raw);
        if !cfg.contains(raw) {
            return Err(TypeError::OutOfRange);
        }
        Ok(out)
    }

    /// Add two values of the same type.
    ///
    /// Integer and Decimal stores share one representation, so a single
    /// checked addition covers both categories.
    ///
    /// # Errors
    /// `Incompatible` on differing types or Nominal operands; `OutOfRange`
    /// when the raw store overflows or the sum leaves the declared range.
    pub fn sum(self, rhs: Self) -> TypeResult {
        debug_assert!(self.in_range(), "left operand violates its range invariant");
        debug_assert!(rhs.in_range(), "right operand violates its range invariant");

        if self.ty != rhs.ty {
            return Err(TypeError::Incompatible);
        }

        let cfg = registry::config_for(self.ty);
        match cfg.category {
            Category::Nominal => Err(TypeError::Incompatible),
            Category::Integer | Category::Decimal => {
                let raw = self
                    .raw
                    .checked_add(rhs.raw)
                    .ok_or(TypeError::OutOfRange)?;
                Self::checked(self.ty, raw, cfg)
            },
        }
    }

    /// Multiply two values of the same type.
    ///
    /// Decimal multiplication checks the raw stores' product for overflow
    /// BEFORE rescaling. A product that overflows the raw store is reported
    /// `OutOfRange` even when the rescaled result would have fit the
    /// declared range; existing fixtures depend on this ordering.
    ///
    /// # Errors
    /// `Incompatible` on differing types or Nominal operands; `OutOfRange`
    /// on raw-store overflow or a declared-range violation.
    pub fn mul(self, rhs: Self) -> TypeResult {
        debug_assert!(self.in_range(), "left operand violates its range invariant");
        debug_assert!(rhs.in_range(), "right operand violates its range invariant");

        if self.ty != rhs.ty {
            return Err(TypeError::Incompatible);
        }

        let cfg = registry::config_for(self.ty);
        match cfg.category {
            Category::Nominal => Err(TypeError::Incompatible),
            Category::Integer => {
                let raw = self
                    .raw
                    .checked_mul(rhs.raw)
                    .ok_or(TypeError::OutOfRange)?;
                Self::checked(self.ty, raw, cfg)
            },
            Category::Decimal => {
                // unscaled product carries the scale twice
                let unscaled = self
                    .raw
                    .checked_mul(rhs.raw)
                    .ok_or(TypeError::OutOfRange)?;
                Self::checked(self.ty, unscaled / DECIMAL_SCALE, cfg)
            },
        }
    }

    /// Divide two values of the same type, truncating toward zero.
    ///
    /// A zero divisor is `OutOfRange`; there is no separate division-by-zero
    /// kind. Decimal division runs in a widened i128 intermediate so the
    /// rescale cannot overflow prematurely, then truncates the quotient to
    /// the type's declared precision like [`set_decimal`].
    ///
    /// # Errors
    /// `Incompatible` on differing types or Nominal operands; `OutOfRange`
    /// on a zero divisor, raw-store overflow, or a declared-range violation.
    ///
    /// [`set_decimal`]: TypedValue::set_decimal
    pub fn div(self, rhs: Self) -> TypeResult {
        debug_assert!(self.in_range(), "left operand violates its range invariant");
        debug_assert!(rhs.in_range(), "right operand violates its range invariant");

        if self.ty != rhs.ty {
            return Err(TypeError::Incompatible);
        }

        let cfg = registry::config_for(self.ty);
        if cfg.category != Category::Nominal && rhs.raw == 0 {
            return Err(TypeError::OutOfRange);
        }

        match cfg.category {
            Category::Nominal => Err(TypeError::Incompatible),
            Category::Integer => {
                // checked_div also rejects the MIN / -1 overflow
                let raw = self
                    .raw
                    .checked_div(rhs.raw)
                    .ok_or(TypeError::OutOfRange)?;
                Self::checked(self.ty, raw, cfg)
            },
            Category::Decimal => {
                let wide =
                    (self.raw as i128) * (DECIMAL_SCALE as i128) / (rhs.raw as i128);
                let cut = registry::pow10(DECIMAL_DIGITS - cfg.precision) as i128;
                let raw = RawValue::try_from(wide / cut * cut)
                    .map_err(|_| TypeError::OutOfRange)?;
                Self::checked(self.ty, raw, cfg)
            },
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
