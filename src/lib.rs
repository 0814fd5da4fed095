// ============================================================================
// Strong Types Library
// Runtime-enforced typing for scalar values in control-style software
// ============================================================================

//! # Strong Types
//!
//! A strongly-typed numeric value layer for embedded and control-style
//! software where floating-point drift and silent overflow are unacceptable.
//!
//! ## Features
//!
//! - **Closed set of domains**: Nominal (categorical), Integer, and
//!   fixed-point Decimal, declared once in a process-wide registry
//! - **Validated setters** that reject range and category violations as
//!   recoverable statuses instead of corrupting data
//! - **Overflow-aware arithmetic** over same-typed values; inputs are never
//!   mutated, every operation yields a fresh value
//! - **Canonical fixed-point formatting** into a bounded buffer
//! - **Optional modification stamps** from a caller-supplied monotonic clock
//!   (feature `timestamp`, on by default)
//!
//! ## Example
//!
//! ```rust
//! use strongtypes::prelude::*;
//!
//! const LEVEL: TypeId = TypeId::new(0);
//! const COEF: TypeId = TypeId::new(1);
//!
//! // Declared once at startup; the table outlives every value.
//! let table = vec![
//!     TypeConfig::integer(-999, 1000),
//!     TypeConfig::decimal(dec_raw(-3.2), dec_raw(3.2), 2),
//! ];
//! configure(Box::leak(table.into_boxed_slice()));
//!
//! let level = TypedValue::new(LEVEL).set_integer(42)?;
//! let doubled = level.sum(level)?;
//! assert_eq!(doubled.as_integer(), 84);
//!
//! // Decimals truncate toward zero to the declared precision.
//! let coef = TypedValue::new(COEF).set_decimal(3.1477)?;
//! assert_eq!(coef.to_text().as_str(), "3.14");
//! # Ok::<(), strongtypes::value::TypeError>(())
//! ```

#[cfg(feature = "timestamp")]
pub mod clock;
pub mod registry;
pub mod value;

#[cfg(test)]
pub(crate) mod testing;

// Re-exports for convenience
pub mod prelude {
    #[cfg(feature = "timestamp")]
    pub use crate::clock::Millis;
    pub use crate::registry::{
        configure, dec_raw, Category, TypeConfig, DECIMAL_DIGITS, DECIMAL_SCALE,
    };
    pub use crate::value::{RawValue, TypeError, TypeId, TypeResult, TypedValue};
}
