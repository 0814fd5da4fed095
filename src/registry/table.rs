// ============================================================================
// Registry Table
// One-time global installation of the type table, lock-free lookup after
// ============================================================================

use super::config::{Category, TypeConfig, DECIMAL_DIGITS};
use crate::value::TypeId;
use std::sync::OnceLock;

/// The installed table. Written exactly once by [`configure`]; every read
/// afterwards is lock-free.
static REGISTRY: OnceLock<&'static [TypeConfig]> = OnceLock::new();

/// Install `table` as the process-wide source of truth for type lookups.
///
/// Must be called exactly once, before any [`TypedValue`] is created. The
/// caller owns the table and must keep it alive and unmodified for the
/// process lifetime; the registry holds only the borrow.
///
/// # Panics
/// Panics on a malformed table (range inversion, precision out of bounds,
/// precision/category mismatch) or on a second call. Both are startup
/// contract violations, not runtime conditions.
///
/// [`TypedValue`]: crate::value::TypedValue
pub fn configure(table: &'static [TypeConfig]) {
    validate(table);

    if REGISTRY.set(table).is_err() {
        panic!("type registry already configured");
    }

    tracing::debug!(types = table.len(), "type registry installed");
}

/// Startup sanity checks over every entry of the table.
fn validate(table: &[TypeConfig]) {
    for (id, cfg) in table.iter().enumerate() {
        // equal bounds are legal: a Nominal type with a single code
        assert!(
            cfg.range_min <= cfg.range_max,
            "type {id}: range_min {} above range_max {}",
            cfg.range_min,
            cfg.range_max
        );
        assert!(
            cfg.precision <= DECIMAL_DIGITS,
            "type {id}: precision {} above {DECIMAL_DIGITS}",
            cfg.precision
        );
        match cfg.category {
            Category::Decimal => assert!(
                cfg.precision >= 1,
                "type {id}: decimal type needs a precision of at least 1"
            ),
            Category::Nominal | Category::Integer => assert!(
                cfg.precision == 0,
                "type {id}: precision {} on a non-decimal type",
                cfg.precision
            ),
        }
    }
}

/// Whether `ty` indexes a registered type.
#[inline]
pub fn is_registered(ty: TypeId) -> bool {
    match REGISTRY.get() {
        Some(table) => ty.index() < table.len(),
        None => false,
    }
}

/// Look up the configuration of a registered type.
///
/// # Panics
/// Panics if the registry is not configured or `ty` is out of bounds;
/// both are programmer errors, never user input.
#[inline]
pub(crate) fn config_for(ty: TypeId) -> &'static TypeConfig {
    let table = REGISTRY
        .get()
        .expect("type registry not configured; call registry::configure first");
    &table[ty.index()]
}
