// ============================================================================
// Monotonic Clock
// Caller-supplied time source for the timestamp extension
// ============================================================================

use std::sync::OnceLock;

/// Elapsed time units reported by the installed clock. The unit is whatever
/// the caller's source counts in; milliseconds by convention.
pub type Millis = u64;

/// The installed time source. Write-once, like the registry.
static CLOCK: OnceLock<fn() -> Millis> = OnceLock::new();

/// Install the monotonic time source.
///
/// The function must be non-decreasing across calls; wrap-around handling is
/// the caller's responsibility. It is read exactly once per mutating
/// operation (`set_*`, `sum`, `mul`, `div`) and never by accessors or the
/// formatter. Without an installed source every stamp is `0`.
///
/// # Panics
/// Panics on a second installation.
pub fn install(source: fn() -> Millis) {
    if CLOCK.set(source).is_err() {
        panic!("monotonic clock already installed");
    }
}

/// Current reading of the installed source, `0` when none is installed.
#[inline]
pub(crate) fn now() -> Millis {
    match CLOCK.get() {
        Some(source) => source(),
        None => 0,
    }
}
