// ============================================================================
// Test Fixtures
// Shared registry table and mock clock for the test process
// ============================================================================

use crate::registry::{self, dec_raw, TypeConfig};
use crate::value::{RawValue, TypeId};
use std::sync::Once;

#[cfg(feature = "timestamp")]
use crate::clock::Millis;
#[cfg(feature = "timestamp")]
use std::sync::atomic::{AtomicU64, Ordering};

pub const HUGE: TypeId = TypeId::new(0);
pub const LEVEL: TypeId = TypeId::new(1);
pub const POWER: TypeId = TypeId::new(2);
pub const COEF: TypeId = TypeId::new(3);
pub const STATE: TypeId = TypeId::new(4);
pub const KHZ: TypeId = TypeId::new(5);
pub const WIDE: TypeId = TypeId::new(6);

pub const STATE_ON: RawValue = 0;
pub const STATE_OFF: RawValue = 1;

static INSTALL: Once = Once::new();

/// Install the shared table (and the mock clock). The registry is
/// process-wide and write-once, so every test funnels through this.
pub fn install() {
    INSTALL.call_once(|| {
        let table = vec![
            TypeConfig::integer(i64::MIN, i64::MAX),
            TypeConfig::integer(-999, 1000),
            TypeConfig::integer(0, 100),
            TypeConfig::decimal(dec_raw(-3.2), dec_raw(3.2), 2),
            TypeConfig::nominal(2),
            TypeConfig::decimal(dec_raw(-65536.0), dec_raw(65536.0), 3),
            TypeConfig::decimal(i64::MIN, i64::MAX, 3),
        ];
        registry::configure(Box::leak(table.into_boxed_slice()));

        #[cfg(feature = "timestamp")]
        crate::clock::install(mock_now);
    });
}

#[cfg(feature = "timestamp")]
static MOCK_MS: AtomicU64 = AtomicU64::new(0);

#[cfg(feature = "timestamp")]
fn mock_now() -> Millis {
    MOCK_MS.load(Ordering::Relaxed)
}

/// Advance the mock clock. Only the timestamp test reads stamps, so the
/// shared counter does not race with other tests' assertions.
#[cfg(feature = "timestamp")]
pub fn set_time(ms: Millis) {
    MOCK_MS.store(ms, Ordering::Relaxed);
}
