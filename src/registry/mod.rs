// ============================================================================
// Registry Module
// Immutable process-wide table of declared value domains
// ============================================================================

mod config;
mod table;

pub use config::{dec_raw, Category, TypeConfig, DECIMAL_DIGITS, DECIMAL_SCALE};
pub use table::{configure, is_registered};

pub(crate) use config::pow10;
pub(crate) use table::config_for;
