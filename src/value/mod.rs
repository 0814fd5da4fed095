// ============================================================================
// Value Module
// Tagged scalar values, validated setters, arithmetic, canonical text
// ============================================================================

mod arithmetic;
mod errors;
mod typed_value;

pub use errors::{TypeError, TypeResult};
pub use typed_value::{RawValue, TypeId, TypedValue, TEXT_LEN};
