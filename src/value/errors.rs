// ============================================================================
// Value Errors
// Recoverable failures of setters and arithmetic
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Recoverable failure of a setter or arithmetic operation.
///
/// These are ordinary outcomes of user-supplied input and never abort the
/// process. Programmer errors (unregistered type ids, malformed registry
/// tables) panic instead and are deliberately kept out of this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TypeError {
    /// Candidate value violates the declared range, or the raw store
    /// overflowed (division by zero is reported here as well)
    OutOfRange,
    /// Operation undefined for the value's category, or the operand types
    /// differ
    Incompatible,
}

impl fmt::Display for TypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeError::OutOfRange => {
                write!(f, "out of range: value violates the declared bounds")
            },
            TypeError::Incompatible => {
                write!(f, "incompatible: operation undefined for this type")
            },
        }
    }
}

impl std::error::Error for TypeError {}

/// Result type alias for setter and arithmetic operations
pub type TypeResult = Result<super::TypedValue, TypeError>;
