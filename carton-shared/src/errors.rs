//! Error types for carton operations.
//!
//! Errors are grouped by where they are detected:
//! - [`TransitionError`]: an operation is not allowed in the current lifecycle state
//! - [`ParseError`]: encoded text is malformed or unrecognized
//! - [`CartonError`]: top-level error returned by every fallible operation
//!
//! ```ignore
//! match carton.close() {
//!     Err(CartonError::InvalidStateTransition(_)) => { /* caller ordering bug */ }
//!     Err(CartonError::ItemTooTallToClose { .. }) => { /* take the item out first */ }
//!     _ => {}
//! }
//! ```

use thiserror::Error;

// ============================================================================
// Top-Level Error
// ============================================================================

/// Errors that can occur while building, mutating or decoding cartons.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartonError {
    /// A dimensions value with a non-positive field was consumed.
    #[error("dimensions contain an invalid (non-positive) value: {0}")]
    InvalidDimensions(String),

    /// Operation invoked on a carton that was never initialized.
    #[error("attempted to use an uninitialized carton")]
    UninitializedUsage,

    /// `init` invoked on an already initialized carton.
    #[error("attempted to initialize an already initialized carton")]
    DoubleInitialization,

    /// Operation not allowed in the current open/closed, empty/full state.
    #[error("invalid state transition: {0}")]
    InvalidStateTransition(#[from] TransitionError),

    /// Item footprint exceeds the carton footprint.
    #[error("item {item} does not fit into a carton of size {size}")]
    ItemDoesNotFit { item: String, size: String },

    /// Stored item is taller than the carton, so the lid cannot close.
    #[error("cannot close carton because the item inside is too tall ({item_height} > {height})")]
    ItemTooTallToClose { item_height: i32, height: i32 },

    /// Encoded text could not be decoded.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The factory's id counter reached the top of the `u64` range.
    #[error("no carton ids left to allocate")]
    IdsExhausted,

    /// Options are invalid or could not be read.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for carton operations.
pub type CartonResult<T> = Result<T, CartonError>;

// ============================================================================
// Transition Errors
// ============================================================================

/// Lifecycle operations rejected by the open/closed, empty/full state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("cannot open an already opened carton")]
    AlreadyOpened,

    #[error("cannot close an already closed carton")]
    AlreadyClosed,

    #[error("cannot put an item into a closed carton")]
    PutIntoClosed,

    #[error("cannot put an item into a full carton")]
    PutIntoFull,

    #[error("cannot take an item from a closed carton")]
    TakeFromClosed,

    #[error("there is nothing to take from the carton")]
    TakeFromEmpty,
}

// ============================================================================
// Parse Errors
// ============================================================================

/// Errors raised by the text decoder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A structural mark was expected but something else was found.
    #[error("invalid symbol in stream ({found}) at offset {offset}")]
    InvalidSymbol { found: char, offset: usize },

    /// A field name that the value being decoded does not know.
    #[error("unknown value in stream ({0})")]
    UnknownValue(String),

    /// A known field carries a scalar of the wrong shape.
    #[error("invalid value for field {field} ({token})")]
    InvalidValue { field: &'static str, token: String },

    /// A required field never appeared.
    #[error("missing field {0}")]
    MissingField(&'static str),

    /// Input ended in the middle of a value.
    #[error("unexpected end of stream")]
    UnexpectedEnd,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_error_display() {
        let error: CartonError = TransitionError::AlreadyOpened.into();
        assert_eq!(
            error.to_string(),
            "invalid state transition: cannot open an already opened carton"
        );
    }

    #[test]
    fn test_parse_error_conversion() {
        let error: CartonError = ParseError::UnknownValue("colour".to_string()).into();
        assert!(matches!(error, CartonError::Parse(ParseError::UnknownValue(_))));
        assert_eq!(error.to_string(), "parse error: unknown value in stream (colour)");
    }

    #[test]
    fn test_invalid_symbol_display() {
        let error = ParseError::InvalidSymbol {
            found: ';',
            offset: 7,
        };
        assert_eq!(error.to_string(), "invalid symbol in stream (;) at offset 7");
    }

    #[test]
    fn test_item_too_tall_display() {
        let error = CartonError::ItemTooTallToClose {
            item_height: 12,
            height: 10,
        };
        assert_eq!(
            error.to_string(),
            "cannot close carton because the item inside is too tall (12 > 10)"
        );
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_err() -> CartonResult<()> {
            Err(CartonError::UninitializedUsage)
        }

        assert_eq!(returns_err(), Err(CartonError::UninitializedUsage));
    }
}
