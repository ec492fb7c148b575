//! Carton Shared - error taxonomy and text-encoding primitives
//!
//! This crate contains the pieces used by every carton crate:
//! the error types, the constants of the brace-delimited text grammar,
//! and the low-level tokenizer/writer both `Dimensions` and `Carton`
//! encodings are built on.

pub mod codec;
pub mod constants;
pub mod errors;

pub use codec::{Reader, ValueWriter};
pub use errors::{CartonError, CartonResult, ParseError, TransitionError};
