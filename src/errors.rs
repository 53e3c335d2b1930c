//! Errors and error-related utilities.

use std::{error, fmt, result};

/// The result type used throughout this library.
///
/// Errors are `Send + Sync` so that corpus construction can run on worker
/// threads and report failures back to the coordinating thread.
pub type Result<T> = result::Result<T, Box<dyn error::Error + Send + Sync>>;

/// Raw bytes could not be decoded, or the input was empty.
#[derive(Debug)]
pub struct DecodeError(pub String);

/// Type/token ratio requested for a vocabulary with no words.
#[derive(Debug)]
pub struct DivisionUndefined(pub String);

/// Invalid input.
#[derive(Debug)]
pub struct InvalidInput(pub String);

/// Invalid command line argument.
#[derive(Debug)]
pub struct InvalidArgument(pub String);

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "decode error: {}", self.0)
    }
}

impl fmt::Display for DivisionUndefined {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "division undefined: {}", self.0)
    }
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid input: {}", self.0)
    }
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid argument: {}", self.0)
    }
}

impl error::Error for DecodeError {}

impl error::Error for DivisionUndefined {}

impl error::Error for InvalidInput {}

impl error::Error for InvalidArgument {}

/// A helper for constructing [DecodeError].
pub fn decode_error(s: String) -> Box<dyn error::Error + Send + Sync> {
    DecodeError(s).into()
}

/// A helper for constructing [DecodeError].
pub fn decode_error_ref(s: &str) -> Box<dyn error::Error + Send + Sync> {
    DecodeError(s.to_owned()).into()
}

/// A helper for constructing [DivisionUndefined].
pub fn division_undefined_ref(s: &str) -> Box<dyn error::Error + Send + Sync> {
    DivisionUndefined(s.to_owned()).into()
}

/// A helper for constructing [InvalidInput].
pub fn invalid_input_ref(s: &str) -> Box<dyn error::Error + Send + Sync> {
    InvalidInput(s.to_owned()).into()
}

/// A helper for constructing [InvalidArgument].
pub fn invalid_argument(s: String) -> Box<dyn error::Error + Send + Sync> {
    InvalidArgument(s).into()
}
