//! Error handling types and utilities.

use thiserror::Error;

/// A specialized Result type for callers mixing sigparse operations.
///
/// This is an alias for `anyhow::Result`; both [`SplitError`] and
/// [`SignatureError`] convert into it with `?`.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when a [`Splitter`](crate::Splitter) cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplitError {
    /// No delimiters were supplied.
    #[error("Delimiter list is empty")]
    EmptyDelimiters,
    /// A zero-length delimiter was supplied; it would match everywhere without consuming input.
    #[error("Delimiter at position {index} is an empty string")]
    EmptyDelimiter { index: usize },
}

/// Error returned when a method signature string is rejected.
///
/// Any variant means no [`MethodSignature`](crate::MethodSignature) was produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    /// The input string was empty.
    #[error("Invalid signature: input is empty")]
    EmptyInput,
    /// No `(`, no `)` after it, or the closing brace precedes the opening one.
    #[error("Invalid signature: argument braces are missing or misordered")]
    MissingBraces,
    /// Fewer than two whitespace-separated tokens before the opening brace.
    #[error("Invalid signature: missing method name or return type")]
    MissingNameOrReturnType,
    /// An argument descriptor did not split into exactly a type and a name.
    #[error("Invalid signature: malformed argument descriptor #{position} '{descriptor}'")]
    MalformedArgument { position: usize, descriptor: String },
}
