//! Parsing of single-line, Java-style method signatures.
//!
//! - [`parse_signature`] turns `public void log(String value)` into a
//!   [`MethodSignature`].
//! - [`Splitter`] and [`split_by_delimiters`] split a string on several
//!   delimiters at once, dropping empty segments.

pub mod error;
pub mod parser;
pub mod signature;
pub mod split;
pub mod tracing;

pub use error::{SignatureError, SplitError};
pub use parser::parse_signature;
pub use signature::{Argument, MethodSignature};
pub use split::{Piece, Pieces, Split, Splitter, TieBreak, split_by_delimiters};
