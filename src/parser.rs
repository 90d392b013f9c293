//! Parser for single-line, Java-style method signatures.
//!
//! Grammar handled:
//!
//! ```text
//! [modifier] returnType methodName(type1 name1, type2 name2, ...)
//! ```
//!
//! - Only the first `(` and the first `)` delimit the argument list, and the
//!   `)` must come after the `(`; text after the closing brace is ignored.
//! - Of the prefix tokens, the last is the method name, the one before it the
//!   return type and the third-from-last the access modifier. Anything further
//!   left (annotations, extra modifiers) is discarded.
//! - No generics, arrays, varargs or nested parentheses.

use crate::error::SignatureError;
use crate::signature::{Argument, MethodSignature};
use std::str::FromStr;

/// Parse `signature` into a [`MethodSignature`].
///
/// The whole parse fails on the first violation; no partial result is returned.
///
/// # Examples
///
/// ```
/// let signature = sigparse::parse_signature("public void log(String value)").unwrap();
/// assert_eq!(signature.method_name(), "log");
/// assert_eq!(signature.return_type(), "void");
/// assert_eq!(signature.access_modifier(), Some("public"));
/// assert_eq!(signature.arguments()[0].type_name(), "String");
/// ```
pub fn parse_signature(signature: &str) -> Result<MethodSignature, SignatureError> {
    let result = parse_inner(signature);
    if let Err(e) = &result {
        tracing::debug!(signature, error = %e, "Rejected method signature");
    }
    result
}

fn parse_inner(signature: &str) -> Result<MethodSignature, SignatureError> {
    if signature.is_empty() {
        return Err(SignatureError::EmptyInput);
    }

    let (open, close) = locate_braces(signature).ok_or(SignatureError::MissingBraces)?;

    let mut method = parse_prefix(&signature[..open])?;
    for argument in parse_arguments(&signature[open + 1..close])? {
        method.push_argument(argument);
    }

    tracing::trace!(
        method_name = method.method_name(),
        argument_count = method.arguments().len(),
        "Parsed method signature"
    );

    Ok(method)
}

/// Byte offsets of the first `(` and the first `)`.
///
/// A `)` anywhere before the first `(` makes the braces misordered.
fn locate_braces(signature: &str) -> Option<(usize, usize)> {
    let open = signature.find('(')?;
    let close = signature.find(')')?;
    (open < close).then_some((open, close))
}

/// Extract method name, return type and access modifier from the text before `(`.
fn parse_prefix(prefix: &str) -> Result<MethodSignature, SignatureError> {
    let tokens: Vec<&str> = prefix.split_whitespace().collect();

    let [.., return_type, method_name] = tokens.as_slice() else {
        return Err(SignatureError::MissingNameOrReturnType);
    };

    let mut method = MethodSignature::new(*method_name, *return_type);
    if let [.., modifier, _, _] = tokens.as_slice() {
        method.set_access_modifier(Some((*modifier).to_owned()));
    }
    Ok(method)
}

/// Parse the text strictly between the braces into arguments.
///
/// Empty content means no arguments. Otherwise every comma-separated
/// descriptor must be exactly `type name`; this includes the empty descriptor
/// left by a trailing comma and all-whitespace content such as `( )`.
fn parse_arguments(content: &str) -> Result<Vec<Argument>, SignatureError> {
    if content.is_empty() {
        return Ok(Vec::new());
    }

    content
        .split(',')
        .enumerate()
        .map(|(position, descriptor)| parse_argument(position, descriptor))
        .collect()
}

fn parse_argument(position: usize, descriptor: &str) -> Result<Argument, SignatureError> {
    let mut tokens = descriptor.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(type_name), Some(name), None) => Ok(Argument::new(type_name, name)),
        _ => Err(SignatureError::MalformedArgument {
            position,
            descriptor: descriptor.to_owned(),
        }),
    }
}

impl FromStr for MethodSignature {
    type Err = SignatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_signature(s)
    }
}
