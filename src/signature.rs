//! Structured representation of a parsed method signature.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single `type name` pair from the argument list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Argument {
    #[serde(rename = "type")]
    type_name: String,
    name: String,
}

impl Argument {
    pub fn new(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            name: name.into(),
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.type_name, self.name)
    }
}

/// A method declaration broken into its parts.
///
/// `access_modifier` is `None` when the declaration had no modifier slot;
/// it serializes as `null`, never as an empty string.
///
/// Non-empty `method_name` and `return_type` are guaranteed only for values
/// produced by [`parse_signature`](crate::parse_signature). [`new`](Self::new),
/// the setters and `Deserialize` store whatever they are given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MethodSignature {
    method_name: String,
    return_type: String,
    access_modifier: Option<String>,
    arguments: Vec<Argument>,
}

impl MethodSignature {
    /// Create a signature with no modifier and no arguments.
    pub fn new(method_name: impl Into<String>, return_type: impl Into<String>) -> Self {
        Self {
            method_name: method_name.into(),
            return_type: return_type.into(),
            access_modifier: None,
            arguments: Vec::new(),
        }
    }

    pub fn method_name(&self) -> &str {
        &self.method_name
    }

    pub fn return_type(&self) -> &str {
        &self.return_type
    }

    pub fn set_return_type(&mut self, return_type: impl Into<String>) {
        self.return_type = return_type.into();
    }

    pub fn access_modifier(&self) -> Option<&str> {
        self.access_modifier.as_deref()
    }

    pub fn set_access_modifier(&mut self, access_modifier: Option<String>) {
        self.access_modifier = access_modifier;
    }

    /// Arguments in declaration order.
    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    pub fn arguments_mut(&mut self) -> &mut Vec<Argument> {
        &mut self.arguments
    }

    pub fn push_argument(&mut self, argument: Argument) {
        self.arguments.push(argument);
    }

    /// Builder-style variant of [`set_access_modifier`](Self::set_access_modifier).
    #[must_use]
    pub fn with_access_modifier(mut self, access_modifier: impl Into<String>) -> Self {
        self.access_modifier = Some(access_modifier.into());
        self
    }

    /// Builder-style variant of [`push_argument`](Self::push_argument).
    #[must_use]
    pub fn with_argument(mut self, type_name: impl Into<String>, name: impl Into<String>) -> Self {
        self.arguments.push(Argument::new(type_name, name));
        self
    }
}

/// Renders the canonical single-line form, e.g. `public void log(String value)`.
///
/// When every part is a single non-empty token without whitespace, commas or
/// parentheses, parsing the rendered text gives back an equal signature.
/// Other values (an empty modifier, a type containing a space) do not survive
/// the trip.
impl fmt::Display for MethodSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(modifier) = &self.access_modifier {
            write!(f, "{} ", modifier)?;
        }
        write!(f, "{} {}(", self.return_type, self.method_name)?;
        for (i, argument) in self.arguments.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", argument)?;
        }
        f.write_str(")")
    }
}
