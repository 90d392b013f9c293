//! Shared fixtures for integration tests.

use rstest::fixture;
use sigparse::{MethodSignature, Splitter, TieBreak};

/// Signatures from the reference examples with their expected parse results.
#[allow(dead_code)] // Not every integration test crate uses every fixture
pub fn reference_signatures() -> Vec<(&'static str, MethodSignature)> {
    vec![
        (
            "private void log(String value)",
            MethodSignature::new("log", "void")
                .with_access_modifier("private")
                .with_argument("String", "value"),
        ),
        (
            "Vector3 distort(int x, int y, int z, float magnitude)",
            MethodSignature::new("distort", "Vector3")
                .with_argument("int", "x")
                .with_argument("int", "y")
                .with_argument("int", "z")
                .with_argument("float", "magnitude"),
        ),
        (
            "public DateTime getCurrentDateTime()",
            MethodSignature::new("getCurrentDateTime", "DateTime").with_access_modifier("public"),
        ),
    ]
}

/// A splitter over common punctuation with an overlapping pair (`<` / `<=`).
#[allow(dead_code)]
#[fixture]
pub fn punctuation_splitter() -> Splitter {
    sigparse::tracing::init();
    Splitter::with_tie_break([",", ";", " ", "<", "<="], TieBreak::LongestFirst)
        .expect("punctuation delimiters are valid")
}
