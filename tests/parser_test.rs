mod common;

use assert2::{check, let_assert};
use common::reference_signatures;
use proptest::prelude::*;
use rstest::rstest;
use sigparse::{Argument, MethodSignature, SignatureError, parse_signature};

/// Test: Each reference signature parses to its expected structure.
#[test]
fn reference_signatures_parse() {
    sigparse::tracing::init();
    for (input, expected) in reference_signatures() {
        let_assert!(Ok(parsed) = parse_signature(input));
        check!(parsed == expected, "input: {}", input);
    }
}

/// Test: Rendering a parsed signature yields its canonical source form.
#[test]
fn display_reproduces_reference_input() {
    for (input, expected) in reference_signatures() {
        check!(expected.to_string() == input);
    }
}

/// Test: Re-parsing the rendered form gives back an equal signature.
#[rstest]
#[case("  public   static  int max( int a ,int b )")]
#[case("void noop()")]
#[case("final protected Map lookup(String key)")]
fn display_then_parse_is_stable(#[case] input: &str) {
    let_assert!(Ok(first) = parse_signature(input));
    let_assert!(Ok(second) = parse_signature(&first.to_string()));
    check!(first == second);
}

#[rstest]
#[case("", "Invalid signature: input is empty")]
#[case("void run", "Invalid signature: argument braces are missing or misordered")]
#[case("main()", "Invalid signature: missing method name or return type")]
#[case("void f(int)", "Invalid signature: malformed argument descriptor #0 'int'")]
fn error_messages(#[case] input: &str, #[case] message: &str) {
    let_assert!(Err(e) = parse_signature(input));
    check!(e.to_string() == message);
}

/// Test: Parsed signatures serialize with a `null` modifier when absent.
#[test]
fn parsed_signature_serializes_to_json() {
    let_assert!(Ok(method) = "Vector3 distort(int x)".parse::<MethodSignature>());
    let_assert!(Ok(value) = serde_json::to_value(&method));
    check!(value["access_modifier"].is_null());
    check!(value["arguments"][0]["type"] == "int");
    check!(value["arguments"][0]["name"] == "x");
}

#[test]
fn malformed_argument_aborts_whole_parse() {
    let result = parse_signature("public void f(int a, int b, c)");
    check!(
        result
            == Err(SignatureError::MalformedArgument {
                position: 2,
                descriptor: " c".to_string(),
            })
    );
}

fn identifier() -> impl Strategy<Value = String> {
    "[A-Za-z_][A-Za-z0-9_]{0,8}"
}

fn signature_strategy() -> impl Strategy<Value = MethodSignature> {
    (
        identifier(),
        identifier(),
        prop::option::of(identifier()),
        prop::collection::vec((identifier(), identifier()), 0..5),
    )
        .prop_map(|(name, return_type, modifier, arguments)| {
            let mut method = MethodSignature::new(name, return_type);
            method.set_access_modifier(modifier);
            for (type_name, arg_name) in arguments {
                method.push_argument(Argument::new(type_name, arg_name));
            }
            method
        })
}

proptest! {
    /// Property: Any well-formed signature survives a render/parse cycle.
    #[test]
    fn rendered_signature_parses_back(method in signature_strategy()) {
        let parsed = parse_signature(&method.to_string());
        prop_assert_eq!(parsed, Ok(method));
    }

    /// Property: Parsing is deterministic for arbitrary input.
    #[test]
    fn parse_is_idempotent(input in "[a-z (),]{0,30}") {
        prop_assert_eq!(parse_signature(&input), parse_signature(&input));
    }

    /// Property: A successful parse never yields an empty name or return type.
    #[test]
    fn parsed_name_and_return_type_non_empty(input in "[a-z (),]{0,30}") {
        if let Ok(method) = parse_signature(&input) {
            prop_assert!(!method.method_name().is_empty());
            prop_assert!(!method.return_type().is_empty());
        }
    }
}
