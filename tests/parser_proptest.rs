//! Property-based tests for the parser
//!
//! Random process trees are printed as source, re-spaced with random trivia and parsed
//! back. Every printable tree must come back unchanged, with exactly one derivation.

use proptest::prelude::*;
use rhoxy_parser::rhoxy::ast::{Proc, Variable};
use rhoxy_parser::rhoxy::formats::to_source;
use rhoxy_parser::rhoxy::lexing::tokenize_with_spans;
use rhoxy_parser::rhoxy::parsing::{parse_process, ProcessParser};

const KEYWORDS: [&str; 8] = ["Nil", "true", "false", "for", "new", "in", "lookup", "bundle"];

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_]{0,6}".prop_filter("keywords are reserved", |name| {
        !KEYWORDS.contains(&name.as_str())
    })
}

fn uri_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[a-z]{1,5}(:[a-z]{1,5}){0,2}")
}

fn leaf_strategy() -> impl Strategy<Value = Proc> {
    prop_oneof![
        Just(Proc::Nil),
        any::<i64>().prop_map(Proc::int),
        "[a-z ]{0,8}".prop_map(Proc::string),
        any::<bool>().prop_map(Proc::bool),
    ]
}

fn proc_strategy() -> impl Strategy<Value = Proc> {
    leaf_strategy().prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone())
                .prop_map(|(chan, message)| Proc::send(chan, message)),
            (
                prop::collection::vec((name_strategy(), inner.clone()), 1..4),
                inner.clone()
            )
                .prop_map(|(bindings, body)| Proc::join(bindings, body)),
            prop::collection::vec(inner.clone(), 2..5).prop_map(Proc::par_of),
            (
                prop::collection::vec((name_strategy(), uri_strategy()), 1..4),
                inner.clone()
            )
                .prop_map(|(decls, body)| {
                    let vars = decls
                        .into_iter()
                        .map(|(name, uri)| match uri {
                            Some(uri) => Variable::with_uri(name, uri),
                            None => Variable::new(name),
                        })
                        .collect();
                    Proc::new_vars(vars, body)
                }),
            inner.prop_map(Proc::bundle),
        ]
    })
}

fn trivia_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just(" "),
        Just("\n"),
        Just("\t\t"),
        Just("  \n  "),
        Just("/* c */"),
        Just("/**/"),
        Just("/* multi\n line */"),
        Just("// note\n"),
    ]
}

/// Rebuild source from its significant tokens, with the given trivia around every token
fn respace(source: &str, trivia: &[&str]) -> String {
    let mut out = String::from(trivia[0]);
    let mut i = 1;
    for (token, span) in tokenize_with_spans(source) {
        let token = token.expect("printed source to lex");
        if token.is_trivia() {
            continue;
        }
        out.push_str(&source[span]);
        out.push_str(trivia[i % trivia.len()]);
        i += 1;
    }
    out
}

proptest! {
    #[test]
    fn test_printed_source_parses_back(proc in proc_strategy()) {
        let printed = to_source(&proc).expect("generated trees to be printable");
        let derivations = ProcessParser::new().parse(&printed).expect("printed source to parse");
        prop_assert_eq!(derivations.len(), 1);
        prop_assert_eq!(derivations.into_unique().unwrap(), proc);
    }

    #[test]
    fn test_trivia_never_changes_the_tree(
        proc in proc_strategy(),
        trivia in prop::collection::vec(trivia_strategy(), 1..6),
    ) {
        let printed = to_source(&proc).expect("generated trees to be printable");
        let respaced = respace(&printed, &trivia);
        prop_assert_eq!(parse_process(&respaced).expect("respaced source to parse"), proc);
    }

    #[test]
    fn test_parse_never_panics(input in "\\PC{0,64}") {
        let _ = parse_process(&input);
    }

    #[test]
    fn test_nil_with_any_trivia(
        before in prop::collection::vec(trivia_strategy(), 0..4),
        after in prop::collection::vec(trivia_strategy(), 0..4),
    ) {
        let source = format!("{}Nil{}", before.concat(), after.concat());
        prop_assert_eq!(parse_process(&source).unwrap(), Proc::Nil);
    }
}
