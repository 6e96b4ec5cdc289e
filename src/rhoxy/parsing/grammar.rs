//! Grammar rules for rho processes, written with chumsky combinators
//!
//! # Grammar
//!
//! ```text
//! proc    := term ( '|' term )*
//! term    := 'Nil' | ground | send | join | new | lookup | bundle
//! ground  := INT | STRING | 'true' | 'false'
//! name    := '@' proc
//! send    := name '!' '(' proc ')'
//! join    := 'for' '(' action ( ';' action )* ')' block
//! action  := IDENT '<-' name
//! new     := 'new' decl ( ',' decl )* 'in' block
//! decl    := IDENT ( '(' URI ')' )?
//! lookup  := 'lookup' IDENT '(' URI ')' ( ',' IDENT '(' URI ')' )* 'in' block
//! bundle  := 'bundle' block
//! block   := '{' proc '}'
//! ```
//!
//! Every alternative of `term` starts with a distinct token and every compound term is
//! closed by `)` or `}`, so a token sequence has at most one derivation. A channel is a
//! whole process: its `|` chain runs until the `!`, `;` or `)` that follows it.
//!
//! Trivia never reaches this module; the lexing stage removes it.

use chumsky::prelude::*;

use super::builders;
use crate::rhoxy::ast::{Ground, Proc};
use crate::rhoxy::lexing::Token;

/// Type alias for parser error
pub(crate) type ParserError = Simple<Token>;

fn ident() -> impl Parser<Token, String, Error = ParserError> + Clone {
    filter_map(|span, token| match token {
        Token::Ident(name) => Ok(name),
        other => Err(Simple::expected_input_found(span, Vec::new(), Some(other))),
    })
    .labelled("identifier")
}

fn uri() -> impl Parser<Token, String, Error = ParserError> + Clone {
    filter_map(|span, token| match token {
        Token::Uri(uri) => Ok(uri),
        other => Err(Simple::expected_input_found(span, Vec::new(), Some(other))),
    })
    .labelled("uri")
    .delimited_by(just(Token::OpenParen), just(Token::CloseParen))
}

/// Integers, strings and booleans
pub(crate) fn ground() -> impl Parser<Token, Ground, Error = ParserError> + Clone {
    filter_map(|span, token| match token {
        Token::Int(value) => Ok(Ground::Int(value)),
        Token::Str(value) => Ok(Ground::String(value)),
        Token::True => Ok(Ground::Bool(true)),
        Token::False => Ok(Ground::Bool(false)),
        other => Err(Simple::expected_input_found(span, Vec::new(), Some(other))),
    })
    .labelled("ground term")
}

/// A full process: one term, or a `|` chain of terms reduced to a flat `Par`
pub(crate) fn process() -> impl Parser<Token, Proc, Error = ParserError> + Clone {
    let mut proc: Recursive<'_, Token, Proc, ParserError> = Recursive::declare();
    let mut term: Recursive<'_, Token, Proc, ParserError> = Recursive::declare();

    let block = proc
        .clone()
        .delimited_by(just(Token::OpenBrace), just(Token::CloseBrace));
    let name = just(Token::At).ignore_then(proc.clone());

    let nil = just(Token::Nil).to(Proc::Nil);

    let ground = ground().map(Proc::Ground);

    let send = name
        .clone()
        .then_ignore(just(Token::Bang))
        .then(
            proc.clone()
                .delimited_by(just(Token::OpenParen), just(Token::CloseParen)),
        )
        .map(|(chan, message)| builders::send(chan, message));

    let action = ident()
        .then_ignore(just(Token::LeftArrow))
        .then(name)
        .map(|(pattern, chan)| builders::action(pattern, chan));

    let join = just(Token::For)
        .ignore_then(
            action
                .separated_by(just(Token::Semicolon))
                .at_least(1)
                .delimited_by(just(Token::OpenParen), just(Token::CloseParen)),
        )
        .then(block.clone())
        .map(|(actions, body)| builders::join(actions, body));

    let decl = ident().then(uri().or_not());
    let new = just(Token::New)
        .ignore_then(decl.separated_by(just(Token::Comma)).at_least(1))
        .then_ignore(just(Token::In))
        .then(block.clone())
        .map(|(decls, body)| builders::new(decls, body));

    // Legacy spelling of the resource-binding form; every name must carry a uri
    let uri_decl = ident().then(uri().map(Some));
    let lookup = just(Token::Lookup)
        .ignore_then(uri_decl.separated_by(just(Token::Comma)).at_least(1))
        .then_ignore(just(Token::In))
        .then(block.clone())
        .map(|(decls, body)| builders::new(decls, body));

    let bundle = just(Token::Bundle)
        .ignore_then(block)
        .map(builders::bundle);

    term.define(choice((nil, ground, send, join, new, lookup, bundle)));

    proc.define(
        term.clone()
            .then(just(Token::Pipe).ignore_then(term).repeated())
            .map(|(first, rest)| builders::par(first, rest)),
    );

    proc
}

/// A complete program: one process followed by end of input
pub(crate) fn program() -> impl Parser<Token, Proc, Error = ParserError> + Clone {
    process().then_ignore(end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rhoxy::ast::Variable;

    #[test]
    fn test_ground_accepts_literals_only() {
        assert_eq!(ground().parse(vec![Token::Int(-32)]).unwrap(), Ground::Int(-32));
        assert_eq!(ground().parse(vec![Token::True]).unwrap(), Ground::Bool(true));
        assert!(ground().parse(vec![Token::Nil]).is_err());
    }

    #[test]
    fn test_send_over_raw_tokens() {
        let input = vec![
            Token::At,
            Token::Int(4),
            Token::Bang,
            Token::OpenParen,
            Token::False,
            Token::CloseParen,
        ];
        assert_eq!(
            program().parse(input).unwrap(),
            Proc::send(Proc::int(4), Proc::bool(false))
        );
    }

    #[test]
    fn test_lookup_requires_uri() {
        let input = vec![
            Token::Lookup,
            Token::Ident("x".to_string()),
            Token::In,
            Token::OpenBrace,
            Token::Nil,
            Token::CloseBrace,
        ];
        assert!(program().parse(input).is_err());
    }

    #[test]
    fn test_new_mixes_plain_and_uri_names() {
        let input = vec![
            Token::New,
            Token::Ident("x".to_string()),
            Token::Comma,
            Token::Ident("out".to_string()),
            Token::OpenParen,
            Token::Uri("rho:io:stdout".to_string()),
            Token::CloseParen,
            Token::In,
            Token::OpenBrace,
            Token::Nil,
            Token::CloseBrace,
        ];
        assert_eq!(
            program().parse(input).unwrap(),
            Proc::new_vars(
                vec![
                    Variable::new("x"),
                    Variable::with_uri("out", "rho:io:stdout")
                ],
                Proc::Nil
            )
        );
    }

    #[test]
    fn test_channel_takes_a_parallel_process() {
        let input = vec![
            Token::At,
            Token::Nil,
            Token::Pipe,
            Token::Nil,
            Token::Bang,
            Token::OpenParen,
            Token::Nil,
            Token::CloseParen,
        ];
        assert_eq!(
            program().parse(input).unwrap(),
            Proc::send(Proc::par(Proc::Nil, Proc::Nil), Proc::Nil)
        );
    }

    #[test]
    fn test_trailing_pipe_is_rejected() {
        assert!(program().parse(vec![Token::Nil, Token::Pipe]).is_err());
    }
}
