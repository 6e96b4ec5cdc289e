//! Drives the compiled grammar over a lexed token stream
//!
//! Chumsky parsers built from recursive rules are reference counted and cannot cross
//! threads, so each thread compiles the grammar once and keeps it for its lifetime. The
//! grammar holds no parse state, which makes concurrent parses on different threads fully
//! independent.

use chumsky::prelude::*;
use chumsky::{BoxedParser, Stream};

use super::grammar::{self, ParserError};
use crate::rhoxy::ast::Proc;
use crate::rhoxy::error::SyntaxError;
use crate::rhoxy::lexing::{Token, TokenSpan};

/// The process grammar, compiled and ready to run
pub(crate) struct Grammar {
    parser: BoxedParser<'static, Token, Proc, ParserError>,
}

thread_local! {
    static COMPILED: Grammar = Grammar::compile();
}

impl Grammar {
    pub(crate) fn compile() -> Self {
        tracing::trace!("compiling rho grammar");
        Grammar {
            parser: grammar::program().boxed(),
        }
    }

    /// Parse significant tokens; `source_len` positions the end-of-input span
    pub(crate) fn parse_tokens(
        &self,
        tokens: Vec<TokenSpan>,
        source_len: usize,
    ) -> Result<Proc, SyntaxError> {
        let token_count = tokens.len();
        let stream = Stream::from_iter(source_len..source_len + 1, tokens.into_iter());

        match self.parser.parse(stream) {
            Ok(proc) => {
                tracing::debug!(tokens = token_count, "derived process");
                Ok(proc)
            }
            Err(errors) => {
                tracing::trace!(errors = errors.len(), "no derivation matched");
                Err(errors
                    .into_iter()
                    .next()
                    .map(to_syntax_error)
                    .unwrap_or_else(|| SyntaxError {
                        span: source_len..source_len + 1,
                        expected: Vec::new(),
                        found: None,
                    }))
            }
        }
    }
}

/// Parse with this thread's compiled grammar
pub(crate) fn parse_tokens(tokens: Vec<TokenSpan>, source_len: usize) -> Result<Proc, SyntaxError> {
    COMPILED.with(|grammar| grammar.parse_tokens(tokens, source_len))
}

fn to_syntax_error(err: ParserError) -> SyntaxError {
    let mut expected: Vec<String> = err
        .expected()
        .map(|token| match token {
            Some(token) => token.to_string(),
            None => "end of input".to_string(),
        })
        .collect();

    if expected.is_empty() {
        if let Some(label) = err.label() {
            expected.push(label.to_string());
        }
    }
    expected.sort();
    expected.dedup();

    SyntaxError {
        span: err.span(),
        expected,
        found: err.found().map(Token::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_token_stream() {
        let grammar = Grammar::compile();
        let tokens = vec![(Token::Nil, 0..3), (Token::Pipe, 4..5), (Token::Int(1), 6..7)];
        assert_eq!(
            grammar.parse_tokens(tokens, 7).unwrap(),
            Proc::par(Proc::Nil, Proc::int(1))
        );
    }

    #[test]
    fn test_missing_operand_is_reported_after_the_pipe() {
        let tokens = vec![(Token::Nil, 0..3), (Token::Pipe, 4..5)];
        let err = parse_tokens(tokens, 5).unwrap_err();
        assert!(err.span.start >= 4);
    }

    #[test]
    fn test_unexpected_token_is_reported_with_its_span() {
        let tokens = vec![(Token::At, 0..1), (Token::Nil, 1..4), (Token::CloseParen, 4..5)];
        let err = parse_tokens(tokens, 5).unwrap_err();
        assert_eq!(err.found.as_deref(), Some("`)`"));
        assert_eq!(err.span, 4..5);
        assert!(err.expected.contains(&"`!`".to_string()));
    }
}
