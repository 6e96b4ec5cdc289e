//! Parsing module for rho processes
//!
//! This module provides the complete pipeline from source text to a process tree:
//! 1. **Lexing**: Tokenization of source text and removal of trivia ([crate::rhoxy::lexing])
//! 2. **Analysis**: Derivation of the token stream against the grammar ([grammar])
//! 3. **Building**: Reduction of grammar matches into AST nodes ([builders])
//!
//! ## Terminology
//!
//! - **parse**: The entire process (lexing + analysis + building)
//! - **derivation**: One complete way the grammar matches the whole input
//!
//! The grammar is deterministic, so a successful parse yields exactly one derivation.
//! [Derivations] still models the result as a collection: callers that need a single tree
//! go through [Derivations::into_unique], which fails loudly if that ever stops holding.
//!
//! ## Testing
//!
//! Parser tests use the sample sources and fluent assertions in the
//! [testing module](crate::rhoxy::testing).

pub mod builders;
pub mod engine;
pub mod grammar;

use crate::rhoxy::ast::Proc;
use crate::rhoxy::error::ParseError;
use crate::rhoxy::lexing;

/// Knobs that change what the parser accepts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Reject a `//` comment that runs to the end of the input without a newline
    pub terminal_line_comment_requires_newline: bool,
}

/// Every derivation of one input, in discovery order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Derivations {
    procs: Vec<Proc>,
}

impl Derivations {
    pub fn len(&self) -> usize {
        self.procs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.procs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Proc> {
        self.procs.iter()
    }

    pub fn first(&self) -> Option<&Proc> {
        self.procs.first()
    }

    pub fn into_vec(self) -> Vec<Proc> {
        self.procs
    }

    /// The single derivation; any other count is reported as [ParseError::Ambiguous]
    pub fn into_unique(mut self) -> Result<Proc, ParseError> {
        match self.procs.len() {
            1 => Ok(self.procs.remove(0)),
            count => Err(ParseError::Ambiguous { count }),
        }
    }
}

impl IntoIterator for Derivations {
    type Item = Proc;
    type IntoIter = std::vec::IntoIter<Proc>;

    fn into_iter(self) -> Self::IntoIter {
        self.procs.into_iter()
    }
}

impl<'a> IntoIterator for &'a Derivations {
    type Item = &'a Proc;
    type IntoIter = std::slice::Iter<'a, Proc>;

    fn into_iter(self) -> Self::IntoIter {
        self.procs.iter()
    }
}

/// Parser for rho source text
///
/// Holds only options; the compiled grammar is shared per thread, so constructing a
/// parser is cheap and parsers can be created freely on any thread.
#[derive(Debug, Clone, Default)]
pub struct ProcessParser {
    options: ParseOptions,
}

impl ProcessParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ParseOptions) -> Self {
        ProcessParser { options }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse source text into all of its derivations
    ///
    /// Fails on the first lexical or syntax error. On success the result is never empty.
    pub fn parse(&self, source: &str) -> Result<Derivations, ParseError> {
        let tokens = lexing::lex(source, &self.options)?;
        let proc = engine::parse_tokens(tokens, source.len())?;

        Ok(Derivations { procs: vec![proc] })
    }
}

/// Parse source text into its unique process tree with default options
///
/// ```rust,ignore
/// use rhoxy_parser::rhoxy::parsing::parse_process;
///
/// let proc = parse_process("@Nil!(23)")?;
/// ```
pub fn parse_process(source: &str) -> Result<Proc, ParseError> {
    ProcessParser::new().parse(source)?.into_unique()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rhoxy::error::LexError;

    #[test]
    fn test_parse_returns_one_derivation() {
        let derivations = ProcessParser::new().parse("Nil").unwrap();
        assert_eq!(derivations.len(), 1);
        assert_eq!(derivations.first(), Some(&Proc::Nil));
    }

    #[test]
    fn test_into_unique_rejects_multiple_derivations() {
        let derivations = Derivations {
            procs: vec![Proc::Nil, Proc::int(1)],
        };
        assert_eq!(
            derivations.into_unique(),
            Err(ParseError::Ambiguous { count: 2 })
        );
    }

    #[test]
    fn test_into_unique_rejects_empty_result() {
        let derivations = Derivations { procs: Vec::new() };
        assert!(derivations.is_empty());
        assert_eq!(
            derivations.into_unique(),
            Err(ParseError::Ambiguous { count: 0 })
        );
    }

    #[test]
    fn test_options_reach_the_lexer() {
        let strict = ProcessParser::with_options(ParseOptions {
            terminal_line_comment_requires_newline: true,
        });
        assert!(matches!(
            strict.parse("Nil // tail"),
            Err(ParseError::Lex(LexError::UnterminatedLineComment { .. }))
        ));
        assert!(ProcessParser::new().parse("Nil // tail").is_ok());
    }

    #[test]
    fn test_empty_input_is_a_syntax_error() {
        assert!(matches!(parse_process(""), Err(ParseError::Syntax(_))));
        assert!(matches!(
            parse_process("  // only a comment\n"),
            Err(ParseError::Syntax(_))
        ));
    }
}
