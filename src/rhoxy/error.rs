//! Error types for lexing and parsing
//!
//! Parsing is fail-fast: the first lexical or syntactic problem aborts the parse and no
//! partial tree is returned. Every error carries the byte span it was detected at, which
//! [`ParseError::render`] turns into a line:column diagnostic with source context.

use crate::rhoxy::ast::range::SourceLocation;
use std::fmt;
use std::ops::Range as ByteRange;

/// Errors produced while turning source text into significant tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A character that starts no token
    UnexpectedCharacter { span: ByteRange<usize>, text: String },
    /// `/*` without a matching `*/`
    UnterminatedBlockComment { span: ByteRange<usize> },
    /// A `//` comment that ends the input without a newline, under strict line comments
    UnterminatedLineComment { span: ByteRange<usize> },
    /// An integer literal that does not fit in a signed 64-bit value
    IntegerOutOfRange { span: ByteRange<usize>, text: String },
}

impl LexError {
    pub fn span(&self) -> ByteRange<usize> {
        match self {
            LexError::UnexpectedCharacter { span, .. }
            | LexError::UnterminatedBlockComment { span }
            | LexError::UnterminatedLineComment { span }
            | LexError::IntegerOutOfRange { span, .. } => span.clone(),
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::UnexpectedCharacter { span, text } => {
                write!(f, "Unexpected character '{}' at offset {}", text, span.start)
            }
            LexError::UnterminatedBlockComment { span } => {
                write!(f, "Unterminated block comment at offset {}", span.start)
            }
            LexError::UnterminatedLineComment { span } => write!(
                f,
                "Line comment at offset {} must end with a newline",
                span.start
            ),
            LexError::IntegerOutOfRange { span, text } => write!(
                f,
                "Integer literal {} at offset {} is out of range",
                text, span.start
            ),
        }
    }
}

impl std::error::Error for LexError {}

/// A token sequence that matches no derivation of the grammar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub span: ByteRange<usize>,
    /// Descriptions of the tokens that would have been accepted, sorted
    pub expected: Vec<String>,
    /// The offending token, or `None` at end of input
    pub found: Option<String>,
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let found = self.found.as_deref().unwrap_or("end of input");
        write!(f, "Unexpected {} at offset {}", found, self.span.start)?;
        if !self.expected.is_empty() {
            write!(f, ", expected one of: {}", self.expected.join(", "))?;
        }
        Ok(())
    }
}

impl std::error::Error for SyntaxError {}

/// Errors that can occur while parsing a process
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Lex(LexError),
    Syntax(SyntaxError),
    /// More than one derivation matched where a unique tree was required
    Ambiguous { count: usize },
}

impl ParseError {
    /// Byte span of the failure; ambiguity has no single location
    pub fn span(&self) -> Option<ByteRange<usize>> {
        match self {
            ParseError::Lex(err) => Some(err.span()),
            ParseError::Syntax(err) => Some(err.span.clone()),
            ParseError::Ambiguous { .. } => None,
        }
    }

    /// Render the error with its line:column position and surrounding source lines
    pub fn render(&self, source: &str) -> String {
        match self.span() {
            Some(span) => {
                let location = SourceLocation::new(source).byte_range_to_range(&span);
                format!(
                    "Error at {}: {}\n\n{}",
                    location.start,
                    self,
                    format_source_context(source, location.start.line)
                )
            }
            None => format!("Error: {}", self),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Lex(err) => write!(f, "{}", err),
            ParseError::Syntax(err) => write!(f, "{}", err),
            ParseError::Ambiguous { count } => {
                write!(f, "Ambiguous input: {} derivations matched", count)
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Lex(err) => Some(err),
            ParseError::Syntax(err) => Some(err),
            ParseError::Ambiguous { .. } => None,
        }
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError::Lex(err)
    }
}

impl From<SyntaxError> for ParseError {
    fn from(err: SyntaxError) -> Self {
        ParseError::Syntax(err)
    }
}

/// Format source code context around an error line
///
/// Shows 2 lines before the error, the error line with >> marker, and 2 lines after.
/// All lines are numbered for easy reference.
pub fn format_source_context(source: &str, error_line: usize) -> String {
    let lines: Vec<&str> = source.lines().collect();

    let start_line = error_line.saturating_sub(2);
    let end_line = (error_line + 3).min(lines.len());

    let mut context = String::new();

    for (line_num, line) in lines.iter().enumerate().take(end_line).skip(start_line) {
        let marker = if line_num == error_line { ">>" } else { "  " };
        context.push_str(&format!("{} {:3} | {}\n", marker, line_num + 1, line));
    }

    context
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_source_context() {
        let source = "new x in {\n  Nil\n  |\n}\n// tail\nNil";
        let context = format_source_context(source, 3);

        assert!(context.contains("  Nil"));
        assert!(context.contains(">>   4 | }"));
        assert!(context.contains("// tail"));
        assert!(!context.contains("new x"));
    }

    #[test]
    fn test_syntax_error_display() {
        let err = SyntaxError {
            span: 3..4,
            expected: vec!["`!`".to_string()],
            found: Some("`|`".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Unexpected `|` at offset 3, expected one of: `!`"
        );
    }

    #[test]
    fn test_syntax_error_at_end_of_input() {
        let err = SyntaxError {
            span: 4..5,
            expected: Vec::new(),
            found: None,
        };
        assert_eq!(err.to_string(), "Unexpected end of input at offset 4");
    }

    #[test]
    fn test_render_points_at_line() {
        let source = "Nil |\n|";
        let err = ParseError::Syntax(SyntaxError {
            span: 6..7,
            expected: Vec::new(),
            found: Some("`|`".to_string()),
        });
        let rendered = err.render(source);
        assert!(rendered.starts_with("Error at 2:1: Unexpected `|`"));
        assert!(rendered.contains(">>   2 | |"));
    }

    #[test]
    fn test_ambiguity_has_no_span() {
        let err = ParseError::Ambiguous { count: 2 };
        assert_eq!(err.span(), None);
        assert_eq!(err.render("Nil"), "Error: Ambiguous input: 2 derivations matched");
    }
}
