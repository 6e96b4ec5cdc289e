//! Lexing stage: source text to significant tokens
//!
//! Tokenization is handled entirely by logos (see [tokens]). This stage walks the raw
//! token stream and does three things:
//!
//! - drops trivia (whitespace, line comments, block comments), so the grammar never sees it
//! - classifies logos errors into [LexError] values with their byte spans
//! - applies the line comment policy from [ParseOptions]
//!
//! Because trivia is removed here, whitespace and comments are legal between any two tokens,
//! including before the first and after the last one.

pub mod tokens;

pub use tokens::Token;

use crate::rhoxy::error::LexError;
use crate::rhoxy::parsing::ParseOptions;
use logos::Logos;
use std::ops::Range;

/// A token paired with its byte span in the source
pub type TokenSpan = (Token, Range<usize>);

/// Tokenize a string and collect every raw result with its span, trivia and errors included
pub fn tokenize_with_spans(source: &str) -> Vec<(Result<Token, ()>, Range<usize>)> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        tokens.push((result, lexer.span()));
    }

    tokens
}

/// Lex source text into significant tokens, failing on the first lexical error
pub fn lex(source: &str, options: &ParseOptions) -> Result<Vec<TokenSpan>, LexError> {
    let mut tokens = Vec::new();

    for (result, span) in tokenize_with_spans(source) {
        match result {
            Ok(Token::LineComment)
                if options.terminal_line_comment_requires_newline
                    && !source[span.clone()].ends_with('\n') =>
            {
                return Err(LexError::UnterminatedLineComment { span });
            }
            Ok(token) if token.is_trivia() => {}
            Ok(token) => tokens.push((token, span)),
            Err(()) => return Err(classify_error(source, span)),
        }
    }

    tracing::debug!(tokens = tokens.len(), bytes = source.len(), "lexed rho source");
    Ok(tokens)
}

fn classify_error(source: &str, span: Range<usize>) -> LexError {
    let text = source[span.clone()].to_string();

    if text.starts_with("/*") {
        LexError::UnterminatedBlockComment { span }
    } else if !text.is_empty()
        && text
            .trim_start_matches(['+', '-'])
            .chars()
            .all(|c| c.is_ascii_digit())
        && text.chars().any(|c| c.is_ascii_digit())
    {
        LexError::IntegerOutOfRange { span, text }
    } else {
        LexError::UnexpectedCharacter { span, text }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn significant(source: &str) -> Vec<Token> {
        lex(source, &ParseOptions::default())
            .expect("source should lex")
            .into_iter()
            .map(|(token, _)| token)
            .collect()
    }

    #[test]
    fn test_trivia_is_dropped() {
        assert_eq!(significant("    Nil \t "), vec![Token::Nil]);
        assert_eq!(significant("/* comment */ Nil"), vec![Token::Nil]);
        assert_eq!(significant("Nil // comment\n"), vec![Token::Nil]);
    }

    #[test]
    fn test_trivia_between_every_token() {
        assert_eq!(
            significant("@Nil/**/!(/**/Nil)//dasfasdf\n/**/"),
            vec![
                Token::At,
                Token::Nil,
                Token::Bang,
                Token::OpenParen,
                Token::Nil,
                Token::CloseParen,
            ]
        );
    }

    #[test]
    fn test_spans_point_into_source() {
        let tokens = lex("  @Nil", &ParseOptions::default()).unwrap();
        assert_eq!(tokens, vec![(Token::At, 2..3), (Token::Nil, 3..6)]);
    }

    #[test]
    fn test_terminal_line_comment_is_accepted_by_default() {
        assert_eq!(significant("Nil // comment"), vec![Token::Nil]);
    }

    #[test]
    fn test_strict_line_comments_require_newline() {
        let options = ParseOptions {
            terminal_line_comment_requires_newline: true,
        };
        assert_eq!(
            lex("Nil // comment", &options),
            Err(LexError::UnterminatedLineComment { span: 4..14 })
        );
        assert!(lex("Nil // comment\n", &options).is_ok());
    }

    #[test]
    fn test_unexpected_character() {
        assert_eq!(
            lex("Nil # Nil", &ParseOptions::default()),
            Err(LexError::UnexpectedCharacter {
                span: 4..5,
                text: "#".to_string()
            })
        );
    }

    #[test]
    fn test_unterminated_block_comment() {
        assert_eq!(
            lex("Nil /* open", &ParseOptions::default()),
            Err(LexError::UnterminatedBlockComment { span: 4..11 })
        );
    }

    #[test]
    fn test_integer_out_of_range() {
        assert_eq!(
            lex("-99999999999999999999", &ParseOptions::default()),
            Err(LexError::IntegerOutOfRange {
                span: 0..21,
                text: "-99999999999999999999".to_string()
            })
        );
    }

    #[test]
    fn test_raw_tokenization_keeps_trivia() {
        let raw = tokenize_with_spans("Nil /**/");
        assert_eq!(
            raw,
            vec![
                (Ok(Token::Nil), 0..3),
                (Ok(Token::Whitespace), 3..4),
                (Ok(Token::BlockComment), 4..8),
            ]
        );
    }
}
