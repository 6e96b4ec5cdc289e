//! Token definitions for rho source text
//!
//! This module defines all the tokens that can be produced by the rhoxy lexer.
//! The tokens are defined using the logos derive macro for efficient tokenization.
//!
//! Trivia (whitespace, line comments and block comments) are real tokens here. They are
//! dropped by the lexing stage, not by logos, so that the lexing stage can enforce the
//! line comment policy selected through [ParseOptions](crate::rhoxy::parsing::ParseOptions).
use logos::Logos;
use std::fmt;

/// All possible tokens in rho source text
#[derive(Logos, Debug, PartialEq, Eq, Hash, Clone)]
pub enum Token {
    // Trivia
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,
    #[regex(r"//[^\n]*\n?")]
    LineComment,
    #[token("/*", block_comment)]
    BlockComment,

    // Keywords
    #[token("Nil")]
    Nil,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("for")]
    For,
    #[token("new")]
    New,
    #[token("in")]
    In,
    #[token("lookup")]
    Lookup,
    #[token("bundle")]
    Bundle,

    // Punctuation
    #[token("@")]
    At,
    #[token("!")]
    Bang,
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,
    #[token("<-")]
    LeftArrow,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token("|")]
    Pipe,

    // Literals
    #[regex(r"[+-]?[0-9]+", |lex| lex.slice().parse::<i64>().ok())]
    Int(i64),
    #[regex(r#""[^"]*""#, |lex| strip_delimiters(lex.slice()))]
    Str(String),
    #[regex(r"`[^`]*`", |lex| strip_delimiters(lex.slice()))]
    Uri(String),
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Ident(String),
}

/// Consume a block comment body up to and including the closing `*/`.
///
/// An unterminated comment swallows the rest of the input and is reported as an error.
fn block_comment(lex: &mut logos::Lexer<Token>) -> bool {
    match lex.remainder().find("*/") {
        Some(end) => {
            lex.bump(end + 2);
            true
        }
        None => {
            lex.bump(lex.remainder().len());
            false
        }
    }
}

fn strip_delimiters(slice: &str) -> String {
    slice[1..slice.len() - 1].to_string()
}

impl Token {
    /// Check if this token is trivia (structurally insignificant)
    pub fn is_trivia(&self) -> bool {
        matches!(
            self,
            Token::Whitespace | Token::LineComment | Token::BlockComment
        )
    }

    /// Check if this token is a reserved word
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            Token::Nil
                | Token::True
                | Token::False
                | Token::For
                | Token::New
                | Token::In
                | Token::Lookup
                | Token::Bundle
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Whitespace => write!(f, "whitespace"),
            Token::LineComment => write!(f, "line comment"),
            Token::BlockComment => write!(f, "block comment"),
            Token::Nil => write!(f, "`Nil`"),
            Token::True => write!(f, "`true`"),
            Token::False => write!(f, "`false`"),
            Token::For => write!(f, "`for`"),
            Token::New => write!(f, "`new`"),
            Token::In => write!(f, "`in`"),
            Token::Lookup => write!(f, "`lookup`"),
            Token::Bundle => write!(f, "`bundle`"),
            Token::At => write!(f, "`@`"),
            Token::Bang => write!(f, "`!`"),
            Token::OpenParen => write!(f, "`(`"),
            Token::CloseParen => write!(f, "`)`"),
            Token::OpenBrace => write!(f, "`{{`"),
            Token::CloseBrace => write!(f, "`}}`"),
            Token::LeftArrow => write!(f, "`<-`"),
            Token::Semicolon => write!(f, "`;`"),
            Token::Comma => write!(f, "`,`"),
            Token::Pipe => write!(f, "`|`"),
            Token::Int(value) => write!(f, "integer {}", value),
            Token::Str(value) => write!(f, "string \"{}\"", value),
            Token::Uri(value) => write!(f, "uri `{}`", value),
            Token::Ident(name) => write!(f, "identifier `{}`", name),
        }
    }
}
