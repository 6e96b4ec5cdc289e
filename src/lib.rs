//! # rhoxy-parser
//!
//! A parser for rho-calculus process text. Source goes in, a closed process tree comes out,
//! ready to be serialized for an evaluator.
//!
//! ```rust,ignore
//! use rhoxy_parser::rhoxy::formats::Format;
//! use rhoxy_parser::parse_process;
//!
//! let proc = parse_process("new x in { @Nil!(23) | Nil }")?;
//! let json = Format::Json.render(&proc)?;
//! ```
//!
//! ## Testing
//!
//! For testing guidelines, see the [testing module](crate::rhoxy::testing).
//! Parser tests use verified rho samples and the fluent tree assertions.

pub mod rhoxy;

pub use rhoxy::ast::Proc;
pub use rhoxy::error::ParseError;
pub use rhoxy::parsing::{parse_process, ParseOptions, ProcessParser};
