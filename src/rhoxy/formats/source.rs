//! Canonical source printer
//!
//! Prints a process as rho source text on one line, with single spaces around binary
//! punctuation. Parsing the printed text yields the same tree.
//!
//! Some trees cannot be written down, because the grammar has no form for them:
//!
//! - a `Par` with fewer than two operands or with a `Par` operand
//! - an empty `Join` or an empty `New`
//! - a string containing `"` or a URI containing a backtick (literals have no escapes)
//! - a name that is not an identifier, or that is a keyword
//!
//! Those fail with [FormatError::Unprintable].

use super::FormatError;
use crate::rhoxy::ast::{Ground, Proc, Variable};
use crate::rhoxy::lexing::Token;
use logos::Logos;

/// Print a process as canonical source text
pub fn to_source(proc: &Proc) -> Result<String, FormatError> {
    let mut out = String::new();
    write_proc(&mut out, proc)?;
    Ok(out)
}

fn write_proc(out: &mut String, proc: &Proc) -> Result<(), FormatError> {
    match proc {
        Proc::Nil => out.push_str("Nil"),
        Proc::Ground(ground) => write_ground(out, ground)?,
        Proc::Send(send) => {
            write_name(out, &send.chan)?;
            out.push_str("!(");
            write_proc(out, &send.message)?;
            out.push(')');
        }
        Proc::Join(join) => {
            if join.actions.is_empty() {
                return Err(unprintable("receive without actions"));
            }
            out.push_str("for (");
            for (i, action) in join.actions.iter().enumerate() {
                if i > 0 {
                    out.push_str("; ");
                }
                for name in action.pattern.bound_names() {
                    write_identifier(out, name)?;
                }
                out.push_str(" <- ");
                write_name(out, &action.chan)?;
            }
            out.push_str(") ");
            write_block(out, &join.body)?;
        }
        Proc::Par(par) => {
            if par.procs.len() < 2 {
                return Err(unprintable("parallel composition with fewer than two operands"));
            }
            for (i, operand) in par.procs.iter().enumerate() {
                if i > 0 {
                    out.push_str(" | ");
                }
                if matches!(operand, Proc::Par(_)) {
                    return Err(unprintable("nested parallel composition"));
                }
                write_proc(out, operand)?;
            }
        }
        Proc::New(new) => {
            if new.vars.is_empty() {
                return Err(unprintable("restriction without names"));
            }
            out.push_str("new ");
            for (i, var) in new.vars.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_variable(out, var)?;
            }
            out.push_str(" in ");
            write_block(out, &new.body)?;
        }
        Proc::Bundle(bundle) => {
            out.push_str("bundle ");
            write_block(out, &bundle.proc)?;
        }
    }
    Ok(())
}

fn write_ground(out: &mut String, ground: &Ground) -> Result<(), FormatError> {
    if let Ground::String(value) = ground {
        if value.contains('"') {
            return Err(unprintable(format!("string {value:?} contains a double quote")));
        }
    }
    out.push_str(&ground.to_string());
    Ok(())
}

/// A channel position: `@` followed by a whole process
fn write_name(out: &mut String, chan: &Proc) -> Result<(), FormatError> {
    out.push('@');
    write_proc(out, chan)
}

fn write_block(out: &mut String, body: &Proc) -> Result<(), FormatError> {
    out.push_str("{ ");
    write_proc(out, body)?;
    out.push_str(" }");
    Ok(())
}

fn write_variable(out: &mut String, var: &Variable) -> Result<(), FormatError> {
    write_identifier(out, &var.given_name)?;
    if let Some(uri) = &var.uri {
        if uri.contains('`') {
            return Err(unprintable(format!("uri {uri:?} contains a backtick")));
        }
        out.push_str(&format!("(`{uri}`)"));
    }
    Ok(())
}

fn write_identifier(out: &mut String, name: &str) -> Result<(), FormatError> {
    let mut lexer = Token::lexer(name);
    match (lexer.next(), lexer.next()) {
        (Some(Ok(Token::Ident(_))), None) => {
            out.push_str(name);
            Ok(())
        }
        (Some(Ok(token)), None) if token.is_keyword() => {
            Err(unprintable(format!("{name:?} is a keyword")))
        }
        _ => Err(unprintable(format!("{name:?} is not an identifier"))),
    }
}

fn unprintable(msg: impl Into<String>) -> FormatError {
    FormatError::Unprintable(msg.into())
}
