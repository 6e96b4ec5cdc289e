//! Verified rho sources for tests
//!
//! Sample files live in `samples/` at the crate root, named `NNN-description.rho`. Tests load
//! them by file name instead of embedding rho text, so a change to the surface syntax only
//! needs the sample files updated.

use crate::rhoxy::ast::Proc;
use crate::rhoxy::error::ParseError;
use crate::rhoxy::parsing::parse_process;
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Error loading or parsing a sample file
#[derive(Debug)]
pub enum SampleError {
    FileNotFound(String),
    Io(std::io::Error),
    ParseError(String),
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleError::FileNotFound(name) => write!(f, "Sample not found: {}", name),
            SampleError::Io(err) => write!(f, "IO error: {}", err),
            SampleError::ParseError(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for SampleError {}

impl From<std::io::Error> for SampleError {
    fn from(err: std::io::Error) -> Self {
        SampleError::Io(err)
    }
}

impl From<ParseError> for SampleError {
    fn from(err: ParseError) -> Self {
        SampleError::ParseError(err.to_string())
    }
}

/// Directory holding the sample files
pub fn samples_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("samples")
}

/// Read a sample by file name, e.g. `"010-send.rho"`
pub fn source(name: &str) -> Result<String, SampleError> {
    let path = samples_dir().join(name);
    if !path.is_file() {
        return Err(SampleError::FileNotFound(name.to_string()));
    }
    Ok(fs::read_to_string(path)?)
}

/// Read and parse a sample
pub fn parse(name: &str) -> Result<Proc, SampleError> {
    let text = source(name)?;
    Ok(parse_process(&text)?)
}

/// File names of every sample, sorted
pub fn list() -> Result<Vec<String>, SampleError> {
    let mut names = Vec::new();
    for entry in fs::read_dir(samples_dir())? {
        let entry = entry?;
        if let Some(name) = entry.file_name().to_str() {
            if name.ends_with(".rho") {
                names.push(name.to_string());
            }
        }
    }
    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_sample() {
        assert!(matches!(
            source("999-missing.rho"),
            Err(SampleError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_every_sample_parses() {
        let names = list().expect("samples directory to be readable");
        assert!(!names.is_empty());
        for name in names {
            if let Err(err) = parse(&name) {
                panic!("{}: {}", name, err);
            }
        }
    }
}
