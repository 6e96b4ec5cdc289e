//! Testing utilities for process trees
//!
//! # Parser Testing Guidelines
//!
//! Parser tests use two tools together:
//!
//! 1. **[samples]** for verified rho sources, loaded by file name from `samples/`
//! 2. **[assert_proc](fn@assert_proc)** for checking the whole tree shape at once
//!
//! ```rust-example
//! use crate::rhoxy::testing::{assert_proc, samples};
//!
//! let proc = samples::parse("050-par-chain.rho")?;
//!
//! assert_proc(&proc)
//!     .assert_par()
//!     .proc_count(3)
//!     .proc(0, |p| p.assert_nil())
//!     .proc(2, |p| {
//!         p.assert_ground().bool(true);
//!     });
//! ```
//!
//! Each assertion carries a path (`proc.procs[2].chan`) that failure messages report, so a
//! broken nested expectation points at the node that differs.
//!
//! ## Available Node Types
//!
//! - `GroundAssertion` - int, string and bool values
//! - `SendAssertion` - channel and message
//! - `JoinAssertion` / `ActionAssertion` - receive actions in order, bound names, body
//! - `ParAssertion` - operand count and each operand
//! - `NewAssertion` - declared names, resource URIs, body
//! - `BundleAssertion` - the wrapped process

mod testing_assertions;
mod testing_matchers;

pub mod samples;

pub use testing_assertions::{
    assert_proc, ActionAssertion, BundleAssertion, GroundAssertion, JoinAssertion, NewAssertion,
    ParAssertion, ProcAssertion, SendAssertion,
};
pub use testing_matchers::TextMatch;
