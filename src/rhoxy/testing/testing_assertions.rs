//! Fluent assertion API for process trees

use super::testing_matchers::TextMatch;
use crate::rhoxy::ast::{Action, AstNode, Bundle, Ground, Join, New, Output, Par, Proc};

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for a process
pub fn assert_proc(proc: &Proc) -> ProcAssertion<'_> {
    ProcAssertion {
        proc,
        context: "proc".to_string(),
    }
}

// ============================================================================
// Proc Assertions
// ============================================================================

pub struct ProcAssertion<'a> {
    proc: &'a Proc,
    context: String,
}

impl<'a> ProcAssertion<'a> {
    fn mismatch(&self, expected: &str) -> ! {
        panic!(
            "{}: Expected {}, found {}",
            self.context,
            expected,
            self.proc.node_kind()
        )
    }

    /// Assert this process is Nil
    pub fn assert_nil(self) {
        if !self.proc.is_nil() {
            self.mismatch("nil");
        }
    }

    /// Assert this process is a ground term and return ground-specific assertions
    pub fn assert_ground(self) -> GroundAssertion<'a> {
        match self.proc {
            Proc::Ground(ground) => GroundAssertion {
                ground,
                context: self.context,
            },
            _ => self.mismatch("ground"),
        }
    }

    /// Assert this process is a Send and return send-specific assertions
    pub fn assert_send(self) -> SendAssertion<'a> {
        match self.proc {
            Proc::Send(send) => SendAssertion {
                send,
                context: self.context,
            },
            _ => self.mismatch("send"),
        }
    }

    /// Assert this process is a Join and return join-specific assertions
    pub fn assert_join(self) -> JoinAssertion<'a> {
        match self.proc {
            Proc::Join(join) => JoinAssertion {
                join,
                context: self.context,
            },
            _ => self.mismatch("join"),
        }
    }

    /// Assert this process is a Par and return par-specific assertions
    pub fn assert_par(self) -> ParAssertion<'a> {
        match self.proc {
            Proc::Par(par) => ParAssertion {
                par,
                context: self.context,
            },
            _ => self.mismatch("par"),
        }
    }

    /// Assert this process is a New and return new-specific assertions
    pub fn assert_new(self) -> NewAssertion<'a> {
        match self.proc {
            Proc::New(new) => NewAssertion {
                new,
                context: self.context,
            },
            _ => self.mismatch("new"),
        }
    }

    /// Assert this process is a Bundle and return bundle-specific assertions
    pub fn assert_bundle(self) -> BundleAssertion<'a> {
        match self.proc {
            Proc::Bundle(bundle) => BundleAssertion {
                bundle,
                context: self.context,
            },
            _ => self.mismatch("bundle"),
        }
    }
}

fn nested<'a>(proc: &'a Proc, context: String) -> ProcAssertion<'a> {
    ProcAssertion { proc, context }
}

// ============================================================================
// Ground Assertions
// ============================================================================

pub struct GroundAssertion<'a> {
    ground: &'a Ground,
    context: String,
}

impl<'a> GroundAssertion<'a> {
    pub fn int(self, expected: i64) -> Self {
        assert_eq!(
            self.ground,
            &Ground::Int(expected),
            "{}: Expected int {}, found {} {}",
            self.context,
            expected,
            self.ground.type_name(),
            self.ground
        );
        self
    }

    pub fn bool(self, expected: bool) -> Self {
        assert_eq!(
            self.ground,
            &Ground::Bool(expected),
            "{}: Expected bool {}, found {} {}",
            self.context,
            expected,
            self.ground.type_name(),
            self.ground
        );
        self
    }

    fn string_value(&self) -> &'a str {
        match self.ground {
            Ground::String(value) => value,
            other => panic!(
                "{}: Expected string, found {} {}",
                self.context,
                other.type_name(),
                other
            ),
        }
    }

    pub fn string(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(self.string_value(), &self.context);
        self
    }
    pub fn string_starts_with(self, prefix: &str) -> Self {
        TextMatch::StartsWith(prefix.to_string()).assert(self.string_value(), &self.context);
        self
    }
    pub fn string_contains(self, substring: &str) -> Self {
        TextMatch::Contains(substring.to_string()).assert(self.string_value(), &self.context);
        self
    }
}

// ============================================================================
// Send Assertions
// ============================================================================

pub struct SendAssertion<'a> {
    send: &'a Output,
    context: String,
}

impl<'a> SendAssertion<'a> {
    pub fn chan<F>(self, assertion: F) -> Self
    where
        F: FnOnce(ProcAssertion<'a>),
    {
        assertion(nested(&self.send.chan, format!("{}.chan", self.context)));
        self
    }

    pub fn message<F>(self, assertion: F) -> Self
    where
        F: FnOnce(ProcAssertion<'a>),
    {
        assertion(nested(&self.send.message, format!("{}.message", self.context)));
        self
    }
}

// ============================================================================
// Join Assertions
// ============================================================================

pub struct JoinAssertion<'a> {
    join: &'a Join,
    context: String,
}

impl<'a> JoinAssertion<'a> {
    pub fn action_count(self, expected: usize) -> Self {
        let actual = self.join.actions.len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} actions, found {} actions",
            self.context, expected, actual
        );
        self
    }

    pub fn action<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ActionAssertion<'a>),
    {
        let actions = &self.join.actions;
        assert!(
            index < actions.len(),
            "{}: Action index {} out of bounds (join has {} actions)",
            self.context,
            index,
            actions.len()
        );
        assertion(ActionAssertion {
            action: &actions[index],
            context: format!("{}.actions[{}]", self.context, index),
        });
        self
    }

    pub fn body<F>(self, assertion: F) -> Self
    where
        F: FnOnce(ProcAssertion<'a>),
    {
        assertion(nested(&self.join.body, format!("{}.body", self.context)));
        self
    }
}

pub struct ActionAssertion<'a> {
    action: &'a Action,
    context: String,
}

impl<'a> ActionAssertion<'a> {
    /// Assert the names bound by the action's pattern
    pub fn binds(self, expected: &[&str]) -> Self {
        let actual = self.action.pattern.bound_names();
        assert_eq!(
            actual, expected,
            "{}: Expected pattern to bind {:?}, found {:?}",
            self.context, expected, actual
        );
        self
    }

    pub fn chan<F>(self, assertion: F) -> Self
    where
        F: FnOnce(ProcAssertion<'a>),
    {
        assertion(nested(&self.action.chan, format!("{}.chan", self.context)));
        self
    }
}

// ============================================================================
// Par Assertions
// ============================================================================

pub struct ParAssertion<'a> {
    par: &'a Par,
    context: String,
}

impl<'a> ParAssertion<'a> {
    pub fn proc_count(self, expected: usize) -> Self {
        let actual = self.par.procs.len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} procs, found {} procs: [{}]",
            self.context,
            expected,
            actual,
            summarize_procs(&self.par.procs)
        );
        self
    }

    pub fn proc<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ProcAssertion<'a>),
    {
        let procs = &self.par.procs;
        assert!(
            index < procs.len(),
            "{}: Proc index {} out of bounds (par has {} procs)",
            self.context,
            index,
            procs.len()
        );
        assertion(nested(
            &procs[index],
            format!("{}.procs[{}]", self.context, index),
        ));
        self
    }
}

// ============================================================================
// New Assertions
// ============================================================================

pub struct NewAssertion<'a> {
    new: &'a New,
    context: String,
}

impl<'a> NewAssertion<'a> {
    /// Assert the declared names, in order
    pub fn names(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self.new.names().collect();
        assert_eq!(
            actual, expected,
            "{}: Expected names {:?}, found {:?}",
            self.context, expected, actual
        );
        self
    }

    /// Assert the resource URI bound to the name at `index`
    pub fn uri(self, index: usize, expected: &str) -> Self {
        let context = format!("{}.vars[{}]", self.context, index);
        let var = self
            .new
            .vars
            .get(index)
            .unwrap_or_else(|| panic!("{}: out of bounds", context));
        match &var.uri {
            Some(uri) => TextMatch::Exact(expected.to_string()).assert(uri, &context),
            None => panic!("{}: Expected uri '{}', found none", context, expected),
        }
        self
    }

    /// Assert the name at `index` carries no resource URI
    pub fn no_uri(self, index: usize) -> Self {
        let context = format!("{}.vars[{}]", self.context, index);
        let var = self
            .new
            .vars
            .get(index)
            .unwrap_or_else(|| panic!("{}: out of bounds", context));
        assert!(
            var.uri.is_none(),
            "{}: Expected no uri, found {:?}",
            context,
            var.uri
        );
        self
    }

    pub fn body<F>(self, assertion: F) -> Self
    where
        F: FnOnce(ProcAssertion<'a>),
    {
        assertion(nested(&self.new.body, format!("{}.body", self.context)));
        self
    }
}

// ============================================================================
// Bundle Assertions
// ============================================================================

pub struct BundleAssertion<'a> {
    bundle: &'a Bundle,
    context: String,
}

impl<'a> BundleAssertion<'a> {
    pub fn proc<F>(self, assertion: F) -> Self
    where
        F: FnOnce(ProcAssertion<'a>),
    {
        assertion(nested(&self.bundle.proc, format!("{}.proc", self.context)));
        self
    }
}

fn summarize_procs(procs: &[Proc]) -> String {
    procs
        .iter()
        .map(|proc| proc.node_kind().tag())
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// Tests for Assertions (these tests inspect hand-built trees)
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rhoxy::ast::Variable;

    #[test]
    fn test_nested_assertions_pass() {
        let proc = Proc::new_vars(
            vec![Variable::new("x"), Variable::with_uri("out", "rho:io:stdout")],
            Proc::par(
                Proc::join([("y", Proc::int(1))], Proc::nil()),
                Proc::bundle(Proc::send(Proc::nil(), Proc::string("hi"))),
            ),
        );

        assert_proc(&proc)
            .assert_new()
            .names(&["x", "out"])
            .no_uri(0)
            .uri(1, "rho:io:stdout")
            .body(|body| {
                body.assert_par()
                    .proc_count(2)
                    .proc(0, |p| {
                        p.assert_join()
                            .action_count(1)
                            .action(0, |a| {
                                a.binds(&["y"]).chan(|c| {
                                    c.assert_ground().int(1);
                                });
                            })
                            .body(|b| b.assert_nil());
                    })
                    .proc(1, |p| {
                        p.assert_bundle().proc(|inner| {
                            inner
                                .assert_send()
                                .chan(|c| c.assert_nil())
                                .message(|m| {
                                    m.assert_ground().string("hi").string_starts_with("h");
                                });
                        });
                    });
            });
    }

    #[test]
    #[should_panic(expected = "proc.procs[1]: Expected nil, found ground")]
    fn test_mismatch_reports_path() {
        let proc = Proc::par(Proc::nil(), Proc::bool(true));
        assert_proc(&proc).assert_par().proc(1, |p| p.assert_nil());
    }

    #[test]
    #[should_panic(expected = "Expected 3 procs, found 2 procs: [nil, ground]")]
    fn test_count_mismatch_summarizes() {
        let proc = Proc::par(Proc::nil(), Proc::int(0));
        assert_proc(&proc).assert_par().proc_count(3);
    }

    #[test]
    #[should_panic(expected = "proc.vars[2]: out of bounds")]
    fn test_missing_name_reports_path() {
        let proc = Proc::new_names(["x", "y"], Proc::nil());
        assert_proc(&proc).assert_new().no_uri(2);
    }
}
