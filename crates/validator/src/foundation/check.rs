//! Labeled checks - the second stage of a rule.
//!
//! A [`Rule`](crate::foundation::Rule) looks at a value and produces a
//! [`LabeledCheck`]. The check does not know which field it belongs to until
//! [`run`](LabeledCheck::run) binds a field name, which is the only point
//! where failure messages get rendered.

use std::fmt;

use crate::foundation::FieldError;

type Label = Box<dyn FnOnce(&str) -> Vec<String>>;

enum Verdict {
    Pass,
    Fail(Label),
}

/// Outcome of a rule awaiting its field name.
///
/// A failing check always renders at least one message.
#[must_use = "a check does nothing until it is run with a field name"]
pub struct LabeledCheck {
    verdict: Verdict,
}

impl LabeledCheck {
    /// A check that succeeds under any field name.
    pub fn pass() -> Self {
        Self {
            verdict: Verdict::Pass,
        }
    }

    /// A check that fails with one message rendered from the field name.
    pub fn fail<F>(message: F) -> Self
    where
        F: FnOnce(&str) -> String + 'static,
    {
        Self {
            verdict: Verdict::Fail(Box::new(move |field| vec![message(field)])),
        }
    }

    /// Passes when `ok`, otherwise fails with `message`.
    pub fn ensure<F>(ok: bool, message: F) -> Self
    where
        F: FnOnce(&str) -> String + 'static,
    {
        if ok { Self::pass() } else { Self::fail(message) }
    }

    /// A check that fails with fixed messages, independent of the field name.
    ///
    /// An empty message list yields a passing check.
    pub fn fail_with_messages(messages: Vec<String>) -> Self {
        if messages.is_empty() {
            return Self::pass();
        }
        Self {
            verdict: Verdict::Fail(Box::new(move |_| messages)),
        }
    }

    /// Combines checks: passes only if every check passes.
    ///
    /// Failing checks keep their order; all of them are run under the same
    /// field name and their messages concatenated.
    pub fn all<I>(checks: I) -> Self
    where
        I: IntoIterator<Item = LabeledCheck>,
    {
        let failing: Vec<Label> = checks
            .into_iter()
            .filter_map(|check| match check.verdict {
                Verdict::Pass => None,
                Verdict::Fail(label) => Some(label),
            })
            .collect();

        if failing.is_empty() {
            return Self::pass();
        }

        Self {
            verdict: Verdict::Fail(Box::new(move |field| {
                failing.into_iter().flat_map(|label| label(field)).collect()
            })),
        }
    }

    /// Returns true if the check passes.
    pub fn is_pass(&self) -> bool {
        matches!(self.verdict, Verdict::Pass)
    }

    /// Binds the field name and returns the outcome.
    pub fn run(self, field: &str) -> Result<(), FieldError> {
        match self.verdict {
            Verdict::Pass => Ok(()),
            Verdict::Fail(label) => Err(FieldError::with_messages(field, label(field))),
        }
    }
}

impl fmt::Debug for LabeledCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.is_pass() { "pass" } else { "fail" };
        f.debug_struct("LabeledCheck")
            .field("verdict", &verdict)
            .finish()
    }
}
