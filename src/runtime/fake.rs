//! Recording fake runtime for engine tests

use std::cell::RefCell;

use super::{CommandOutput, ContainerRuntime};
use crate::error::Result;

type CaptureHandler = Box<dyn Fn(&[String]) -> CommandOutput>;

/// Fake runtime that records every call and answers `capture` through a
/// caller-supplied handler. `interactive` always succeeds with exit code 0
/// unless overridden.
pub(crate) struct FakeRuntime {
    pub calls: RefCell<Vec<Vec<String>>>,
    on_capture: CaptureHandler,
    interactive_code: i32,
}

impl FakeRuntime {
    pub fn new(on_capture: impl Fn(&[String]) -> CommandOutput + 'static) -> Self {
        FakeRuntime {
            calls: RefCell::new(Vec::new()),
            on_capture: Box::new(on_capture),
            interactive_code: 0,
        }
    }

    pub fn with_interactive_code(mut self, code: i32) -> Self {
        self.interactive_code = code;
        self
    }

    /// All recorded invocations, one argv per call.
    pub fn recorded(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }

    /// True if some recorded invocation started with the given subcommand.
    pub fn invoked(&self, subcommand: &str) -> bool {
        self.calls
            .borrow()
            .iter()
            .any(|argv| argv.first().map(String::as_str) == Some(subcommand))
    }
}

impl ContainerRuntime for FakeRuntime {
    fn capture(&self, args: &[String]) -> Result<CommandOutput> {
        self.calls.borrow_mut().push(args.to_vec());
        Ok((self.on_capture)(args))
    }

    fn interactive(&self, args: &[String]) -> Result<i32> {
        self.calls.borrow_mut().push(args.to_vec());
        Ok(self.interactive_code)
    }
}

/// A successful capture result with the given stdout.
pub(crate) fn ok_output(stdout: &str) -> CommandOutput {
    CommandOutput {
        status_code: 0,
        stdout: stdout.to_string(),
        stderr: String::new(),
    }
}

/// A failed capture result with the given stderr.
pub(crate) fn err_output(stderr: &str) -> CommandOutput {
    CommandOutput {
        status_code: 1,
        stdout: String::new(),
        stderr: stderr.to_string(),
    }
}
