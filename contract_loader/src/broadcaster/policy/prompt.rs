//!
//! The interactive timeout policy.
//!

use std::io::BufRead;
use std::io::Write;

use crate::broadcaster::attempt::Attempt;
use crate::module::Module;

use super::Decision;
use super::RetryPolicy;

///
/// Asks the operator what to do on each timeout.
///
/// An empty answer or `y` keeps polling, `r` resubmits, anything else aborts.
/// A closed input aborts.
///
#[derive(Debug)]
pub struct Prompt<R, W> {
    /// The operator input.
    input: R,
    /// The question output.
    output: W,
}

impl<R, W> Prompt<R, W>
where
    R: BufRead,
    W: Write,
{
    ///
    /// A shortcut constructor.
    ///
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    ///
    /// Asks the question and reads the answer, if the input is not closed.
    ///
    fn ask(&mut self, module: &Module, attempt: &Attempt) -> std::io::Result<Option<String>> {
        write!(
            self.output,
            "Module `{}` is not confirmed after {} polls. Keep polling? [Y/n/r(esubmit)] ",
            module.shortcut, attempt.polls,
        )?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Ok(None);
        }
        Ok(Some(answer.trim().to_lowercase()))
    }
}

impl<R, W> RetryPolicy for Prompt<R, W>
where
    R: BufRead,
    W: Write,
{
    fn on_timeout(&mut self, module: &Module, attempt: &Attempt) -> Decision {
        match self.ask(module, attempt) {
            Ok(Some(answer)) => match answer.as_str() {
                "" | "y" | "yes" => Decision::Poll,
                "r" | "resubmit" => Decision::Resubmit,
                _ => Decision::Abort,
            },
            Ok(None) | Err(_) => Decision::Abort,
        }
    }
}
