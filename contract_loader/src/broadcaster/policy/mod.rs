//!
//! The confirmation timeout policy.
//!

pub mod prompt;

use std::collections::HashMap;

use crate::broadcaster::attempt::Attempt;
use crate::module::Module;

use self::prompt::Prompt;

///
/// The decision taken when a module is not confirmed within the polling bound.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Poll the same transaction for another round.
    Poll,
    /// Send a fresh creation transaction.
    Resubmit,
    /// Give up and fail the build.
    Abort,
}

///
/// The confirmation timeout policy.
///
pub trait RetryPolicy {
    ///
    /// Decides what to do with the module whose polling round is exhausted.
    ///
    fn on_timeout(&mut self, module: &Module, attempt: &Attempt) -> Decision;
}

///
/// Fails the build on the first timeout.
///
#[derive(Debug, Default, Clone, Copy)]
pub struct Abort;

impl RetryPolicy for Abort {
    fn on_timeout(&mut self, _module: &Module, _attempt: &Attempt) -> Decision {
        Decision::Abort
    }
}

///
/// Repeats the decision up to the limit for each module, then aborts.
///
#[derive(Debug, Clone)]
pub struct Repeat {
    /// The decision to repeat.
    decision: Decision,
    /// The number of repetitions per module.
    limit: usize,
    /// The repetitions used by each module.
    used: HashMap<String, usize>,
}

impl Repeat {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(decision: Decision, limit: usize) -> Self {
        Self {
            decision,
            limit,
            used: HashMap::new(),
        }
    }
}

impl RetryPolicy for Repeat {
    fn on_timeout(&mut self, module: &Module, _attempt: &Attempt) -> Decision {
        let used = self.used.entry(module.shortcut.clone()).or_default();
        if *used >= self.limit {
            return Decision::Abort;
        }
        *used += 1;
        self.decision
    }
}

///
/// The timeout policy selected by configuration.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeoutPolicy {
    /// Abort on the first timeout.
    Abort,
    /// Ask the operator.
    Prompt,
    /// Keep polling the same transaction up to the given number of rounds.
    Poll(usize),
    /// Resubmit up to the given number of times.
    Resubmit(usize),
}

impl TimeoutPolicy {
    ///
    /// Instantiates the policy.
    ///
    pub fn instantiate(self) -> Box<dyn RetryPolicy> {
        match self {
            Self::Abort => Box::new(Abort),
            Self::Prompt => Box::new(Prompt::new(std::io::stdin().lock(), std::io::stderr())),
            Self::Poll(limit) => Box::new(Repeat::new(Decision::Poll, limit)),
            Self::Resubmit(limit) => Box::new(Repeat::new(Decision::Resubmit, limit)),
        }
    }
}

impl std::str::FromStr for TimeoutPolicy {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let (name, limit) = match string.split_once(':') {
            Some((name, limit)) => (
                name,
                Some(limit.parse::<usize>().map_err(|error| {
                    anyhow::anyhow!("Invalid timeout policy limit `{limit}`: {error}")
                })?),
            ),
            None => (string, None),
        };

        match (name, limit) {
            ("abort", None) => Ok(Self::Abort),
            ("prompt", None) => Ok(Self::Prompt),
            ("poll", Some(limit)) => Ok(Self::Poll(limit)),
            ("resubmit", Some(limit)) => Ok(Self::Resubmit(limit)),
            _ => anyhow::bail!(
                "Unknown timeout policy `{string}`. Supported policies: abort, prompt, poll:<N>, resubmit:<N>"
            ),
        }
    }
}

impl std::fmt::Display for TimeoutPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Abort => write!(f, "abort"),
            Self::Prompt => write!(f, "prompt"),
            Self::Poll(limit) => write!(f, "poll:{limit}"),
            Self::Resubmit(limit) => write!(f, "resubmit:{limit}"),
        }
    }
}
