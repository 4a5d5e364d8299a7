//!
//! The contract creation broadcaster.
//!

pub mod attempt;
pub mod config;
pub mod policy;


use colored::Colorize;

use crate::error::Error;
use crate::module::state::State;
use crate::module::Module;
use crate::node::transaction::Transaction;
use crate::node::Node;

use self::attempt::Attempt;
use self::config::Config;
use self::policy::Decision;
use self::policy::RetryPolicy;

///
/// The contract creation broadcaster.
///
/// Drives each module through `Pending -> Submitted -> Confirmed`, resubmitting after
/// gas-limit rejections and handing exhausted polling rounds to the retry policy.
/// Modules must be broadcast one at a time, in their address allocation order.
///
pub struct Broadcaster<'a, N>
where
    N: Node,
{
    /// The node client.
    node: &'a mut N,
    /// The creator account.
    creator: web3::types::Address,
    /// The broadcaster configuration.
    config: Config,
    /// The confirmation timeout policy.
    policy: &'a mut dyn RetryPolicy,
    /// Whether to print the polling details.
    verbose: bool,
}

///
/// The outcome of a polling round.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Polling {
    /// The receipt is there and the deployed code is verified.
    Confirmed,
    /// The round is exhausted.
    Exhausted {
        /// Whether a receipt was seen, but the code never matched.
        is_receipt_seen: bool,
    },
}

impl<'a, N> Broadcaster<'a, N>
where
    N: Node,
{
    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        node: &'a mut N,
        creator: web3::types::Address,
        config: Config,
        policy: &'a mut dyn RetryPolicy,
        verbose: bool,
    ) -> Self {
        Self {
            node,
            creator,
            config,
            policy,
            verbose,
        }
    }

    ///
    /// Deploys the compiled module at its precomputed address.
    ///
    /// On success the module is `Confirmed`. On a gas ceiling it is `Aborted`.
    /// On a confirmation timeout it stays `Submitted`.
    ///
    pub fn broadcast(&mut self, module: &mut Module) -> Result<Attempt, Error> {
        let code = module
            .bytecode
            .as_ref()
            .map(|bytecode| bytecode.0.clone())
            .ok_or_else(|| {
                Error::Configuration(format!("Module `{}` is not compiled", module.shortcut))
            })?;
        let address = module.address.ok_or_else(|| {
            Error::Configuration(format!(
                "Module `{}` has no address allocated",
                module.shortcut
            ))
        })?;

        let mut attempt = Attempt::default();
        loop {
            let transaction_hash = self.submit(module, code.as_slice(), &mut attempt)?;

            loop {
                let is_receipt_seen = match self.poll(
                    module,
                    &address,
                    code.as_slice(),
                    &transaction_hash,
                    &mut attempt,
                )? {
                    Polling::Confirmed => {
                        module.state = State::Confirmed;
                        return Ok(attempt);
                    }
                    Polling::Exhausted { is_receipt_seen } => is_receipt_seen,
                };

                match self.policy.on_timeout(module, &attempt) {
                    Decision::Poll => continue,
                    Decision::Resubmit => break,
                    Decision::Abort if is_receipt_seen => {
                        return Err(Error::BytecodeMismatch {
                            shortcut: module.shortcut.clone(),
                            address,
                            transaction_hash,
                        })
                    }
                    Decision::Abort => {
                        return Err(Error::ConfirmationTimeout {
                            shortcut: module.shortcut.clone(),
                            transaction_hash,
                            polls: attempt.polls,
                        })
                    }
                }
            }
        }
    }

    ///
    /// Whether the code read from the chain is the runtime part of the submitted init code.
    ///
    pub fn is_code_deployed(deployed: &[u8], submitted: &[u8]) -> bool {
        !deployed.is_empty()
            && submitted
                .windows(deployed.len())
                .any(|window| window == deployed)
    }

    ///
    /// Sends the creation transaction, resubmitting while the block gas limit is the only problem.
    ///
    fn submit(
        &mut self,
        module: &mut Module,
        code: &[u8],
        attempt: &mut Attempt,
    ) -> Result<web3::types::H256, Error> {
        let transaction = Transaction::create(self.creator, code.to_vec(), Some(self.config.gas));

        loop {
            attempt.submissions += 1;
            let error = match self.node.send_transaction(&transaction) {
                Ok(transaction_hash) => {
                    attempt.transaction_hash = Some(transaction_hash);
                    module.transaction_hash = Some(transaction_hash);
                    module.state = State::Submitted;
                    return Ok(transaction_hash);
                }
                Err(error) => error,
            };
            attempt.last_error = Some(error.to_string());

            if !error.is_gas_limit() {
                return Err(Error::UnrecognizedSubmission {
                    shortcut: module.shortcut.clone(),
                    error,
                });
            }

            let estimate = self
                .node
                .estimate_gas(&Transaction::create(self.creator, code.to_vec(), None))?;
            if estimate >= self.config.max_gas || attempt.gas_retries >= self.config.gas_retries {
                module.state = State::Aborted;
                return Err(Error::GasLimitExceeded {
                    shortcut: module.shortcut.clone(),
                    estimate,
                    maximum: self.config.max_gas,
                    retries: attempt.gas_retries,
                });
            }

            attempt.gas_retries += 1;
            if self.verbose {
                println!(
                    "{:>12} `{}` after the block gas limit rejection (estimated {} gas)",
                    "Resubmitting".bright_yellow().bold(),
                    module.shortcut,
                    estimate,
                );
            }
            std::thread::sleep(self.config.blocktime);
        }
    }

    ///
    /// Runs a polling round for the transaction receipt and verifies the deployed code.
    ///
    fn poll(
        &mut self,
        module: &Module,
        address: &web3::types::Address,
        code: &[u8],
        transaction_hash: &web3::types::H256,
        attempt: &mut Attempt,
    ) -> Result<Polling, Error> {
        let mut is_receipt_seen = false;

        for _ in 0..self.config.tries {
            std::thread::sleep(self.config.blocktime);
            attempt.polls += 1;

            let receipt = match self.node.transaction_receipt(transaction_hash)? {
                Some(receipt) => receipt,
                None => {
                    if self.verbose {
                        println!(
                            "{:>12} `{}` transaction {:?} (poll {})",
                            "Waiting".bright_black().bold(),
                            module.shortcut,
                            transaction_hash,
                            attempt.polls,
                        );
                    }
                    continue;
                }
            };
            is_receipt_seen = true;

            if let Some(contract_address) = receipt.contract_address {
                if contract_address != *address {
                    eprintln!(
                        "{:>12} `{}` is created at {:?} instead of the precomputed {:?}; was another transaction sent from the creator account?",
                        "Warning".bright_red().bold(),
                        module.shortcut,
                        contract_address,
                        address,
                    );
                }
            }

            let deployed = self.node.code(address)?;
            if Self::is_code_deployed(deployed.as_slice(), code) {
                return Ok(Polling::Confirmed);
            }
            attempt.last_error = Some(format!(
                "the code at {address:?} does not match the submitted one"
            ));
        }

        Ok(Polling::Exhausted { is_receipt_seen })
    }
}
