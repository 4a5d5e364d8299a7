//!
//! The in-memory node used by tests.
//!

use std::collections::HashMap;
use std::collections::VecDeque;

use super::error::Error;
use super::transaction::Receipt;
use super::transaction::Transaction;
use super::Node;

///
/// The in-memory node.
///
/// Accepted creation transactions are mined at once: the contract is stored at the
/// canonical creation address and its receipt shows up after `confirmation_polls`
/// receipt queries. Scripted rejections are returned before anything is mined.
///
#[derive(Debug)]
pub struct MockNode {
    /// The default account.
    pub coinbase: web3::types::Address,
    /// The account nonces.
    pub nonces: HashMap<web3::types::Address, u64>,
    /// The errors returned by the next submissions, in order.
    pub rejections: VecDeque<Error>,
    /// The gas estimate.
    pub estimate: web3::types::U256,
    /// The number of empty receipt queries before a receipt appears.
    pub confirmation_polls: usize,
    /// Whether transactions are ever included.
    pub mining: bool,
    /// The code returned for every address instead of the stored one.
    pub code_override: Option<Vec<u8>>,
    /// The stored contract code.
    pub code: HashMap<web3::types::Address, Vec<u8>>,
    /// The submitted transactions, including the rejected ones.
    pub sent: Vec<Transaction>,
    /// The number of gas estimations requested.
    pub estimations: usize,
    /// The number of receipt queries made.
    pub receipt_queries: usize,
    /// The accepted transactions with their receipts and remaining empty polls.
    transactions: HashMap<web3::types::H256, (Receipt, usize)>,
}

impl MockNode {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(coinbase: web3::types::Address, nonce: u64) -> Self {
        Self {
            coinbase,
            nonces: HashMap::from([(coinbase, nonce)]),
            rejections: VecDeque::new(),
            estimate: web3::types::U256::from(1_000_000),
            confirmation_polls: 0,
            mining: true,
            code_override: None,
            code: HashMap::new(),
            sent: Vec::new(),
            estimations: 0,
            receipt_queries: 0,
            transactions: HashMap::new(),
        }
    }

    ///
    /// Returns the JSON-RPC error the node sends when the block gas limit is exceeded.
    ///
    pub fn gas_limit_error() -> Error {
        Error::Rpc {
            code: -32603,
            message: "Exceeds block gas limit".to_owned(),
        }
    }
}

impl Node for MockNode {
    fn coinbase(&mut self) -> Result<web3::types::Address, Error> {
        Ok(self.coinbase)
    }

    fn transaction_count(&mut self, account: &web3::types::Address) -> Result<u64, Error> {
        Ok(self.nonces.get(account).copied().unwrap_or_default())
    }

    fn send_transaction(
        &mut self,
        transaction: &Transaction,
    ) -> Result<web3::types::H256, Error> {
        self.sent.push(transaction.clone());
        if let Some(error) = self.rejections.pop_front() {
            return Err(error);
        }

        let nonce = self.nonces.entry(transaction.from).or_default();
        let hash = web3::types::H256::from_low_u64_be(self.sent.len() as u64);
        let contract_address = match transaction.to {
            Some(_) => None,
            None => Some(crate::address::compute(&transaction.from, *nonce)),
        };
        *nonce += 1;

        if let Some(address) = contract_address {
            if self.mining {
                self.code.insert(address, transaction.data.0.clone());
            }
        }
        let receipt = Receipt {
            transaction_hash: hash,
            block_number: Some(web3::types::U64::from(self.sent.len() as u64)),
            contract_address,
            status: Some(web3::types::U64::one()),
        };
        self.transactions
            .insert(hash, (receipt, self.confirmation_polls));
        Ok(hash)
    }

    fn estimate_gas(&mut self, _transaction: &Transaction) -> Result<web3::types::U256, Error> {
        self.estimations += 1;
        Ok(self.estimate)
    }

    fn transaction_receipt(
        &mut self,
        hash: &web3::types::H256,
    ) -> Result<Option<Receipt>, Error> {
        self.receipt_queries += 1;
        if !self.mining {
            return Ok(None);
        }
        match self.transactions.get_mut(hash) {
            Some((_receipt, remaining)) if *remaining > 0 => {
                *remaining -= 1;
                Ok(None)
            }
            Some((receipt, _)) => Ok(Some(receipt.clone())),
            None => Ok(None),
        }
    }

    fn code(&mut self, address: &web3::types::Address) -> Result<Vec<u8>, Error> {
        if let Some(code) = self.code_override.as_ref() {
            return Ok(code.clone());
        }
        Ok(self.code.get(address).cloned().unwrap_or_default())
    }
}
