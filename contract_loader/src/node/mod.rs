//!
//! The chain node access.
//!

pub mod client;
pub mod endpoint;
pub mod error;
#[cfg(test)]
pub(crate) mod mock;
pub mod transaction;
pub mod transport;


use self::error::Error;
use self::transaction::Receipt;
use self::transaction::Transaction;

///
/// The chain node operations the loader consumes.
///
/// The node is used strictly sequentially, so the methods take `&mut self`.
///
pub trait Node {
    ///
    /// Returns the node default account.
    ///
    fn coinbase(&mut self) -> Result<web3::types::Address, Error>;

    ///
    /// Returns the nonce of the next transaction of `account`.
    ///
    fn transaction_count(&mut self, account: &web3::types::Address) -> Result<u64, Error>;

    ///
    /// Submits the transaction and returns its hash.
    ///
    fn send_transaction(&mut self, transaction: &Transaction)
        -> Result<web3::types::H256, Error>;

    ///
    /// Estimates the gas the transaction needs.
    ///
    fn estimate_gas(&mut self, transaction: &Transaction) -> Result<web3::types::U256, Error>;

    ///
    /// Returns the receipt of the transaction, if it is included.
    ///
    fn transaction_receipt(
        &mut self,
        hash: &web3::types::H256,
    ) -> Result<Option<Receipt>, Error>;

    ///
    /// Returns the code stored at `address`.
    ///
    fn code(&mut self, address: &web3::types::Address) -> Result<Vec<u8>, Error>;
}

impl<N> Node for &mut N
where
    N: Node + ?Sized,
{
    fn coinbase(&mut self) -> Result<web3::types::Address, Error> {
        (**self).coinbase()
    }

    fn transaction_count(&mut self, account: &web3::types::Address) -> Result<u64, Error> {
        (**self).transaction_count(account)
    }

    fn send_transaction(
        &mut self,
        transaction: &Transaction,
    ) -> Result<web3::types::H256, Error> {
        (**self).send_transaction(transaction)
    }

    fn estimate_gas(&mut self, transaction: &Transaction) -> Result<web3::types::U256, Error> {
        (**self).estimate_gas(transaction)
    }

    fn transaction_receipt(
        &mut self,
        hash: &web3::types::H256,
    ) -> Result<Option<Receipt>, Error> {
        (**self).transaction_receipt(hash)
    }

    fn code(&mut self, address: &web3::types::Address) -> Result<Vec<u8>, Error> {
        (**self).code(address)
    }
}
