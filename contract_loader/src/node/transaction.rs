//!
//! The node transaction and receipt types.
//!

///
/// The transaction sent to the node for signing by the unlocked `from` account.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// The sender.
    pub from: web3::types::Address,
    /// The recipient. Absent for contract creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<web3::types::Address>,
    /// The gas allowance. Absent for gas estimation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas: Option<web3::types::U256>,
    /// The init code or the calldata.
    pub data: web3::types::Bytes,
}

impl Transaction {
    ///
    /// A shortcut constructor for a contract creation transaction.
    ///
    pub fn create(
        from: web3::types::Address,
        code: Vec<u8>,
        gas: Option<web3::types::U256>,
    ) -> Self {
        Self {
            from,
            to: None,
            gas,
            data: web3::types::Bytes(code),
        }
    }

    ///
    /// A shortcut constructor for a contract call transaction.
    ///
    pub fn call(
        from: web3::types::Address,
        to: web3::types::Address,
        calldata: Vec<u8>,
        gas: Option<web3::types::U256>,
    ) -> Self {
        Self {
            from,
            to: Some(to),
            gas,
            data: web3::types::Bytes(calldata),
        }
    }
}

///
/// The transaction receipt.
///
/// Only the fields the loader reads are declared, so that older nodes omitting
/// the rest are still understood.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// The transaction hash.
    pub transaction_hash: web3::types::H256,
    /// The including block number.
    #[serde(default)]
    pub block_number: Option<web3::types::U64>,
    /// The created contract address.
    #[serde(default)]
    pub contract_address: Option<web3::types::Address>,
    /// The execution status, if the node reports one.
    #[serde(default)]
    pub status: Option<web3::types::U64>,
}
