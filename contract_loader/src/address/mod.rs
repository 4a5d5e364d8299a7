//!
//! The contract creation address derivation.
//!


use sha3::Digest;

/// The Keccak-256 digest byte length.
pub const BYTE_LENGTH_FIELD: usize = 32;

/// The account address byte length.
pub const BYTE_LENGTH_ADDRESS: usize = 20;

///
/// Returns the address of the contract created by `creator` in its transaction with `nonce`.
///
/// The address is the low 20 bytes of `keccak256(rlp([creator, nonce]))`.
///
pub fn compute(creator: &web3::types::Address, nonce: u64) -> web3::types::Address {
    let mut stream = rlp::RlpStream::new_list(2);
    stream.append(&creator.as_bytes());
    stream.append(&nonce);

    let hash = sha3::Keccak256::digest(stream.out());
    web3::types::Address::from_slice(&hash[BYTE_LENGTH_FIELD - BYTE_LENGTH_ADDRESS..])
}

///
/// The creation address iterator.
///
/// Yields the nonce and the address of each contract the creator is going to deploy,
/// starting from the nonce fetched from the network.
///
#[derive(Debug, Clone)]
pub struct AddressIterator {
    /// The creator account.
    creator: web3::types::Address,
    /// The nonce of the next creation transaction.
    nonce: u64,
}

impl AddressIterator {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(creator: web3::types::Address, base: u64) -> Self {
        Self {
            creator,
            nonce: base,
        }
    }
}

impl Iterator for AddressIterator {
    type Item = (u64, web3::types::Address);

    fn next(&mut self) -> Option<Self::Item> {
        let nonce = self.nonce;
        self.nonce = self.nonce.checked_add(1)?;
        Some((nonce, self::compute(&self.creator, nonce)))
    }
}
