//!
//! Base58 and Base58Check codecs (Bitcoin alphabet).
//!
//! The checked form carries a 4-byte checksum equal to the head of
//! `SHA256(SHA256(payload))`. Decoding additionally enforces the ledger
//! address layout: `prefix(1) ‖ address(20) ‖ checksum(4)`.
//!

use crate::{AddressError, ADDRESS_SIZE, PREFIX_MAINNET};
use tron_hashes::{checksum, CHECKSUM_SIZE};

/// Decoded length of a checked address: prefix + body + checksum.
pub const DECODED_ADDRESS_SIZE: usize = 1 + ADDRESS_SIZE + CHECKSUM_SIZE;

/// Encodes raw bytes without a checksum.
pub fn encode(input: &[u8]) -> String {
    bs58::encode(input).into_string()
}

/// Appends the double-SHA256 checksum to `input` and encodes the result.
/// No length precondition applies to `input`.
pub fn encode_check(input: &[u8]) -> String {
    let mut data = Vec::with_capacity(input.len() + CHECKSUM_SIZE);
    data.extend_from_slice(input);
    data.extend_from_slice(&checksum(input));
    encode(&data)
}

/// Decodes a base58 string. An empty decoding result is rejected.
pub fn decode(input: &str) -> Result<Vec<u8>, AddressError> {
    let decoded = bs58::decode(input).into_vec().map_err(|err| AddressError::InvalidBase58(err.to_string()))?;
    if decoded.is_empty() {
        return Err(AddressError::EmptyDecoding);
    }
    Ok(decoded)
}

/// Decodes a checked address string and returns the 21-byte `prefix ‖ address` payload.
pub fn decode_check(input: &str) -> Result<Vec<u8>, AddressError> {
    let mut decoded = decode(input)?;

    if decoded.len() < CHECKSUM_SIZE {
        return Err(AddressError::InsufficientLength);
    }
    if decoded.len() != DECODED_ADDRESS_SIZE {
        return Err(AddressError::InvalidLength(decoded.len()));
    }
    if decoded[0] != PREFIX_MAINNET {
        return Err(AddressError::InvalidPrefix(decoded[0]));
    }

    let split = decoded.len() - CHECKSUM_SIZE;
    if checksum(&decoded[..split]) != decoded[split..] {
        return Err(AddressError::BadChecksum);
    }

    decoded.truncate(split);
    Ok(decoded)
}
