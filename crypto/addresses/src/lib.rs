use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

pub mod base58;

/// Size of the address body.
pub const ADDRESS_SIZE: usize = 20;

/// Size of the address as carried in RPC requests: `prefix ‖ body`.
pub const WIRE_ADDRESS_SIZE: usize = ADDRESS_SIZE + 1;

/// Leading byte of every mainnet address payload.
pub const PREFIX_MAINNET: u8 = 0x41;

#[derive(Error, PartialEq, Eq, Debug, Clone)]
pub enum AddressError {
    #[error("Invalid base58 input: {0}")]
    InvalidBase58(String),

    #[error("Invalid hex input: {0}")]
    InvalidHex(String),

    #[error("Base58 decoding produced an empty result")]
    EmptyDecoding,

    #[error("Base58Check error: insufficient length")]
    InsufficientLength,

    #[error("Invalid address length {0}")]
    InvalidLength(usize),

    #[error("Invalid address prefix {0:#04x}")]
    InvalidPrefix(u8),

    #[error("Base58Check error: checksum mismatch")]
    BadChecksum,
}

/// A ledger account or contract address.
///
/// Holds the bare 20-byte body. The textual form is `Base58Check(0x41 ‖ body)`,
/// the wire form used in requests is the 21-byte `0x41 ‖ body`.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Default)]
pub struct Address([u8; ADDRESS_SIZE]);

impl Address {
    pub const fn new(body: [u8; ADDRESS_SIZE]) -> Self {
        Self(body)
    }

    /// Decodes a Base58Check string into its 20-byte body.
    pub fn from_base58(address: &str) -> Result<Self, AddressError> {
        let payload = base58::decode_check(address)?;
        Self::from_wire_bytes(&payload)
    }

    /// Builds an address from its 21-byte `prefix ‖ body` form.
    pub fn from_wire_bytes(bytes: &[u8]) -> Result<Self, AddressError> {
        if bytes.len() != WIRE_ADDRESS_SIZE {
            return Err(AddressError::InvalidLength(bytes.len()));
        }
        if bytes[0] != PREFIX_MAINNET {
            return Err(AddressError::InvalidPrefix(bytes[0]));
        }
        let mut body = [0u8; ADDRESS_SIZE];
        body.copy_from_slice(&bytes[1..]);
        Ok(Self(body))
    }

    /// Parses the hex rendering `41…` (42 hex digits) used by the ledger's HTTP surface.
    pub fn from_hex(hex_str: &str) -> Result<Self, AddressError> {
        let bytes = hex::decode(hex_str).map_err(|err| AddressError::InvalidHex(err.to_string()))?;
        Self::from_wire_bytes(&bytes)
    }

    pub fn to_base58(&self) -> String {
        base58::encode_check(&self.to_wire_bytes())
    }

    pub fn to_wire_bytes(&self) -> [u8; WIRE_ADDRESS_SIZE] {
        let mut bytes = [0u8; WIRE_ADDRESS_SIZE];
        bytes[0] = PREFIX_MAINNET;
        bytes[1..].copy_from_slice(&self.0);
        bytes
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.to_wire_bytes())
    }

    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8; ADDRESS_SIZE] {
        &self.0
    }
}

impl From<[u8; ADDRESS_SIZE]> for Address {
    fn from(body: [u8; ADDRESS_SIZE]) -> Self {
        Self(body)
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_base58())
    }
}

impl Debug for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Address").field(&self.to_base58()).finish()
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(address: &str) -> Result<Self, Self::Err> {
        Self::from_base58(address)
    }
}

impl TryFrom<&str> for Address {
    type Error = AddressError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_base58(value)
    }
}

impl TryFrom<String> for Address {
    type Error = AddressError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_base58(&value)
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.to_base58()
    }
}

impl From<&Address> for String {
    fn from(address: &Address) -> Self {
        address.to_base58()
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_base58())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(AddressVisitor)
    }
}

struct AddressVisitor;

impl serde::de::Visitor<'_> for AddressVisitor {
    type Value = Address;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(formatter, "a Base58Check encoded address string")
    }

    fn visit_str<E>(self, str: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Address::from_base58(str).map_err(|_| serde::de::Error::invalid_value(serde::de::Unexpected::Str(str), &self))
    }
}

#[cfg(test)]
mod tests {
    use crate::*;
    use hex_literal::hex;

    fn cases() -> Vec<(Address, &'static str)> {
        // cspell:disable
        vec![
            (Address::new([0u8; 20]), "T9yD14Nj9j7xAB4dbGeiX9h8unkKHxuWwb"),
            (Address::new(hex!("a7d8a35b260395c14aa456297662092ba3b76fc0")), "TRGhNNfnmgLegT4zHNjEqDSADjgmnHvubJ"),
            (Address::new(hex!("a614f803b6fd780986a42c78ec9c7f77e6ded13c")), "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t"),
        ]
        // cspell:enable
    }

    #[test]
    fn check_into_string() {
        for (address, expected_address_str) in cases() {
            let address_str: String = address.into();
            assert_eq!(address_str, expected_address_str);
        }
    }

    #[test]
    fn check_from_string() {
        for (expected_address, address_str) in cases() {
            let address: Address = address_str.to_string().try_into().expect("Test failed");
            assert_eq!(address, expected_address);
        }
    }

    #[test]
    fn check_wire_and_hex_forms() {
        let (address, _) = cases()[1];
        assert_eq!(address.to_wire_bytes(), hex!("41a7d8a35b260395c14aa456297662092ba3b76fc0"));
        assert_eq!(address.to_hex(), "41a7d8a35b260395c14aa456297662092ba3b76fc0");
        assert_eq!(Address::from_hex("41a7d8a35b260395c14aa456297662092ba3b76fc0").unwrap(), address);
        assert_eq!(Address::from_wire_bytes(&address.as_bytes()[..]), Err(AddressError::InvalidLength(20)));
        assert_eq!(
            Address::from_hex("42a7d8a35b260395c14aa456297662092ba3b76fc0"),
            Err(AddressError::InvalidPrefix(0x42))
        );
    }

    #[test]
    fn test_errors() {
        // cspell:disable
        let address: Result<Address, AddressError> = "TRGhNNfnmgLegT4zHNjEqDSADjgmnHvubK".try_into();
        assert_eq!(Err(AddressError::BadChecksum), address);

        let address: Result<Address, AddressError> = "TZJozAg1ruapycCicgz31GxvYJ1G1qELV7".try_into();
        assert_eq!(Err(AddressError::InvalidPrefix(0x42)), address);

        let address: Result<Address, AddressError> = "".try_into();
        assert_eq!(Err(AddressError::EmptyDecoding), address);
        // cspell:enable
    }

    #[test]
    fn test_serde() {
        let (address, address_str) = cases()[2];
        let json = serde_json::to_string(&address).unwrap();
        assert_eq!(json, format!("\"{address_str}\""));
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, address);
        assert!(serde_json::from_str::<Address>("\"TRGhNNfnmgLegT4zHNjEqDSADjgmnHvubK\"").is_err());
    }
}
