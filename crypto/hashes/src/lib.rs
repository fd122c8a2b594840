mod hashers;

pub use hashers::{DoubleSha256, Hasher, HasherBase, Keccak256, Sha256};

use std::fmt::{Display, Formatter};
use std::str::{self, FromStr};

pub const HASH_SIZE: usize = 32;

/// Size of a contract method selector.
pub const SELECTOR_SIZE: usize = 4;

/// Size of the Base58Check checksum appended to address payloads.
pub const CHECKSUM_SIZE: usize = 4;

#[derive(PartialEq, Eq, Clone, Copy, Hash, Default, Debug)]
pub struct Hash([u8; HASH_SIZE]);

impl Hash {
    #[inline(always)]
    pub const fn from_bytes(bytes: [u8; HASH_SIZE]) -> Self {
        Hash(bytes)
    }

    #[inline(always)]
    pub const fn as_bytes(&self) -> [u8; HASH_SIZE] {
        self.0
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    #[inline(always)]
    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

impl From<[u8; HASH_SIZE]> for Hash {
    fn from(bytes: [u8; HASH_SIZE]) -> Self {
        Hash(bytes)
    }
}

impl TryFrom<&[u8]> for Hash {
    type Error = std::array::TryFromSliceError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Ok(Hash(bytes.try_into()?))
    }
}

impl AsRef<[u8]> for Hash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Display for Hash {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut hex = [0u8; HASH_SIZE * 2];
        hex::encode_to_slice(self.0, &mut hex).map_err(|_| std::fmt::Error)?;
        f.write_str(str::from_utf8(&hex).map_err(|_| std::fmt::Error)?)
    }
}

impl FromStr for Hash {
    type Err = hex::FromHexError;

    fn from_str(hash_str: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; HASH_SIZE];
        hex::decode_to_slice(hash_str, &mut bytes)?;
        Ok(Hash(bytes))
    }
}

/// Returns the 4-byte selector of a contract method signature such as `transfer(address,uint256)`.
///
/// The selector is the head of the legacy Keccak-256 digest (the pre-standard variant,
/// not FIPS-202 SHA3-256).
pub fn method_selector(signature: &str) -> [u8; SELECTOR_SIZE] {
    let digest = Keccak256::hash(signature.as_bytes());
    let mut selector = [0u8; SELECTOR_SIZE];
    selector.copy_from_slice(&digest.as_slice()[..SELECTOR_SIZE]);
    selector
}

/// First four bytes of `SHA256(SHA256(payload))`.
pub fn checksum(payload: &[u8]) -> [u8; CHECKSUM_SIZE] {
    let digest = DoubleSha256::hash(payload);
    let mut checksum = [0u8; CHECKSUM_SIZE];
    checksum.copy_from_slice(&digest.as_slice()[..CHECKSUM_SIZE]);
    checksum
}
