use crate::{Hash, HASH_SIZE};
use sha2::Digest;

pub trait HasherBase {
    fn update<A: AsRef<[u8]>>(&mut self, data: A) -> &mut Self;
}

pub trait Hasher: HasherBase + Clone + Default {
    fn finalize(self) -> Hash;
    fn reset(&mut self);
    #[inline(always)]
    fn hash<A: AsRef<[u8]>>(data: A) -> Hash {
        let mut hasher = Self::default();
        hasher.update(data);
        hasher.finalize()
    }
}

macro_rules! digest_hasher {
    ($(#[$meta:meta])* $name:ident, $digest:ty) => {
        $(#[$meta])*
        #[derive(Clone, Default)]
        pub struct $name($digest);

        impl $name {
            #[inline(always)]
            pub fn new() -> Self {
                Self::default()
            }
        }

        impl HasherBase for $name {
            #[inline(always)]
            fn update<A: AsRef<[u8]>>(&mut self, data: A) -> &mut Self {
                self.0.update(data.as_ref());
                self
            }
        }

        impl Hasher for $name {
            #[inline(always)]
            fn finalize(self) -> Hash {
                let mut out = [0u8; HASH_SIZE];
                out.copy_from_slice(self.0.finalize().as_slice());
                Hash::from_bytes(out)
            }

            #[inline(always)]
            fn reset(&mut self) {
                self.0 = <$digest>::default();
            }
        }
    };
}

digest_hasher!(
    /// SHA-256, used for transaction ids (`SHA256(protobuf(raw_data))`).
    Sha256,
    sha2::Sha256
);

digest_hasher!(
    /// Legacy (pre-FIPS-202) Keccak-256, used for contract method selectors.
    Keccak256,
    sha3::Keccak256
);

/// `SHA256(SHA256(data))`, the Base58Check checksum hash.
#[derive(Clone, Default)]
pub struct DoubleSha256(sha2::Sha256);

impl DoubleSha256 {
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }
}

impl HasherBase for DoubleSha256 {
    #[inline(always)]
    fn update<A: AsRef<[u8]>>(&mut self, data: A) -> &mut Self {
        self.0.update(data.as_ref());
        self
    }
}

impl Hasher for DoubleSha256 {
    #[inline(always)]
    fn finalize(self) -> Hash {
        let first = self.0.finalize();
        Sha256::hash(first.as_slice())
    }

    #[inline(always)]
    fn reset(&mut self) {
        self.0 = sha2::Sha256::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn test_incremental_matches_oneshot() {
        let mut hasher = Sha256::new();
        hasher.update(b"hello ").update(b"world");
        assert_eq!(hasher.finalize(), Sha256::hash(b"hello world"));
    }

    #[test]
    fn test_reset() {
        let mut hasher = Keccak256::new();
        hasher.update(b"garbage");
        hasher.reset();
        hasher.update(b"");
        assert_eq!(hasher.finalize().as_bytes(), hex!("c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"));
    }

    #[test]
    fn test_double_sha256() {
        assert_eq!(
            DoubleSha256::hash(b"hello").as_bytes(),
            hex!("9595c9df90075148eb06860365df33584b75bff782a510c6cd4883a419833d50")
        );
    }
}
