use thiserror::Error;

/// Fixed-width unsigned integer made of little-endian 64-bit limbs.
///
/// Values double as two's-complement words: the signed helpers (`sign_extend`,
/// `wrapping_neg`, `fits_in_bits`) interpret the top bit as the sign.
#[macro_export]
macro_rules! construct_uint {
    ($name:ident, $n_words:literal $(, $derive_trait:ty)*) => {
        /// Little-endian large integer type
        #[derive(Copy, Clone, PartialEq, Eq, Hash, Debug$(, $derive_trait )*)]
        pub struct $name(pub [u64; $n_words]);
        #[allow(unused)]
        impl $name {
            pub const ZERO: Self = $name([0; $n_words]);
            pub const MIN: Self = Self::ZERO;
            pub const MAX: Self = $name([u64::MAX; $n_words]);
            pub const BITS: u32 = $n_words * u64::BITS;
            pub const BYTES: usize = $n_words * core::mem::size_of::<u64>();
            pub const LIMBS: usize = $n_words;

            #[inline]
            pub fn from_u64(n: u64) -> Self {
                let mut ret = Self::ZERO;
                ret.0[0] = n;
                ret
            }

            #[inline]
            pub fn from_u128(n: u128) -> Self {
                let mut ret = Self::ZERO;
                ret.0[0] = n as u64;
                ret.0[1] = (n >> 64) as u64;
                ret
            }

            #[inline]
            pub fn as_u64(self) -> u64 {
                self.0[0]
            }

            #[inline(always)]
            pub fn is_zero(self) -> bool {
                self.0.iter().all(|&a| a == 0)
            }

            /// Return the least number of bits needed to represent the number
            #[inline(always)]
            pub fn bits(&self) -> u32 {
                for (i, &word) in self.0.iter().enumerate().rev() {
                    if word != 0 {
                        return u64::BITS * (i as u32 + 1) - word.leading_zeros();
                    }
                }
                0
            }

            #[inline(always)]
            pub fn bit(&self, index: u32) -> bool {
                index < Self::BITS && (self.0[(index / 64) as usize] >> (index % 64)) & 1 == 1
            }

            /// Whether the top bit is set, i.e. the value is negative when read as two's complement.
            #[inline(always)]
            pub fn is_negative(&self) -> bool {
                self.bit(Self::BITS - 1)
            }

            #[inline]
            pub fn overflowing_add(mut self, other: Self) -> (Self, bool) {
                // Replace with std once stabilized:https://github.com/rust-lang/rust/issues/85532
                #[inline(always)]
                const fn carrying_add_u64(lhs: u64, rhs: u64, carry: bool) -> (u64, bool) {
                    let (a, b) = lhs.overflowing_add(rhs);
                    let (c, d) = a.overflowing_add(carry as u64);
                    (c, b != d)
                }
                let mut carry = false;
                for i in 0..Self::LIMBS {
                    (self.0[i], carry) = carrying_add_u64(self.0[i], other.0[i], carry);
                }
                (self, carry)
            }

            #[inline]
            pub fn overflowing_add_u64(mut self, other: u64) -> (Self, bool) {
                let mut carry: bool;
                (self.0[0], carry) = self.0[0].overflowing_add(other);
                for i in 1..Self::LIMBS {
                    if !carry {
                        break;
                    }
                    (self.0[i], carry) = self.0[i].overflowing_add(1);
                }
                (self, carry)
            }

            #[inline]
            pub fn carrying_mul_u64(mut self, other: u64) -> (Self, u64) {
                let mut carry: u128 = 0;
                for i in 0..Self::LIMBS {
                    let n = carry + (other as u128) * (self.0[i] as u128);
                    self.0[i] = n as u64;
                    carry = n >> 64;
                }
                (self, carry as u64)
            }

            #[inline]
            pub fn div_rem_u64(mut self, other: u64) -> (Self, u64) {
                let mut rem = 0u64;
                self.0.iter_mut().rev().for_each(|d| {
                    let n = (rem as u128) << 64 | (*d as u128);
                    *d = (n / other as u128) as u64;
                    rem = (n % other as u128) as u64;
                });
                (self, rem)
            }

            /// Two's-complement negation modulo `2^BITS`.
            #[inline]
            pub fn wrapping_neg(self) -> Self {
                (!self).overflowing_add_u64(1).0
            }

            /// Keeps the low `bits` bits and clears everything above them.
            #[inline]
            pub fn truncate_to_bits(mut self, bits: u32) -> Self {
                if bits >= Self::BITS {
                    return self;
                }
                let full = (bits / 64) as usize;
                let rest = bits % 64;
                if rest > 0 {
                    self.0[full] &= (1u64 << rest) - 1;
                    self.0[full + 1..].iter_mut().for_each(|w| *w = 0);
                } else {
                    self.0[full..].iter_mut().for_each(|w| *w = 0);
                }
                self
            }

            /// Reads the low `bits` bits as a signed `bits`-wide integer and widens it
            /// to the full width, copying bit `bits - 1` into every higher bit.
            #[inline]
            pub fn sign_extend(self, bits: u32) -> Self {
                if bits == 0 || bits >= Self::BITS {
                    return self;
                }
                let low = self.truncate_to_bits(bits);
                if low.bit(bits - 1) { low | !Self::MAX.truncate_to_bits(bits) } else { low }
            }

            /// Whether the value is representable in `bits` bits without loss,
            /// as an unsigned integer or, with `signed`, as two's complement.
            #[inline]
            pub fn fits_in_bits(&self, bits: u32, signed: bool) -> bool {
                if signed { self.sign_extend(bits) == *self } else { self.bits() <= bits }
            }

            /// Creates big integer value from a byte slice using
            /// big-endian encoding
            #[inline(always)]
            pub fn from_be_bytes(bytes: [u8; Self::BYTES]) -> Self {
                let mut out = [0u64; Self::LIMBS];
                out.iter_mut().rev().zip(bytes.chunks_exact(8)).for_each(|(word, chunk)| {
                    let mut buf = [0u8; 8];
                    buf.copy_from_slice(chunk);
                    *word = u64::from_be_bytes(buf);
                });
                Self(out)
            }

            /// Convert's the Uint into big endian byte array
            #[inline(always)]
            pub fn to_be_bytes(self) -> [u8; Self::BYTES] {
                let mut out = [0u8; Self::BYTES];
                out.chunks_exact_mut(8)
                    .zip(self.0.into_iter().rev())
                    .for_each(|(bytes, word)| bytes.copy_from_slice(&word.to_be_bytes()));
                out
            }

            /// Parses unsigned digits in `radix` (2..=36). No sign or prefix is accepted.
            pub fn from_str_radix(src: &str, radix: u32) -> Result<Self, $crate::uint::UintParseError> {
                if src.is_empty() {
                    return Err($crate::uint::UintParseError::Empty);
                }
                let mut ret = Self::ZERO;
                for c in src.chars() {
                    let digit = c.to_digit(radix).ok_or($crate::uint::UintParseError::InvalidDigit(c))?;
                    let (shifted, carry) = ret.carrying_mul_u64(radix as u64);
                    let (next, overflow) = shifted.overflowing_add_u64(digit as u64);
                    if carry != 0 || overflow {
                        return Err($crate::uint::UintParseError::Overflow);
                    }
                    ret = next;
                }
                Ok(ret)
            }
        }

        impl PartialEq<u64> for $name {
            #[inline]
            fn eq(&self, other: &u64) -> bool {
                let bigger = self.0[1..].iter().any(|&x| x != 0);
                !bigger && self.0[0] == *other
            }
        }

        impl PartialOrd for $name {
            #[inline]
            fn partial_cmp(&self, other: &$name) -> Option<core::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            #[inline]
            fn cmp(&self, other: &$name) -> core::cmp::Ordering {
                // We need to manually implement ordering because we use little-endian
                // and the auto derive is a lexicographic ordering(i.e. memcmp)
                // which with numbers is equivalent to big-endian
                Iterator::cmp(self.0.iter().rev(), other.0.iter().rev())
            }
        }

        impl core::ops::BitAnd<$name> for $name {
            type Output = $name;

            #[inline]
            fn bitand(mut self, other: $name) -> $name {
                self.0.iter_mut().zip(other.0).for_each(|(a, b)| *a &= b);
                self
            }
        }

        impl core::ops::BitOr<$name> for $name {
            type Output = $name;

            #[inline]
            fn bitor(mut self, other: $name) -> $name {
                self.0.iter_mut().zip(other.0).for_each(|(a, b)| *a |= b);
                self
            }
        }

        impl core::ops::Not for $name {
            type Output = $name;

            #[inline]
            fn not(mut self) -> $name {
                self.0.iter_mut().for_each(|a| *a = !*a);
                self
            }
        }

        impl Default for $name {
            #[inline]
            fn default() -> Self {
                Self::ZERO
            }
        }

        impl From<u64> for $name {
            #[inline]
            fn from(x: u64) -> Self {
                Self::from_u64(x)
            }
        }

        impl core::fmt::LowerHex for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                const DIGITS: &[u8; 16] = b"0123456789abcdef";
                let mut hex = [b'0'; $name::BYTES * 2];
                for (i, byte) in self.to_be_bytes().into_iter().enumerate() {
                    hex[2 * i] = DIGITS[(byte >> 4) as usize];
                    hex[2 * i + 1] = DIGITS[(byte & 0x0f) as usize];
                }
                let first_non_zero = hex.iter().position(|&x| x != b'0').unwrap_or(hex.len() - 1);
                let hex_str = core::str::from_utf8(&hex[first_non_zero..]).map_err(|_| core::fmt::Error)?;
                f.pad_integral(true, "0x", hex_str)
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                // 10^19 is the largest power of ten below 2^64
                const CHUNK: u64 = 10_000_000_000_000_000_000;
                let mut chunks = Vec::with_capacity(Self::LIMBS + 1);
                let mut n = *self;
                loop {
                    let rem;
                    (n, rem) = n.div_rem_u64(CHUNK);
                    chunks.push(rem);
                    if n.is_zero() {
                        break;
                    }
                }
                let mut out = String::with_capacity(chunks.len() * 19);
                let mut iter = chunks.iter().rev();
                if let Some(head) = iter.next() {
                    out.push_str(&head.to_string());
                }
                for chunk in iter {
                    out.push_str(&format!("{chunk:019}"));
                }
                f.pad_integral(true, "", &out)
            }
        }

    };
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum UintParseError {
    #[error("cannot parse integer from empty string")]
    Empty,

    #[error("invalid digit {0:?} found in string")]
    InvalidDigit(char),

    #[error("number too large to fit in target type")]
    Overflow,
}
