pub mod uint;

pub use uint::UintParseError;

construct_uint!(Uint256, 4);

impl Uint256 {
    /// Sign-extends a signed 64-bit value into a 256-bit two's-complement word.
    #[inline]
    pub fn from_i64(n: i64) -> Self {
        let ret = Self::from_u64(n as u64);
        if n < 0 { ret.sign_extend(64) } else { ret }
    }

    /// Sign-extends a signed 128-bit value into a 256-bit two's-complement word.
    #[inline]
    pub fn from_i128(n: i128) -> Self {
        let ret = Self::from_u128(n as u128);
        if n < 0 { ret.sign_extend(128) } else { ret }
    }

    /// Parses an optionally `-`-signed decimal, or a `0x`-prefixed hexadecimal string,
    /// into a two's-complement word.
    pub fn from_signed_str(src: &str) -> Result<Self, UintParseError> {
        let (negative, digits) = match src.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, src),
        };
        let magnitude = match digits.strip_prefix("0x") {
            Some(hex) => Self::from_str_radix(hex, 16)?,
            None => Self::from_str_radix(digits, 10)?,
        };
        Ok(if negative { magnitude.wrapping_neg() } else { magnitude })
    }
}

impl std::str::FromStr for Uint256 {
    type Err = UintParseError;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Self::from_signed_str(src)
    }
}
