use crate::error::{AbiError, AbiResult};
use crate::types::TypeDescriptor;
use crate::value::ParamValue;
use tron_math::Uint256;

/// What to do with an integer that does not fit the declared width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// Keep the low bits, sign-extending for signed types.
    #[default]
    Truncate,
    /// Fail with [`AbiError::Overflow`].
    Reject,
}

/// Widths up to this take the native 64-bit parsing path.
const NATIVE_BITS: u16 = 64;

/// Converts an integer input into the 256-bit word the ABI stores for `ty`.
///
/// Signed values come back sign-extended to the full word.
pub fn coerce_int(ty: &TypeDescriptor, value: &ParamValue, policy: OverflowPolicy) -> AbiResult<Uint256> {
    let (bits, signed) = match ty {
        TypeDescriptor::Int(bits) => (*bits as u32, true),
        TypeDescriptor::Uint(bits) => (*bits as u32, false),
        _ => return Err(AbiError::Encoding(format!("{ty} is not an integer type"))),
    };

    let word = match value {
        ParamValue::Int(n) => Uint256::from_i64(*n),
        ParamValue::Uint(n) => Uint256::from_u64(*n),
        ParamValue::Big(n) => *n,
        ParamValue::Str(text) if bits <= NATIVE_BITS as u32 => parse_native(text, signed)?,
        ParamValue::Str(text) => parse_big(text)?,
        other => return Err(AbiError::UnsupportedType { ty: ty.to_string(), found: other.kind_name() }),
    };

    narrow(word, bits, signed, ty, policy)
}

/// Decimal or `0x` hex within the 64-bit range of the signedness. Signed types
/// also take `-0x` hex; plain hex is read as the raw 64-bit pattern.
fn parse_native(text: &str, signed: bool) -> AbiResult<Uint256> {
    let parse_hex = |digits: &str| u64::from_str_radix(digits, 16).map_err(|err| AbiError::parse(text, err));
    if !signed {
        let n = match text.strip_prefix("0x") {
            Some(digits) => parse_hex(digits)?,
            None => text.parse::<u64>().map_err(|err| AbiError::parse(text, err))?,
        };
        return Ok(Uint256::from_u64(n));
    }

    let n = if let Some(digits) = text.strip_prefix("0x") {
        parse_hex(digits)? as i64
    } else if let Some(digits) = text.strip_prefix("-0x") {
        0i64.checked_sub_unsigned(parse_hex(digits)?).ok_or_else(|| AbiError::parse(text, "number too small to fit in target type"))?
    } else {
        text.parse::<i64>().map_err(|err| AbiError::parse(text, err))?
    };
    Ok(Uint256::from_i64(n))
}

/// Decimal or `0x` hex, optionally negative, up to 256 bits.
fn parse_big(text: &str) -> AbiResult<Uint256> {
    text.parse::<Uint256>().map_err(|err| AbiError::parse(text, err))
}

fn narrow(word: Uint256, bits: u32, signed: bool, ty: &TypeDescriptor, policy: OverflowPolicy) -> AbiResult<Uint256> {
    // negative inputs to narrower unsigned types carry high bits and never fit
    if policy == OverflowPolicy::Reject && !word.fits_in_bits(bits, signed) {
        return Err(AbiError::Overflow { value: display_word(word, signed), ty: ty.to_string() });
    }
    let truncated = word.truncate_to_bits(bits);
    Ok(if signed { truncated.sign_extend(bits) } else { truncated })
}

fn display_word(word: Uint256, signed: bool) -> String {
    if signed && word.is_negative() { format!("-{}", word.wrapping_neg()) } else { word.to_string() }
}
