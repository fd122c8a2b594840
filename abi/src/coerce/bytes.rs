use crate::error::{AbiError, AbiResult};
use crate::types::TypeDescriptor;
use crate::value::ParamValue;
use base64::{Engine, engine::general_purpose::STANDARD};

/// Decodes text as hex, falling back to standard base64.
///
/// Hex is tried verbatim: a `0x` prefix is not stripped and makes the hex
/// attempt fail, as does an odd number of digits.
pub fn decode_text_bytes(text: &str) -> AbiResult<Vec<u8>> {
    hex::decode(text).or_else(|hex_err| {
        STANDARD.decode(text).map_err(|b64_err| AbiError::Decode(format!("{text:?} is neither hex ({hex_err}) nor base64 ({b64_err})")))
    })
}

/// Produces the bytes of a `bytes` or `bytesN` field.
///
/// Fixed-size fields require the decoded length to match exactly.
pub fn coerce_bytes(ty: &TypeDescriptor, value: &ParamValue) -> AbiResult<Vec<u8>> {
    let bytes = match value {
        ParamValue::Str(text) => decode_text_bytes(text)?,
        ParamValue::Bytes(bytes) => bytes.clone(),
        other => return Err(AbiError::Encoding(format!("{ty} expects text or raw bytes, got {}", other.kind_name()))),
    };
    match ty {
        TypeDescriptor::FixedBytes(size) if bytes.len() != *size as usize => {
            Err(AbiError::SizeMismatch { expected: *size as usize, actual: bytes.len() })
        }
        TypeDescriptor::FixedBytes(_) | TypeDescriptor::Bytes => Ok(bytes),
        _ => Err(AbiError::Encoding(format!("{ty} is not a byte field"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_then_base64() {
        assert_eq!(decode_text_bytes("00ff10").unwrap(), vec![0x00, 0xff, 0x10]);
        assert_eq!(decode_text_bytes("AP8Q").unwrap(), vec![0x00, 0xff, 0x10]);
        // valid as both, hex wins
        assert_eq!(decode_text_bytes("abcd").unwrap(), vec![0xab, 0xcd]);
        assert!(matches!(decode_text_bytes("0x00ff"), Err(AbiError::Decode(_))));
        assert!(matches!(decode_text_bytes("abc"), Err(AbiError::Decode(_))));
    }

    #[test]
    fn test_fixed_sizes() {
        for size in 1..=32u8 {
            let ty = TypeDescriptor::FixedBytes(size);
            let text = "ab".repeat(size as usize);
            assert_eq!(coerce_bytes(&ty, &text.as_str().into()).unwrap(), vec![0xab; size as usize]);

            let longer = "ab".repeat(size as usize + 1);
            assert_eq!(
                coerce_bytes(&ty, &longer.as_str().into()),
                Err(AbiError::SizeMismatch { expected: size as usize, actual: size as usize + 1 })
            );
        }
    }

    #[test]
    fn test_dynamic_and_raw() {
        assert_eq!(coerce_bytes(&TypeDescriptor::Bytes, &"".into()).unwrap(), Vec::<u8>::new());
        assert_eq!(coerce_bytes(&TypeDescriptor::Bytes, &"0102".into()).unwrap(), vec![1, 2]);
        assert_eq!(coerce_bytes(&TypeDescriptor::FixedBytes(2), &ParamValue::Bytes(vec![1, 2])).unwrap(), vec![1, 2]);
        assert!(matches!(coerce_bytes(&TypeDescriptor::Bytes, &ParamValue::Uint(1)), Err(AbiError::Encoding(_))));
    }
}
