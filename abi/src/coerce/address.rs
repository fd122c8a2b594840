use crate::error::{AbiError, AbiResult};
use crate::value::ParamValue;
use tron_addresses::Address;

/// Decodes a Base58Check address string into its 20-byte body.
pub fn coerce_address(value: &ParamValue) -> AbiResult<Address> {
    match value {
        ParamValue::Str(text) => Ok(Address::from_base58(text)?),
        other => Err(AbiError::UnsupportedType { ty: "address".to_string(), found: other.kind_name() }),
    }
}
