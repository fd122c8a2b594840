use crate::encoder::Encoder;
use crate::error::AbiResult;
use crate::types::resolve;
use crate::value::{Param, load_from_json};
use tron_core::debug;
use tron_hashes::{SELECTOR_SIZE, method_selector};

/// First four bytes of the legacy Keccak-256 of `signature`, e.g. `transfer(address,uint256)`.
pub fn selector(signature: &str) -> [u8; SELECTOR_SIZE] {
    method_selector(signature)
}

/// Builds `selector(signature) ‖ encode(params)`.
pub fn pack(signature: &str, params: &[Param]) -> AbiResult<Vec<u8>> {
    pack_with(&Encoder::default(), signature, params)
}

pub fn pack_with(encoder: &Encoder, signature: &str, params: &[Param]) -> AbiResult<Vec<u8>> {
    let encoded = encoder.encode(params)?;
    let mut data = Vec::with_capacity(SELECTOR_SIZE + encoded.len());
    data.extend_from_slice(&selector(signature));
    data.extend_from_slice(&encoded);
    debug!("packed call {} with {} parameters ({} bytes)", signature, params.len(), data.len());
    Ok(data)
}

/// Same as [`pack`] with parameters given as a JSON list of single-key objects.
pub fn pack_json(signature: &str, params_json: &str) -> AbiResult<Vec<u8>> {
    pack(signature, &load_from_json(params_json)?)
}

/// Canonical signature `name(type,...)` for the given parameters.
pub fn signature_of(name: &str, params: &[Param]) -> AbiResult<String> {
    let types = params.iter().map(|param| resolve(&param.type_name).map(|ty| ty.to_string())).collect::<AbiResult<Vec<_>>>()?;
    Ok(format!("{}({})", name, types.join(",")))
}
