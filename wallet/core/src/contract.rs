//!
//! Request builders for contract calls and deployments.
//!

use tron_abi::{Encoder, load_from_json, pack_with};
use tron_addresses::Address;
use tron_core::trace;
use tron_rpc_core::{Abi, CreateSmartContract, RpcError, RpcResult, SmartContract, TriggerSmartContract};

/// Maximum share of the energy cost charged to the caller, in percent.
pub const MAX_USER_RESOURCE_PERCENT: i64 = 100;

/// A contract method call.
///
/// `method` is the full signature (`transfer(address,uint256)`) and `params_json`
/// the positional arguments as `[{"<type>": <value>}, ...]`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TriggerRequest {
    pub from: String,
    pub contract: String,
    pub method: String,
    pub params_json: String,
    pub fee_limit: i64,
    /// Native amount sent along with the call.
    pub call_value: i64,
    /// Decimal id of a token sent along with the call.
    pub token_id: Option<String>,
    pub token_amount: i64,
}

impl TriggerRequest {
    pub fn new(from: impl Into<String>, contract: impl Into<String>, method: impl Into<String>, params_json: impl Into<String>) -> Self {
        Self { from: from.into(), contract: contract.into(), method: method.into(), params_json: params_json.into(), ..Default::default() }
    }

    pub fn with_fee_limit(mut self, fee_limit: i64) -> Self {
        self.fee_limit = fee_limit;
        self
    }

    pub fn with_call_value(mut self, call_value: i64) -> Self {
        self.call_value = call_value;
        self
    }

    pub fn with_token(mut self, token_id: impl Into<String>, token_amount: i64) -> Self {
        self.token_id = Some(token_id.into());
        self.token_amount = token_amount;
        self
    }
}

/// Decodes a Base58Check address into the 21-byte form requests carry.
pub fn wire_address(address: &str) -> RpcResult<Vec<u8>> {
    Ok(Address::from_base58(address)?.to_wire_bytes().to_vec())
}

pub fn build_trigger(request: &TriggerRequest, encoder: &Encoder) -> RpcResult<TriggerSmartContract> {
    let owner_address = wire_address(&request.from)?;
    let contract_address = wire_address(&request.contract)?;
    let params = load_from_json(&request.params_json)?;
    let data = pack_with(encoder, &request.method, &params)?;

    let mut contract =
        TriggerSmartContract { owner_address, contract_address, call_value: request.call_value, data, ..Default::default() };
    if let Some(token_id) = request.token_id.as_deref().filter(|id| !id.is_empty())
        && request.token_amount > 0
    {
        contract.token_id =
            token_id.parse().map_err(|err| RpcError::InvalidArgument(format!("token id {token_id:?}: {err}")))?;
        contract.call_token_value = request.token_amount;
    }
    trace!("trigger {} on {}: {} bytes of call data", request.method, request.contract, contract.data.len());
    Ok(contract)
}

/// A contract deployment.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeployRequest {
    pub from: String,
    pub name: String,
    pub abi: Option<Abi>,
    /// Hex bytecode, with or without a `0x` prefix.
    pub bytecode: String,
    pub fee_limit: i64,
    pub consume_user_resource_percent: i64,
    pub origin_energy_limit: i64,
}

/// Decodes hex bytecode, accepting an optional `0x` prefix.
pub fn decode_bytecode(bytecode: &str) -> RpcResult<Vec<u8>> {
    let digits = bytecode.strip_prefix("0x").or_else(|| bytecode.strip_prefix("0X")).unwrap_or(bytecode);
    Ok(hex::decode(digits)?)
}

pub fn build_deploy(request: &DeployRequest) -> RpcResult<CreateSmartContract> {
    if !(0..=MAX_USER_RESOURCE_PERCENT).contains(&request.consume_user_resource_percent) {
        return Err(RpcError::InvalidArgument("consume_user_resource_percent should be between 0 and 100".to_string()));
    }
    if request.origin_energy_limit <= 0 {
        return Err(RpcError::InvalidArgument("origin_energy_limit must be greater than 0".to_string()));
    }
    let owner_address = wire_address(&request.from)?;
    let bytecode = decode_bytecode(&request.bytecode)?;

    let new_contract = SmartContract {
        origin_address: owner_address.clone(),
        abi: request.abi.clone(),
        name: request.name.clone(),
        consume_user_resource_percent: request.consume_user_resource_percent,
        origin_energy_limit: request.origin_energy_limit,
        bytecode,
        ..Default::default()
    };
    Ok(CreateSmartContract { owner_address, new_contract: Some(new_contract), ..Default::default() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;
    use tron_abi::{AbiError, OverflowPolicy};

    // cspell:disable
    const FROM: &str = "TRGhNNfnmgLegT4zHNjEqDSADjgmnHvubJ";
    const TOKEN: &str = "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t";
    // cspell:enable
    const FROM_WIRE: [u8; 21] = hex!("41a7d8a35b260395c14aa456297662092ba3b76fc0");
    const TOKEN_WIRE: [u8; 21] = hex!("41a614f803b6fd780986a42c78ec9c7f77e6ded13c");

    fn transfer() -> TriggerRequest {
        TriggerRequest::new(FROM, TOKEN, "transfer(address,uint256)", format!(r#"[{{"address": "{FROM}"}}, {{"uint256": "100"}}]"#))
    }

    #[test]
    fn test_build_trigger() {
        let contract = build_trigger(&transfer().with_call_value(7), &Encoder::default()).unwrap();
        assert_eq!(contract.owner_address, FROM_WIRE);
        assert_eq!(contract.contract_address, TOKEN_WIRE);
        assert_eq!(contract.call_value, 7);
        assert_eq!(contract.data[..4], hex!("a9059cbb"));
        assert_eq!(contract.data.len(), 4 + 64);
        assert_eq!(contract.data[16..36], FROM_WIRE[1..]);
        assert_eq!(contract.data[36..], hex!("0000000000000000000000000000000000000000000000000000000000000064"));
        assert_eq!((contract.token_id, contract.call_token_value), (0, 0));
    }

    #[test]
    fn test_build_trigger_without_params() {
        let request = TriggerRequest::new(FROM, TOKEN, "totalSupply()", "");
        let contract = build_trigger(&request, &Encoder::default()).unwrap();
        assert_eq!(contract.data, hex!("18160ddd"));
    }

    #[test]
    fn test_build_trigger_token() {
        let contract = build_trigger(&transfer().with_token("1002000", 5), &Encoder::default()).unwrap();
        assert_eq!((contract.token_id, contract.call_token_value), (1_002_000, 5));

        // a zero amount ignores the token entirely, even an unparsable id
        let contract = build_trigger(&transfer().with_token("not a number", 0), &Encoder::default()).unwrap();
        assert_eq!((contract.token_id, contract.call_token_value), (0, 0));
        let contract = build_trigger(&transfer().with_token("", 5), &Encoder::default()).unwrap();
        assert_eq!((contract.token_id, contract.call_token_value), (0, 0));

        let err = build_trigger(&transfer().with_token("10x", 5), &Encoder::default()).unwrap_err();
        assert!(matches!(err, RpcError::InvalidArgument(_)));
    }

    #[test]
    fn test_build_trigger_errors() {
        let mut request = transfer();
        request.from = "TRGhNNfnmgLegT4zHNjEqDSADjgmnHvubX".to_string();
        assert!(matches!(build_trigger(&request, &Encoder::default()), Err(RpcError::AddressError(_))));

        let request = TriggerRequest::new(FROM, TOKEN, "f(uint8)", r#"[{"uint8": "300"}]"#);
        build_trigger(&request, &Encoder::default()).unwrap();
        let err = build_trigger(&request, &Encoder::new(OverflowPolicy::Reject)).unwrap_err();
        assert!(matches!(err, RpcError::AbiError(AbiError::Param { index: 0, .. })));

        let request = TriggerRequest::new(FROM, TOKEN, "f(uint8)", "{");
        assert!(matches!(build_trigger(&request, &Encoder::default()), Err(RpcError::AbiError(AbiError::Format(_)))));
    }

    fn deploy() -> DeployRequest {
        DeployRequest {
            from: FROM.to_string(),
            name: "Counter".to_string(),
            abi: Some(Abi::default()),
            bytecode: "0x6080604052".to_string(),
            fee_limit: 1_000_000_000,
            consume_user_resource_percent: 100,
            origin_energy_limit: 10_000_000,
        }
    }

    #[test]
    fn test_build_deploy() {
        let create = build_deploy(&deploy()).unwrap();
        assert_eq!(create.owner_address, FROM_WIRE);
        let contract = create.new_contract.unwrap();
        assert_eq!(contract.origin_address, FROM_WIRE);
        assert_eq!(contract.name, "Counter");
        assert_eq!(contract.bytecode, hex!("6080604052"));
        assert_eq!(contract.consume_user_resource_percent, 100);
        assert_eq!(contract.origin_energy_limit, 10_000_000);
        assert_eq!(contract.abi, Some(Abi::default()));

        let request = DeployRequest { bytecode: "6080604052".to_string(), consume_user_resource_percent: 0, ..deploy() };
        assert_eq!(build_deploy(&request).unwrap().new_contract.unwrap().bytecode, hex!("6080604052"));
    }

    #[test]
    fn test_build_deploy_validation() {
        for percent in [-1, 101] {
            let request = DeployRequest { consume_user_resource_percent: percent, ..deploy() };
            assert!(matches!(build_deploy(&request), Err(RpcError::InvalidArgument(msg)) if msg.contains("between 0 and 100")));
        }
        for limit in [0, -1] {
            let request = DeployRequest { origin_energy_limit: limit, ..deploy() };
            assert!(matches!(build_deploy(&request), Err(RpcError::InvalidArgument(msg)) if msg.contains("greater than 0")));
        }
        let request = DeployRequest { bytecode: "0x60zz".to_string(), ..deploy() };
        assert!(matches!(build_deploy(&request), Err(RpcError::HexParsingError(_))));
    }
}
