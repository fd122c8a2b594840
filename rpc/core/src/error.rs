use thiserror::Error;
use tron_abi::AbiError;
use tron_addresses::AddressError;

#[derive(Clone, Debug, Error)]
pub enum RpcError {
    #[error(transparent)]
    AddressError(#[from] AddressError),

    #[error(transparent)]
    AbiError(#[from] AbiError),

    #[error("Hex parsing error: {0}")]
    HexParsingError(#[from] hex::FromHexError),

    #[error("RPC status {code}: {message}")]
    Status { code: String, message: String },

    #[error("RPC request timeout")]
    Timeout,

    #[error("Transaction rejected ({code}): {message}")]
    Transaction { code: i32, message: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Missing required field {0}")]
    MissingField(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("Protobuf decode error: {0}")]
    ProstDecode(#[from] prost::DecodeError),

    #[error("{0}")]
    General(String),
}

impl From<String> for RpcError {
    fn from(value: String) -> Self {
        RpcError::General(value)
    }
}

impl From<&str> for RpcError {
    fn from(value: &str) -> Self {
        RpcError::General(value.to_string())
    }
}

pub type RpcResult<T> = std::result::Result<T, crate::RpcError>;
