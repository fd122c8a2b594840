use thiserror::Error;
use tron_rpc_core::RpcError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Error: {0}")]
    String(String),

    #[error("gRPC client error {0}")]
    TonicStatus(#[from] tonic::Status),

    /// RPC call timeout
    #[error("RPC request timeout")]
    Timeout,

    #[error("Endpoint connection error: {0}")]
    EndpointConnectionError(#[from] tonic::transport::Error),

    #[error("gRPC address should start with \"grpc://\" or \"grpcs://\", got {0}")]
    GrpcAddressSchema(String),

    #[error("Invalid API key: {0}")]
    InvalidMetadata(#[from] tonic::metadata::errors::InvalidMetadataValue),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),
}

impl From<Error> for RpcError {
    fn from(value: Error) -> Self {
        match value {
            Error::Timeout => RpcError::Timeout,
            Error::TonicStatus(status) => {
                RpcError::Status { code: format!("{:?}", status.code()), message: status.message().to_string() }
            }
            err => RpcError::General(err.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_rpc_error() {
        assert!(matches!(RpcError::from(Error::Timeout), RpcError::Timeout));

        let status = Error::TonicStatus(tonic::Status::unavailable("node is syncing"));
        match RpcError::from(status) {
            RpcError::Status { code, message } => {
                assert_eq!(code, "Unavailable");
                assert_eq!(message, "node is syncing");
            }
            err => panic!("unexpected {err:?}"),
        }

        let schema = Error::GrpcAddressSchema("tcp://localhost".to_string());
        assert!(matches!(RpcError::from(schema), RpcError::General(msg) if msg.contains("tcp://localhost")));
    }
}
