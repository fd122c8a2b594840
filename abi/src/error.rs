use thiserror::Error;
use tron_addresses::AddressError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AbiError {
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Address decode error: {0}")]
    Address(#[from] AddressError),

    #[error("Failed to parse {input:?} as an integer: {reason}")]
    Parse { input: String, reason: String },

    #[error("Invalid ABI type {0:?}")]
    InvalidType(String),

    #[error("Size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("Unsupported value for {ty}: {found}")]
    UnsupportedType { ty: String, found: &'static str },

    #[error("Encoding error: {0}")]
    Encoding(String),

    #[error("Invalid parameter list format: {0}")]
    Format(String),

    #[error("Value {value} does not fit in {ty}")]
    Overflow { value: String, ty: String },

    /// Wraps the failure of a single parameter with its position in the list.
    #[error("Parameter {index} ({type_name}): {source}")]
    Param {
        index: usize,
        type_name: String,
        #[source]
        source: Box<AbiError>,
    },
}

impl AbiError {
    pub(crate) fn parse(input: &str, reason: impl ToString) -> Self {
        Self::Parse { input: input.to_string(), reason: reason.to_string() }
    }

    pub(crate) fn at(self, index: usize, type_name: &str) -> Self {
        Self::Param { index, type_name: type_name.to_string(), source: Box::new(self) }
    }

    /// The innermost error, with any parameter position wrappers removed.
    pub fn root(&self) -> &AbiError {
        match self {
            AbiError::Param { source, .. } => source.root(),
            err => err,
        }
    }
}

pub type AbiResult<T> = std::result::Result<T, AbiError>;
