/// Generic single-value request carrying raw bytes (addresses, ids).
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BytesMessage {
    #[prost(bytes = "vec", tag = "1")]
    pub value: Vec<u8>,
}

impl BytesMessage {
    pub fn new(value: impl Into<Vec<u8>>) -> Self {
        Self { value: value.into() }
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NumberMessage {
    #[prost(int64, tag = "1")]
    pub num: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EmptyMessage {}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ResponseCode {
    Success = 0,
    SigError = 1,
    ContractValidateError = 2,
    ContractExeError = 3,
    BandwidthError = 4,
    DupTransactionError = 5,
    TaposError = 6,
    TooBigTransactionError = 7,
    TransactionExpirationError = 8,
    ServerBusy = 9,
    NoConnection = 10,
    NotEnoughEffectiveConnection = 11,
    BlockUnsolidified = 12,
    OtherError = 20,
}

/// Outcome reported by the node for a submitted or simulated transaction.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Return {
    #[prost(bool, tag = "1")]
    pub result: bool,
    #[prost(enumeration = "ResponseCode", tag = "2")]
    pub code: i32,
    #[prost(bytes = "vec", tag = "3")]
    pub message: Vec<u8>,
}

impl Return {
    pub fn success() -> Self {
        Self { result: true, code: ResponseCode::Success as i32, message: vec![] }
    }

    pub fn failure(code: ResponseCode, message: &str) -> Self {
        Self { result: false, code: code as i32, message: message.as_bytes().to_vec() }
    }

    /// The node sends the message as UTF-8 text in a bytes field.
    pub fn message_text(&self) -> String {
        String::from_utf8_lossy(&self.message).into_owned()
    }

    pub fn is_success(&self) -> bool {
        self.code == ResponseCode::Success as i32
    }
}
