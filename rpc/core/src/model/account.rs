#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum AccountType {
    Normal = 0,
    AssetIssue = 1,
    Contract = 2,
}

/// The account fields this client reads. Remaining fields are skipped on decode.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Account {
    #[prost(bytes = "vec", tag = "1")]
    pub account_name: Vec<u8>,
    #[prost(enumeration = "AccountType", tag = "2")]
    pub r#type: i32,
    #[prost(bytes = "vec", tag = "3")]
    pub address: Vec<u8>,
    #[prost(int64, tag = "4")]
    pub balance: i64,
}

impl Account {
    /// Lookup request: only the 21-byte wire address is set.
    pub fn with_address(address: impl Into<Vec<u8>>) -> Self {
        Self { address: address.into(), ..Default::default() }
    }
}
