/// Plain value transfer between two accounts.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TransferContract {
    #[prost(bytes = "vec", tag = "1")]
    pub owner_address: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub to_address: Vec<u8>,
    #[prost(int64, tag = "3")]
    pub amount: i64,
}

/// A call into a deployed contract. `data` is the selector followed by the packed arguments.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TriggerSmartContract {
    #[prost(bytes = "vec", tag = "1")]
    pub owner_address: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub contract_address: Vec<u8>,
    #[prost(int64, tag = "3")]
    pub call_value: i64,
    #[prost(bytes = "vec", tag = "4")]
    pub data: Vec<u8>,
    #[prost(int64, tag = "5")]
    pub call_token_value: i64,
    #[prost(int64, tag = "6")]
    pub token_id: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateSmartContract {
    #[prost(bytes = "vec", tag = "1")]
    pub owner_address: Vec<u8>,
    #[prost(message, optional, tag = "2")]
    pub new_contract: Option<SmartContract>,
    #[prost(int64, tag = "3")]
    pub call_token_value: i64,
    #[prost(int64, tag = "4")]
    pub token_id: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SmartContract {
    #[prost(bytes = "vec", tag = "1")]
    pub origin_address: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub contract_address: Vec<u8>,
    #[prost(message, optional, tag = "3")]
    pub abi: Option<Abi>,
    #[prost(bytes = "vec", tag = "4")]
    pub bytecode: Vec<u8>,
    #[prost(int64, tag = "5")]
    pub call_value: i64,
    #[prost(int64, tag = "6")]
    pub consume_user_resource_percent: i64,
    #[prost(string, tag = "7")]
    pub name: String,
    #[prost(int64, tag = "8")]
    pub origin_energy_limit: i64,
    #[prost(bytes = "vec", tag = "9")]
    pub code_hash: Vec<u8>,
    #[prost(bytes = "vec", tag = "10")]
    pub trx_hash: Vec<u8>,
    #[prost(int32, tag = "11")]
    pub version: i32,
}

/// Contract interface description as stored on chain.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Abi {
    // the misspelling is part of the wire definition
    #[prost(message, repeated, tag = "1")]
    pub entrys: Vec<AbiEntry>,
}

impl Abi {
    /// Looks up a function entry by name.
    pub fn function(&self, name: &str) -> Option<&AbiEntry> {
        self.entrys.iter().find(|entry| entry.r#type == EntryType::Function as i32 && entry.name == name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum EntryType {
    UnknownEntryType = 0,
    Constructor = 1,
    Function = 2,
    Event = 3,
    Fallback = 4,
    Receive = 5,
    Error = 6,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum StateMutability {
    UnknownMutabilityType = 0,
    Pure = 1,
    View = 2,
    Nonpayable = 3,
    Payable = 4,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AbiEntry {
    #[prost(bool, tag = "1")]
    pub anonymous: bool,
    #[prost(bool, tag = "2")]
    pub constant: bool,
    #[prost(string, tag = "3")]
    pub name: String,
    #[prost(message, repeated, tag = "4")]
    pub inputs: Vec<AbiParam>,
    #[prost(message, repeated, tag = "5")]
    pub outputs: Vec<AbiParam>,
    #[prost(enumeration = "EntryType", tag = "6")]
    pub r#type: i32,
    #[prost(bool, tag = "7")]
    pub payable: bool,
    #[prost(enumeration = "StateMutability", tag = "8")]
    pub state_mutability: i32,
}

impl AbiEntry {
    /// Canonical `name(type,...)` signature, ready for selector hashing.
    pub fn signature(&self) -> String {
        let types = self.inputs.iter().map(|param| param.r#type.as_str()).collect::<Vec<_>>();
        format!("{}({})", self.name, types.join(","))
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AbiParam {
    #[prost(bool, tag = "1")]
    pub indexed: bool,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(string, tag = "3")]
    pub r#type: String,
}
