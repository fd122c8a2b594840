//! This module contains the protobuf wire models exchanged
//! with the wallet service.
//!
//! Field tags follow the ledger's published protocol definitions, so a
//! decoded message re-encodes to the same bytes. Transaction ids depend on it.

pub mod account;
pub mod contract;
pub mod message;
pub mod tx;

pub use account::*;
pub use contract::*;
pub use message::*;
pub use tx::*;
