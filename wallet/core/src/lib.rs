//!
//! Transaction assembly for the Tron ledger.
//!
//! Builds contract calls, deployments and transfers from address strings and
//! JSON arguments, sends them through any [`RpcApi`](tron_rpc_core::RpcApi)
//! implementation and finalizes the returned transactions (fee limit, id).
//!

pub mod contract;
pub mod tx;
pub mod wallet;

#[cfg(test)]
mod tests;

pub mod prelude {
    pub use crate::contract::{DeployRequest, TriggerRequest};
    pub use crate::wallet::Wallet;
    pub use tron_abi::{Encoder, OverflowPolicy};
    pub use tron_rpc_core::{RpcError, RpcResult};
}

pub use contract::{DeployRequest, TriggerRequest, build_deploy, build_trigger};
pub use tx::{set_fee_limit, transaction_id, update_hash};
pub use wallet::Wallet;
