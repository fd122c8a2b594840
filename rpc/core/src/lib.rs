//! # RPC Core
//!
//! Foundational primitives of the Tron wallet RPC client: the main
//! [`RpcApi`](api::rpc::RpcApi) trait, the [`RpcApiOps`](crate::api::ops::RpcApiOps)
//! enum mapping each call to its service path, and the protobuf wire models
//! used as call arguments and results.
//!
//! This crate acts as a foundation for `tron_grpc_client`, which provides the
//! gRPC transport, and `tron_wallet_core`, which assembles transactions on top of it.
//!

pub mod api;
pub mod error;
pub mod model;

pub mod prelude {
    //! Re-exports of the most commonly used types and traits in this crate.
    pub use super::api::ops::RpcApiOps;
    pub use super::api::rpc::RpcApi;
    pub use super::error::*;
    pub use super::model::*;
}

pub use api::ops::RpcApiOps;
pub use api::rpc::RpcApi;
pub use error::*;
pub use model::*;
