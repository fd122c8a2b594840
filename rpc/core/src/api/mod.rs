//! RPC API surface: the [`RpcApi`](rpc::RpcApi) trait and the [`RpcApiOps`](ops::RpcApiOps) method table.

pub mod ops;
pub mod rpc;
