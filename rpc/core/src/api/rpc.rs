//! The client API
//!
//! One async call per wallet service method. Requests and responses are the
//! protobuf wire models; argument decoding and result validation belong to the caller.

use crate::{model::*, RpcResult};
use async_trait::async_trait;

#[async_trait]
pub trait RpcApi: Sync + Send {
    async fn get_account(&self, request: Account) -> RpcResult<Account>;

    async fn create_transaction(&self, request: TransferContract) -> RpcResult<TransactionExtention>;

    async fn broadcast_transaction(&self, request: Transaction) -> RpcResult<Return>;

    async fn trigger_contract(&self, request: TriggerSmartContract) -> RpcResult<TransactionExtention>;

    /// Executes the call without creating a transaction on chain.
    async fn trigger_constant_contract(&self, request: TriggerSmartContract) -> RpcResult<TransactionExtention>;

    async fn deploy_contract(&self, request: CreateSmartContract) -> RpcResult<TransactionExtention>;

    async fn get_contract(&self, request: BytesMessage) -> RpcResult<SmartContract>;

    async fn get_transaction_by_id(&self, request: BytesMessage) -> RpcResult<Transaction>;
}
