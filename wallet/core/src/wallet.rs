//!
//! [`Wallet`] turns address strings and JSON call arguments into node requests
//! and checks the replies.
//!

use crate::contract::{DeployRequest, TriggerRequest, build_deploy, build_trigger, wire_address};
use crate::tx::{set_fee_limit, validate};
use std::sync::Arc;
use tron_abi::Encoder;
use tron_core::debug;
use tron_rpc_core::{
    Abi, Account, BytesMessage, Return, RpcApi, RpcError, RpcResult, Transaction, TransactionExtention, TransferContract,
};

pub struct Wallet<R: RpcApi> {
    rpc: Arc<R>,
    encoder: Encoder,
}

impl<R: RpcApi> Clone for Wallet<R> {
    fn clone(&self) -> Self {
        Self { rpc: self.rpc.clone(), encoder: self.encoder }
    }
}

impl<R: RpcApi> Wallet<R> {
    pub fn new(rpc: Arc<R>) -> Self {
        Self { rpc, encoder: Encoder::default() }
    }

    /// Uses `encoder` for call arguments, e.g. one rejecting out-of-range integers.
    pub fn with_encoder(mut self, encoder: Encoder) -> Self {
        self.encoder = encoder;
        self
    }

    pub fn rpc(&self) -> &Arc<R> {
        &self.rpc
    }

    pub async fn get_account(&self, address: &str) -> RpcResult<Account> {
        let request = Account::with_address(wire_address(address)?);
        let account = self.rpc.get_account(request.clone()).await?;
        // unknown accounts come back empty
        if account.address != request.address {
            return Err(RpcError::NotFound(format!("account {address}")));
        }
        Ok(account)
    }

    pub async fn get_account_balance(&self, address: &str) -> RpcResult<i64> {
        Ok(self.get_account(address).await?.balance)
    }

    /// Creates an unsigned native transfer of `amount` from `from` to `to`.
    pub async fn transfer(&self, from: &str, to: &str, amount: i64) -> RpcResult<TransactionExtention> {
        let request = TransferContract { owner_address: wire_address(from)?, to_address: wire_address(to)?, amount };
        let tx = self.rpc.create_transaction(request).await?;
        validate(&tx)?;
        Ok(tx)
    }

    /// Creates an unsigned contract call transaction with the fee limit applied.
    pub async fn trigger_contract(&self, request: &TriggerRequest) -> RpcResult<TransactionExtention> {
        let contract = build_trigger(request, &self.encoder)?;
        let mut tx = self.rpc.trigger_contract(contract).await?;
        if tx.result_code() != 0 {
            debug!("contract execution of {} failed: {}", request.method, tx.result_message());
        }
        validate(&tx)?;
        set_fee_limit(&mut tx, request.fee_limit)?;
        Ok(tx)
    }

    /// Runs a read-only call. Results are in `constant_result`.
    pub async fn trigger_constant_contract(&self, request: &TriggerRequest) -> RpcResult<TransactionExtention> {
        let contract = build_trigger(request, &self.encoder)?;
        let tx = self.rpc.trigger_constant_contract(contract).await?;
        validate(&tx)?;
        Ok(tx)
    }

    /// Creates an unsigned deployment transaction with the fee limit applied.
    pub async fn deploy_contract(&self, request: &DeployRequest) -> RpcResult<TransactionExtention> {
        let contract = build_deploy(request)?;
        let mut tx = self.rpc.deploy_contract(contract).await?;
        validate(&tx)?;
        set_fee_limit(&mut tx, request.fee_limit)?;
        Ok(tx)
    }

    pub async fn get_contract_abi(&self, address: &str) -> RpcResult<Abi> {
        let contract = self.rpc.get_contract(BytesMessage::new(wire_address(address)?)).await?;
        contract.abi.ok_or_else(|| RpcError::MissingField("abi".to_string()))
    }

    /// Submits a signed transaction. A rejected submission becomes [`RpcError::Transaction`].
    pub async fn broadcast(&self, tx: Transaction) -> RpcResult<Return> {
        let ret = self.rpc.broadcast_transaction(tx).await?;
        if !ret.result || !ret.is_success() {
            return Err(RpcError::Transaction { code: ret.code, message: ret.message_text() });
        }
        Ok(ret)
    }

    /// Looks a transaction up by its hex id.
    pub async fn get_transaction_by_id(&self, id: &str) -> RpcResult<Transaction> {
        let tx = self.rpc.get_transaction_by_id(BytesMessage::new(hex::decode(id)?)).await?;
        if tx.raw_data.is_none() {
            return Err(RpcError::NotFound(format!("transaction {id}")));
        }
        Ok(tx)
    }
}
