use super::RpcCoreMock;
use crate::contract::{DeployRequest, TriggerRequest};
use crate::tx::transaction_id;
use crate::wallet::Wallet;
use hex_literal::hex;
use std::sync::Arc;
use tron_abi::pack_json;
use tron_rpc_core::*;

// cspell:disable
const ALICE: &str = "TRGhNNfnmgLegT4zHNjEqDSADjgmnHvubJ";
const TOKEN: &str = "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t";
// cspell:enable
const ALICE_WIRE: [u8; 21] = hex!("41a7d8a35b260395c14aa456297662092ba3b76fc0");
const TOKEN_WIRE: [u8; 21] = hex!("41a614f803b6fd780986a42c78ec9c7f77e6ded13c");

fn wallet() -> (Arc<RpcCoreMock>, Wallet<RpcCoreMock>) {
    let rpc = Arc::new(RpcCoreMock::new());
    (rpc.clone(), Wallet::new(rpc))
}

fn raw_data(tx: &TransactionExtention) -> &TransactionRaw {
    tx.transaction.as_ref().unwrap().raw_data.as_ref().unwrap()
}

fn transfer_call() -> TriggerRequest {
    TriggerRequest::new(ALICE, TOKEN, "transfer(address,uint256)", format!(r#"[{{"address": "{ALICE}"}}, {{"uint256": "100"}}]"#))
}

#[tokio::test]
async fn test_account_lookup() {
    let (rpc, wallet) = wallet();
    rpc.add_account(Account { address: ALICE_WIRE.to_vec(), balance: 42_000_000, ..Default::default() });

    assert_eq!(wallet.get_account(ALICE).await.unwrap().balance, 42_000_000);
    assert_eq!(wallet.get_account_balance(ALICE).await.unwrap(), 42_000_000);
    assert!(matches!(wallet.get_account_balance(TOKEN).await, Err(RpcError::NotFound(_))));
    assert!(matches!(wallet.get_account("T").await, Err(RpcError::AddressError(_))));
    assert_eq!(rpc.calls(), vec![RpcApiOps::GetAccount; 3]);
}

#[tokio::test]
async fn test_transfer() {
    let (rpc, wallet) = wallet();
    let tx = wallet.transfer(ALICE, TOKEN, 1_000).await.unwrap();
    let contract = &raw_data(&tx).contract[0];
    assert_eq!(contract.r#type, ContractType::TransferContract as i32);
    let transfer: TransferContract = contract.parameter.as_ref().unwrap().unpack().unwrap();
    assert_eq!(transfer, TransferContract { owner_address: ALICE_WIRE.to_vec(), to_address: TOKEN_WIRE.to_vec(), amount: 1_000 });

    rpc.set_result(Return::failure(ResponseCode::ContractValidateError, "balance is not sufficient"));
    let err = wallet.transfer(ALICE, TOKEN, 1_000).await.unwrap_err();
    assert!(matches!(err, RpcError::Transaction { code: 2, message } if message == "balance is not sufficient"));
}

#[tokio::test]
async fn test_trigger_contract_applies_fee_limit() {
    let (rpc, wallet) = wallet();
    let tx = wallet.trigger_contract(&transfer_call().with_fee_limit(15_000_000)).await.unwrap();

    let raw = raw_data(&tx);
    assert_eq!(raw.fee_limit, 15_000_000);
    assert_eq!(tx.txid, transaction_id(raw).to_vec());

    let sent = &rpc.triggers()[0];
    assert_eq!(sent.owner_address, ALICE_WIRE);
    assert_eq!(sent.contract_address, TOKEN_WIRE);
    assert_eq!(sent.data, pack_json("transfer(address,uint256)", &transfer_call().params_json).unwrap());
    let packed: TriggerSmartContract = raw.contract[0].parameter.as_ref().unwrap().unpack().unwrap();
    assert_eq!(&packed, sent);
}

#[tokio::test]
async fn test_trigger_contract_without_fee_limit() {
    let (_, wallet) = wallet();
    let tx = wallet.trigger_contract(&transfer_call()).await.unwrap();
    assert_eq!(raw_data(&tx).fee_limit, 0);
    assert_eq!(tx.txid, transaction_id(raw_data(&tx)).to_vec());
}

#[tokio::test]
async fn test_trigger_contract_failure() {
    let (rpc, wallet) = wallet();
    rpc.set_result(Return::failure(ResponseCode::ContractExeError, "REVERT opcode executed"));
    let err = wallet.trigger_contract(&transfer_call().with_fee_limit(1)).await.unwrap_err();
    assert!(matches!(err, RpcError::Transaction { code: 3, message } if message == "REVERT opcode executed"));

    // bad arguments never reach the node
    let calls = rpc.calls().len();
    let bad = TriggerRequest::new(ALICE, TOKEN, "transfer(address,uint256)", r#"[{"address": "nope"}]"#);
    assert!(matches!(wallet.trigger_contract(&bad).await, Err(RpcError::AbiError(_))));
    assert_eq!(rpc.calls().len(), calls);
}

#[tokio::test]
async fn test_trigger_constant_contract() {
    let (rpc, wallet) = wallet();
    let balance = hex!("0000000000000000000000000000000000000000000000000000000000000064").to_vec();
    rpc.set_constant_result(vec![balance.clone()]);

    let request = TriggerRequest::new(ALICE, TOKEN, "balanceOf(address)", format!(r#"[{{"address": "{ALICE}"}}]"#)).with_fee_limit(9);
    let tx = wallet.trigger_constant_contract(&request).await.unwrap();
    assert_eq!(tx.constant_result, vec![balance]);
    assert_eq!(tx.energy_used, 345);
    assert_eq!(raw_data(&tx).fee_limit, 0);
    assert_eq!(rpc.calls(), vec![RpcApiOps::TriggerConstantContract]);
}

#[tokio::test]
async fn test_deploy_contract() {
    let (rpc, wallet) = wallet();
    let request = DeployRequest {
        from: ALICE.to_string(),
        name: "Counter".to_string(),
        abi: Some(Abi::default()),
        bytecode: "0x6080604052".to_string(),
        fee_limit: 1_000_000_000,
        consume_user_resource_percent: 30,
        origin_energy_limit: 10_000_000,
    };
    let tx = wallet.deploy_contract(&request).await.unwrap();
    let raw = raw_data(&tx);
    assert_eq!(raw.fee_limit, 1_000_000_000);
    assert_eq!(tx.txid, transaction_id(raw).to_vec());
    let create: CreateSmartContract = raw.contract[0].parameter.as_ref().unwrap().unpack().unwrap();
    assert_eq!(create.new_contract.unwrap().bytecode, hex!("6080604052"));

    let invalid = DeployRequest { consume_user_resource_percent: 101, ..request };
    assert!(matches!(wallet.deploy_contract(&invalid).await, Err(RpcError::InvalidArgument(_))));
    assert_eq!(rpc.calls(), vec![RpcApiOps::DeployContract]);
}

#[tokio::test]
async fn test_get_contract_abi() {
    let (rpc, wallet) = wallet();
    let abi = Abi {
        entrys: vec![AbiEntry { name: "totalSupply".to_string(), r#type: EntryType::Function as i32, ..Default::default() }],
    };
    rpc.add_contract(&TOKEN_WIRE, SmartContract { abi: Some(abi.clone()), ..Default::default() });

    assert_eq!(wallet.get_contract_abi(TOKEN).await.unwrap(), abi);
    assert!(matches!(wallet.get_contract_abi(ALICE).await, Err(RpcError::MissingField(field)) if field == "abi"));
}

#[tokio::test]
async fn test_broadcast() {
    let (rpc, wallet) = wallet();
    let signed = Transaction { signature: vec![vec![0u8; 65]], ..Default::default() };
    assert!(wallet.broadcast(signed.clone()).await.unwrap().is_success());

    rpc.set_broadcast_result(Return::failure(ResponseCode::DupTransactionError, "dup transaction"));
    let err = wallet.broadcast(signed).await.unwrap_err();
    assert!(matches!(err, RpcError::Transaction { code: 5, message } if message == "dup transaction"));
}

#[tokio::test]
async fn test_get_transaction_by_id() {
    let (rpc, wallet) = wallet();
    let tx = Transaction { raw_data: Some(TransactionRaw { timestamp: 1, ..Default::default() }), ..Default::default() };
    let id = transaction_id(tx.raw_data.as_ref().unwrap());
    rpc.add_transaction(id.as_slice(), tx.clone());

    assert_eq!(wallet.get_transaction_by_id(&id.to_string()).await.unwrap(), tx);
    let missing = "00".repeat(32);
    assert!(matches!(wallet.get_transaction_by_id(&missing).await, Err(RpcError::NotFound(_))));
    assert!(matches!(wallet.get_transaction_by_id("xyz").await, Err(RpcError::HexParsingError(_))));
}
