//!
//! Transaction id and fee limit handling for node-built transactions.
//!

use prost::Message;
use tron_hashes::{Hash, Hasher, Sha256};
use tron_rpc_core::{RpcError, RpcResult, TransactionExtention, TransactionRaw};

/// `SHA256(protobuf(raw_data))`.
pub fn transaction_id(raw: &TransactionRaw) -> Hash {
    Sha256::hash(raw.encode_to_vec())
}

fn raw_data_mut(tx: &mut TransactionExtention) -> RpcResult<&mut TransactionRaw> {
    tx.transaction
        .as_mut()
        .and_then(|transaction| transaction.raw_data.as_mut())
        .ok_or_else(|| RpcError::MissingField("transaction.raw_data".to_string()))
}

/// Recomputes `txid` from the current raw data.
pub fn update_hash(tx: &mut TransactionExtention) -> RpcResult<Hash> {
    let id = transaction_id(raw_data_mut(tx)?);
    tx.txid = id.to_vec();
    Ok(id)
}

/// Sets `raw_data.fee_limit` and refreshes the id. A non-positive limit leaves the transaction untouched.
pub fn set_fee_limit(tx: &mut TransactionExtention, fee_limit: i64) -> RpcResult<()> {
    if fee_limit <= 0 {
        return Ok(());
    }
    raw_data_mut(tx)?.fee_limit = fee_limit;
    update_hash(tx)?;
    Ok(())
}

/// Rejects an empty reply or one carrying a non-zero result code.
pub fn validate(tx: &TransactionExtention) -> RpcResult<()> {
    if tx.encoded_len() == 0 {
        return Err(RpcError::MissingField("transaction".to_string()));
    }
    match tx.result_code() {
        0 => Ok(()),
        code => Err(RpcError::Transaction { code, message: tx.result_message() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tron_rpc_core::{ResponseCode, Return, Transaction};

    fn unsigned(raw: TransactionRaw) -> TransactionExtention {
        TransactionExtention { transaction: Some(Transaction { raw_data: Some(raw), ..Default::default() }), ..Default::default() }
    }

    #[test]
    fn test_update_hash() {
        let raw = TransactionRaw { ref_block_bytes: vec![0xab, 0xcd], expiration: 2, ..Default::default() };
        let mut tx = unsigned(raw.clone());
        let id = update_hash(&mut tx).unwrap();
        assert_eq!(tx.txid, id.to_vec());
        assert_eq!(id, Sha256::hash([0x0a, 0x02, 0xab, 0xcd, 0x40, 0x02]));
        assert_eq!(id, transaction_id(&raw));

        let mut empty = TransactionExtention::default();
        assert!(matches!(update_hash(&mut empty), Err(RpcError::MissingField(_))));
    }

    #[test]
    fn test_set_fee_limit() {
        let mut tx = unsigned(TransactionRaw { timestamp: 1, ..Default::default() });
        update_hash(&mut tx).unwrap();
        let before = tx.clone();

        set_fee_limit(&mut tx, 0).unwrap();
        set_fee_limit(&mut tx, -5).unwrap();
        assert_eq!(tx, before);

        set_fee_limit(&mut tx, 10_000_000).unwrap();
        let raw = tx.transaction.as_ref().unwrap().raw_data.as_ref().unwrap();
        assert_eq!(raw.fee_limit, 10_000_000);
        assert_ne!(tx.txid, before.txid);
        assert_eq!(tx.txid, transaction_id(raw).to_vec());

        // no raw data and nothing to do: still fine
        set_fee_limit(&mut TransactionExtention::default(), 0).unwrap();
        assert!(set_fee_limit(&mut TransactionExtention::default(), 1).is_err());
    }

    #[test]
    fn test_validate() {
        assert!(matches!(validate(&TransactionExtention::default()), Err(RpcError::MissingField(_))));

        let mut tx = unsigned(TransactionRaw { timestamp: 1, ..Default::default() });
        tx.result = Some(Return::success());
        validate(&tx).unwrap();

        tx.result = Some(Return::failure(ResponseCode::ContractValidateError, "no such contract"));
        match validate(&tx) {
            Err(RpcError::Transaction { code, message }) => {
                assert_eq!(code, 2);
                assert_eq!(message, "no such contract");
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
