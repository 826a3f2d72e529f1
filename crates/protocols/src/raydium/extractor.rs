//! Turns a confirmed transaction into a pool-creation record.

use crate::error::ExtractError;
use crate::raydium::layout;
use crate::rpc::RpcProvider;
use raydium_lp_domain::{LpPoolRecord, RecordSink};
use solana_sdk::message::compiled_instruction::CompiledInstruction;
use solana_sdk::message::VersionedMessage;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Resolves one position of the instruction's account list through the
/// transaction's static account keys.
fn resolve(
    keys: &[Pubkey],
    instruction: &CompiledInstruction,
    position: usize,
) -> Result<String, ExtractError> {
    let key_index = *instruction
        .accounts
        .get(position)
        .ok_or(ExtractError::AccountOutOfRange { position })? as usize;
    let key = keys
        .get(key_index)
        .ok_or(ExtractError::AccountOutOfRange { position })?;
    Ok(key.to_string())
}

/// Scans a transaction message for the first pool-creation instruction.
///
/// An instruction matches when its program reference resolves to
/// `program_id` and its payload is non-empty; later matches in the same
/// message are ignored. Only static account keys are consulted, accounts
/// loaded through lookup tables are not resolved.
///
/// # Errors
/// Returns [`ExtractError::AccountOutOfRange`] when a matching
/// instruction is too short for the expected layout or references a key
/// past the account-key list.
pub fn find_lp_record(
    message: &VersionedMessage,
    program_id: &Pubkey,
) -> Result<Option<LpPoolRecord>, ExtractError> {
    let keys = message.static_account_keys();
    for instruction in message.instructions() {
        let program = keys.get(instruction.program_id_index as usize);
        if program != Some(program_id) || instruction.data.is_empty() {
            continue;
        }
        let record = LpPoolRecord {
            program_id: resolve(keys, instruction, layout::PROGRAM)?,
            amm_id: resolve(keys, instruction, layout::AMM_ID)?,
            amm_authority: resolve(keys, instruction, layout::AMM_AUTHORITY)?,
            amm_open_orders: resolve(keys, instruction, layout::AMM_OPEN_ORDERS)?,
            lp_mint: resolve(keys, instruction, layout::LP_MINT)?,
            coin_mint: resolve(keys, instruction, layout::COIN_MINT)?,
            pc_mint: resolve(keys, instruction, layout::PC_MINT)?,
            coin_vault: resolve(keys, instruction, layout::COIN_VAULT)?,
            pc_vault: resolve(keys, instruction, layout::PC_VAULT)?,
            amm_target_orders: resolve(keys, instruction, layout::AMM_TARGET_ORDERS)?,
            serum_program: resolve(keys, instruction, layout::SERUM_PROGRAM)?,
            serum_market: resolve(keys, instruction, layout::SERUM_MARKET)?,
            deployer: resolve(keys, instruction, layout::DEPLOYER)?,
        };
        return Ok(Some(record));
    }
    Ok(None)
}

/// Fetches transactions and hands extracted records to a [`RecordSink`].
pub struct LpTransactionExtractor {
    rpc: RpcProvider,
    program_id: Pubkey,
    sink: Arc<dyn RecordSink>,
}

impl LpTransactionExtractor {
    pub fn new(rpc: RpcProvider, program_id: Pubkey, sink: Arc<dyn RecordSink>) -> Self {
        Self {
            rpc,
            program_id,
            sink,
        }
    }

    /// Fetches one transaction by signature and extracts its
    /// pool-creation record, if any.
    ///
    /// `Ok(None)` covers both an unknown signature and a transaction
    /// with no matching instruction.
    ///
    /// # Errors
    /// Returns an error if the fetch fails or a matching instruction
    /// does not fit the expected account layout.
    pub async fn process_transaction(
        &self,
        signature: &Signature,
    ) -> Result<Option<LpPoolRecord>, ExtractError> {
        let Some(transaction) = self.rpc.fetch_transaction(signature).await? else {
            info!(%signature, "no confirmed transaction for signature");
            return Ok(None);
        };
        self.process_message(signature, &transaction.message).await
    }

    /// Extracts from an already-fetched message and persists the result.
    pub async fn process_message(
        &self,
        signature: &Signature,
        message: &VersionedMessage,
    ) -> Result<Option<LpPoolRecord>, ExtractError> {
        let Some(record) = find_lp_record(message, &self.program_id)? else {
            debug!(%signature, "no pool-creation instruction in transaction");
            return Ok(None);
        };
        info!(%signature, amm_id = %record.amm_id, "extracted pool-creation record");
        // A storage failure does not void the extraction itself.
        if let Err(err) = self.sink.save(&record).await {
            error!(%signature, error = %err, "failed to persist pool record");
        }
        Ok(Some(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use solana_client::nonblocking::rpc_client::RpcClient;
    use solana_client::rpc_request::RpcRequest;
    use solana_sdk::hash::Hash;
    use solana_sdk::message::{Message, MessageHeader};
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// 20 unique keys; instruction accounts point at keys 2..=19 so that
    /// layout position `p` resolves to `keys[2 + p]`.
    fn account_keys() -> Vec<Pubkey> {
        (0..20).map(|_| Pubkey::new_unique()).collect()
    }

    fn lp_instruction(program_id_index: u8) -> CompiledInstruction {
        CompiledInstruction {
            program_id_index,
            accounts: (2..20).collect(),
            data: vec![1, 0, 0, 0],
        }
    }

    fn message_with(keys: Vec<Pubkey>, instructions: Vec<CompiledInstruction>) -> VersionedMessage {
        VersionedMessage::Legacy(Message {
            header: MessageHeader::default(),
            account_keys: keys,
            recent_blockhash: Hash::default(),
            instructions,
        })
    }

    struct RecordingSink {
        saved: Mutex<Vec<LpPoolRecord>>,
    }

    #[async_trait]
    impl RecordSink for RecordingSink {
        async fn save(&self, record: &LpPoolRecord) -> anyhow::Result<()> {
            self.saved.lock().unwrap().push(record.clone());
            Ok(())
        }
    }

    struct FailingSink;

    #[async_trait]
    impl RecordSink for FailingSink {
        async fn save(&self, _record: &LpPoolRecord) -> anyhow::Result<()> {
            Err(anyhow::anyhow!("storage unavailable"))
        }
    }

    #[test]
    fn test_extracts_record_from_matching_instruction() {
        let keys = account_keys();
        let program_id = keys[1];
        let message = message_with(keys.clone(), vec![lp_instruction(1)]);

        let record = find_lp_record(&message, &program_id).unwrap().unwrap();

        let at = |position: usize| keys[2 + position].to_string();
        assert_eq!(record.program_id, at(layout::PROGRAM));
        assert_eq!(record.amm_id, at(layout::AMM_ID));
        assert_eq!(record.amm_authority, at(layout::AMM_AUTHORITY));
        assert_eq!(record.amm_open_orders, at(layout::AMM_OPEN_ORDERS));
        assert_eq!(record.lp_mint, at(layout::LP_MINT));
        assert_eq!(record.coin_mint, at(layout::COIN_MINT));
        assert_eq!(record.pc_mint, at(layout::PC_MINT));
        assert_eq!(record.coin_vault, at(layout::COIN_VAULT));
        assert_eq!(record.pc_vault, at(layout::PC_VAULT));
        assert_eq!(record.amm_target_orders, at(layout::AMM_TARGET_ORDERS));
        assert_eq!(record.serum_program, at(layout::SERUM_PROGRAM));
        assert_eq!(record.serum_market, at(layout::SERUM_MARKET));
        assert_eq!(record.deployer, at(layout::DEPLOYER));
    }

    #[test]
    fn test_ignores_instructions_from_other_programs() {
        let keys = account_keys();
        let program_id = Pubkey::new_unique();
        let message = message_with(keys, vec![lp_instruction(1)]);

        assert!(find_lp_record(&message, &program_id).unwrap().is_none());
    }

    #[test]
    fn test_empty_payload_is_not_a_match() {
        let keys = account_keys();
        let program_id = keys[1];
        let mut instruction = lp_instruction(1);
        instruction.data.clear();
        let message = message_with(keys, vec![instruction]);

        assert!(find_lp_record(&message, &program_id).unwrap().is_none());
    }

    #[test]
    fn test_first_matching_instruction_wins() {
        let keys = account_keys();
        let program_id = keys[1];
        let first = lp_instruction(1);
        let mut second = lp_instruction(1);
        second.accounts.reverse();
        let expected_amm_id = keys[2 + layout::AMM_ID].to_string();
        let message = message_with(keys, vec![first, second]);

        let record = find_lp_record(&message, &program_id).unwrap().unwrap();
        assert_eq!(record.amm_id, expected_amm_id);
    }

    #[test]
    fn test_truncated_account_list_is_an_error() {
        let keys = account_keys();
        let program_id = keys[1];
        let mut instruction = lp_instruction(1);
        instruction.accounts.truncate(10);
        let message = message_with(keys, vec![instruction]);

        let err = find_lp_record(&message, &program_id).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::AccountOutOfRange {
                position: layout::COIN_VAULT
            }
        ));
    }

    #[test]
    fn test_account_index_past_key_list_is_an_error() {
        let keys = account_keys();
        let program_id = keys[1];
        let mut instruction = lp_instruction(1);
        instruction.accounts[layout::AMM_ID] = 200;
        let message = message_with(keys, vec![instruction]);

        let err = find_lp_record(&message, &program_id).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::AccountOutOfRange {
                position: layout::AMM_ID
            }
        ));
    }

    #[test]
    fn test_unresolvable_program_index_is_skipped() {
        let keys = account_keys();
        let program_id = keys[1];
        let message = message_with(keys, vec![lp_instruction(99)]);

        assert!(find_lp_record(&message, &program_id).unwrap().is_none());
    }

    #[tokio::test]
    async fn test_process_message_saves_through_sink() {
        let keys = account_keys();
        let program_id = keys[1];
        let message = message_with(keys, vec![lp_instruction(1)]);
        let sink = Arc::new(RecordingSink {
            saved: Mutex::new(Vec::new()),
        });
        let extractor = LpTransactionExtractor::new(
            RpcProvider::new("http://localhost:8899"),
            program_id,
            sink.clone(),
        );

        let record = extractor
            .process_message(&Signature::default(), &message)
            .await
            .unwrap()
            .unwrap();

        let saved = sink.saved.lock().unwrap();
        assert_eq!(saved.as_slice(), std::slice::from_ref(&record));
    }

    #[tokio::test]
    async fn test_no_match_saves_nothing() {
        let keys = account_keys();
        let message = message_with(keys, vec![lp_instruction(1)]);
        let sink = Arc::new(RecordingSink {
            saved: Mutex::new(Vec::new()),
        });
        let extractor = LpTransactionExtractor::new(
            RpcProvider::new("http://localhost:8899"),
            Pubkey::new_unique(),
            sink.clone(),
        );

        let result = extractor
            .process_message(&Signature::default(), &message)
            .await
            .unwrap();

        assert!(result.is_none());
        assert!(sink.saved.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_signature_is_empty_and_saves_nothing() {
        // The node answers JSON null for a signature it does not know;
        // that is an empty result, not an error, and nothing reaches
        // the sink.
        let mut mocks = HashMap::new();
        mocks.insert(RpcRequest::GetTransaction, serde_json::Value::Null);
        let rpc = RpcProvider::new_with_client(RpcClient::new_mock_with_mocks(
            "succeeds".to_string(),
            mocks,
        ));
        let sink = Arc::new(RecordingSink {
            saved: Mutex::new(Vec::new()),
        });
        let extractor = LpTransactionExtractor::new(rpc, Pubkey::new_unique(), sink.clone());

        let result = extractor
            .process_transaction(&Signature::default())
            .await
            .unwrap();

        assert!(result.is_none());
        assert!(sink.saved.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_record_survives_failing_sink() {
        let keys = account_keys();
        let program_id = keys[1];
        let expected_amm_id = keys[2 + layout::AMM_ID].to_string();
        let message = message_with(keys, vec![lp_instruction(1)]);
        let extractor = LpTransactionExtractor::new(
            RpcProvider::new("http://localhost:8899"),
            program_id,
            Arc::new(FailingSink),
        );

        let record = extractor
            .process_message(&Signature::default(), &message)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(record.amm_id, expected_amm_id);
    }
}
