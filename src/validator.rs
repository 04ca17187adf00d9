//! Single-transaction checks and greedy batch acceptance

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::crypto;
use crate::encoding;
use crate::pool::UtxoPool;
use crate::transaction::Transaction;
use crate::types::{OutputRecord, OutputReference, Value};

/// Validates proposed transactions against an unspent-output pool and commits
/// the accepted ones.
///
/// The validator operates on its own copy of the pool handed to
/// [`TransactionValidator::new`]. Callers keep their original; nothing they
/// do to it can disturb a batch in progress, and nothing the validator
/// commits leaks back out except through [`TransactionValidator::pool`].
pub struct TransactionValidator {
    pool: UtxoPool,
}

impl TransactionValidator {
    /// Creates a validator over an independent snapshot of `pool`.
    pub fn new(pool: &UtxoPool) -> Self {
        Self { pool: pool.clone() }
    }

    /// Current pool state, reflecting every commit made so far.
    pub fn pool(&self) -> &UtxoPool {
        &self.pool
    }

    /// A transaction is valid if and only if:
    /// 1. every output it claims is in the current pool,
    /// 2. no output is claimed more than once by this transaction,
    /// 3. each input's signature verifies under the claimed output's owner,
    /// 4. none of its output values is negative, and
    /// 5. the sum of claimed values covers the sum of created values.
    ///
    /// The first failing check rejects the transaction. Adversarial content
    /// only ever yields `false`; the pool is never mutated here.
    pub fn is_valid_tx(&self, tx: &Transaction) -> bool {
        let mut claimed = HashSet::new();
        let mut claimed_value: i128 = 0;

        for (index, input) in tx.inputs().iter().enumerate() {
            let record = match self.pool.get(&input.source) {
                Some(record) => record,
                None => {
                    debug!(input = index, "rejected: claimed output not in pool");
                    return false;
                }
            };
            if !claimed.insert(input.source.clone()) {
                debug!(input = index, "rejected: output claimed twice");
                return false;
            }
            let message = encoding::signing_bytes(&input.source, tx.outputs());
            if !crypto::verify_signature(&record.owner, &message, &input.signature) {
                debug!(input = index, "rejected: signature does not verify");
                return false;
            }
            claimed_value += i128::from(record.value);
        }

        for (index, output) in tx.outputs().iter().enumerate() {
            if output.value < 0 {
                debug!(
                    output = index,
                    value = output.value,
                    "rejected: negative output value"
                );
                return false;
            }
        }

        let created_value: i128 = tx.outputs().iter().map(|o| i128::from(o.value)).sum();
        if claimed_value < created_value {
            debug!(
                claimed = %claimed_value,
                created = %created_value,
                "rejected: created value exceeds claimed value"
            );
            return false;
        }

        true
    }

    /// Greedy batch acceptance over `proposed`, in the given order.
    ///
    /// Each transaction is checked against the pool as already mutated by
    /// earlier acceptances in the same batch, so a transaction may spend an
    /// output created earlier in `proposed` but never one created later.
    /// Invalid transactions are skipped with no partial effects and no error.
    ///
    /// Returns the accepted subsequence in input order. Replaying that
    /// subsequence against the pre-batch pool reproduces the final pool state
    /// exactly.
    pub fn handle_txs(&mut self, proposed: &[Transaction]) -> Vec<Transaction> {
        let mut accepted = Vec::new();
        for tx in proposed {
            if !self.is_valid_tx(tx) {
                continue;
            }
            self.commit(tx);
            accepted.push(tx.clone());
        }
        debug!(
            proposed = proposed.len(),
            accepted = accepted.len(),
            "batch processed"
        );
        accepted
    }

    /// Difference between the value `tx` claims and the value it creates,
    /// the surplus a valid spend would leave behind as its fee.
    ///
    /// `None` when a claimed output is not currently in the pool. An
    /// over-spending transaction reports a negative difference.
    pub fn transaction_fee(&self, tx: &Transaction) -> Option<Value> {
        let mut claimed: i128 = 0;
        for input in tx.inputs() {
            claimed += i128::from(self.pool.get(&input.source)?.value);
        }
        let created: i128 = tx.outputs().iter().map(|o| i128::from(o.value)).sum();
        Value::try_from(claimed - created).ok()
    }

    fn commit(&mut self, tx: &Transaction) {
        for input in tx.inputs() {
            self.pool.remove(&input.source);
        }
        for (index, output) in tx.outputs().iter().enumerate() {
            let reference = OutputReference {
                txid: tx.id(),
                index: index as u32,
            };
            let record = OutputRecord {
                value: output.value,
                owner: output.recipient.clone(),
            };
            self.pool.insert(reference, record);
        }
        trace!(
            inputs = tx.inputs().len(),
            outputs = tx.outputs().len(),
            "transaction committed"
        );
    }
}
