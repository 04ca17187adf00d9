//! Ledger transactions and their pre-finalization builder

use serde::{Deserialize, Serialize};

use crate::crypto::{self, SecretKey};
use crate::encoding;
use crate::error::{LedgerError, Result};
use crate::types::{ByteString, Hash, OutputReference, Value};

/// A single spend claim: the unspent output being consumed and the signature
/// authorizing the claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionInput {
    pub source: OutputReference,
    pub signature: ByteString,
}

/// A newly created output: an amount and the public key entitled to spend it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionOutput {
    pub value: Value,
    pub recipient: ByteString,
}

/// A finalized transaction.
///
/// The identifier and the signing bytes are fixed at finalization and the
/// inputs and outputs can no longer change. Build one through
/// [`UnsignedTransaction`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    id: Hash,
    inputs: Vec<TransactionInput>,
    outputs: Vec<TransactionOutput>,
}

impl Transaction {
    /// Content-derived identifier, stable for the life of the transaction.
    pub fn id(&self) -> Hash {
        self.id
    }

    pub fn inputs(&self) -> &[TransactionInput] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[TransactionOutput] {
        &self.outputs
    }

    /// Bytes the signer of `input_index` committed to: the claimed output
    /// reference plus every output, signatures excluded.
    pub fn signing_message(&self, input_index: usize) -> Result<ByteString> {
        let input = self
            .inputs
            .get(input_index)
            .ok_or(LedgerError::InputIndexOutOfRange(input_index))?;
        Ok(encoding::signing_bytes(&input.source, &self.outputs))
    }
}

/// A transaction still collecting inputs, outputs and signatures.
///
/// Inputs may be added in any order relative to outputs, but every signature
/// covers the full output list, so sign only once the outputs are complete.
#[derive(Debug, Clone, Default)]
pub struct UnsignedTransaction {
    inputs: Vec<OutputReference>,
    signatures: Vec<Option<ByteString>>,
    outputs: Vec<TransactionOutput>,
}

impl UnsignedTransaction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the unspent output named by `source`.
    pub fn add_input(&mut self, source: OutputReference) -> &mut Self {
        self.inputs.push(source);
        self.signatures.push(None);
        self
    }

    /// Create an output of `value` spendable by `recipient`.
    pub fn add_output(&mut self, value: Value, recipient: ByteString) -> &mut Self {
        self.outputs.push(TransactionOutput { value, recipient });
        self
    }

    /// Bytes the signer of `input_index` must commit to.
    pub fn signing_message(&self, input_index: usize) -> Result<ByteString> {
        let source = self
            .inputs
            .get(input_index)
            .ok_or(LedgerError::InputIndexOutOfRange(input_index))?;
        Ok(encoding::signing_bytes(source, &self.outputs))
    }

    /// Attach an externally produced signature to one input.
    pub fn attach_signature(&mut self, input_index: usize, signature: ByteString) -> Result<()> {
        let slot = self
            .signatures
            .get_mut(input_index)
            .ok_or(LedgerError::InputIndexOutOfRange(input_index))?;
        *slot = Some(signature);
        Ok(())
    }

    /// Sign one input with `secret` and attach the resulting signature.
    pub fn sign_input(&mut self, input_index: usize, secret: &SecretKey) -> Result<()> {
        let message = self.signing_message(input_index)?;
        self.attach_signature(input_index, crypto::sign_message(secret, &message))
    }

    /// Freeze the content and derive the identifier.
    ///
    /// Every input must carry a signature. A transaction with no inputs can
    /// be finalized; it can seed a pool but never pass validation.
    pub fn finalize(self) -> Result<Transaction> {
        let mut inputs = Vec::with_capacity(self.inputs.len());
        for (index, (source, signature)) in
            self.inputs.into_iter().zip(self.signatures).enumerate()
        {
            let signature = signature.ok_or(LedgerError::MissingSignature(index))?;
            inputs.push(TransactionInput { source, signature });
        }
        let id = encoding::transaction_digest(&inputs, &self.outputs);
        Ok(Transaction {
            id,
            inputs,
            outputs: self.outputs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(seed: u8) -> SecretKey {
        SecretKey::from_slice(&[seed; 32]).unwrap()
    }

    fn reference(seed: u8, index: u32) -> OutputReference {
        OutputReference {
            txid: [seed; 32],
            index,
        }
    }

    #[test]
    fn finalize_requires_every_signature() {
        let mut tx = UnsignedTransaction::new();
        tx.add_input(reference(1, 0));
        tx.add_output(40, crypto::public_key_for(&key(0x22)));

        match tx.finalize() {
            Err(LedgerError::MissingSignature(0)) => {}
            other => panic!("expected missing-signature error, got {other:?}"),
        }
    }

    #[test]
    fn finalize_allows_zero_inputs() {
        let mut tx = UnsignedTransaction::new();
        tx.add_output(100, crypto::public_key_for(&key(0x11)));
        let tx = tx.finalize().unwrap();

        assert!(tx.inputs().is_empty());
        assert_eq!(tx.outputs().len(), 1);
    }

    #[test]
    fn identifier_is_content_derived() {
        let build = |value: Value| {
            let mut tx = UnsignedTransaction::new();
            tx.add_output(value, crypto::public_key_for(&key(0x11)));
            tx.finalize().unwrap()
        };

        assert_eq!(build(100).id(), build(100).id());
        assert_ne!(build(100).id(), build(101).id());
    }

    #[test]
    fn signing_message_matches_between_builder_and_finalized() {
        let mut unsigned = UnsignedTransaction::new();
        unsigned.add_input(reference(1, 0));
        unsigned.add_output(40, crypto::public_key_for(&key(0x22)));

        let before = unsigned.signing_message(0).unwrap();
        unsigned.sign_input(0, &key(0x11)).unwrap();
        let tx = unsigned.finalize().unwrap();

        assert_eq!(before, tx.signing_message(0).unwrap());
    }

    #[test]
    fn signing_message_rejects_out_of_range_index() {
        let mut unsigned = UnsignedTransaction::new();
        unsigned.add_input(reference(1, 0));

        assert!(matches!(
            unsigned.signing_message(1),
            Err(LedgerError::InputIndexOutOfRange(1))
        ));
        assert!(matches!(
            unsigned.attach_signature(7, vec![]),
            Err(LedgerError::InputIndexOutOfRange(7))
        ));
    }

    #[test]
    fn serialized_transaction_round_trips() {
        let alice = key(0x11);
        let mut unsigned = UnsignedTransaction::new();
        unsigned.add_input(reference(1, 0));
        unsigned.add_output(40, crypto::public_key_for(&key(0x22)));
        unsigned.sign_input(0, &alice).unwrap();
        let tx = unsigned.finalize().unwrap();

        let bytes = serde_json::to_vec(&tx).unwrap();
        let decoded: Transaction = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(tx, decoded);
        assert_eq!(tx.id(), decoded.id());
    }
}
