//! Canonical byte layout for signing messages and transaction digests
//!
//! Integers are little-endian and variable-length byte fields are prefixed
//! with their u32 length. Both the transaction identifier and every input
//! signature commit to this layout, so it must stay stable.

use sha2::{Digest, Sha256};

use crate::transaction::{TransactionInput, TransactionOutput};
use crate::types::{ByteString, Hash, OutputReference};

fn push_reference(buf: &mut ByteString, source: &OutputReference) {
    buf.extend_from_slice(&source.txid);
    buf.extend_from_slice(&source.index.to_le_bytes());
}

fn push_bytes(buf: &mut ByteString, bytes: &[u8]) {
    buf.extend_from_slice(&(bytes.len() as u32).to_le_bytes());
    buf.extend_from_slice(bytes);
}

fn push_output(buf: &mut ByteString, output: &TransactionOutput) {
    buf.extend_from_slice(&output.value.to_le_bytes());
    push_bytes(buf, &output.recipient);
}

/// Bytes the signer of one input commits to: the claimed output reference
/// followed by every output. Signature fields are excluded so a signature
/// never has to sign itself.
pub fn signing_bytes(source: &OutputReference, outputs: &[TransactionOutput]) -> ByteString {
    let mut buf = ByteString::new();
    push_reference(&mut buf, source);
    for output in outputs {
        push_output(&mut buf, output);
    }
    buf
}

/// Transaction identifier: SHA-256 over the full finalized content,
/// signatures included.
pub fn transaction_digest(inputs: &[TransactionInput], outputs: &[TransactionOutput]) -> Hash {
    let mut buf = ByteString::new();
    for input in inputs {
        push_reference(&mut buf, &input.source);
        push_bytes(&mut buf, &input.signature);
    }
    for output in outputs {
        push_output(&mut buf, output);
    }
    Sha256::digest(&buf).into()
}
