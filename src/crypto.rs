//! ECDSA signature plumbing over secp256k1
//!
//! Messages are hashed with SHA-256 before signing or verification. Public
//! keys travel as 33-byte SEC1 compressed encodings, signatures as DER.
//!
//! Verification fails closed: anything that cannot be parsed and checked
//! definitively counts as an invalid signature, never as an error.

use secp256k1::ecdsa::Signature;
use secp256k1::{Message, PublicKey, Secp256k1};
use sha2::{Digest, Sha256};

use crate::types::ByteString;

pub use secp256k1::SecretKey;

/// Verify `signature` over `message` under the compressed public key `owner`.
pub fn verify_signature(owner: &[u8], message: &[u8], signature: &[u8]) -> bool {
    let pubkey = match PublicKey::from_slice(owner) {
        Ok(pk) => pk,
        Err(_) => return false,
    };

    let signature = match Signature::from_der(signature) {
        Ok(sig) => sig,
        Err(_) => return false,
    };

    let digest: [u8; 32] = Sha256::digest(message).into();
    let message = match Message::from_digest_slice(&digest) {
        Ok(m) => m,
        Err(_) => return false,
    };

    let secp = Secp256k1::new();
    secp.verify_ecdsa(&message, &signature, &pubkey).is_ok()
}

/// Sign `message` with `secret`, returning the DER-serialized signature.
pub fn sign_message(secret: &SecretKey, message: &[u8]) -> ByteString {
    let digest: [u8; 32] = Sha256::digest(message).into();
    let message = Message::from_digest_slice(&digest).expect("SHA-256 digest is 32 bytes");
    let secp = Secp256k1::new();
    secp.sign_ecdsa(&message, secret).serialize_der().to_vec()
}

/// Compressed public key bytes for `secret`.
pub fn public_key_for(secret: &SecretKey) -> ByteString {
    let secp = Secp256k1::new();
    PublicKey::from_secret_key(&secp, secret).serialize().to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(seed: u8) -> SecretKey {
        SecretKey::from_slice(&[seed; 32]).unwrap()
    }

    #[test]
    fn sign_then_verify_round_trip() {
        let secret = key(0x11);
        let signature = sign_message(&secret, b"pay 40 to b");
        assert!(verify_signature(
            &public_key_for(&secret),
            b"pay 40 to b",
            &signature
        ));
    }

    #[test]
    fn rejects_signature_from_other_key() {
        let secret = key(0x11);
        let other = key(0x22);
        let signature = sign_message(&other, b"pay 40 to b");
        assert!(!verify_signature(
            &public_key_for(&secret),
            b"pay 40 to b",
            &signature
        ));
    }

    #[test]
    fn rejects_tampered_message() {
        let secret = key(0x11);
        let signature = sign_message(&secret, b"pay 40 to b");
        assert!(!verify_signature(
            &public_key_for(&secret),
            b"pay 41 to b",
            &signature
        ));
    }

    #[test]
    fn fails_closed_on_garbage_public_key() {
        let secret = key(0x11);
        let signature = sign_message(&secret, b"pay 40 to b");
        assert!(!verify_signature(&[0u8; 33], b"pay 40 to b", &signature));
        assert!(!verify_signature(&[], b"pay 40 to b", &signature));
    }

    #[test]
    fn fails_closed_on_garbage_signature() {
        let secret = key(0x11);
        assert!(!verify_signature(
            &public_key_for(&secret),
            b"pay 40 to b",
            &[0xFF; 70]
        ));
        assert!(!verify_signature(&public_key_for(&secret), b"pay 40 to b", &[]));
    }
}
