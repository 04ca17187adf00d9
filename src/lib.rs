//! # utxo-validator
//!
//! Batch validation of ledger transactions against a pool of unspent outputs.
//!
//! Given a batch of proposed transactions, the validator produces the maximal
//! mutually-consistent subset that may be committed and updates its pool
//! accordingly. It enforces ownership (ECDSA signatures over secp256k1),
//! conservation of value (exact integer arithmetic), and absence of
//! double-spends both within a single transaction and across a batch.
//!
//! ## Architecture
//!
//! Two components with a clear dependency order:
//! - [`UtxoPool`]: a mapping from [`OutputReference`] (creating transaction
//!   plus output position) to the [`OutputRecord`] it currently holds.
//! - [`TransactionValidator`]: checks one transaction against the current
//!   pool state ([`TransactionValidator::is_valid_tx`]) and runs the greedy
//!   batch acceptance loop ([`TransactionValidator::handle_txs`]), committing
//!   accepted transactions as it goes.
//!
//! The validator always works on its own copy of the pool, so callers cannot
//! invalidate a batch in progress and the validator cannot mutate caller
//! state. Everything is single-threaded, synchronous and deterministic:
//! replaying an accepted subsequence against the pre-batch pool reproduces
//! the final pool state exactly.
//!
//! ## Usage
//!
//! ```rust
//! use utxo_validator::crypto::{self, SecretKey};
//! use utxo_validator::{
//!     OutputRecord, OutputReference, TransactionValidator, UnsignedTransaction, UtxoPool,
//! };
//!
//! let alice = SecretKey::from_slice(&[0x11; 32]).unwrap();
//! let bob = SecretKey::from_slice(&[0x22; 32]).unwrap();
//!
//! // Seed a pool with one 100-value output owned by Alice.
//! let mut genesis = UnsignedTransaction::new();
//! genesis.add_output(100, crypto::public_key_for(&alice));
//! let genesis = genesis.finalize().unwrap();
//!
//! let mut pool = UtxoPool::new();
//! pool.insert(
//!     OutputReference { txid: genesis.id(), index: 0 },
//!     OutputRecord { value: 100, owner: crypto::public_key_for(&alice) },
//! );
//!
//! // Alice pays Bob 90; the 10 left over is the implicit fee.
//! let mut payment = UnsignedTransaction::new();
//! payment.add_input(OutputReference { txid: genesis.id(), index: 0 });
//! payment.add_output(90, crypto::public_key_for(&bob));
//! payment.sign_input(0, &alice).unwrap();
//! let payment = payment.finalize().unwrap();
//!
//! let mut validator = TransactionValidator::new(&pool);
//! assert!(validator.is_valid_tx(&payment));
//!
//! let accepted = validator.handle_txs(&[payment.clone()]);
//! assert_eq!(accepted.len(), 1);
//! assert!(validator.pool().contains(&OutputReference { txid: payment.id(), index: 0 }));
//! ```

pub mod crypto;
pub mod encoding;
pub mod error;
pub mod pool;
pub mod transaction;
pub mod types;
pub mod validator;

pub use error::{LedgerError, Result};
pub use pool::UtxoPool;
pub use transaction::{Transaction, TransactionInput, TransactionOutput, UnsignedTransaction};
pub use types::{ByteString, Hash, OutputRecord, OutputReference, Value};
pub use validator::TransactionValidator;
