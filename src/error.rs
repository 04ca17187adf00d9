//! Error types for transaction construction

use thiserror::Error;

/// Errors raised while assembling or finalizing a transaction.
///
/// Validation of adversarial transaction content never produces these;
/// rejection there is reported as a plain boolean.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("input index {0} out of range")]
    InputIndexOutOfRange(usize),

    #[error("input {0} has no signature attached")]
    MissingSignature(usize),
}

pub type Result<T> = std::result::Result<T, LedgerError>;
