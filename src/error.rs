// RSA Core Errors
// Value-level failures the integer domain type can still represent

use num_bigint::BigInt;
use thiserror::Error;

/// Errors raised by the integer-domain encryption entry points
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    /// The plaintext integer is negative
    #[error("only non-negative numbers are supported")]
    NegativeMessage,

    /// The plaintext integer exceeds the modulus
    #[error("the message {message} is too long for n={n}")]
    MessageTooLong { message: BigInt, n: BigInt },
}
