// RSA Encryption Core
// Validates a plaintext integer against the modulus, then exponentiates

use num_bigint::BigInt;
use num_traits::Signed;

use crate::error::CryptoError;
use crate::math::mod_pow;

/// Encrypt a message integer using encryption key `ekey`, working modulo `n`
/// Returns the ciphertext integer
///
/// The message must be non-negative and no larger than `n`. A message
/// exactly equal to `n` is accepted for compatibility with existing
/// callers, even though the canonical residue class is `[0, n)`.
pub fn encrypt_int(message: &BigInt, ekey: &BigInt, n: &BigInt) -> Result<BigInt, CryptoError> {
    if message.is_negative() {
        return Err(CryptoError::NegativeMessage);
    }

    if message > n {
        return Err(CryptoError::MessageTooLong {
            message: message.clone(),
            n: n.clone(),
        });
    }

    Ok(mod_pow(message, ekey, n))
}
