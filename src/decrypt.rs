// RSA Decryption Core
// Inverts encrypt_int given the matching private exponent

use num_bigint::BigInt;

use crate::math::mod_pow;

/// Decrypt a ciphertext integer using decryption key `dkey`, working modulo `n`
/// Returns the message integer
///
/// No range or sign validation is performed on the ciphertext: it goes
/// straight to the exponentiation, so an out-of-domain value still yields
/// a result in `[0, n)`, just not a meaningful one. Callers are expected
/// to supply a value already reduced modulo `n`.
pub fn decrypt_int(ciphertext: &BigInt, dkey: &BigInt, n: &BigInt) -> BigInt {
    mod_pow(ciphertext, dkey, n)
}
