// RSA Modular Exponentiation
// The square-and-multiply loop every encryption and decryption passes through

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// Modular exponentiation: base^exp mod modulus
/// Iterative square-and-multiply, right-to-left on the exponent, with a
/// decrement step on odd exponents. Each iteration performs at most one
/// multiplication and one reduction, so no intermediate ever exceeds
/// modulus^2 and memory stays constant in the exponent's value — the
/// point of this variant on small CPUs and microcontrollers.
///
/// An exponent of zero (or below) yields `1 % modulus`.
///
/// Panics if `modulus` is zero; the fault surfaces from the reduction
/// inside the loop rather than an up-front check.
pub fn mod_pow(base: &BigInt, exp: &BigInt, modulus: &BigInt) -> BigInt {
    if modulus.is_one() {
        return BigInt::zero();
    }

    let mut x = base.clone();
    let mut e = exp.clone();
    let mut y = BigInt::one();

    while e.is_positive() {
        if e.is_even() {
            x = (&x * &x).mod_floor(modulus);
            e >>= 1;
        } else {
            y = (&x * &y).mod_floor(modulus);
            e -= 1;
        }
    }

    y
}
