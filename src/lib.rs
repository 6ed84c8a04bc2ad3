// RSA Core - Crate root
// Exports the integer-domain cipher primitives

pub mod math;
pub mod encrypt;
pub mod decrypt;
pub mod error;

pub use math::mod_pow;
pub use encrypt::encrypt_int;
pub use decrypt::decrypt_int;
pub use error::CryptoError;
