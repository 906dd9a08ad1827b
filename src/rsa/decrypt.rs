// RSA Decryption Implementation
// Textbook RSA: m = c^d mod n, the same operation as encryption

use super::encoder::Encoder;
use super::encrypt::apply_exponent;
use super::error::RsaError;
use super::keygen::PrivateKey;
use crate::bigint::BigInteger;

/// Decrypt a ciphertext block: `ciphertext^d mod n`
pub fn decrypt(
    modulus: &BigInteger,
    private_exponent: &BigInteger,
    ciphertext: &BigInteger,
) -> Result<BigInteger, RsaError> {
    apply_exponent(modulus, private_exponent, ciphertext)
}

/// Decrypt a block and decode it to text
pub fn decrypt_to_string(
    ciphertext: &BigInteger,
    private_key: &PrivateKey,
    encoder: &dyn Encoder,
) -> Result<String, RsaError> {
    private_key.decrypt_text(ciphertext, encoder)
}
