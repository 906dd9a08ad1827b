// RSA Encryption Implementation
// Textbook RSA: c = m^e mod n, no padding

use num_traits::One;

use super::encoder::Encoder;
use super::error::RsaError;
use super::keygen::PublicKey;
use crate::bigint::BigInteger;

/// Raise a block to a key exponent modulo n.
///
/// Encryption and decryption are both this function; only the exponent
/// differs.
pub(crate) fn apply_exponent(
    modulus: &BigInteger,
    exponent: &BigInteger,
    block: &BigInteger,
) -> Result<BigInteger, RsaError> {
    if *modulus <= BigInteger::one() {
        return Err(RsaError::InvalidModulus);
    }
    if block.is_negative() || block >= modulus {
        return Err(RsaError::MessageOutOfRange);
    }

    Ok(block.mod_pow(exponent, modulus)?)
}

/// Encrypt a message block: `message^e mod n`
pub fn encrypt(
    modulus: &BigInteger,
    public_exponent: &BigInteger,
    message: &BigInteger,
) -> Result<BigInteger, RsaError> {
    apply_exponent(modulus, public_exponent, message)
}

/// Encode text and encrypt it as a single block
pub fn encrypt_text(text: &str, public_key: &PublicKey, encoder: &dyn Encoder) -> Result<BigInteger, RsaError> {
    public_key.encrypt_text(text, encoder)
}
