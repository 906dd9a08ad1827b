// Text block encoding
// Maps text to a run of decimal digits that can be parsed into a message block

use super::error::RsaError;

/// Number of decimal digits each character occupies
pub const DIGITS_PER_CHAR: usize = 3;

/// Converts text to and from the decimal digit string of a message block
pub trait Encoder {
    /// Encode text as decimal digits
    fn encode(&self, text: &str) -> Result<String, RsaError>;

    /// Decode decimal digits back into text
    fn decode(&self, digits: &str) -> Result<String, RsaError>;
}

/// Fixed-width ASCII packing: every character becomes its code point,
/// zero-padded to three digits.
///
/// Once the digits go through an integer the leading zeros of the first
/// character are lost, so decoding reads three-digit groups from the right
/// and treats a shorter leading group as a character of its own. A leading
/// NUL character cannot survive that trip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AsciiEncoder;

impl Encoder for AsciiEncoder {
    fn encode(&self, text: &str) -> Result<String, RsaError> {
        let mut digits = String::with_capacity(text.len() * DIGITS_PER_CHAR);
        for (position, found) in text.chars().enumerate() {
            if !found.is_ascii() {
                return Err(RsaError::Encoding { position, found });
            }
            digits.push_str(&format!("{:03}", u32::from(found)));
        }
        Ok(digits)
    }

    fn decode(&self, digits: &str) -> Result<String, RsaError> {
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(RsaError::Decoding {
                block: digits.to_string(),
            });
        }

        let lead = digits.len() % DIGITS_PER_CHAR;
        let mut text = String::with_capacity(digits.len() / DIGITS_PER_CHAR + 1);
        if lead > 0 {
            text.push(decode_char(&digits[..lead])?);
        }
        for start in (lead..digits.len()).step_by(DIGITS_PER_CHAR) {
            text.push(decode_char(&digits[start..start + DIGITS_PER_CHAR])?);
        }

        Ok(text)
    }
}

fn decode_char(block: &str) -> Result<char, RsaError> {
    block
        .parse::<u8>()
        .ok()
        .filter(u8::is_ascii)
        .map(char::from)
        .ok_or_else(|| RsaError::Decoding {
            block: block.to_string(),
        })
}
