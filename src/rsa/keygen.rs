// RSA Key Generation
// Key types and generation of (n, e, d) triples from random primes

use std::fmt;

use log::debug;
use num_integer::Integer;
use num_traits::One;
use rand::{thread_rng, Rng};

use super::decrypt::decrypt;
use super::encoder::Encoder;
use super::encrypt::encrypt;
use super::error::RsaError;
use super::math::{is_probable_prime, mod_inverse, random_with_digits};
use crate::bigint::BigInteger;

/// Upper bound (exclusive) for the public exponent search
pub const MAX_PUBLIC_EXPONENT: u64 = 65537;

/// RSA Public Key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    pub e: BigInteger, // Public exponent
    pub n: BigInteger, // Modulus
}

/// RSA Private Key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivateKey {
    pub d: BigInteger, // Private exponent
    pub n: BigInteger, // Modulus (same as public)
}

/// RSA Key Pair (both public and private keys)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    pub public_key: PublicKey,
    pub private_key: PrivateKey,
}

impl PublicKey {
    pub fn new(e: BigInteger, n: BigInteger) -> Self {
        Self { e, n }
    }

    /// Encrypt a message block using this public key
    pub fn encrypt(&self, message: &BigInteger) -> Result<BigInteger, RsaError> {
        encrypt(&self.n, &self.e, message)
    }

    /// Encode text and encrypt it as a single block
    pub fn encrypt_text(&self, text: &str, encoder: &dyn Encoder) -> Result<BigInteger, RsaError> {
        let message: BigInteger = encoder.encode(text)?.parse()?;
        self.encrypt(&message)
    }
}

impl PrivateKey {
    pub fn new(d: BigInteger, n: BigInteger) -> Self {
        Self { d, n }
    }

    /// Decrypt a ciphertext block using this private key
    pub fn decrypt(&self, ciphertext: &BigInteger) -> Result<BigInteger, RsaError> {
        decrypt(&self.n, &self.d, ciphertext)
    }

    /// Decrypt a block and decode it back to text
    pub fn decrypt_text(&self, ciphertext: &BigInteger, encoder: &dyn Encoder) -> Result<String, RsaError> {
        let message = self.decrypt(ciphertext)?;
        encoder.decode(&message.to_string())
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Exponent: {} | Modulus: {}", self.e, self.n)
    }
}

impl fmt::Display for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Exponent: {} | Modulus: {}", self.d, self.n)
    }
}

/// Settings for key generation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyGenConfig {
    /// Decimal digits in each of the two primes
    pub prime_digits: usize,
    /// Miller-Rabin rounds per candidate
    pub witness_rounds: u32,
    /// Smallest public exponent tried (at least 3)
    pub min_exponent: u64,
    /// Candidate draws allowed per prime, and prime pairs allowed per key
    pub max_attempts: u32,
}

impl Default for KeyGenConfig {
    fn default() -> Self {
        Self {
            prime_digits: 8,
            witness_rounds: 10,
            min_exponent: 3,
            max_attempts: 10_000,
        }
    }
}

impl KeyGenConfig {
    pub fn with_prime_digits(mut self, digits: usize) -> Self {
        self.prime_digits = digits;
        self
    }

    pub fn with_witness_rounds(mut self, rounds: u32) -> Self {
        self.witness_rounds = rounds;
        self
    }

    pub fn with_min_exponent(mut self, exponent: u64) -> Self {
        self.min_exponent = exponent;
        self
    }

    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    fn validate(&self) -> Result<(), RsaError> {
        if self.prime_digits == 0 {
            return Err(RsaError::KeyGeneration("prime_digits must be positive".into()));
        }
        if self.min_exponent < 3 || self.min_exponent >= MAX_PUBLIC_EXPONENT {
            return Err(RsaError::KeyGeneration(format!(
                "min_exponent must be in 3..{}",
                MAX_PUBLIC_EXPONENT
            )));
        }
        if self.max_attempts == 0 {
            return Err(RsaError::KeyGeneration("max_attempts must be positive".into()));
        }
        Ok(())
    }
}

/// Generate a key pair using the thread-local RNG
pub fn generate_keypair(config: &KeyGenConfig) -> Result<KeyPair, RsaError> {
    generate_keypair_with_rng(config, &mut thread_rng())
}

/// Generate a key pair from the given RNG
///
/// Draws two distinct primes, then takes the smallest public exponent at or
/// above `min_exponent` that is coprime to both φ(n) and n, and derives the
/// private exponent as its inverse modulo φ(n). Prime pairs that admit no
/// such exponent (only possible for tiny primes) are redrawn.
pub fn generate_keypair_with_rng<R: Rng + ?Sized>(
    config: &KeyGenConfig,
    rng: &mut R,
) -> Result<KeyPair, RsaError> {
    config.validate()?;
    let one = BigInteger::one();

    for attempt in 1..=config.max_attempts {
        let p = random_prime(config, rng)?;
        let q = random_prime(config, rng)?;
        if p == q {
            continue;
        }

        let n = &p * &q;
        let phi = (&p - &one) * (&q - &one);

        let Some(e) = public_exponent(&phi, &n, config.min_exponent) else {
            debug!("no public exponent for p={}, q={}, retrying", p, q);
            continue;
        };
        let d = mod_inverse(&e, &phi)
            .ok_or_else(|| RsaError::KeyGeneration("failed to compute modular inverse".into()))?;

        debug!("generated {}-digit modulus with e={} after {} attempt(s)", n.digit_len(), e, attempt);
        return Ok(KeyPair {
            public_key: PublicKey::new(e, n.clone()),
            private_key: PrivateKey::new(d, n),
        });
    }

    Err(RsaError::KeyGeneration(format!(
        "no usable prime pair after {} attempts",
        config.max_attempts
    )))
}

/// Draw a probable prime with exactly `config.prime_digits` digits
pub fn random_prime<R: Rng + ?Sized>(config: &KeyGenConfig, rng: &mut R) -> Result<BigInteger, RsaError> {
    let one = BigInteger::one();

    for attempt in 1..=config.max_attempts {
        let mut candidate = random_with_digits(config.prime_digits, rng)
            .ok_or_else(|| RsaError::KeyGeneration("prime_digits must be positive".into()))?;
        // The largest n-digit number is odd, so this never gains a digit
        if candidate.is_even() {
            candidate = &candidate + &one;
        }

        if is_probable_prime(&candidate, config.witness_rounds, rng) {
            debug!("found {}-digit prime after {} candidate(s)", config.prime_digits, attempt);
            return Ok(candidate);
        }
    }

    Err(RsaError::KeyGeneration(format!(
        "no {}-digit prime found in {} attempts",
        config.prime_digits, config.max_attempts
    )))
}

/// Smallest e in `min_exponent..min(phi, MAX_PUBLIC_EXPONENT)` coprime to phi and n
fn public_exponent(phi: &BigInteger, n: &BigInteger, min_exponent: u64) -> Option<BigInteger> {
    let one = BigInteger::one();
    let limit = phi.clone().min(BigInteger::from(MAX_PUBLIC_EXPONENT));

    let mut e = BigInteger::from(min_exponent);
    while e < limit {
        if e.gcd(phi).is_one() && e.gcd(n).is_one() {
            return Some(e);
        }
        e = &e + &one;
    }
    None
}
