// RSA Module - Main module file
// Exports all RSA-related functionality

pub mod decrypt;
pub mod encoder;
pub mod encrypt;
mod error;
pub mod keygen;
pub mod math;

pub use decrypt::{decrypt, decrypt_to_string};
pub use encoder::{AsciiEncoder, Encoder};
pub use encrypt::{encrypt, encrypt_text};
pub use error::RsaError;
pub use keygen::{generate_keypair, generate_keypair_with_rng, KeyGenConfig, KeyPair, PrivateKey, PublicKey};
