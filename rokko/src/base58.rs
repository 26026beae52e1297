//! Base58Check encoding, used by legacy addresses and WIF.
//!
//! The checksum is the first four bytes of SHA-256(SHA-256(version ||
//! payload)); it is recomputed on every decode, never trusted from the
//! input. The raw base58 radix conversion comes from `bs58`, whose
//! alphabet excludes `0`, `O`, `I`, and `l` and maps leading zero bytes
//! to leading `1` characters.

use crate::error::{Error, Result};
use crate::hash::double_sha256;

/// Minimum decoded length: version byte plus 4-byte checksum.
const MIN_DECODED_LEN: usize = 5;

/// Encode a version byte and payload as Base58Check.
#[must_use]
pub fn encode(version: u8, payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(1 + payload.len() + 4);
    data.push(version);
    data.extend_from_slice(payload);

    let checksum = double_sha256(&data);
    data.extend_from_slice(&checksum[..4]);

    bs58::encode(data).into_string()
}

/// Decode a Base58Check string into its version byte and payload.
///
/// # Errors
///
/// Returns [`Error::InvalidCharacter`] for input outside the base58
/// alphabet, [`Error::TooShort`] when fewer than five bytes decode, and
/// [`Error::ChecksumMismatch`] when the trailing four bytes disagree
/// with the recomputed checksum.
pub fn decode(encoded: &str) -> Result<(u8, Vec<u8>)> {
    let data = bs58::decode(encoded).into_vec().map_err(|e| match e {
        bs58::decode::Error::InvalidCharacter { character, index } => {
            Error::InvalidCharacter { character, index }
        }
        bs58::decode::Error::NonAsciiCharacter { index } => Error::InvalidCharacter {
            character: char::REPLACEMENT_CHARACTER,
            index,
        },
        _ => Error::UnrecognizedAddressFormat,
    })?;

    if data.len() < MIN_DECODED_LEN {
        return Err(Error::TooShort {
            minimum: MIN_DECODED_LEN,
            actual: data.len(),
        });
    }

    let (payload, checksum) = data.split_at(data.len() - 4);
    let computed = double_sha256(payload);
    if checksum != &computed[..4] {
        return Err(Error::ChecksumMismatch);
    }

    Ok((payload[0], payload[1..].to_vec()))
}
