//! Address and private-key validation.
//!
//! [`classify`] is a syntactic pre-filter only; [`validate`] is the
//! real judgment, and it keeps the underlying codec error kind so a
//! caller can tell "not base58" from "base58 but checksum failed".

use crate::address::Address;
use crate::base58;
use crate::bech32;
use crate::error::{Error, Result};
use crate::network::Network;
use crate::types::AddressType;

/// Guess the encoding family from prefix and first character alone.
///
/// Returns `None` for strings that match no known family. A `Some`
/// result proves nothing about validity; for base58 families the final
/// type comes from the decoded version byte, not from this guess.
#[must_use]
pub fn classify(address: &str) -> Option<AddressType> {
    let s = address.trim();
    let lower = s.to_ascii_lowercase();
    if lower.starts_with("bc1") || lower.starts_with("tb1") {
        return Some(AddressType::NativeSegwit);
    }
    match s.chars().next()? {
        '1' | 'm' | 'n' => Some(AddressType::Legacy),
        '3' | '2' => Some(AddressType::SegwitWrapped),
        _ => None,
    }
}

/// Fully decode and checksum-verify an address string.
///
/// Leading and trailing ASCII whitespace is trimmed deliberately;
/// anything else out of place is rejected by the codecs.
///
/// # Errors
///
/// [`Error::UnrecognizedAddressFormat`] when no family matches; codec
/// errors pass through unchanged; [`Error::UnknownVersionByte`] and
/// [`Error::UnknownHrp`] for well-formed strings of an unknown network.
pub fn validate(address: &str) -> Result<Address> {
    let s = address.trim();

    match classify(s) {
        Some(AddressType::NativeSegwit) => {
            let (hrp, version, program) = bech32::decode(s)?;
            let network = Network::from_hrp(&hrp).ok_or(Error::UnknownHrp(hrp))?;
            Address::witness_program(version, program, network)
        }
        Some(_) => {
            let (version, payload) = base58::decode(s)?;
            if payload.len() != 20 {
                return Err(Error::WrongLength {
                    expected: 20,
                    actual: payload.len(),
                });
            }
            match version {
                v if v == Network::Mainnet.p2pkh_version() => {
                    Address::p2pkh(&payload, Network::Mainnet)
                }
                v if v == Network::Mainnet.p2sh_version() => {
                    Address::p2sh(&payload, Network::Mainnet)
                }
                v if v == Network::Testnet.p2pkh_version() => {
                    Address::p2pkh(&payload, Network::Testnet)
                }
                v if v == Network::Testnet.p2sh_version() => {
                    Address::p2sh(&payload, Network::Testnet)
                }
                other => Err(Error::UnknownVersionByte(other)),
            }
        }
        None => Err(Error::UnrecognizedAddressFormat),
    }
}

/// Boolean form of [`validate`]; collapses every failure to `false`.
#[must_use]
pub fn is_valid_address(address: &str) -> bool {
    validate(address).is_ok()
}

/// Check whether a string is a valid raw private key: exactly 64 hex
/// characters encoding a scalar in `(0, n)`.
///
/// Says nothing about whether the key was ever used anywhere.
#[must_use]
pub fn is_valid_private_key(key: &str) -> bool {
    if key.len() != 64 || !key.bytes().all(|b| b.is_ascii_hexdigit()) {
        return false;
    }
    let Ok(bytes) = hex::decode(key) else {
        return false;
    };
    k256::ecdsa::SigningKey::from_slice(&bytes).is_ok()
}
