//! Decoded addresses and their derivation from public keys.

use core::fmt;
use core::str::FromStr;

use crate::base58;
use crate::bech32;
use crate::error::{Error, Result};
use crate::hash::hash160;
use crate::network::Network;
use crate::public_key::PublicKey;
use crate::types::AddressType;
use crate::validator;

/// The hash an address commits to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Payload {
    /// Hash160 of a public key (legacy P2PKH).
    PubkeyHash([u8; 20]),
    /// Hash160 of a redeem script (P2SH, here wrapping P2WPKH).
    ScriptHash([u8; 20]),
    /// Witness version and program (native segwit).
    WitnessProgram {
        /// Witness version, 0..=16.
        version: u8,
        /// Program bytes; 20 or 32 for v0.
        program: Vec<u8>,
    },
}

/// A decoded, validated address.
///
/// Distinct from its display string: two addresses with the same
/// payload and network are equal no matter which encoding produced
/// them, and [`fmt::Display`] re-encodes canonically.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    payload: Payload,
    network: Network,
}

impl Address {
    /// Derive an address of the given type from a public key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UncompressedKey`] for the segwit types when the
    /// key's serialization preference is uncompressed; BIP-143 forbids
    /// uncompressed keys in witness programs, and silently compressing
    /// would break the key-to-address correspondence.
    pub fn from_public_key(
        public_key: &PublicKey,
        address_type: AddressType,
        network: Network,
    ) -> Result<Self> {
        match address_type {
            AddressType::Legacy => Ok(Self {
                payload: Payload::PubkeyHash(public_key.hash160()),
                network,
            }),
            AddressType::SegwitWrapped => {
                if !public_key.is_compressed() {
                    return Err(Error::UncompressedKey);
                }
                // Redeem script: OP_0 PUSH20 <hash160(pubkey)>.
                let mut redeem_script = [0u8; 22];
                redeem_script[0] = 0x00;
                redeem_script[1] = 0x14;
                redeem_script[2..].copy_from_slice(&public_key.hash160());
                Ok(Self {
                    payload: Payload::ScriptHash(hash160(&redeem_script)),
                    network,
                })
            }
            AddressType::NativeSegwit => {
                if !public_key.is_compressed() {
                    return Err(Error::UncompressedKey);
                }
                Ok(Self {
                    payload: Payload::WitnessProgram {
                        version: 0,
                        program: public_key.hash160().to_vec(),
                    },
                    network,
                })
            }
        }
    }

    /// Build a P2PKH address from a raw 20-byte hash.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WrongLength`] unless `hash` is exactly 20 bytes.
    pub fn p2pkh(hash: &[u8], network: Network) -> Result<Self> {
        Ok(Self {
            payload: Payload::PubkeyHash(exact_20(hash)?),
            network,
        })
    }

    /// Build a P2SH address from a raw 20-byte script hash.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WrongLength`] unless `hash` is exactly 20 bytes.
    pub fn p2sh(hash: &[u8], network: Network) -> Result<Self> {
        Ok(Self {
            payload: Payload::ScriptHash(exact_20(hash)?),
            network,
        })
    }

    /// Build a native segwit address from a witness version and program.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWitnessVersion`] for versions above 16
    /// and [`Error::InvalidProgramLength`] for BIP-141 violations
    /// (v0 programs must be 20 or 32 bytes, any program 2..=40).
    pub fn witness_program(version: u8, program: Vec<u8>, network: Network) -> Result<Self> {
        if version > 16 {
            return Err(Error::InvalidWitnessVersion(version));
        }
        let valid = match version {
            0 => program.len() == 20 || program.len() == 32,
            _ => (2..=40).contains(&program.len()),
        };
        if !valid {
            return Err(Error::InvalidProgramLength(program.len()));
        }
        Ok(Self {
            payload: Payload::WitnessProgram { version, program },
            network,
        })
    }

    /// The encoding family this address belongs to.
    #[must_use]
    pub const fn address_type(&self) -> AddressType {
        match self.payload {
            Payload::PubkeyHash(_) => AddressType::Legacy,
            Payload::ScriptHash(_) => AddressType::SegwitWrapped,
            Payload::WitnessProgram { .. } => AddressType::NativeSegwit,
        }
    }

    /// The network this address belongs to.
    #[must_use]
    pub const fn network(&self) -> Network {
        self.network
    }

    /// The decoded payload.
    #[must_use]
    pub const fn payload(&self) -> &Payload {
        &self.payload
    }

    /// The raw hash or witness program bytes.
    #[must_use]
    pub fn program(&self) -> &[u8] {
        match &self.payload {
            Payload::PubkeyHash(hash) | Payload::ScriptHash(hash) => hash,
            Payload::WitnessProgram { program, .. } => program,
        }
    }

    /// Canonical string encoding via the payload's own codec.
    #[must_use]
    pub fn encode(&self) -> String {
        match &self.payload {
            Payload::PubkeyHash(hash) => base58::encode(self.network.p2pkh_version(), hash),
            Payload::ScriptHash(hash) => base58::encode(self.network.p2sh_version(), hash),
            Payload::WitnessProgram { version, program } => {
                bech32::encode(self.network.hrp(), *version, program)
                    .expect("constructors only admit encodable witness programs")
            }
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        validator::validate(s)
    }
}

fn exact_20(hash: &[u8]) -> Result<[u8; 20]> {
    hash.try_into().map_err(|_| Error::WrongLength {
        expected: 20,
        actual: hash.len(),
    })
}
