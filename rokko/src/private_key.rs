//! secp256k1 private keys and WIF import/export.

use k256::ecdsa::SigningKey;
use k256::elliptic_curve::rand_core::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::base58;
use crate::error::{Error, Result};
use crate::network::Network;
use crate::public_key::PublicKey;

/// A secp256k1 private key with its compression preference.
///
/// The scalar is guaranteed in range `[1, n-1]` by construction. The
/// compressed flag travels with the key because it changes both the
/// WIF encoding and every derived address.
#[derive(Clone)]
pub struct PrivateKey {
    inner: SigningKey,
    compressed: bool,
}

impl Zeroize for PrivateKey {
    fn zeroize(&mut self) {
        // SigningKey zeroizes its scalar on drop; swap in a dummy so the
        // real one drops now.
        let zeroed = SigningKey::from_slice(&[1u8; 32]).expect("nonzero scalar below n");
        let _ = core::mem::replace(&mut self.inner, zeroed);
        self.compressed = false;
    }
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl PrivateKey {
    /// Generate a new random private key.
    ///
    /// The rng must be cryptographically secure; `k256` rejection-samples
    /// the draw into `[1, n-1]`.
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        Self {
            inner: SigningKey::random(rng),
            compressed: true,
        }
    }

    /// Create from a raw 32-byte scalar.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WrongLength`] for any length other than 32 and
    /// [`Error::InvalidKey`] when the scalar is zero or not below the
    /// curve order.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != 32 {
            return Err(Error::WrongLength {
                expected: 32,
                actual: bytes.len(),
            });
        }
        let inner = SigningKey::from_slice(bytes).map_err(|_| Error::InvalidKey)?;
        Ok(Self {
            inner,
            compressed: true,
        })
    }

    /// Serialize to the raw 32-byte scalar.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; 32] {
        self.inner.to_bytes().into()
    }

    /// Set whether derived public keys use the compressed encoding.
    pub fn set_compressed(&mut self, compressed: bool) {
        self.compressed = compressed;
    }

    /// Check whether derived public keys use the compressed encoding.
    #[must_use]
    pub const fn is_compressed(&self) -> bool {
        self.compressed
    }

    /// Derive the corresponding public key.
    ///
    /// Pure and deterministic: the same scalar always yields the same
    /// point, via constant-time scalar multiplication.
    #[must_use]
    pub fn public_key(&self) -> PublicKey {
        PublicKey::from_signing_key(&self.inner, self.compressed)
    }

    /// Import from WIF (Wallet Import Format).
    ///
    /// Returns the key along with the network the WIF was encoded for.
    ///
    /// # Errors
    ///
    /// Codec failures ([`Error::InvalidCharacter`], [`Error::TooShort`],
    /// [`Error::ChecksumMismatch`]) propagate from the Base58Check layer;
    /// a structurally wrong payload (length, version byte, compression
    /// flag) is [`Error::MalformedWif`].
    pub fn from_wif(wif: &str) -> Result<(Self, Network)> {
        let (version, payload) = base58::decode(wif)?;
        let network =
            Network::from_wif_version(version).ok_or(Error::MalformedWif("unknown version byte"))?;

        let (key_bytes, compressed) = match payload.len() {
            32 => (&payload[..], false),
            33 => {
                if payload[32] != 0x01 {
                    return Err(Error::MalformedWif("invalid compression flag"));
                }
                (&payload[..32], true)
            }
            _ => return Err(Error::MalformedWif("payload must be 32 or 33 bytes")),
        };

        let inner = SigningKey::from_slice(key_bytes).map_err(|_| Error::InvalidKey)?;
        Ok((Self { inner, compressed }, network))
    }

    /// Export as WIF (Wallet Import Format).
    ///
    /// Exact inverse of [`PrivateKey::from_wif`] for both compressed
    /// states.
    #[must_use]
    pub fn to_wif(&self, network: Network) -> String {
        let mut payload = [0u8; 33];
        payload[..32].copy_from_slice(&self.to_bytes());
        let len = if self.compressed {
            payload[32] = 0x01;
            33
        } else {
            32
        };

        let wif = base58::encode(network.wif_version(), &payload[..len]);
        payload.zeroize();
        wif
    }
}

impl core::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "PrivateKey([REDACTED], compressed={})", self.compressed)
    }
}

impl core::str::FromStr for PrivateKey {
    type Err = Error;

    /// Parse from WIF or a 64-character hex string.
    ///
    /// The network carried by a WIF is discarded here; use
    /// [`PrivateKey::from_wif`] when it matters.
    fn from_str(s: &str) -> Result<Self> {
        if (51..=52).contains(&s.len()) {
            if let Ok((key, _)) = Self::from_wif(s) {
                return Ok(key);
            }
        }

        let s = s.strip_prefix("0x").unwrap_or(s);
        if s.len() == 64 {
            let bytes = hex::decode(s).map_err(|_| Error::InvalidKey)?;
            return Self::from_bytes(&bytes);
        }

        Err(Error::InvalidKey)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    const KEY_BYTES: [u8; 32] =
        hex!("0c28fca386c7a227600b2fe50b7cae11ec86d3bf1fbe471be89827e19d72aa1d");

    #[test]
    fn test_wif_export_uncompressed() {
        let mut key = PrivateKey::from_bytes(&KEY_BYTES).unwrap();
        key.set_compressed(false);
        assert_eq!(
            key.to_wif(Network::Mainnet),
            "5HueCGU8rMjxEXxiPuD5BDku4MkFqeZyd4dZ1jvhTVqvbTLvyTJ"
        );
    }

    #[test]
    fn test_wif_export_compressed() {
        let key = PrivateKey::from_bytes(&KEY_BYTES).unwrap();
        assert_eq!(
            key.to_wif(Network::Mainnet),
            "KwdMAjGmerYanjeui5SHS7JkmpZvVipYvB2LJGU1ZxJwYvP98617"
        );
    }

    #[test]
    fn test_wif_import_uncompressed() {
        let (key, network) =
            PrivateKey::from_wif("5HueCGU8rMjxEXxiPuD5BDku4MkFqeZyd4dZ1jvhTVqvbTLvyTJ").unwrap();
        assert_eq!(network, Network::Mainnet);
        assert!(!key.is_compressed());
        assert_eq!(key.to_bytes(), KEY_BYTES);
    }

    #[test]
    fn test_wif_import_compressed() {
        let (key, network) =
            PrivateKey::from_wif("KwdMAjGmerYanjeui5SHS7JkmpZvVipYvB2LJGU1ZxJwYvP98617").unwrap();
        assert_eq!(network, Network::Mainnet);
        assert!(key.is_compressed());
        assert_eq!(key.to_bytes(), KEY_BYTES);
    }

    #[test]
    fn test_wif_roundtrip_both_states() {
        for compressed in [false, true] {
            for network in [Network::Mainnet, Network::Testnet] {
                let mut key = PrivateKey::from_bytes(&KEY_BYTES).unwrap();
                key.set_compressed(compressed);
                let (recovered, recovered_network) =
                    PrivateKey::from_wif(&key.to_wif(network)).unwrap();
                assert_eq!(recovered_network, network);
                assert_eq!(recovered.is_compressed(), compressed);
                assert_eq!(recovered.to_bytes(), KEY_BYTES);
            }
        }
    }

    #[test]
    fn test_wif_checksum_mismatch() {
        assert!(matches!(
            PrivateKey::from_wif("5HueCGU8rMjxEXxiPuD5BDku4MkFqeZyd4dZ1jvhTVqvbTLvyTK"),
            Err(Error::ChecksumMismatch)
        ));
    }

    #[test]
    fn test_wif_wrong_version_byte() {
        // A P2PKH address is valid Base58Check but not a WIF.
        assert!(matches!(
            PrivateKey::from_wif("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa"),
            Err(Error::MalformedWif(_))
        ));
    }

    #[test]
    fn test_from_bytes_rejects_out_of_range() {
        assert!(matches!(
            PrivateKey::from_bytes(&[0u8; 32]),
            Err(Error::InvalidKey)
        ));
        // 2^256 - 1 is above the curve order.
        assert!(matches!(
            PrivateKey::from_bytes(&[0xff; 32]),
            Err(Error::InvalidKey)
        ));
        assert!(matches!(
            PrivateKey::from_bytes(&[1u8; 31]),
            Err(Error::WrongLength {
                expected: 32,
                actual: 31
            })
        ));
    }

    #[test]
    fn test_public_key_derivation_is_deterministic() {
        let key = PrivateKey::from_bytes(&KEY_BYTES).unwrap();
        assert_eq!(
            key.public_key().to_bytes(),
            key.public_key().to_bytes()
        );
    }

    #[test]
    fn test_from_str_wif_and_hex_agree() {
        let from_wif: PrivateKey = "KwdMAjGmerYanjeui5SHS7JkmpZvVipYvB2LJGU1ZxJwYvP98617"
            .parse()
            .unwrap();
        let from_hex: PrivateKey =
            "0c28fca386c7a227600b2fe50b7cae11ec86d3bf1fbe471be89827e19d72aa1d"
                .parse()
                .unwrap();
        assert_eq!(from_wif.to_bytes(), from_hex.to_bytes());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let key = PrivateKey::from_bytes(&KEY_BYTES).unwrap();
        let debug = format!("{key:?}");
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("0c28fca3"));
    }

    #[test]
    fn test_random_keys_differ() {
        let mut rng = rand::thread_rng();
        let a = PrivateKey::random(&mut rng);
        let b = PrivateKey::random(&mut rng);
        assert_ne!(a.to_bytes(), b.to_bytes());
        assert!(a.is_compressed());
    }
}
