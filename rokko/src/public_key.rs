//! secp256k1 public keys in SEC1 compressed/uncompressed form.

use k256::ecdsa::{SigningKey, VerifyingKey};

use crate::error::{Error, Result};
use crate::hash::hash160;

/// A secp256k1 public key.
///
/// Holds a valid curve point plus the serialization preference it was
/// created with; the preference matters because it changes the
/// `hash160` and therefore every derived address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    inner: VerifyingKey,
    compressed: bool,
}

impl PublicKey {
    pub(crate) fn from_signing_key(key: &SigningKey, compressed: bool) -> Self {
        Self {
            inner: *key.verifying_key(),
            compressed,
        }
    }

    /// Create from SEC1 bytes: 33 bytes compressed (`0x02`/`0x03`
    /// prefix) or 65 bytes uncompressed (`0x04` prefix).
    ///
    /// # Errors
    ///
    /// Returns [`Error::WrongLength`] for any other length and
    /// [`Error::InvalidKey`] when the bytes are not a point on the curve.
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self> {
        let compressed = match bytes.len() {
            33 => true,
            65 => false,
            n => {
                return Err(Error::WrongLength {
                    expected: 33,
                    actual: n,
                })
            }
        };
        let inner = VerifyingKey::from_sec1_bytes(bytes).map_err(|_| Error::InvalidKey)?;
        Ok(Self { inner, compressed })
    }

    /// Check whether this key serializes compressed.
    #[must_use]
    pub const fn is_compressed(&self) -> bool {
        self.compressed
    }

    /// Serialize to the 33-byte compressed form.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; 33] {
        let point = self.inner.to_encoded_point(true);
        let mut out = [0u8; 33];
        out.copy_from_slice(point.as_bytes());
        out
    }

    /// Serialize to the 65-byte uncompressed form.
    #[must_use]
    pub fn to_uncompressed_bytes(&self) -> [u8; 65] {
        let point = self.inner.to_encoded_point(false);
        let mut out = [0u8; 65];
        out.copy_from_slice(point.as_bytes());
        out
    }

    /// Serialize per the key's own compression preference.
    #[must_use]
    pub fn to_sec1(&self) -> Vec<u8> {
        if self.compressed {
            self.to_bytes().to_vec()
        } else {
            self.to_uncompressed_bytes().to_vec()
        }
    }

    /// Hex form of the key's preferred serialization.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_sec1())
    }

    /// Hash160 of the key's preferred serialization.
    ///
    /// Compressed and uncompressed forms of the same point hash to
    /// different values, hence different addresses.
    #[must_use]
    pub fn hash160(&self) -> [u8; 20] {
        hash160(&self.to_sec1())
    }
}

impl core::str::FromStr for PublicKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let bytes = hex::decode(s).map_err(|_| Error::InvalidKey)?;
        Self::from_sec1_bytes(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PrivateKey;
    use hex_literal::hex;

    // The generator point, i.e. the public key of scalar 1.
    const G_COMPRESSED: [u8; 33] =
        hex!("0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798");

    fn scalar_one_key() -> PrivateKey {
        let mut bytes = [0u8; 32];
        bytes[31] = 1;
        PrivateKey::from_bytes(&bytes).unwrap()
    }

    #[test]
    fn test_derivation_matches_known_point() {
        assert_eq!(scalar_one_key().public_key().to_bytes(), G_COMPRESSED);
    }

    #[test]
    fn test_uncompressed_form() {
        let uncompressed = scalar_one_key().public_key().to_uncompressed_bytes();
        assert_eq!(uncompressed[0], 0x04);
        assert_eq!(uncompressed[1..33], G_COMPRESSED[1..]);
    }

    #[test]
    fn test_sec1_roundtrip() {
        let public = scalar_one_key().public_key();
        let recovered = PublicKey::from_sec1_bytes(&public.to_bytes()).unwrap();
        assert!(recovered.is_compressed());
        assert_eq!(recovered.to_bytes(), public.to_bytes());

        let recovered = PublicKey::from_sec1_bytes(&public.to_uncompressed_bytes()).unwrap();
        assert!(!recovered.is_compressed());
    }

    #[test]
    fn test_rejects_bad_lengths_and_points() {
        assert!(matches!(
            PublicKey::from_sec1_bytes(&[0x02; 34]),
            Err(Error::WrongLength { .. })
        ));
        // Right length, but x is not on the curve.
        let mut bytes = [0u8; 33];
        bytes[0] = 0x02;
        assert!(matches!(
            PublicKey::from_sec1_bytes(&bytes),
            Err(Error::InvalidKey)
        ));
    }

    #[test]
    fn test_hash160_depends_on_compression() {
        let compressed = scalar_one_key().public_key();
        assert_eq!(
            compressed.hash160(),
            hex!("751e76e8199196d454941c45d1b3a323f1433bd6")
        );

        let mut key = scalar_one_key();
        key.set_compressed(false);
        assert_ne!(key.public_key().hash160(), compressed.hash160());
    }
}
