//! An immutable private/public key pairing.

use k256::elliptic_curve::rand_core::{CryptoRng, RngCore};

use crate::address::Address;
use crate::error::Result;
use crate::network::Network;
use crate::private_key::PrivateKey;
use crate::public_key::PublicKey;
use crate::types::AddressType;

/// A private key together with its derived public key.
///
/// The pairing is fixed at construction: the public key is always the
/// one derived from the private key, and the compression preference is
/// shared by both.
pub struct KeyPair {
    private: PrivateKey,
    public: PublicKey,
}

impl KeyPair {
    /// Generate a fresh key pair from a cryptographically secure rng.
    ///
    /// The entropy draw is scoped to this call; nothing is cached or
    /// reused across generations.
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        Self::from_private_key(PrivateKey::random(rng))
    }

    /// Pair an existing private key with its derived public key.
    #[must_use]
    pub fn from_private_key(private: PrivateKey) -> Self {
        let public = private.public_key();
        Self { private, public }
    }

    /// The private half.
    #[must_use]
    pub const fn private_key(&self) -> &PrivateKey {
        &self.private
    }

    /// The public half.
    #[must_use]
    pub const fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// Whether the pair serializes its public key compressed.
    #[must_use]
    pub const fn is_compressed(&self) -> bool {
        self.private.is_compressed()
    }

    /// Derive an address of the given type for the given network.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UncompressedKey`] for segwit types when
    /// the pair is uncompressed.
    pub fn address(&self, address_type: AddressType, network: Network) -> Result<Address> {
        Address::from_public_key(&self.public, address_type, network)
    }
}

impl core::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KeyPair")
            .field("private", &self.private)
            .field("public", &self.public.to_hex())
            .finish()
    }
}
