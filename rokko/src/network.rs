//! Bitcoin network selection and its encoding prefixes.
//!
//! The network is always passed explicitly into derivation and
//! validation; nothing in this crate holds it as ambient state.

use core::fmt;
use core::str::FromStr;

/// Supported Bitcoin networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Network {
    /// Bitcoin mainnet.
    #[default]
    Mainnet,
    /// Bitcoin testnet.
    Testnet,
}

impl Network {
    /// Base58Check version byte for P2PKH addresses.
    #[inline]
    #[must_use]
    pub const fn p2pkh_version(self) -> u8 {
        match self {
            Self::Mainnet => 0x00,
            Self::Testnet => 0x6f,
        }
    }

    /// Base58Check version byte for P2SH addresses.
    #[inline]
    #[must_use]
    pub const fn p2sh_version(self) -> u8 {
        match self {
            Self::Mainnet => 0x05,
            Self::Testnet => 0xc4,
        }
    }

    /// WIF version byte for private key export.
    #[inline]
    #[must_use]
    pub const fn wif_version(self) -> u8 {
        match self {
            Self::Mainnet => 0x80,
            Self::Testnet => 0xef,
        }
    }

    /// Bech32 human-readable part for segwit addresses.
    #[inline]
    #[must_use]
    pub const fn hrp(self) -> &'static str {
        match self {
            Self::Mainnet => "bc",
            Self::Testnet => "tb",
        }
    }

    /// Look up the network for a base58 address version byte.
    #[must_use]
    pub const fn from_address_version(version: u8) -> Option<Self> {
        match version {
            0x00 | 0x05 => Some(Self::Mainnet),
            0x6f | 0xc4 => Some(Self::Testnet),
            _ => None,
        }
    }

    /// Look up the network for a WIF version byte.
    #[must_use]
    pub const fn from_wif_version(version: u8) -> Option<Self> {
        match version {
            0x80 => Some(Self::Mainnet),
            0xef => Some(Self::Testnet),
            _ => None,
        }
    }

    /// Look up the network for a bech32 human-readable part.
    #[must_use]
    pub fn from_hrp(hrp: &str) -> Option<Self> {
        match hrp {
            "bc" => Some(Self::Mainnet),
            "tb" => Some(Self::Testnet),
            _ => None,
        }
    }

    /// Get network name as string.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Testnet => "testnet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when parsing an invalid network string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseNetworkError;

impl fmt::Display for ParseNetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid network, expected: mainnet or testnet")
    }
}

impl std::error::Error for ParseNetworkError {}

impl FromStr for Network {
    type Err = ParseNetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mainnet" | "bitcoin" | "main" => Ok(Self::Mainnet),
            "testnet" | "test" => Ok(Self::Testnet),
            _ => Err(ParseNetworkError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_bytes() {
        assert_eq!(Network::Mainnet.p2pkh_version(), 0x00);
        assert_eq!(Network::Mainnet.p2sh_version(), 0x05);
        assert_eq!(Network::Mainnet.wif_version(), 0x80);
        assert_eq!(Network::Testnet.p2pkh_version(), 0x6f);
        assert_eq!(Network::Testnet.p2sh_version(), 0xc4);
        assert_eq!(Network::Testnet.wif_version(), 0xef);
    }

    #[test]
    fn test_hrp_roundtrip() {
        for network in [Network::Mainnet, Network::Testnet] {
            assert_eq!(Network::from_hrp(network.hrp()), Some(network));
        }
        assert_eq!(Network::from_hrp("bcrt"), None);
    }

    #[test]
    fn test_version_lookups() {
        assert_eq!(Network::from_address_version(0x00), Some(Network::Mainnet));
        assert_eq!(Network::from_address_version(0xc4), Some(Network::Testnet));
        assert_eq!(Network::from_address_version(0x42), None);
        assert_eq!(Network::from_wif_version(0x80), Some(Network::Mainnet));
        assert_eq!(Network::from_wif_version(0x00), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("mainnet".parse::<Network>().unwrap(), Network::Mainnet);
        assert_eq!("TESTNET".parse::<Network>().unwrap(), Network::Testnet);
        assert!("regtest".parse::<Network>().is_err());
    }
}
