//! Common types for address operations.

use core::fmt;
use core::str::FromStr;

use crate::Error;

/// The three supported address encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AddressType {
    /// Pay to Public Key Hash (legacy Base58Check) - starts with 1 or m/n.
    Legacy,
    /// P2SH-wrapped P2WPKH (`SegWit` compatible) - starts with 3 or 2.
    SegwitWrapped,
    /// Pay to Witness Public Key Hash (native `SegWit`, bech32) - starts
    /// with bc1q or tb1q.
    #[default]
    NativeSegwit,
}

impl AddressType {
    /// Get address type name.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Legacy => "P2PKH (Legacy)",
            Self::SegwitWrapped => "P2SH-P2WPKH (SegWit)",
            Self::NativeSegwit => "P2WPKH (Native SegWit)",
        }
    }
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for AddressType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "legacy" | "p2pkh" => Ok(Self::Legacy),
            "segwit" | "p2sh" | "p2sh-p2wpkh" | "nested-segwit" => Ok(Self::SegwitWrapped),
            "native-segwit" | "p2wpkh" | "bech32" => Ok(Self::NativeSegwit),
            _ => Err(Error::UnsupportedAddressType),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_aliases() {
        assert_eq!("legacy".parse::<AddressType>().unwrap(), AddressType::Legacy);
        assert_eq!("p2pkh".parse::<AddressType>().unwrap(), AddressType::Legacy);
        assert_eq!(
            "p2sh-p2wpkh".parse::<AddressType>().unwrap(),
            AddressType::SegwitWrapped
        );
        assert_eq!(
            "segwit".parse::<AddressType>().unwrap(),
            AddressType::SegwitWrapped
        );
        assert_eq!(
            "bech32".parse::<AddressType>().unwrap(),
            AddressType::NativeSegwit
        );
        assert_eq!(
            "P2WPKH".parse::<AddressType>().unwrap(),
            AddressType::NativeSegwit
        );
    }

    #[test]
    fn test_from_str_unsupported() {
        assert_eq!(
            "p2tr".parse::<AddressType>(),
            Err(Error::UnsupportedAddressType)
        );
        assert!("".parse::<AddressType>().is_err());
    }

    #[test]
    fn test_default_is_native_segwit() {
        assert_eq!(AddressType::default(), AddressType::NativeSegwit);
    }
}
