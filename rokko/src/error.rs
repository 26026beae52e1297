//! Error types for key and address operations.

use core::fmt;

/// Errors that can occur during key, codec, or address operations.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Private key scalar is zero, not 32 bytes, or not below the curve
    /// order; or a public key is not a valid secp256k1 point.
    InvalidKey,
    /// WIF string has a valid checksum but an invalid structure
    /// (payload length, version byte, or compression flag).
    MalformedWif(&'static str),
    /// A character outside the codec alphabet.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the input.
        index: usize,
    },
    /// Recomputed checksum disagrees with the encoded one.
    ChecksumMismatch,
    /// Decoded data is shorter than the format minimum.
    TooShort {
        /// Minimum number of bytes the format requires.
        minimum: usize,
        /// Number of bytes actually decoded.
        actual: usize,
    },
    /// A payload has the wrong byte length.
    WrongLength {
        /// Expected number of bytes.
        expected: usize,
        /// Number of bytes actually given.
        actual: usize,
    },
    /// Bech32 string has no `1` separator, or the separator leaves no
    /// room for the human-readable part or the checksum.
    NoSeparator,
    /// Bech32 string mixes upper- and lowercase characters.
    MixedCase,
    /// Non-zero bits left over when regrouping bech32 data to bytes.
    Padding,
    /// Human-readable part is empty or contains invalid characters.
    InvalidHrp,
    /// Witness version outside the 0..=16 range.
    InvalidWitnessVersion(u8),
    /// Witness program length not allowed for its witness version.
    InvalidProgramLength(usize),
    /// Segwit addresses cannot be derived from an uncompressed public key.
    UncompressedKey,
    /// Address type string or argument is not one of the supported types.
    UnsupportedAddressType,
    /// String does not look like any known address family.
    UnrecognizedAddressFormat,
    /// Base58Check version byte is not a known address version.
    UnknownVersionByte(u8),
    /// Bech32 human-readable part is not a known network prefix.
    UnknownHrp(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKey => write!(f, "invalid secp256k1 key"),
            Self::MalformedWif(detail) => write!(f, "malformed WIF: {detail}"),
            Self::InvalidCharacter { character, index } => {
                write!(f, "invalid character {character:?} at index {index}")
            }
            Self::ChecksumMismatch => write!(f, "checksum mismatch"),
            Self::TooShort { minimum, actual } => {
                write!(f, "decoded data too short: {actual} bytes, need at least {minimum}")
            }
            Self::WrongLength { expected, actual } => {
                write!(f, "wrong length: expected {expected} bytes, got {actual}")
            }
            Self::NoSeparator => write!(f, "bech32 separator '1' missing or misplaced"),
            Self::MixedCase => write!(f, "bech32 string mixes upper- and lowercase"),
            Self::Padding => write!(f, "non-zero padding bits in bech32 data"),
            Self::InvalidHrp => write!(f, "invalid bech32 human-readable part"),
            Self::InvalidWitnessVersion(v) => write!(f, "invalid witness version {v}"),
            Self::InvalidProgramLength(n) => {
                write!(f, "invalid witness program length {n}")
            }
            Self::UncompressedKey => {
                write!(f, "segwit addresses require a compressed public key")
            }
            Self::UnsupportedAddressType => write!(
                f,
                "unsupported address type, expected: legacy, segwit, or native-segwit"
            ),
            Self::UnrecognizedAddressFormat => write!(f, "unrecognized address format"),
            Self::UnknownVersionByte(v) => write!(f, "unknown address version byte {v:#04x}"),
            Self::UnknownHrp(hrp) => write!(f, "unknown bech32 prefix \"{hrp}\""),
        }
    }
}

impl std::error::Error for Error {}

/// A convenient Result type alias for rokko operations.
pub type Result<T> = core::result::Result<T, Error>;
