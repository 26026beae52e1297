//! Bech32 and Bech32m encoding for segwit addresses (BIP-173, BIP-350).
//!
//! Implemented directly rather than through a codec crate so every
//! failure keeps its own kind: a missing separator, a bad charset
//! character, a checksum mismatch, and bad padding are different bugs
//! on the caller's side and must stay distinguishable.
//!
//! Input is case-insensitive, but mixed case is rejected outright
//! (uppercasing part of a string would otherwise leave the checksum
//! ambiguous). Output is always lowercase.

use crate::error::{Error, Result};

/// Bech32 data charset, indexed by 5-bit value.
const CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// BCH generator coefficients for the polymod checksum.
const GENERATOR: [u32; 5] = [0x3b6a57b2, 0x26508e6d, 0x1ea119fa, 0x3d4233dd, 0x2a1462b3];

/// Residue the polymod must produce for a valid Bech32m string.
const BECH32M_CONST: u32 = 0x2bc830a3;

/// Checksum flavor: Bech32 for witness v0, Bech32m for v1 and up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Original BIP-173 checksum.
    Bech32,
    /// BIP-350 checksum for witness versions 1..=16.
    Bech32m,
}

impl Variant {
    const fn residue(self) -> u32 {
        match self {
            Self::Bech32 => 1,
            Self::Bech32m => BECH32M_CONST,
        }
    }

    const fn for_witness_version(version: u8) -> Self {
        if version == 0 {
            Self::Bech32
        } else {
            Self::Bech32m
        }
    }
}

fn polymod(values: &[u8]) -> u32 {
    let mut chk: u32 = 1;
    for &value in values {
        let top = chk >> 25;
        chk = ((chk & 0x1ff_ffff) << 5) ^ u32::from(value);
        for (i, &coeff) in GENERATOR.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                chk ^= coeff;
            }
        }
    }
    chk
}

/// Expand the human-readable part into the values covered by the checksum.
fn hrp_expand(hrp: &str) -> Vec<u8> {
    let mut values = Vec::with_capacity(hrp.len() * 2 + 1);
    for b in hrp.bytes() {
        values.push(b >> 5);
    }
    values.push(0);
    for b in hrp.bytes() {
        values.push(b & 0x1f);
    }
    values
}

fn create_checksum(hrp: &str, data: &[u8], variant: Variant) -> [u8; 6] {
    let mut values = hrp_expand(hrp);
    values.extend_from_slice(data);
    values.extend_from_slice(&[0; 6]);

    let residue = polymod(&values) ^ variant.residue();
    let mut checksum = [0u8; 6];
    for (i, slot) in checksum.iter_mut().enumerate() {
        *slot = ((residue >> (5 * (5 - i))) & 0x1f) as u8;
    }
    checksum
}

/// Regroup bits; `pad` on for 8→5 (encode), off for 5→8 (decode).
///
/// With padding off, leftover bits must be zero and fewer than a full
/// input group, otherwise the string was not canonically encoded.
fn convert_bits(data: &[u8], from_bits: u32, to_bits: u32, pad: bool) -> Result<Vec<u8>> {
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let max_value = (1u32 << to_bits) - 1;
    let mut out = Vec::with_capacity(data.len() * from_bits as usize / to_bits as usize + 1);

    for &value in data {
        if u32::from(value) >> from_bits != 0 {
            return Err(Error::Padding);
        }
        acc = (acc << from_bits) | u32::from(value);
        bits += from_bits;
        while bits >= to_bits {
            bits -= to_bits;
            out.push(((acc >> bits) & max_value) as u8);
        }
    }

    if pad {
        if bits > 0 {
            out.push(((acc << (to_bits - bits)) & max_value) as u8);
        }
    } else if bits >= from_bits || ((acc << (to_bits - bits)) & max_value) != 0 {
        return Err(Error::Padding);
    }

    Ok(out)
}

fn check_program_length(version: u8, length: usize) -> Result<()> {
    let ok = match version {
        0 => length == 20 || length == 32,
        _ => (2..=40).contains(&length),
    };
    if ok {
        Ok(())
    } else {
        Err(Error::InvalidProgramLength(length))
    }
}

/// Encode a witness version and program as a segwit address string.
///
/// # Errors
///
/// Returns [`Error::InvalidHrp`] for an empty or out-of-range
/// human-readable part, [`Error::InvalidWitnessVersion`] for versions
/// above 16, and [`Error::InvalidProgramLength`] when the program
/// length is not allowed for the version (v0 requires 20 or 32 bytes).
pub fn encode(hrp: &str, witness_version: u8, program: &[u8]) -> Result<String> {
    if witness_version > 16 {
        return Err(Error::InvalidWitnessVersion(witness_version));
    }
    check_program_length(witness_version, program.len())?;
    if hrp.is_empty() || hrp.len() > 83 || !hrp.bytes().all(|b| (33..=126).contains(&b)) {
        return Err(Error::InvalidHrp);
    }
    // Canonical output is lowercase; an uppercase hrp would smuggle
    // case into the checksum.
    if hrp.bytes().any(|b| b.is_ascii_uppercase()) {
        return Err(Error::InvalidHrp);
    }

    let mut data = Vec::with_capacity(1 + (program.len() * 8).div_ceil(5));
    data.push(witness_version);
    data.extend(convert_bits(program, 8, 5, true)?);

    let variant = Variant::for_witness_version(witness_version);
    let checksum = create_checksum(hrp, &data, variant);

    let mut encoded = String::with_capacity(hrp.len() + 1 + data.len() + 6);
    encoded.push_str(hrp);
    encoded.push('1');
    for value in data.iter().chain(checksum.iter()) {
        encoded.push(CHARSET[*value as usize] as char);
    }
    Ok(encoded)
}

/// Decode a segwit address string into (hrp, witness version, program).
///
/// # Errors
///
/// Returns [`Error::MixedCase`] for mixed-case input,
/// [`Error::NoSeparator`] when the last `1` is absent or leaves no room
/// for the hrp or checksum, [`Error::InvalidCharacter`] for charset
/// violations, [`Error::ChecksumMismatch`] when the polymod residue is
/// wrong or the checksum flavor does not match the witness version,
/// [`Error::Padding`] for non-canonical bit padding, and
/// [`Error::InvalidProgramLength`] for BIP-141 length violations.
pub fn decode(encoded: &str) -> Result<(String, u8, Vec<u8>)> {
    let has_lower = encoded.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = encoded.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper {
        return Err(Error::MixedCase);
    }
    let encoded = encoded.to_ascii_lowercase();

    let sep = encoded.rfind('1').ok_or(Error::NoSeparator)?;
    // The hrp must be non-empty and the data part must at least hold
    // the 6-character checksum.
    if sep == 0 || sep + 7 > encoded.len() {
        return Err(Error::NoSeparator);
    }

    let hrp = &encoded[..sep];
    let data_part = &encoded[sep + 1..];

    for (i, b) in hrp.bytes().enumerate() {
        if !(33..=126).contains(&b) {
            return Err(Error::InvalidCharacter {
                character: b as char,
                index: i,
            });
        }
    }

    let mut data = Vec::with_capacity(data_part.len());
    for (i, c) in data_part.chars().enumerate() {
        let value = CHARSET
            .iter()
            .position(|&x| x == c as u8)
            .ok_or(Error::InvalidCharacter {
                character: c,
                index: sep + 1 + i,
            })?;
        data.push(value as u8);
    }

    let mut covered = hrp_expand(hrp);
    covered.extend_from_slice(&data);
    let variant = match polymod(&covered) {
        1 => Variant::Bech32,
        BECH32M_CONST => Variant::Bech32m,
        _ => return Err(Error::ChecksumMismatch),
    };

    data.truncate(data.len() - 6);
    let Some((&version, rest)) = data.split_first() else {
        return Err(Error::TooShort {
            minimum: 1,
            actual: 0,
        });
    };
    if version > 16 {
        return Err(Error::InvalidWitnessVersion(version));
    }
    // BIP-350: v0 must carry a Bech32 checksum, v1+ a Bech32m one.
    if variant != Variant::for_witness_version(version) {
        return Err(Error::ChecksumMismatch);
    }

    let program = convert_bits(rest, 5, 8, false)?;
    check_program_length(version, program.len())?;

    Ok((hrp.to_string(), version, program))
}
