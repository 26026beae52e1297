//! # Rokko - Bitcoin Key and Address Toolkit
//!
//! Key generation on secp256k1, WIF import/export, Base58Check and
//! Bech32/Bech32m codecs, and derivation and validation of legacy,
//! wrapped-segwit, and native-segwit addresses.
//!
//! ## Usage
//!
//! ```
//! use rokko::{AddressType, KeyPair, Network};
//!
//! let keypair = KeyPair::generate(&mut rand::thread_rng());
//!
//! let address = keypair
//!     .address(AddressType::NativeSegwit, Network::Mainnet)
//!     .unwrap();
//! assert!(address.to_string().starts_with("bc1q"));
//!
//! let wif = keypair.private_key().to_wif(Network::Mainnet);
//! assert!(rokko::is_valid_address(&address.to_string()));
//! # let _ = wif;
//! ```
//!
//! Private key material is zeroized on drop and redacted from `Debug`
//! output.

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::doc_markdown,
    clippy::missing_const_for_fn,
    clippy::use_self,
    clippy::uninlined_format_args,
    clippy::return_self_not_must_use,
    clippy::similar_names
)]

pub mod address;
pub mod base58;
pub mod bech32;
pub mod client;
pub mod error;
pub mod hash;
pub mod keypair;
pub mod network;
pub mod private_key;
pub mod public_key;
pub mod types;
pub mod validator;

pub use address::{Address, Payload};
pub use client::{AddressBalance, BlockchainQuery, MonitorError, TxRecord, WalletMonitor};
pub use error::{Error, Result};
pub use keypair::KeyPair;
pub use network::{Network, ParseNetworkError};
pub use private_key::PrivateKey;
pub use public_key::PublicKey;
pub use types::AddressType;
pub use validator::{classify, is_valid_address, is_valid_private_key, validate};

/// Re-export of the RNG traits accepted by key generation, so callers
/// need not depend on a matching `rand_core` themselves.
pub use k256::elliptic_curve::rand_core;
