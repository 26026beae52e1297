//! Blockchain query interface and the address-watching wrapper.
//!
//! The library never talks to the network itself; callers supply an
//! implementation of [`BlockchainQuery`] and [`WalletMonitor`] layers
//! address validation on top of it, so a backend only ever sees
//! addresses that already decoded and checksum-verified.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::validator;

/// Confirmed and pending balance of a single address, in satoshis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressBalance {
    /// The address the balance belongs to, in canonical encoding.
    pub address: String,
    /// Value of confirmed outputs.
    pub confirmed: u64,
    /// Value of outputs still in the mempool.
    pub unconfirmed: u64,
    /// Sum of the two.
    pub total: u64,
}

/// One transaction touching a watched address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxRecord {
    /// Transaction id, hex, big-endian display order.
    pub txid: String,
    /// Net effect on the address in satoshis; negative for spends.
    pub amount: i64,
    /// Number of confirmations; zero while unconfirmed.
    pub confirmations: u32,
}

/// A backend capable of answering address-level chain queries.
///
/// Implementations decide transport, authentication, and retries; the
/// trait only fixes the shape of the questions.
pub trait BlockchainQuery {
    /// Transport or backend failure type.
    type Error: std::error::Error;

    /// Fetch the current balance of an address.
    fn fetch_address_balance(&self, address: &Address) -> Result<AddressBalance, Self::Error>;

    /// Fetch transactions touching an address, newest first.
    fn fetch_address_transactions(
        &self,
        address: &Address,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<TxRecord>, Self::Error>;

    /// Register a callback URL to be notified of new activity on an
    /// address. Returns a backend-assigned subscription id.
    fn register_address_webhook(
        &self,
        address: &Address,
        callback_url: &str,
    ) -> Result<String, Self::Error>;
}

/// Failure of a monitored query: either the address itself was bad, or
/// the backend failed after validation passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonitorError<E> {
    /// The address string did not validate; the backend was never called.
    InvalidAddress(crate::error::Error),
    /// The backend returned an error.
    Client(E),
}

impl<E: fmt::Display> fmt::Display for MonitorError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAddress(e) => write!(f, "invalid address: {e}"),
            Self::Client(e) => write!(f, "client error: {e}"),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for MonitorError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidAddress(e) => Some(e),
            Self::Client(e) => Some(e),
        }
    }
}

/// Validates address strings before handing them to a query backend.
#[derive(Debug, Clone)]
pub struct WalletMonitor<C> {
    client: C,
}

impl<C: BlockchainQuery> WalletMonitor<C> {
    /// Wrap a query backend.
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Borrow the underlying backend.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Current balance of `address`.
    ///
    /// # Errors
    ///
    /// [`MonitorError::InvalidAddress`] if the string does not decode,
    /// [`MonitorError::Client`] if the backend fails.
    pub fn balance(&self, address: &str) -> Result<AddressBalance, MonitorError<C::Error>> {
        let address = validator::validate(address).map_err(MonitorError::InvalidAddress)?;
        self.client
            .fetch_address_balance(&address)
            .map_err(MonitorError::Client)
    }

    /// Transactions touching `address`, newest first.
    ///
    /// # Errors
    ///
    /// Same contract as [`WalletMonitor::balance`].
    pub fn transaction_history(
        &self,
        address: &str,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<TxRecord>, MonitorError<C::Error>> {
        let address = validator::validate(address).map_err(MonitorError::InvalidAddress)?;
        self.client
            .fetch_address_transactions(&address, limit, offset)
            .map_err(MonitorError::Client)
    }

    /// Subscribe `callback_url` to activity on `address`.
    ///
    /// # Errors
    ///
    /// Same contract as [`WalletMonitor::balance`].
    pub fn watch_address(
        &self,
        address: &str,
        callback_url: &str,
    ) -> Result<String, MonitorError<C::Error>> {
        let address = validator::validate(address).map_err(MonitorError::InvalidAddress)?;
        self.client
            .register_address_webhook(&address, callback_url)
            .map_err(MonitorError::Client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::cell::Cell;

    /// In-memory backend that records how often it was consulted.
    struct FakeClient {
        calls: Cell<u32>,
    }

    impl FakeClient {
        fn new() -> Self {
            Self { calls: Cell::new(0) }
        }

        fn bump(&self) {
            self.calls.set(self.calls.get() + 1);
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct FakeError;

    impl fmt::Display for FakeError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("fake backend error")
        }
    }

    impl std::error::Error for FakeError {}

    impl BlockchainQuery for FakeClient {
        type Error = FakeError;

        fn fetch_address_balance(&self, address: &Address) -> Result<AddressBalance, FakeError> {
            self.bump();
            Ok(AddressBalance {
                address: address.to_string(),
                confirmed: 50_000,
                unconfirmed: 1_000,
                total: 51_000,
            })
        }

        fn fetch_address_transactions(
            &self,
            _address: &Address,
            limit: usize,
            _offset: usize,
        ) -> Result<Vec<TxRecord>, FakeError> {
            self.bump();
            let record = TxRecord {
                txid: "4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b".into(),
                amount: 5_000_000_000,
                confirmations: 101,
            };
            Ok(vec![record; limit.min(1)])
        }

        fn register_address_webhook(
            &self,
            _address: &Address,
            _callback_url: &str,
        ) -> Result<String, FakeError> {
            self.bump();
            Ok(String::from("sub-1"))
        }
    }

    const GOOD: &str = "1BoatSLRHtKNngkdXEeobR76b53LETtpyT";
    const BAD: &str = "1BoatSLRHtKNngkdXEeobR76b53LETtpyX";

    #[test]
    fn test_balance_passes_canonical_address_through() {
        let monitor = WalletMonitor::new(FakeClient::new());
        let balance = monitor.balance(GOOD).unwrap();
        assert_eq!(balance.address, GOOD);
        assert_eq!(balance.total, 51_000);
        assert_eq!(monitor.client().calls.get(), 1);
    }

    #[test]
    fn test_invalid_address_never_reaches_backend() {
        let monitor = WalletMonitor::new(FakeClient::new());

        let err = monitor.balance(BAD).unwrap_err();
        assert_eq!(err, MonitorError::InvalidAddress(Error::ChecksumMismatch));

        let err = monitor.transaction_history("", 10, 0).unwrap_err();
        assert_eq!(
            err,
            MonitorError::InvalidAddress(Error::UnrecognizedAddressFormat)
        );

        let err = monitor
            .watch_address(BAD, "https://example.com/hook")
            .unwrap_err();
        assert_eq!(err, MonitorError::InvalidAddress(Error::ChecksumMismatch));

        assert_eq!(monitor.client().calls.get(), 0);
    }

    #[test]
    fn test_transaction_history_and_watch() {
        let monitor = WalletMonitor::new(FakeClient::new());

        let history = monitor.transaction_history(GOOD, 10, 0).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].confirmations, 101);

        let id = monitor
            .watch_address(GOOD, "https://example.com/hook")
            .unwrap();
        assert_eq!(id, "sub-1");
        assert_eq!(monitor.client().calls.get(), 2);
    }

    #[test]
    fn test_models_serialize_stably() {
        let balance = AddressBalance {
            address: GOOD.into(),
            confirmed: 1,
            unconfirmed: 2,
            total: 3,
        };
        let json = serde_json::to_string(&balance).unwrap();
        assert!(json.contains("\"confirmed\":1"));
        let back: AddressBalance = serde_json::from_str(&json).unwrap();
        assert_eq!(back, balance);
    }
}
