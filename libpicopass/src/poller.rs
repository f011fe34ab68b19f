// libpicopass/src/poller.rs

//! Reader-side contract.
//!
//! Only the shape of the reader API lives here so applications can be
//! written against both roles; this crate does not implement polling.

use crate::Result;
use crate::card::CardData;
use crate::constants::PICOPASS_KEY_LEN;
use crate::transport::NfcCommand;

/// Key request raised while authenticating against a card. The
/// application fills `key` and sets `is_key_provided`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequestKeyData {
    pub key: [u8; PICOPASS_KEY_LEN],
    pub is_key_provided: bool,
    pub is_elite_key: bool,
}

/// Events a poller reports to its callback.
#[derive(Debug, PartialEq, Eq)]
pub enum PollerEvent<'a> {
    RequestKey(&'a mut RequestKeyData),
    Success,
    Fail,
}

pub type PollerCallback = Box<dyn FnMut(PollerEvent<'_>) -> NfcCommand>;

/// Reader role counterpart of [`Listener`](crate::listener::Listener).
pub trait Poller {
    fn start(&mut self, callback: PollerCallback) -> Result<()>;

    fn stop(&mut self) -> Result<()>;

    /// Card image read so far
    fn data(&self) -> &CardData;
}
