// libpicopass/src/prelude.rs

pub use crate::card::{CardData, CardDataBuilder};
pub use crate::listener::{Listener, ListenerBuilder, ListenerCallback, ListenerEvent};
pub use crate::poller::{Poller, PollerEvent, RequestKeyData};
pub use crate::protocol::{BitBuffer, Command};
pub use crate::transport::{Nfc, NfcCommand, NfcEvent, NfcMode, NfcTech};
pub use crate::{Block, Error, ListenerCommand, ListenerState, Result};

pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced};
