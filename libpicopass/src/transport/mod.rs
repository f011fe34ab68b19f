// libpicopass/src/transport/mod.rs

pub mod event;
pub mod mock;
pub mod traits;

pub use event::{NfcCommand, NfcEvent};
pub use mock::MockNfc;
pub use traits::{Nfc, NfcMode, NfcTech};
