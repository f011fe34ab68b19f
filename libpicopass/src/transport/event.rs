// libpicopass/src/transport/event.rs

use crate::protocol::BitBuffer;

/// Events the physical layer delivers to a running listener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NfcEvent {
    FieldOn,
    FieldOff,
    /// A complete frame was received from the reader
    RxEnd(BitBuffer),
}

/// What the physical layer should do after delivering an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NfcCommand {
    Continue,
    Stop,
}
