// libpicopass/src/transport/traits.rs

use crate::Result;
use crate::protocol::{BitBuffer, rotate_csn};
use crate::types::Block;

/// Role the physical layer is configured for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NfcMode {
    Poller,
    Listener,
}

/// Contactless technology the physical layer speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NfcTech {
    Iso14443a,
    Iso15693,
}

/// Nfc trait abstracts the radio front end away from listener logic.
///
/// Framing (SOF/EOF), modulation and frame delay timing all live behind
/// this trait. Every call is synchronous and has no timeout of its own.
pub trait Nfc {
    /// Transmit a response frame to the reader
    fn send_frame(&mut self, frame: &BitBuffer) -> Result<()>;

    /// Transmit a bare start-of-frame with no payload
    fn send_sof(&mut self) -> Result<()>;

    /// Frame delay, in carrier cycles, between reader frame and response
    fn set_fdt_listen_fc(&mut self, fdt_fc: u32) -> Result<()>;

    /// Select role and technology
    fn configure(&mut self, mode: NfcMode, tech: NfcTech) -> Result<()>;

    /// Begin delivering events
    fn start(&mut self) -> Result<()>;

    /// Stop delivering events. No event is delivered once this returns.
    fn stop(&mut self) -> Result<()>;

    /// CSN broadcast while the card is not selected. The default
    /// implementation is the standard iClass rotation; front ends with a
    /// hardware implementation may override it.
    fn anticoll_csn(&self, csn: &Block) -> Block {
        rotate_csn(csn)
    }
}
