// libpicopass/src/listener/mod.rs

//! Card emulation session.
//!
//! A [`Listener`] owns a private copy of the card image, its transmit and
//! scratch buffers, and the physical layer handle. The physical layer calls
//! [`Listener::on_event`] once per received frame; the frame is matched
//! against [`COMMAND_TABLE`](crate::protocol::COMMAND_TABLE), the handler
//! runs to completion and may answer through the physical layer.

use log::{debug, trace};

use crate::Result;
use crate::card::CardData;
use crate::constants::{PICOPASS_FDT_LISTEN_FC, PICOPASS_LISTENER_BUFFER_SIZE_MAX};
use crate::protocol::{BitBuffer, Command};
use crate::transport::{Nfc, NfcCommand, NfcEvent, NfcMode, NfcTech};
use crate::types::{ListenerCommand, ListenerState};
use crate::utils::bytes_to_hex_spaced;

pub mod builder;
mod handlers;

pub use builder::ListenerBuilder;

/// Reported to the session callback after every dispatched frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerEvent {
    pub command: Command,
    pub result: ListenerCommand,
}

/// Session callback. Any context it needs is captured by the closure.
pub type ListenerCallback = Box<dyn FnMut(ListenerEvent)>;

pub struct Listener {
    nfc: Box<dyn Nfc>,
    data: CardData,
    state: ListenerState,
    tx_buffer: BitBuffer,
    tmp_buffer: BitBuffer,
    callback: Option<ListenerCallback>,
    running: bool,
}

impl Listener {
    /// Create a listener emulating a copy of `data` and configure the
    /// physical layer for ISO 15693 listening.
    pub fn new(mut nfc: Box<dyn Nfc>, data: &CardData) -> Result<Self> {
        nfc.set_fdt_listen_fc(PICOPASS_FDT_LISTEN_FC)?;
        nfc.configure(NfcMode::Listener, NfcTech::Iso15693)?;

        Ok(Self {
            nfc,
            data: data.clone(),
            state: ListenerState::Idle,
            tx_buffer: BitBuffer::with_capacity(PICOPASS_LISTENER_BUFFER_SIZE_MAX),
            tmp_buffer: BitBuffer::with_capacity(PICOPASS_LISTENER_BUFFER_SIZE_MAX),
            callback: None,
            running: false,
        })
    }

    /// Register `callback` and start the physical layer.
    pub fn start(&mut self, callback: ListenerCallback) -> Result<()> {
        self.callback = Some(callback);
        self.running = true;
        if let Err(e) = self.nfc.start() {
            self.running = false;
            self.callback = None;
            return Err(e);
        }
        Ok(())
    }

    /// Stop the session. Once this returns no further event is processed
    /// and the callback is never invoked again, even if stopping the
    /// physical layer reported an error.
    pub fn stop(&mut self) -> Result<()> {
        self.running = false;
        self.callback = None;
        self.nfc.stop()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Read-only view of the emulated card image.
    pub fn data(&self) -> &CardData {
        &self.data
    }

    pub fn state(&self) -> ListenerState {
        self.state
    }

    /// Entry point for the physical layer.
    pub fn on_event(&mut self, event: NfcEvent) -> NfcCommand {
        if !self.running {
            return NfcCommand::Stop;
        }

        if let NfcEvent::RxEnd(frame) = event {
            if let Some((command, result)) = self.process_frame(&frame) {
                if let Some(callback) = self.callback.as_mut() {
                    callback(ListenerEvent { command, result });
                }
            }
        }

        NfcCommand::Continue
    }

    /// Dispatch a single received frame. Returns the matched command and
    /// its result, or `None` when the frame matches no command.
    pub fn process_frame(&mut self, frame: &BitBuffer) -> Option<(Command, ListenerCommand)> {
        let Some(command) = Command::match_frame(frame) else {
            trace!(
                "ignoring {}-bit frame [{}]",
                frame.size_bits(),
                bytes_to_hex_spaced(frame.data())
            );
            return None;
        };

        let result = self.handle(command, frame);
        if result == ListenerCommand::SendSof {
            if let Err(e) = self.nfc.send_sof() {
                debug!("failed to send SOF for {:?}: {}", command, e);
            }
        }
        Some((command, result))
    }

    #[cfg(test)]
    pub(crate) fn set_state(&mut self, state: ListenerState) {
        self.state = state;
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if self.running {
            if let Err(e) = self.stop() {
                debug!("failed to stop physical layer on drop: {}", e);
            }
        }
    }
}

impl std::fmt::Debug for Listener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listener")
            .field("state", &self.state)
            .field("running", &self.running)
            .field("csn", &self.data.csn())
            .finish()
    }
}
