// libpicopass/src/listener/handlers.rs

use log::{debug, trace};

use crate::Result;
use crate::card::CardData;
use crate::constants::{PICOPASS_BLOCK_LEN, PICOPASS_MAX_APP_INDEX};
use crate::listener::Listener;
use crate::protocol::{BitBuffer, Command};
use crate::types::{Block, ListenerCommand, ListenerState};

impl Listener {
    /// Run the handler for `command`. A failure to transmit ends the
    /// handler early; it is logged and the reader gets no answer.
    pub(super) fn handle(&mut self, command: Command, frame: &BitBuffer) -> ListenerCommand {
        let before = self.state;
        let result = match command {
            Command::ActAll => Ok(self.actall_handler()),
            Command::Act => Ok(self.act_handler()),
            Command::Halt => Ok(self.halt_handler()),
            Command::Identify => self.identify_handler(),
            Command::Select => self.select_handler(frame),
            Command::Read => self.read_handler(frame),
        };

        if before != self.state {
            trace!("{:?}: {:?} -> {:?}", command, before, self.state);
        }

        result.unwrap_or_else(|e| {
            debug!("{:?} response not sent: {}", command, e);
            ListenerCommand::Silent
        })
    }

    fn actall_handler(&mut self) -> ListenerCommand {
        if self.state != ListenerState::Halt {
            self.state = ListenerState::Active;
        }
        ListenerCommand::SendSof
    }

    fn act_handler(&self) -> ListenerCommand {
        if self.state == ListenerState::Active {
            ListenerCommand::SendSof
        } else {
            ListenerCommand::Silent
        }
    }

    fn halt_handler(&mut self) -> ListenerCommand {
        // Leaving Halt needs the field to drop, which we cannot see.
        self.state = ListenerState::Idle;
        ListenerCommand::SendSof
    }

    fn identify_handler(&mut self) -> Result<ListenerCommand> {
        if self.state != ListenerState::Active {
            return Ok(ListenerCommand::Silent);
        }

        let csn = self.nfc.anticoll_csn(self.data.csn());
        self.tx_buffer.copy_bytes(csn.as_bytes())?;
        self.nfc.send_frame(&self.tx_buffer)?;

        Ok(ListenerCommand::Processed)
    }

    fn select_handler(&mut self, frame: &BitBuffer) -> Result<ListenerCommand> {
        let expected = match self.state {
            ListenerState::Idle | ListenerState::Halt => *self.data.csn(),
            ListenerState::Active | ListenerState::Selected => {
                self.nfc.anticoll_csn(self.data.csn())
            }
        };
        self.tmp_buffer.copy_bytes(expected.as_bytes())?;

        let received = frame.data().get(1..1 + PICOPASS_BLOCK_LEN);
        if received != Some(self.tmp_buffer.data()) {
            // Selected should fall to Halt here; see halt_handler.
            if matches!(
                self.state,
                ListenerState::Active | ListenerState::Selected
            ) {
                self.state = ListenerState::Idle;
            }
            return Ok(ListenerCommand::Silent);
        }

        self.state = ListenerState::Selected;
        self.tx_buffer.copy_bytes(self.data.csn().as_bytes())?;
        self.nfc.send_frame(&self.tx_buffer)?;

        Ok(ListenerCommand::Processed)
    }

    /// Serviced in every state. Key blocks are answered with all 0xFF.
    fn read_handler(&mut self, frame: &BitBuffer) -> Result<ListenerCommand> {
        let Some(block_num) = frame.byte(1) else {
            return Ok(ListenerCommand::Silent);
        };
        if block_num > PICOPASS_MAX_APP_INDEX {
            return Ok(ListenerCommand::Silent);
        }

        let index = block_num as usize;
        self.tx_buffer.reset();
        if CardData::is_secure_index(index) {
            for byte in Block::MASKED.as_bytes() {
                self.tx_buffer.append_byte(*byte)?;
            }
        } else {
            let Some(block) = self.data.block(index) else {
                return Ok(ListenerCommand::Silent);
            };
            self.tx_buffer.copy_bytes(block.as_bytes())?;
        }
        self.nfc.send_frame(&self.tx_buffer)?;

        Ok(ListenerCommand::Processed)
    }
}
