// libpicopass/src/protocol/commands.rs

use crate::constants::{
    PICOPASS_CMD_ACT, PICOPASS_CMD_ACTALL, PICOPASS_CMD_HALT, PICOPASS_CMD_READ_OR_IDENTIFY,
    PICOPASS_CMD_SELECT,
};
use crate::protocol::BitBuffer;

/// Reader commands the listener understands. New commands go here and in
/// [`COMMAND_TABLE`]; their handling lives in `listener::handlers`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// ACTALL: wake every card in the field
    ActAll,
    /// ACT: wake a card that is already active
    Act,
    Halt,
    /// IDENTIFY: ask for the anti-collision CSN
    Identify,
    /// SELECT: 8-byte CSN follows the command byte
    Select,
    /// READ: block index in the second byte, then a 2-byte CRC
    Read,
}

/// Dispatch order. IDENTIFY and READ share a command byte and differ only
/// in frame length; the first entry whose byte and bit length both match
/// is used.
pub const COMMAND_TABLE: [Command; 6] = [
    Command::ActAll,
    Command::Act,
    Command::Halt,
    Command::Identify,
    Command::Select,
    Command::Read,
];

impl Command {
    /// Leading command byte on the wire.
    pub const fn start_byte(&self) -> u8 {
        match self {
            Self::ActAll => PICOPASS_CMD_ACTALL,
            Self::Act => PICOPASS_CMD_ACT,
            Self::Halt => PICOPASS_CMD_HALT,
            Self::Identify | Self::Read => PICOPASS_CMD_READ_OR_IDENTIFY,
            Self::Select => PICOPASS_CMD_SELECT,
        }
    }

    /// Exact frame length in bits.
    pub const fn len_bits(&self) -> usize {
        match self {
            Self::ActAll | Self::Act | Self::Halt | Self::Identify => 8,
            Self::Select => 8 * 9,
            Self::Read => 8 * 4,
        }
    }

    pub fn matches(&self, frame: &BitBuffer) -> bool {
        frame.size_bits() == self.len_bits() && frame.byte(0) == Some(self.start_byte())
    }

    /// First command in [`COMMAND_TABLE`] matching `frame`.
    pub fn match_frame(frame: &BitBuffer) -> Option<Self> {
        COMMAND_TABLE.iter().copied().find(|cmd| cmd.matches(frame))
    }
}
