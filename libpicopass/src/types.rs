// libpicopass/src/types.rs

use crate::Error;
use crate::constants::PICOPASS_BLOCK_LEN;
use derive_more::{AsRef, From, Into};
use std::convert::TryFrom;

/// Block - Newtype Pattern (8 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, From, Into, AsRef)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Block([u8; PICOPASS_BLOCK_LEN]);

impl Block {
    /// What a reader sees when it reads a secure key block.
    pub const MASKED: Self = Self([0xff; PICOPASS_BLOCK_LEN]);

    pub const fn from_bytes(bytes: [u8; PICOPASS_BLOCK_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; PICOPASS_BLOCK_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Block {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != PICOPASS_BLOCK_LEN {
            return Err(Error::InvalidLength {
                expected: PICOPASS_BLOCK_LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; PICOPASS_BLOCK_LEN];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

/// Session state of the emulated chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ListenerState {
    #[default]
    Idle,
    Active,
    Selected,
    /// Kept for protocol fidelity. The listener never enters it because
    /// leaving Halt requires observing the field drop.
    Halt,
}

/// Outcome of a single command handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerCommand {
    /// A response frame was transmitted
    Processed,
    /// Nothing is sent back
    Silent,
    /// The dispatcher should emit a bare start-of-frame acknowledgement
    SendSof,
}
