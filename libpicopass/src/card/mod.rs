// libpicopass/src/card/mod.rs

use crate::constants::{
    PICOPASS_CSN_BLOCK_INDEX, PICOPASS_MAX_APP_LIMIT, PICOPASS_SECURE_KC_BLOCK_INDEX,
    PICOPASS_SECURE_KD_BLOCK_INDEX,
};
use crate::types::Block;
use crate::{Error, Result};

pub mod builder;
pub use builder::CardDataBuilder;

/// Memory image of an emulated Picopass card (application area 1).
///
/// The number of blocks is fixed by the type; a `CardData` can be read
/// and cloned but never resized. Cloning produces a fully independent copy.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardData {
    blocks: [Block; PICOPASS_MAX_APP_LIMIT],
}

impl CardData {
    pub fn new(blocks: [Block; PICOPASS_MAX_APP_LIMIT]) -> Self {
        Self { blocks }
    }

    /// Build from a slice that must hold exactly `PICOPASS_MAX_APP_LIMIT` blocks.
    pub fn from_blocks(blocks: &[Block]) -> Result<Self> {
        let blocks: [Block; PICOPASS_MAX_APP_LIMIT] =
            blocks.try_into().map_err(|_| Error::InvalidLength {
                expected: PICOPASS_MAX_APP_LIMIT,
                actual: blocks.len(),
            })?;
        Ok(Self { blocks })
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Stored block at `index`, or `None` outside `0..len()`.
    pub fn block(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// The card serial number block.
    pub fn csn(&self) -> &Block {
        &self.blocks[PICOPASS_CSN_BLOCK_INDEX as usize]
    }

    /// Whether `index` holds key material that must never leave the card.
    pub fn is_secure_index(index: usize) -> bool {
        index == PICOPASS_SECURE_KD_BLOCK_INDEX as usize
            || index == PICOPASS_SECURE_KC_BLOCK_INDEX as usize
    }

    /// Block as a reader would observe it: key blocks read back as
    /// [`Block::MASKED`] whatever is stored.
    pub fn masked_block(&self, index: usize) -> Option<Block> {
        let block = self.block(index)?;
        if Self::is_secure_index(index) {
            Some(Block::MASKED)
        } else {
            Some(*block)
        }
    }
}

impl Default for CardData {
    fn default() -> Self {
        Self::new([Block::default(); PICOPASS_MAX_APP_LIMIT])
    }
}
