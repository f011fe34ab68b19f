use crate::card::CardData;
use crate::constants::{PICOPASS_CSN_BLOCK_INDEX, PICOPASS_MAX_APP_LIMIT};
use crate::types::Block;
use crate::{Error, Result};

/// Builder for [`CardData`]. Blocks that are never set stay zeroed.
#[derive(Debug, Clone, Default)]
pub struct CardDataBuilder {
    blocks: [Block; PICOPASS_MAX_APP_LIMIT],
}

impl CardDataBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a copy of existing card data.
    pub fn from_data(data: &CardData) -> Self {
        let mut blocks = [Block::default(); PICOPASS_MAX_APP_LIMIT];
        blocks.copy_from_slice(data.blocks());
        Self { blocks }
    }

    pub fn csn(mut self, csn: Block) -> Self {
        self.blocks[PICOPASS_CSN_BLOCK_INDEX as usize] = csn;
        self
    }

    pub fn block(mut self, index: usize, block: Block) -> Result<Self> {
        let slot = self.blocks.get_mut(index).ok_or(Error::InvalidLength {
            expected: PICOPASS_MAX_APP_LIMIT,
            actual: index + 1,
        })?;
        *slot = block;
        Ok(self)
    }

    pub fn build(self) -> CardData {
        CardData::new(self.blocks)
    }
}
