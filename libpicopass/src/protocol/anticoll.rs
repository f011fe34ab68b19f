// libpicopass/src/protocol/anticoll.rs

use crate::constants::PICOPASS_BLOCK_LEN;
use crate::types::Block;

/// iClass anti-collision CSN: each byte takes the upper five bits of its own
/// byte and the low three bits of the next one, wrapping at the end.
pub fn rotate_csn(csn: &Block) -> Block {
    let src = csn.as_bytes();
    let mut out = [0u8; PICOPASS_BLOCK_LEN];
    for (i, b) in out.iter_mut().enumerate() {
        *b = (src[i] >> 3) | (src[(i + 1) % PICOPASS_BLOCK_LEN] << 5);
    }
    Block::from_bytes(out)
}
