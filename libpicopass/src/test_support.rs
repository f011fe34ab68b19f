//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockNfc setup and reader frames so tests
//! across the crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use crate::card::CardData;
use crate::constants::{
    PICOPASS_CMD_READ_OR_IDENTIFY, PICOPASS_CMD_SELECT, PICOPASS_CONFIG_BLOCK_INDEX,
    PICOPASS_CSN_BLOCK_INDEX, PICOPASS_MAX_APP_LIMIT, PICOPASS_SECURE_AIA_BLOCK_INDEX,
    PICOPASS_SECURE_EPURSE_BLOCK_INDEX, PICOPASS_SECURE_KC_BLOCK_INDEX,
    PICOPASS_SECURE_KD_BLOCK_INDEX,
};
use crate::protocol::BitBuffer;
use crate::transport::{MockNfc, Nfc, NfcMode, NfcTech};
use crate::types::Block;
use crate::{Result, listener};

/// Nfc wrapper that delegates into `Rc<RefCell<MockNfc>>` so a test can
/// inspect the mock after a Listener has taken ownership of the handle.
#[doc(hidden)]
pub struct SharedNfc {
    inner: Rc<RefCell<MockNfc>>,
}

impl SharedNfc {
    pub fn new(inner: Rc<RefCell<MockNfc>>) -> Self {
        Self { inner }
    }
}

impl Nfc for SharedNfc {
    fn send_frame(&mut self, frame: &BitBuffer) -> Result<()> {
        self.inner.borrow_mut().send_frame(frame)
    }
    fn send_sof(&mut self) -> Result<()> {
        self.inner.borrow_mut().send_sof()
    }
    fn set_fdt_listen_fc(&mut self, fdt_fc: u32) -> Result<()> {
        self.inner.borrow_mut().set_fdt_listen_fc(fdt_fc)
    }
    fn configure(&mut self, mode: NfcMode, tech: NfcTech) -> Result<()> {
        self.inner.borrow_mut().configure(mode, tech)
    }
    fn start(&mut self) -> Result<()> {
        self.inner.borrow_mut().start()
    }
    fn stop(&mut self) -> Result<()> {
        self.inner.borrow_mut().stop()
    }
}

/// CSN of the sample card.
#[doc(hidden)]
pub fn sample_csn() -> Block {
    Block::from_bytes([0x75, 0xD6, 0x1E, 0x01, 0xF7, 0xFF, 0x12, 0xE0])
}

/// A card image with a real-looking header, non-trivial key blocks and
/// application block `i` (from 6 on) filled with byte `i`.
#[doc(hidden)]
pub fn sample_card_data() -> CardData {
    let mut blocks = [Block::default(); PICOPASS_MAX_APP_LIMIT];
    blocks[PICOPASS_CSN_BLOCK_INDEX as usize] = sample_csn();
    blocks[PICOPASS_CONFIG_BLOCK_INDEX as usize] =
        Block::from_bytes([0x12, 0xFF, 0xFF, 0xFF, 0x7F, 0x1F, 0xFF, 0x3C]);
    blocks[PICOPASS_SECURE_EPURSE_BLOCK_INDEX as usize] =
        Block::from_bytes([0xFF, 0xFF, 0xFF, 0xFF, 0xE3, 0xFF, 0xFF, 0xFF]);
    blocks[PICOPASS_SECURE_KD_BLOCK_INDEX as usize] =
        Block::from_bytes([0x5B, 0x7C, 0x62, 0xC4, 0x91, 0xC1, 0x1B, 0x39]);
    blocks[PICOPASS_SECURE_KC_BLOCK_INDEX as usize] =
        Block::from_bytes([0xF0, 0xE1, 0xD2, 0xC3, 0xB4, 0xA5, 0x96, 0x87]);
    blocks[PICOPASS_SECURE_AIA_BLOCK_INDEX as usize] = Block::from_bytes([0xFF; 8]);
    for (index, block) in blocks.iter_mut().enumerate().skip(6) {
        *block = Block::from_bytes([index as u8; 8]);
    }
    CardData::new(blocks)
}

/// SELECT frame addressed to `csn`.
#[doc(hidden)]
pub fn select_frame(csn: &Block) -> Vec<u8> {
    let mut frame = vec![PICOPASS_CMD_SELECT];
    frame.extend_from_slice(csn.as_bytes());
    frame
}

/// READ frame for `block`. The trailing CRC is not checked by the listener.
#[doc(hidden)]
pub fn read_frame(block: u8) -> Vec<u8> {
    vec![PICOPASS_CMD_READ_OR_IDENTIFY, block, 0x00, 0x00]
}

/// Convenience: a started Listener over a shared MockNfc. Events are
/// collected into the returned vector.
#[doc(hidden)]
pub fn started_shared_listener(
    data: &CardData,
) -> Result<(
    Rc<RefCell<MockNfc>>,
    Rc<RefCell<Vec<listener::ListenerEvent>>>,
    listener::Listener,
)> {
    let inner = Rc::new(RefCell::new(MockNfc::new()));
    let boxed: Box<dyn Nfc> = Box::new(SharedNfc::new(inner.clone()));
    let mut l = listener::Listener::new(boxed, data)?;
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = events.clone();
    l.start(Box::new(move |ev| sink.borrow_mut().push(ev)))?;
    Ok((inner, events, l))
}
