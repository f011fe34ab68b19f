// libpicopass/src/constants.rs
//! Common protocol constants used across the crate

/// Size of a single Picopass memory block in bytes
pub const PICOPASS_BLOCK_LEN: usize = 8;

/// Size of a diversified key in bytes
pub const PICOPASS_KEY_LEN: usize = 8;

/// Number of application blocks held by an emulated card
pub const PICOPASS_MAX_APP_LIMIT: usize = 32;

/// Highest block index the READ command will service
pub const PICOPASS_MAX_APP_INDEX: u8 = (PICOPASS_MAX_APP_LIMIT - 1) as u8;

/// Well-known block indices in application area 1
pub const PICOPASS_CSN_BLOCK_INDEX: u8 = 0;
pub const PICOPASS_CONFIG_BLOCK_INDEX: u8 = 1;
pub const PICOPASS_SECURE_EPURSE_BLOCK_INDEX: u8 = 2;
pub const PICOPASS_SECURE_KD_BLOCK_INDEX: u8 = 3;
pub const PICOPASS_SECURE_KC_BLOCK_INDEX: u8 = 4;
pub const PICOPASS_SECURE_AIA_BLOCK_INDEX: u8 = 5;

/// Reader -> card command bytes
pub const PICOPASS_CMD_ACTALL: u8 = 0x0A;
pub const PICOPASS_CMD_ACT: u8 = 0x8E;
pub const PICOPASS_CMD_HALT: u8 = 0x00;
pub const PICOPASS_CMD_READ_OR_IDENTIFY: u8 = 0x0C;
pub const PICOPASS_CMD_SELECT: u8 = 0x81;

/// Frame delay time (in carrier cycles) the listener asks the physical
/// layer to wait before answering
pub const PICOPASS_FDT_LISTEN_FC: u32 = 1000;

/// Capacity of the listener transmit and scratch buffers in bytes
pub const PICOPASS_LISTENER_BUFFER_SIZE_MAX: usize = 255;
