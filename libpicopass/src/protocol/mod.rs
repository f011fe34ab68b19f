// libpicopass/src/protocol/mod.rs

pub mod anticoll;
pub mod bit_buffer;
pub mod commands;

pub use anticoll::rotate_csn;
pub use bit_buffer::BitBuffer;
pub use commands::{COMMAND_TABLE, Command};
