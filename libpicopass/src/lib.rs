// libpicopass/src/lib.rs

//! libpicopass
//!
//! Pure Rust iClass/Picopass card emulation: frame dispatch, the chip's
//! session state machine and the card memory image, on top of an
//! externally supplied ISO 15693 physical layer.

pub mod card;
pub mod constants;
pub mod error;
pub mod listener;
pub mod poller;
pub mod prelude;
pub mod protocol;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
