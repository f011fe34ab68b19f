// libpicopass/src/listener/builder.rs

use crate::card::CardData;
use crate::listener::Listener;
use crate::transport::Nfc;
use crate::{Error, Result};

/// Helper to construct a Listener from its parts.
#[derive(Default)]
pub struct ListenerBuilder {
    nfc: Option<Box<dyn Nfc>>,
    data: Option<CardData>,
}

impl ListenerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide the physical layer (e.g. MockNfc)
    pub fn with_nfc(mut self, nfc: Box<dyn Nfc>) -> Self {
        self.nfc = Some(nfc);
        self
    }

    /// Card image to emulate. The listener keeps its own copy.
    pub fn with_data(mut self, data: CardData) -> Self {
        self.data = Some(data);
        self
    }

    /// Consume the builder and return a configured, not yet started Listener.
    pub fn build(self) -> Result<Listener> {
        let nfc = self.nfc.ok_or(Error::MissingParameter("nfc"))?;
        let data = self.data.ok_or(Error::MissingParameter("card data"))?;
        Listener::new(nfc, &data)
    }
}
