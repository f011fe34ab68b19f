// libpicopass/src/transport/mock.rs

use crate::protocol::BitBuffer;
use crate::transport::traits::{Nfc, NfcMode, NfcTech};
use crate::{Error, Result};

/// Mock physical layer for unit tests. It records transmitted frames and
/// configuration calls.
#[derive(Debug, Default)]
pub struct MockNfc {
    pub sent: Vec<Vec<u8>>,
    pub sof_count: usize,
    pub fdt_listen_fc: Option<u32>,
    pub config: Option<(NfcMode, NfcTech)>,
    pub running: bool,
    pub start_calls: usize,
    pub stop_calls: usize,
    /// Testing hook: number of send calls that should fail
    pub send_failures: usize,
}

impl MockNfc {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how many subsequent sends (frames or SOF) should fail.
    pub fn set_send_failures(&mut self, n: usize) {
        self.send_failures = n;
    }

    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop()
    }

    fn check_send(&mut self) -> Result<()> {
        if self.config.is_none() {
            return Err(Error::NotConfigured);
        }
        if self.send_failures > 0 {
            self.send_failures -= 1;
            return Err(Error::SendFailed("simulated send failure".into()));
        }
        Ok(())
    }
}

impl Nfc for MockNfc {
    fn send_frame(&mut self, frame: &BitBuffer) -> Result<()> {
        self.check_send()?;
        self.sent.push(frame.data().to_vec());
        Ok(())
    }

    fn send_sof(&mut self) -> Result<()> {
        self.check_send()?;
        self.sof_count += 1;
        Ok(())
    }

    fn set_fdt_listen_fc(&mut self, fdt_fc: u32) -> Result<()> {
        self.fdt_listen_fc = Some(fdt_fc);
        Ok(())
    }

    fn configure(&mut self, mode: NfcMode, tech: NfcTech) -> Result<()> {
        self.config = Some((mode, tech));
        Ok(())
    }

    fn start(&mut self) -> Result<()> {
        self.running = true;
        self.start_calls += 1;
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        self.running = false;
        self.stop_calls += 1;
        Ok(())
    }
}
