#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use libpicopass::constants::PICOPASS_FDT_LISTEN_FC;
use libpicopass::listener::ListenerBuilder;
use libpicopass::transport::{MockNfc, NfcCommand, NfcEvent, NfcMode, NfcTech};
use libpicopass::{Error, ListenerState};

#[test]
fn builder_produces_configured_listener() -> anyhow::Result<()> {
    let listener = ListenerBuilder::new()
        .with_nfc(Box::new(MockNfc::new()))
        .with_data(fixtures::sample_card())
        .build()?;
    assert_eq!(listener.state(), ListenerState::Idle);
    assert!(!listener.is_running());
    Ok(())
}

#[test]
fn builder_without_nfc_fails() {
    let res = ListenerBuilder::new()
        .with_data(fixtures::sample_card())
        .build();
    assert!(matches!(res, Err(Error::MissingParameter(_))));
}

#[test]
fn started_listener_configures_iso15693_listen_mode() -> anyhow::Result<()> {
    let h = common::helpers::started(&fixtures::sample_card())?;
    let nfc = h.nfc.borrow();
    assert_eq!(nfc.fdt_listen_fc, Some(PICOPASS_FDT_LISTEN_FC));
    assert_eq!(nfc.config, Some((NfcMode::Listener, NfcTech::Iso15693)));
    assert!(nfc.running);
    assert_eq!(nfc.start_calls, 1);
    Ok(())
}

#[test]
fn stop_guarantees_no_more_callbacks() -> anyhow::Result<()> {
    let mut h = common::helpers::started(&fixtures::sample_card())?;
    h.listener.on_event(NfcEvent::RxEnd(fixtures::actall()));
    h.listener.stop()?;
    assert!(!h.listener.is_running());

    let cmd = h.listener.on_event(NfcEvent::RxEnd(fixtures::halt()));
    assert_eq!(cmd, NfcCommand::Stop);
    assert_eq!(h.events.borrow().len(), 1);
    assert_eq!(h.listener.state(), ListenerState::Active);
    assert_eq!(h.sof_count(), 1);
    Ok(())
}

#[test]
fn snapshot_matches_input_with_masked_reads() -> anyhow::Result<()> {
    let card = fixtures::sample_card();
    let h = common::helpers::started(&card)?;
    let snapshot = h.listener.data();
    assert_eq!(snapshot, &card);
    for index in 0..snapshot.len() {
        let masked = snapshot.masked_block(index).unwrap();
        if index == 3 || index == 4 {
            assert_eq!(masked.as_bytes(), &[0xff; 8]);
        } else {
            assert_eq!(&masked, card.block(index).unwrap());
        }
    }
    Ok(())
}
