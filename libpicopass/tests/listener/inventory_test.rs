#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use libpicopass::listener::ListenerEvent;
use libpicopass::protocol::{Command, rotate_csn};
use libpicopass::transport::NfcEvent;
use libpicopass::{ListenerCommand, ListenerState};

/// A full reader inventory round: wake, identify, select with the
/// anti-collision CSN, then read the header and application blocks.
#[test]
fn full_inventory_round() -> anyhow::Result<()> {
    let card = fixtures::sample_card();
    let mut h = common::helpers::started(&card)?;
    let anticoll = rotate_csn(&fixtures::sample_csn());

    h.listener.on_event(NfcEvent::RxEnd(fixtures::actall()));
    h.listener.on_event(NfcEvent::RxEnd(fixtures::identify()));
    assert_eq!(h.last_sent().unwrap(), anticoll.as_bytes().to_vec());

    h.listener.on_event(NfcEvent::RxEnd(fixtures::select(&anticoll)));
    assert_eq!(h.listener.state(), ListenerState::Selected);
    assert_eq!(
        h.last_sent().unwrap(),
        fixtures::sample_csn().as_bytes().to_vec()
    );

    for block in 0u8..8 {
        h.listener.on_event(NfcEvent::RxEnd(fixtures::read(block)));
    }

    let sent = h.nfc.borrow().sent.clone();
    // identify + select + 8 reads
    assert_eq!(sent.len(), 10);
    assert_eq!(sent[2], card.block(0).unwrap().as_bytes().to_vec());
    assert_eq!(sent[3], card.block(1).unwrap().as_bytes().to_vec());
    assert_eq!(sent[4], card.block(2).unwrap().as_bytes().to_vec());
    assert_eq!(sent[5], vec![0xff; 8]);
    assert_eq!(sent[6], vec![0xff; 8]);
    assert_eq!(sent[7], card.block(5).unwrap().as_bytes().to_vec());
    assert_eq!(sent[8], fixtures::sample_app_block().as_bytes().to_vec());
    assert_eq!(sent[9], vec![0u8; 8]);

    let events = h.events.borrow();
    assert_eq!(events.len(), 11);
    assert_eq!(
        events[0],
        ListenerEvent {
            command: Command::ActAll,
            result: ListenerCommand::SendSof
        }
    );
    assert_eq!(events[1].command, Command::Identify);
    assert_eq!(events[2].command, Command::Select);
    assert!(events[3..].iter().all(|e| e.command == Command::Read
        && e.result == ListenerCommand::Processed));
    Ok(())
}

#[test]
fn wrong_anticoll_select_ends_round() -> anyhow::Result<()> {
    let mut h = common::helpers::started(&fixtures::sample_card())?;
    h.listener.process_frame(&fixtures::actall());

    // a reader addressing another card in the field
    let other = rotate_csn(&fixtures::block_from_hex("1122334455667788"));
    let res = h.listener.process_frame(&fixtures::select(&other));
    assert_eq!(res.map(|(_, r)| r), Some(ListenerCommand::Silent));
    assert_eq!(h.listener.state(), ListenerState::Idle);

    // the card no longer answers IDENTIFY or ACT until woken again
    assert_eq!(
        h.listener.process_frame(&fixtures::identify()).map(|(_, r)| r),
        Some(ListenerCommand::Silent)
    );
    assert_eq!(
        h.listener.process_frame(&fixtures::act()).map(|(_, r)| r),
        Some(ListenerCommand::Silent)
    );
    assert_eq!(h.sent_count(), 0);
    Ok(())
}

#[test]
fn unknown_frames_get_no_answer() -> anyhow::Result<()> {
    let mut h = common::helpers::started(&fixtures::sample_card())?;
    for f in ["", "0c06", "0c0600", "81", "0a0a", "ff"] {
        assert!(h.listener.process_frame(&fixtures::frame(f)).is_none());
    }
    assert_eq!(h.sent_count(), 0);
    assert_eq!(h.sof_count(), 0);
    assert!(h.events.borrow().is_empty());
    Ok(())
}

#[test]
fn send_failure_does_not_poison_next_frame() -> anyhow::Result<()> {
    let mut h = common::helpers::started(&fixtures::sample_card())?;
    h.nfc.borrow_mut().set_send_failures(1);

    let res = h.listener.process_frame(&fixtures::read(6));
    assert_eq!(res.map(|(_, r)| r), Some(ListenerCommand::Silent));
    assert_eq!(h.sent_count(), 0);

    let res = h.listener.process_frame(&fixtures::read(6));
    assert_eq!(res.map(|(_, r)| r), Some(ListenerCommand::Processed));
    assert_eq!(
        h.last_sent().unwrap(),
        fixtures::sample_app_block().as_bytes().to_vec()
    );
    Ok(())
}
