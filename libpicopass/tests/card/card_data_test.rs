#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use libpicopass::card::{CardData, CardDataBuilder};
use libpicopass::constants::PICOPASS_MAX_APP_LIMIT;
use libpicopass::types::Block;

#[test]
fn builder_roundtrip_through_blocks() -> anyhow::Result<()> {
    let card = fixtures::sample_card();
    let rebuilt = CardData::from_blocks(card.blocks())?;
    assert_eq!(rebuilt, card);
    assert_eq!(rebuilt.csn(), &fixtures::sample_csn());
    Ok(())
}

#[test]
fn masked_view_never_exposes_keys() {
    let card = fixtures::sample_card();
    assert_eq!(card.block(3), Some(&fixtures::sample_kd()));
    assert_eq!(card.block(4), Some(&fixtures::sample_kc()));
    assert_eq!(card.masked_block(3), Some(Block::MASKED));
    assert_eq!(card.masked_block(4), Some(Block::MASKED));
    assert_eq!(card.masked_block(PICOPASS_MAX_APP_LIMIT), None);
}

#[test]
fn modified_copy_leaves_source_alone() -> anyhow::Result<()> {
    let card = fixtures::sample_card();
    let copy = CardDataBuilder::from_data(&card)
        .block(6, fixtures::block_from_hex("0000000000000000"))?
        .build();
    assert_eq!(card.block(6), Some(&fixtures::sample_app_block()));
    assert_ne!(copy, card);
    Ok(())
}
