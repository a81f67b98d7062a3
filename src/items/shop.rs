use super::catalog::{resolve, ItemCatalog};
use super::inventory::{ensure_has_item, ensure_space, remove_item};
use crate::character::record::CharacterRecord;
use crate::core::constants::SELL_PRICE_DIVISOR;
use crate::core::errors::{GameError, GameResult};

/// Sell price for an item bought at `cost`.
pub fn sell_price(cost: u64) -> u64 {
    cost / SELL_PRICE_DIVISOR
}

/// Buy one item at catalog cost. Returns the gold left afterwards.
pub fn purchase_item<C: ItemCatalog + ?Sized>(
    record: &mut CharacterRecord,
    item_id: &str,
    catalog: &C,
) -> GameResult<u64> {
    let cost = resolve(catalog, item_id)?.cost;

    if record.gold < cost {
        return Err(GameError::InsufficientResources {
            needed: cost,
            available: record.gold,
        });
    }
    ensure_space(record)?;

    record.gold -= cost;
    record.inventory.push(item_id.to_string());
    Ok(record.gold)
}

/// Sell one item for half its cost. Returns the gold received.
pub fn sell_item<C: ItemCatalog + ?Sized>(
    record: &mut CharacterRecord,
    item_id: &str,
    catalog: &C,
) -> GameResult<u64> {
    ensure_has_item(record, item_id)?;
    let price = sell_price(resolve(catalog, item_id)?.cost);

    remove_item(record, item_id)?;
    record.gold = record.gold.saturating_add(price);
    Ok(price)
}
