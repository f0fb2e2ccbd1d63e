use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::{Addr, StdResult, Storage};
use cw_storage_plus::{Item, Map};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Config {
    pub owner: Addr,
    pub default_coin_type: u64,
    pub min_identifier_length: u32,
}

pub const CONFIG: Item<Config> = Item::new("CONFIG");

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct ChainRecord {
    pub label: String,
    pub admin: Addr,
    pub display_name: String,
    /// Only written by registration
    pub chain_identifier: Vec<u8>,
}

pub const CHAINS: Map<&[u8], ChainRecord> = Map::new("CHAINS");

/// alias node -> canonical node, always a single hop
pub const ALIASES: Map<&[u8], Vec<u8>> = Map::new("ALIASES");

/// canonical node -> number of aliases pointing at it
pub const ALIAS_TARGETS: Map<&[u8], u32> = Map::new("ALIAS_TARGETS");

/// (admin, operator) -> approved
pub const OPERATORS: Map<(&Addr, &Addr), bool> = Map::new("OPERATORS");

pub const ADDRESSES: Map<(&[u8], u64), Vec<u8>> = Map::new("ADDRESSES");

pub const TEXTS: Map<(&[u8], &str), String> = Map::new("TEXTS");

pub const DATA: Map<(&[u8], &str), Vec<u8>> = Map::new("DATA");

pub const CONTENT_HASHES: Map<&[u8], Vec<u8>> = Map::new("CONTENT_HASHES");

// Keys ever written per node, in first-write order
pub const TEXT_KEYS: Map<&[u8], Vec<String>> = Map::new("TEXT_KEYS");
pub const DATA_KEYS: Map<&[u8], Vec<String>> = Map::new("DATA_KEYS");

/// chain identifier -> label
pub const REVERSE: Map<&[u8], String> = Map::new("REVERSE");

// Enumeration index. Append only.
pub const CHAIN_COUNT: Item<u64> = Item::new("CHAIN_COUNT");
pub const CHAIN_BY_INDEX: Map<u64, Vec<u8>> = Map::new("CHAIN_BY_INDEX");
pub const CHAIN_INDEX: Map<&[u8], u64> = Map::new("CHAIN_INDEX");

pub fn remember_key<'a>(
    storage: &mut dyn Storage,
    keys: &Map<'a, &'a [u8], Vec<String>>,
    node: &'a [u8],
    key: &str,
) -> StdResult<()> {
    let mut known = keys.may_load(storage, node)?.unwrap_or_default();
    if !known.iter().any(|k| k == key) {
        known.push(key.to_string());
        keys.save(storage, node, &known)?;
    }
    Ok(())
}

pub fn forget_key<'a>(
    storage: &mut dyn Storage,
    keys: &Map<'a, &'a [u8], Vec<String>>,
    node: &'a [u8],
    key: &str,
) -> StdResult<()> {
    if let Some(mut known) = keys.may_load(storage, node)? {
        known.retain(|k| k != key);
        keys.save(storage, node, &known)?;
    }
    Ok(())
}

pub fn retain_target(storage: &mut dyn Storage, canonical: &[u8]) -> StdResult<()> {
    let count = ALIAS_TARGETS.may_load(storage, canonical)?.unwrap_or(0);
    ALIAS_TARGETS.save(storage, canonical, &(count + 1))
}

pub fn release_target(storage: &mut dyn Storage, canonical: &[u8]) -> StdResult<()> {
    match ALIAS_TARGETS.may_load(storage, canonical)? {
        Some(count) if count > 1 => ALIAS_TARGETS.save(storage, canonical, &(count - 1)),
        Some(_) => {
            ALIAS_TARGETS.remove(storage, canonical);
            Ok(())
        }
        None => Ok(()),
    }
}

pub fn chain_count(storage: &dyn Storage) -> StdResult<u64> {
    Ok(CHAIN_COUNT.may_load(storage)?.unwrap_or(0))
}

/// Appends `node` to the enumeration index unless it is already there.
/// Returns the position of `node`.
pub fn enumerate_chain(storage: &mut dyn Storage, node: &[u8]) -> StdResult<u64> {
    if let Some(index) = CHAIN_INDEX.may_load(storage, node)? {
        return Ok(index);
    }
    let index = chain_count(storage)?;
    CHAIN_BY_INDEX.save(storage, index, &node.to_vec())?;
    CHAIN_INDEX.save(storage, node, &index)?;
    CHAIN_COUNT.save(storage, &(index + 1))?;
    Ok(index)
}
