use std::collections::HashSet;

use crate::auth::{
    only_authorized, only_owner, resolve_node, validate_node, LabelAdmin, RegistryOwner,
};
use crate::error::ContractError;
use crate::state::{
    enumerate_chain, forget_key, release_target, remember_key, retain_target, ChainRecord, Config,
    ADDRESSES, ALIASES, ALIAS_TARGETS, CHAINS, CONFIG, CONTENT_HASHES, DATA, DATA_KEYS, OPERATORS,
    REVERSE, TEXTS, TEXT_KEYS,
};
use cns::registry::RegisterItem;
use cns::utils::{
    labelhash, node_to_hex, reverse_node, reverse_text_key, CHAIN_ID_KEY, REVERSE_TEXT_PREFIX,
    ROOT_NODE,
};
use cosmwasm_std::{
    Addr, Binary, Deps, DepsMut, Env, Event, MessageInfo, Response, StdResult, Storage,
};

struct Registration {
    node: Vec<u8>,
    label: String,
    display_name: String,
    admin: Addr,
    chain_identifier: Vec<u8>,
}

// Aliases and targets accepted earlier in the same batch.
#[derive(Default)]
struct PendingAliases {
    nodes: HashSet<Vec<u8>>,
    targets: HashSet<Vec<u8>>,
}

struct AliasLink {
    alias: String,
    node: Vec<u8>,
    canonical: Vec<u8>,
}

fn validate_registration(
    deps: Deps,
    config: &Config,
    item: RegisterItem,
) -> Result<Registration, ContractError> {
    if item.label.is_empty() {
        return Err(ContractError::EmptyLabel {});
    }
    if item.display_name.is_empty() {
        return Err(ContractError::EmptyDisplayName {});
    }
    if item.chain_identifier.len() < config.min_identifier_length as usize {
        return Err(ContractError::IdentifierTooShort {
            length: item.chain_identifier.len(),
            min_length: config.min_identifier_length,
        });
    }
    let node = labelhash(&item.label);
    if ALIASES.has(deps.storage, node.as_slice()) {
        return Err(ContractError::AliasShadowsChain {
            node: node_to_hex(&node),
        });
    }
    let admin = deps.api.addr_validate(&item.admin)?;
    Ok(Registration {
        node,
        label: item.label,
        display_name: item.display_name,
        admin,
        chain_identifier: item.chain_identifier.to_vec(),
    })
}

// Drops the reverse entry of an identifier that a label no longer carries.
fn clear_reverse(storage: &mut dyn Storage, chain_identifier: &[u8], label: &str) -> StdResult<()> {
    if REVERSE.may_load(storage, chain_identifier)?.as_deref() == Some(label) {
        REVERSE.remove(storage, chain_identifier);
        forget_key(
            storage,
            &TEXT_KEYS,
            &reverse_node(),
            &reverse_text_key(chain_identifier),
        )?;
    }
    Ok(())
}

fn write_registration(
    storage: &mut dyn Storage,
    owner: &RegistryOwner,
    registration: Registration,
) -> StdResult<Event> {
    let node = registration.node.as_slice();
    let chain_identifier = registration.chain_identifier.as_slice();

    if let Some(previous) = CHAINS.may_load(storage, node)? {
        if previous.chain_identifier != chain_identifier {
            clear_reverse(storage, &previous.chain_identifier, &previous.label)?;
        }
    }

    CHAINS.save(
        storage,
        node,
        &ChainRecord {
            label: registration.label.clone(),
            admin: registration.admin.clone(),
            display_name: registration.display_name.clone(),
            chain_identifier: chain_identifier.to_vec(),
        },
    )?;
    DATA.save(storage, (node, CHAIN_ID_KEY), &chain_identifier.to_vec())?;
    remember_key(storage, &DATA_KEYS, node, CHAIN_ID_KEY)?;
    remember_key(storage, &TEXT_KEYS, node, CHAIN_ID_KEY)?;

    REVERSE.save(storage, chain_identifier, &registration.label)?;
    remember_key(
        storage,
        &TEXT_KEYS,
        &reverse_node(),
        &reverse_text_key(chain_identifier),
    )?;

    let index = enumerate_chain(storage, node)?;

    Ok(Event::new("chain_registered")
        .add_attribute("node", node_to_hex(node))
        .add_attribute("label", registration.label)
        .add_attribute("display_name", registration.display_name)
        .add_attribute("admin", registration.admin)
        .add_attribute("chain_identifier", hex::encode(chain_identifier))
        .add_attribute("index", index.to_string())
        .add_attribute("registered_by", owner.addr()))
}

pub fn register(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    label: String,
    display_name: String,
    admin: String,
    chain_identifier: Binary,
) -> Result<Response, ContractError> {
    let owner = only_owner(deps.as_ref(), &info)?;
    let config = CONFIG.load(deps.storage)?;
    let registration = validate_registration(
        deps.as_ref(),
        &config,
        RegisterItem {
            label,
            display_name,
            admin,
            chain_identifier,
        },
    )?;
    let event = write_registration(deps.storage, &owner, registration)?;
    Ok(Response::new()
        .add_attribute("method", "register")
        .add_event(event))
}

pub fn batch_register(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    items: Vec<RegisterItem>,
) -> Result<Response, ContractError> {
    let owner = only_owner(deps.as_ref(), &info)?;
    let config = CONFIG.load(deps.storage)?;

    // Nothing is written unless every item is valid.
    let registrations = items
        .into_iter()
        .map(|item| validate_registration(deps.as_ref(), &config, item))
        .collect::<Result<Vec<_>, _>>()?;

    let mut events = Vec::with_capacity(registrations.len());
    for registration in registrations {
        events.push(write_registration(deps.storage, &owner, registration)?);
    }
    Ok(Response::new()
        .add_attribute("method", "batch_register")
        .add_attribute("count", events.len().to_string())
        .add_events(events))
}

fn validate_alias(
    storage: &dyn Storage,
    alias: String,
    canonical: &Binary,
    pending: &PendingAliases,
) -> Result<AliasLink, ContractError> {
    if alias.is_empty() {
        return Err(ContractError::EmptyLabel {});
    }
    let node = labelhash(&alias);
    let canonical = validate_node(canonical)?;
    if pending.nodes.contains(&canonical) || ALIASES.has(storage, canonical.as_slice()) {
        return Err(ContractError::AliasToAlias {
            node: node_to_hex(&canonical),
        });
    }
    // an alias target must stay canonical
    if pending.targets.contains(&node) || ALIAS_TARGETS.has(storage, node.as_slice()) {
        return Err(ContractError::AliasToAlias {
            node: node_to_hex(&node),
        });
    }
    if !CHAINS.has(storage, canonical.as_slice()) {
        return Err(ContractError::CanonicalNotRegistered {
            node: node_to_hex(&canonical),
        });
    }
    if CHAINS.has(storage, node.as_slice()) {
        return Err(ContractError::AliasShadowsChain {
            node: node_to_hex(&node),
        });
    }
    Ok(AliasLink {
        node,
        alias,
        canonical,
    })
}

fn write_alias(
    storage: &mut dyn Storage,
    _owner: &RegistryOwner,
    link: AliasLink,
) -> StdResult<Event> {
    if let Some(previous) = ALIASES.may_load(storage, link.node.as_slice())? {
        release_target(storage, &previous)?;
    }
    ALIASES.save(storage, link.node.as_slice(), &link.canonical)?;
    retain_target(storage, &link.canonical)?;
    Ok(Event::new("alias_registered")
        .add_attribute("alias", link.alias)
        .add_attribute("node", node_to_hex(&link.node))
        .add_attribute("canonical", node_to_hex(&link.canonical)))
}

fn unlink_alias(
    storage: &mut dyn Storage,
    _owner: &RegistryOwner,
    alias: String,
) -> Result<Event, ContractError> {
    if alias.is_empty() {
        return Err(ContractError::EmptyLabel {});
    }
    let node = labelhash(&alias);
    if let Some(canonical) = ALIASES.may_load(storage, node.as_slice())? {
        ALIASES.remove(storage, node.as_slice());
        release_target(storage, &canonical)?;
    }
    Ok(Event::new("alias_removed")
        .add_attribute("alias", alias)
        .add_attribute("node", node_to_hex(&node)))
}

pub fn register_alias(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    alias: String,
    canonical: Binary,
) -> Result<Response, ContractError> {
    let owner = only_owner(deps.as_ref(), &info)?;
    let link = validate_alias(deps.storage, alias, &canonical, &PendingAliases::default())?;
    let event = write_alias(deps.storage, &owner, link)?;
    Ok(Response::new()
        .add_attribute("method", "register_alias")
        .add_event(event))
}

pub fn remove_alias(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    alias: String,
) -> Result<Response, ContractError> {
    let owner = only_owner(deps.as_ref(), &info)?;
    let event = unlink_alias(deps.storage, &owner, alias)?;
    Ok(Response::new()
        .add_attribute("method", "remove_alias")
        .add_event(event))
}

pub fn batch_register_alias(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    aliases: Vec<String>,
    canonicals: Vec<Binary>,
) -> Result<Response, ContractError> {
    let owner = only_owner(deps.as_ref(), &info)?;
    if aliases.len() != canonicals.len() {
        return Err(ContractError::LengthMismatch {
            aliases: aliases.len(),
            canonicals: canonicals.len(),
        });
    }

    let mut pending = PendingAliases::default();
    let mut links = Vec::with_capacity(aliases.len());
    for (alias, canonical) in aliases.into_iter().zip(canonicals.iter()) {
        let link = validate_alias(deps.storage, alias, canonical, &pending)?;
        pending.nodes.insert(link.node.clone());
        pending.targets.insert(link.canonical.clone());
        links.push(link);
    }

    let mut events = Vec::with_capacity(links.len());
    for link in links {
        events.push(write_alias(deps.storage, &owner, link)?);
    }
    Ok(Response::new()
        .add_attribute("method", "batch_register_alias")
        .add_attribute("count", events.len().to_string())
        .add_events(events))
}

pub fn batch_remove_alias(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    aliases: Vec<String>,
) -> Result<Response, ContractError> {
    let owner = only_owner(deps.as_ref(), &info)?;
    if aliases.iter().any(|alias| alias.is_empty()) {
        return Err(ContractError::EmptyLabel {});
    }
    let mut events = Vec::with_capacity(aliases.len());
    for alias in aliases {
        events.push(unlink_alias(deps.storage, &owner, alias)?);
    }
    Ok(Response::new()
        .add_attribute("method", "batch_remove_alias")
        .add_attribute("count", events.len().to_string())
        .add_events(events))
}

fn is_reserved(node: &[u8]) -> bool {
    node == &ROOT_NODE[..] || node == reverse_node().as_slice()
}

pub fn set_chain_admin(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    node: Binary,
    admin: String,
) -> Result<Response, ContractError> {
    let requested = validate_node(&node)?;
    let node = resolve_node(deps.storage, &requested)?;
    if is_reserved(&requested) || is_reserved(&node) {
        return Err(ContractError::ReservedLabel {
            node: node_to_hex(&requested),
        });
    }
    let auth = only_authorized(deps.as_ref(), &info, &node)?;
    let admin = deps.api.addr_validate(&admin)?;

    let mut record = CHAINS.load(deps.storage, auth.node.as_slice())?;
    let previous = record.admin;
    record.admin = admin.clone();
    CHAINS.save(deps.storage, auth.node.as_slice(), &record)?;

    Ok(Response::new()
        .add_attribute("method", "set_chain_admin")
        .add_event(
            Event::new("admin_changed")
                .add_attribute("node", node_to_hex(&auth.node))
                .add_attribute("previous_admin", previous)
                .add_attribute("admin", admin)
                .add_attribute("sender", auth.sender),
        ))
}

pub fn set_operator(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    operator: String,
    approved: bool,
) -> Result<Response, ContractError> {
    let operator = deps.api.addr_validate(&operator)?;
    OPERATORS.save(deps.storage, (&info.sender, &operator), &approved)?;
    Ok(Response::new()
        .add_attribute("method", "set_operator")
        .add_event(
            Event::new("operator_changed")
                .add_attribute("admin", info.sender)
                .add_attribute("operator", operator)
                .add_attribute("approved", approved.to_string()),
        ))
}

// Record writes go to the canonical node of an alias.
fn authorize_record(
    deps: Deps,
    info: &MessageInfo,
    node: &Binary,
) -> Result<LabelAdmin, ContractError> {
    let node = validate_node(node)?;
    let node = resolve_node(deps.storage, &node)?;
    only_authorized(deps, info, &node)
}

pub fn set_addr(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    node: Binary,
    coin_type: Option<u64>,
    address: Binary,
) -> Result<Response, ContractError> {
    let auth = authorize_record(deps.as_ref(), &info, &node)?;
    let coin_type = match coin_type {
        Some(coin_type) => coin_type,
        None => CONFIG.load(deps.storage)?.default_coin_type,
    };
    let key = (auth.node.as_slice(), coin_type);
    if address.is_empty() {
        ADDRESSES.remove(deps.storage, key);
    } else {
        ADDRESSES.save(deps.storage, key, &address.to_vec())?;
    }
    Ok(Response::new()
        .add_attribute("method", "set_addr")
        .add_event(
            Event::new("addr_changed")
                .add_attribute("node", node_to_hex(&auth.node))
                .add_attribute("coin_type", coin_type.to_string())
                .add_attribute("address", hex::encode(address.as_slice())),
        ))
}

pub fn set_text(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    node: Binary,
    key: String,
    value: String,
) -> Result<Response, ContractError> {
    if key == CHAIN_ID_KEY {
        return Err(ContractError::ImmutableRecord { key });
    }
    let requested = validate_node(&node)?;
    if resolve_node(deps.storage, &requested)? == reverse_node()
        && key.starts_with(REVERSE_TEXT_PREFIX)
    {
        return Err(ContractError::ImmutableRecord { key });
    }
    let auth = authorize_record(deps.as_ref(), &info, &node)?;
    TEXTS.save(deps.storage, (auth.node.as_slice(), key.as_str()), &value)?;
    remember_key(deps.storage, &TEXT_KEYS, auth.node.as_slice(), &key)?;
    Ok(Response::new()
        .add_attribute("method", "set_text")
        .add_event(
            Event::new("text_changed")
                .add_attribute("node", node_to_hex(&auth.node))
                .add_attribute("key", key)
                .add_attribute("value", value),
        ))
}

pub fn set_data(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    node: Binary,
    key: String,
    data: Binary,
) -> Result<Response, ContractError> {
    if key == CHAIN_ID_KEY {
        return Err(ContractError::ImmutableRecord { key });
    }
    let auth = authorize_record(deps.as_ref(), &info, &node)?;
    DATA.save(deps.storage, (auth.node.as_slice(), key.as_str()), &data.to_vec())?;
    remember_key(deps.storage, &DATA_KEYS, auth.node.as_slice(), &key)?;
    Ok(Response::new()
        .add_attribute("method", "set_data")
        .add_event(
            Event::new("data_changed")
                .add_attribute("node", node_to_hex(&auth.node))
                .add_attribute("key", key)
                .add_attribute("data", hex::encode(data.as_slice())),
        ))
}

pub fn set_contenthash(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    node: Binary,
    hash: Binary,
) -> Result<Response, ContractError> {
    let auth = authorize_record(deps.as_ref(), &info, &node)?;
    if hash.is_empty() {
        CONTENT_HASHES.remove(deps.storage, auth.node.as_slice());
    } else {
        CONTENT_HASHES.save(deps.storage, auth.node.as_slice(), &hash.to_vec())?;
    }
    Ok(Response::new()
        .add_attribute("method", "set_contenthash")
        .add_event(
            Event::new("contenthash_changed")
                .add_attribute("node", node_to_hex(&auth.node))
                .add_attribute("hash", hex::encode(hash.as_slice())),
        ))
}

pub fn set_config(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    owner: String,
    default_coin_type: u64,
    min_identifier_length: u32,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info)?;
    let owner = deps.api.addr_validate(&owner)?;

    CONFIG.save(
        deps.storage,
        &Config {
            owner: owner.clone(),
            default_coin_type,
            min_identifier_length,
        },
    )?;
    Ok(Response::new()
        .add_attribute("method", "set_config")
        .add_event(
            Event::new("config_changed")
                .add_attribute("owner", owner)
                .add_attribute("default_coin_type", default_coin_type.to_string())
                .add_attribute("min_identifier_length", min_identifier_length.to_string()),
        ))
}
