use crate::auth::{is_authorized, resolve_node, validate_node};
use crate::error::ContractError;
use crate::state::{
    chain_count, ChainRecord, ADDRESSES, ALIASES, CHAINS, CHAIN_BY_INDEX, CHAIN_INDEX, CONFIG,
    CONTENT_HASHES, DATA, DATA_KEYS, OPERATORS, REVERSE, TEXTS, TEXT_KEYS,
};
use cns::registry::{
    AddressResponse, AdminResponse, AuthorizedResponse, CanonicalResponse, ChainEntryResponse,
    ChainIdentifierResponse, ChainInfo, ChainResponse, ChainsResponse, ConfigResponse,
    ContentHashResponse, CountResponse, DataResponse, DisplayNameResponse, KeysResponse,
    LabelHashResponse, OperatorResponse, TextResponse,
};
use cns::utils::{labelhash, parse_reverse_text_key, CHAIN_ID_KEY};
use cosmwasm_std::{Binary, Deps, Order, StdResult, Storage};
use cw_storage_plus::Bound;

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

// Readers shared by the direct queries and wildcard resolution.
// `node` is expected to be alias-resolved already.

pub fn address_of(storage: &dyn Storage, node: &[u8], coin_type: u64) -> StdResult<Vec<u8>> {
    Ok(ADDRESSES
        .may_load(storage, (node, coin_type))?
        .unwrap_or_default())
}

/// Text lookup with the reserved keys applied: `chain-id` reads the hex
/// chain identifier of the node, `chain-name:<hex>` reads the reverse entry.
pub fn text_of(storage: &dyn Storage, node: &[u8], key: &str) -> StdResult<String> {
    if key == CHAIN_ID_KEY {
        return Ok(CHAINS
            .may_load(storage, node)?
            .map(|record| hex::encode(record.chain_identifier))
            .unwrap_or_default());
    }
    if let Some(chain_identifier) = parse_reverse_text_key(key) {
        return reverse_label(storage, &chain_identifier);
    }
    Ok(TEXTS.may_load(storage, (node, key))?.unwrap_or_default())
}

pub fn data_of(storage: &dyn Storage, node: &[u8], key: &str) -> StdResult<Vec<u8>> {
    if key == CHAIN_ID_KEY {
        return Ok(CHAINS
            .may_load(storage, node)?
            .map(|record| record.chain_identifier)
            .unwrap_or_default());
    }
    Ok(DATA.may_load(storage, (node, key))?.unwrap_or_default())
}

pub fn contenthash_of(storage: &dyn Storage, node: &[u8]) -> StdResult<Vec<u8>> {
    Ok(CONTENT_HASHES.may_load(storage, node)?.unwrap_or_default())
}

pub fn reverse_label(storage: &dyn Storage, chain_identifier: &[u8]) -> StdResult<String> {
    Ok(REVERSE
        .may_load(storage, chain_identifier)?
        .unwrap_or_default())
}

fn canonical_node(deps: Deps, node: &Binary) -> Result<Vec<u8>, ContractError> {
    let node = validate_node(node)?;
    Ok(resolve_node(deps.storage, &node)?)
}

fn chain_info(storage: &dyn Storage, node: Vec<u8>, record: ChainRecord) -> StdResult<ChainInfo> {
    let index = CHAIN_INDEX.load(storage, node.as_slice())?;
    Ok(ChainInfo {
        node: Binary::from(node),
        label: record.label,
        display_name: record.display_name,
        chain_identifier: Binary::from(record.chain_identifier),
        admin: record.admin,
        index,
    })
}

pub fn query_chain_identifier(
    deps: Deps,
    node: Binary,
) -> Result<ChainIdentifierResponse, ContractError> {
    let node = canonical_node(deps, &node)?;
    let chain_identifier = CHAINS
        .may_load(deps.storage, node.as_slice())?
        .map(|record| record.chain_identifier)
        .unwrap_or_default();
    Ok(ChainIdentifierResponse {
        chain_identifier: Binary::from(chain_identifier),
    })
}

pub fn query_display_name(deps: Deps, chain_identifier: Binary) -> StdResult<DisplayNameResponse> {
    let label = reverse_label(deps.storage, chain_identifier.as_slice())?;
    let display_name = if label.is_empty() {
        String::new()
    } else {
        CHAINS
            .may_load(deps.storage, labelhash(&label).as_slice())?
            .map(|record| record.display_name)
            .unwrap_or_default()
    };
    Ok(DisplayNameResponse { display_name })
}

pub fn query_chain_admin(deps: Deps, node: Binary) -> Result<AdminResponse, ContractError> {
    let node = canonical_node(deps, &node)?;
    let admin = CHAINS
        .may_load(deps.storage, node.as_slice())?
        .map(|record| record.admin);
    Ok(AdminResponse { admin })
}

pub fn query_chain(deps: Deps, node: Binary) -> Result<ChainResponse, ContractError> {
    let node = canonical_node(deps, &node)?;
    let chain = match CHAINS.may_load(deps.storage, node.as_slice())? {
        Some(record) => Some(chain_info(deps.storage, node, record)?),
        None => None,
    };
    Ok(ChainResponse { chain })
}

pub fn query_canonical(deps: Deps, node: Binary) -> Result<CanonicalResponse, ContractError> {
    let node = validate_node(&node)?;
    let canonical = ALIASES
        .may_load(deps.storage, node.as_slice())?
        .map(Binary::from);
    Ok(CanonicalResponse { canonical })
}

pub fn query_chain_count(deps: Deps) -> StdResult<CountResponse> {
    Ok(CountResponse {
        count: chain_count(deps.storage)?,
    })
}

pub fn query_chain_at_index(deps: Deps, index: u64) -> Result<ChainEntryResponse, ContractError> {
    let count = chain_count(deps.storage)?;
    if index >= count {
        return Err(ContractError::IndexOutOfRange { index, count });
    }
    let node = CHAIN_BY_INDEX.load(deps.storage, index)?;
    let record = CHAINS.load(deps.storage, node.as_slice())?;
    Ok(ChainEntryResponse {
        label: record.label,
        display_name: record.display_name,
        chain_identifier: Binary::from(record.chain_identifier),
    })
}

pub fn query_list_chains(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<ChainsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);
    let chains = CHAIN_BY_INDEX
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (_, node) = item?;
            let record = CHAINS.load(deps.storage, node.as_slice())?;
            chain_info(deps.storage, node, record)
        })
        .collect::<StdResult<Vec<_>>>()?;
    Ok(ChainsResponse { chains })
}

pub fn query_supported_text_keys(deps: Deps, node: Binary) -> Result<KeysResponse, ContractError> {
    let node = canonical_node(deps, &node)?;
    let keys = TEXT_KEYS
        .may_load(deps.storage, node.as_slice())?
        .unwrap_or_default();
    Ok(KeysResponse { keys })
}

pub fn query_supported_data_keys(deps: Deps, node: Binary) -> Result<KeysResponse, ContractError> {
    let node = canonical_node(deps, &node)?;
    let keys = DATA_KEYS
        .may_load(deps.storage, node.as_slice())?
        .unwrap_or_default();
    Ok(KeysResponse { keys })
}

pub fn query_addr(
    deps: Deps,
    node: Binary,
    coin_type: Option<u64>,
) -> Result<AddressResponse, ContractError> {
    let node = canonical_node(deps, &node)?;
    let coin_type = match coin_type {
        Some(coin_type) => coin_type,
        None => CONFIG.load(deps.storage)?.default_coin_type,
    };
    Ok(AddressResponse {
        address: Binary::from(address_of(deps.storage, &node, coin_type)?),
    })
}

pub fn query_text(deps: Deps, node: Binary, key: String) -> Result<TextResponse, ContractError> {
    let node = canonical_node(deps, &node)?;
    Ok(TextResponse {
        value: text_of(deps.storage, &node, &key)?,
    })
}

pub fn query_data(deps: Deps, node: Binary, key: String) -> Result<DataResponse, ContractError> {
    let node = canonical_node(deps, &node)?;
    Ok(DataResponse {
        data: Binary::from(data_of(deps.storage, &node, &key)?),
    })
}

pub fn query_contenthash(deps: Deps, node: Binary) -> Result<ContentHashResponse, ContractError> {
    let node = canonical_node(deps, &node)?;
    Ok(ContentHashResponse {
        hash: Binary::from(contenthash_of(deps.storage, &node)?),
    })
}

pub fn query_is_authorized(
    deps: Deps,
    node: Binary,
    address: String,
) -> Result<AuthorizedResponse, ContractError> {
    let node = canonical_node(deps, &node)?;
    let address = deps.api.addr_validate(&address)?;
    Ok(AuthorizedResponse {
        authorized: is_authorized(deps.storage, &node, &address)?,
    })
}

pub fn query_is_operator(
    deps: Deps,
    admin: String,
    operator: String,
) -> StdResult<OperatorResponse> {
    let admin = deps.api.addr_validate(&admin)?;
    let operator = deps.api.addr_validate(&operator)?;
    let is_operator = OPERATORS
        .may_load(deps.storage, (&admin, &operator))?
        .unwrap_or(false);
    Ok(OperatorResponse { is_operator })
}

pub fn query_label_hash(label: String) -> LabelHashResponse {
    LabelHashResponse {
        node: Binary::from(labelhash(&label)),
    }
}

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
        default_coin_type: config.default_coin_type,
        min_identifier_length: config.min_identifier_length,
    })
}
