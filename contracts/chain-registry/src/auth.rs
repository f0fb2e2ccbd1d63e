use crate::error::ContractError;
use crate::state::{ALIASES, CHAINS, CONFIG, OPERATORS};
use cns::utils::{node_to_hex, ROOT_NODE};
use cosmwasm_std::{Addr, Binary, Deps, MessageInfo, StdResult, Storage};

/// Proof that the sender holds the registry owner role.
pub struct RegistryOwner(Addr);

impl RegistryOwner {
    pub fn addr(&self) -> &Addr {
        &self.0
    }
}

/// Proof that the sender may mutate the records of `node`.
/// `node` is always the canonical node, never an alias.
pub struct LabelAdmin {
    pub node: Vec<u8>,
    pub sender: Addr,
}

pub fn only_owner(deps: Deps, info: &MessageInfo) -> Result<RegistryOwner, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::NotOwner {
            sender: info.sender.to_string(),
            owner: config.owner.to_string(),
        });
    }
    Ok(RegistryOwner(info.sender.clone()))
}

pub fn validate_node(node: &Binary) -> Result<Vec<u8>, ContractError> {
    if node.len() != 32 {
        return Err(ContractError::InvalidNodeLength { length: node.len() });
    }
    Ok(node.to_vec())
}

/// Follows at most one alias hop.
pub fn resolve_node(storage: &dyn Storage, node: &[u8]) -> StdResult<Vec<u8>> {
    Ok(ALIASES
        .may_load(storage, node)?
        .unwrap_or_else(|| node.to_vec()))
}

/// `node` must already be canonical. The root node belongs to the registry owner.
pub fn is_authorized(storage: &dyn Storage, node: &[u8], address: &Addr) -> StdResult<bool> {
    if node == &ROOT_NODE[..] {
        return Ok(CONFIG.load(storage)?.owner == *address);
    }
    let record = match CHAINS.may_load(storage, node)? {
        Some(record) => record,
        None => return Ok(false),
    };
    if record.admin == *address {
        return Ok(true);
    }
    Ok(OPERATORS
        .may_load(storage, (&record.admin, address))?
        .unwrap_or(false))
}

pub fn only_authorized(
    deps: Deps,
    info: &MessageInfo,
    node: &[u8],
) -> Result<LabelAdmin, ContractError> {
    if !is_authorized(deps.storage, node, &info.sender)? {
        return Err(ContractError::NotAuthorized {
            sender: info.sender.to_string(),
            node: node_to_hex(node),
        });
    }
    Ok(LabelAdmin {
        node: node.to_vec(),
        sender: info.sender.clone(),
    })
}
