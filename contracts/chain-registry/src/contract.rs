use crate::error::ContractError;
use crate::execute::{
    batch_register, batch_register_alias, batch_remove_alias, register, register_alias,
    remove_alias, set_addr, set_chain_admin, set_config, set_contenthash, set_data, set_operator,
    set_text,
};
use crate::query::{
    query_addr, query_canonical, query_chain, query_chain_admin, query_chain_at_index,
    query_chain_count, query_chain_identifier, query_config, query_contenthash, query_data,
    query_display_name, query_is_authorized, query_is_operator, query_label_hash,
    query_list_chains, query_supported_data_keys, query_supported_text_keys, query_text,
};
use crate::resolve::{resolve, supports_interface};
use crate::state::{Config, CHAIN_COUNT, CONFIG};
use cns::registry::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response};
use cw2::set_contract_version;

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:chain-registry";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_COIN_TYPE: u64 = 60;
const DEFAULT_MIN_IDENTIFIER_LENGTH: u32 = 7;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    let owner = match msg.owner {
        Some(owner) => deps.api.addr_validate(&owner)?,
        None => info.sender,
    };
    let config = Config {
        owner: owner.clone(),
        default_coin_type: msg.default_coin_type.unwrap_or(DEFAULT_COIN_TYPE),
        min_identifier_length: msg
            .min_identifier_length
            .unwrap_or(DEFAULT_MIN_IDENTIFIER_LENGTH),
    };
    CONFIG.save(deps.storage, &config)?;
    CHAIN_COUNT.save(deps.storage, &0)?;
    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", owner)
        .add_attribute("default_coin_type", config.default_coin_type.to_string())
        .add_attribute(
            "min_identifier_length",
            config.min_identifier_length.to_string(),
        ))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Only registry owner
        ExecuteMsg::Register {
            label,
            display_name,
            admin,
            chain_identifier,
        } => register(deps, env, info, label, display_name, admin, chain_identifier),
        ExecuteMsg::BatchRegister { items } => batch_register(deps, env, info, items),
        ExecuteMsg::RegisterAlias { alias, canonical } => {
            register_alias(deps, env, info, alias, canonical)
        }
        ExecuteMsg::RemoveAlias { alias } => remove_alias(deps, env, info, alias),
        ExecuteMsg::BatchRegisterAlias {
            aliases,
            canonicals,
        } => batch_register_alias(deps, env, info, aliases, canonicals),
        ExecuteMsg::BatchRemoveAlias { aliases } => batch_remove_alias(deps, env, info, aliases),
        ExecuteMsg::SetConfig {
            owner,
            default_coin_type,
            min_identifier_length,
        } => set_config(deps, env, info, owner, default_coin_type, min_identifier_length),

        // Label admin or operator
        ExecuteMsg::SetChainAdmin { node, admin } => set_chain_admin(deps, env, info, node, admin),
        ExecuteMsg::SetAddr {
            node,
            coin_type,
            address,
        } => set_addr(deps, env, info, node, coin_type, address),
        ExecuteMsg::SetText { node, key, value } => set_text(deps, env, info, node, key, value),
        ExecuteMsg::SetData { node, key, data } => set_data(deps, env, info, node, key, data),
        ExecuteMsg::SetContenthash { node, hash } => set_contenthash(deps, env, info, node, hash),

        // User
        ExecuteMsg::SetOperator { operator, approved } => {
            set_operator(deps, env, info, operator, approved)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    let res = match msg {
        QueryMsg::Resolve { name, data } => to_json_binary(&resolve(deps, name, data)?),
        QueryMsg::SupportsInterface { interface_id } => {
            to_json_binary(&supports_interface(interface_id))
        }

        QueryMsg::ChainIdentifier { node } => to_json_binary(&query_chain_identifier(deps, node)?),
        QueryMsg::DisplayName { chain_identifier } => {
            to_json_binary(&query_display_name(deps, chain_identifier)?)
        }
        QueryMsg::ChainAdmin { node } => to_json_binary(&query_chain_admin(deps, node)?),
        QueryMsg::GetChain { node } => to_json_binary(&query_chain(deps, node)?),
        QueryMsg::GetCanonical { node } => to_json_binary(&query_canonical(deps, node)?),

        QueryMsg::ChainCount {} => to_json_binary(&query_chain_count(deps)?),
        QueryMsg::ChainAtIndex { index } => to_json_binary(&query_chain_at_index(deps, index)?),
        QueryMsg::ListChains { start_after, limit } => {
            to_json_binary(&query_list_chains(deps, start_after, limit)?)
        }

        QueryMsg::SupportedTextKeys { node } => {
            to_json_binary(&query_supported_text_keys(deps, node)?)
        }
        QueryMsg::SupportedDataKeys { node } => {
            to_json_binary(&query_supported_data_keys(deps, node)?)
        }

        QueryMsg::Addr { node, coin_type } => to_json_binary(&query_addr(deps, node, coin_type)?),
        QueryMsg::Text { node, key } => to_json_binary(&query_text(deps, node, key)?),
        QueryMsg::Data { node, key } => to_json_binary(&query_data(deps, node, key)?),
        QueryMsg::Contenthash { node } => to_json_binary(&query_contenthash(deps, node)?),

        QueryMsg::IsAuthorized { node, address } => {
            to_json_binary(&query_is_authorized(deps, node, address)?)
        }
        QueryMsg::IsOperator { admin, operator } => {
            to_json_binary(&query_is_operator(deps, admin, operator)?)
        }
        QueryMsg::LabelHash { label } => to_json_binary(&query_label_hash(label)),
        QueryMsg::GetConfig {} => to_json_binary(&query_config(deps)?),
    };
    Ok(res?)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new()
        .add_attribute("method", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
