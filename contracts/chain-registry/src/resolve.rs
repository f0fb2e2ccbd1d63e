use crate::auth::resolve_node;
use crate::error::ContractError;
use crate::query::{address_of, contenthash_of, data_of, text_of};
use crate::state::CONFIG;
use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::{sol, SolCall, SolValue};
use cns::registry::{ResolveResponse, SupportsInterfaceResponse};
use cns::utils::{decode_name, keccak256, ROOT_NODE};
use cosmwasm_std::{Binary, Deps};

sol! {
    interface IChainResolver {
        function addr(bytes32 node) external view returns (address);
        function addr(bytes32 node, uint256 coinType) external view returns (bytes memory);
        function contenthash(bytes32 node) external view returns (bytes memory);
        function text(bytes32 node, string calldata key) external view returns (string memory);
        function data(bytes32 node, string calldata key) external view returns (bytes memory);
    }

    interface IExtendedResolver {
        function resolve(bytes calldata name, bytes calldata data) external view returns (bytes memory);
    }

    interface IERC165 {
        function supportsInterface(bytes4 interfaceID) external view returns (bool);
    }
}

use self::IChainResolver::{addr_0Call, addr_1Call, contenthashCall, dataCall, textCall};

/// Queries understood by `resolve`. The node argument inside the calldata is
/// ignored: the node comes from the leading label of the DNS name.
#[derive(Clone, Debug, PartialEq)]
pub enum ResolverCall {
    Addr,
    AddrByCoinType { coin_type: U256 },
    Contenthash,
    Text { key: String },
    Data { key: String },
    Unsupported,
}

impl ResolverCall {
    pub fn parse(data: &[u8]) -> Self {
        let selector = match data.get(..4) {
            Some(selector) => selector,
            None => return ResolverCall::Unsupported,
        };
        let call = if selector == addr_0Call::SELECTOR {
            addr_0Call::abi_decode(data, true).map(|_| ResolverCall::Addr)
        } else if selector == addr_1Call::SELECTOR {
            addr_1Call::abi_decode(data, true).map(|call| ResolverCall::AddrByCoinType {
                coin_type: call.coinType,
            })
        } else if selector == contenthashCall::SELECTOR {
            contenthashCall::abi_decode(data, true).map(|_| ResolverCall::Contenthash)
        } else if selector == textCall::SELECTOR {
            textCall::abi_decode(data, true).map(|call| ResolverCall::Text { key: call.key })
        } else if selector == dataCall::SELECTOR {
            dataCall::abi_decode(data, true).map(|call| ResolverCall::Data { key: call.key })
        } else {
            return ResolverCall::Unsupported;
        };
        call.unwrap_or(ResolverCall::Unsupported)
    }
}

pub fn resolve(deps: Deps, name: Binary, data: Binary) -> Result<ResolveResponse, ContractError> {
    let labels = decode_name(name.as_slice())?;
    let node = match labels.first() {
        Some(label) => keccak256(label),
        None => ROOT_NODE.to_vec(),
    };
    let node = resolve_node(deps.storage, &node)?;

    let encoded = match ResolverCall::parse(data.as_slice()) {
        ResolverCall::Addr => {
            let coin_type = CONFIG.load(deps.storage)?.default_coin_type;
            let raw = address_of(deps.storage, &node, coin_type)?;
            let address = if raw.len() == 20 {
                Address::from_slice(&raw)
            } else {
                Address::ZERO
            };
            address.abi_encode()
        }
        ResolverCall::AddrByCoinType { coin_type } => {
            let raw = match u64::try_from(coin_type) {
                Ok(coin_type) => address_of(deps.storage, &node, coin_type)?,
                Err(_) => Vec::new(),
            };
            Bytes::from(raw).abi_encode()
        }
        ResolverCall::Contenthash => Bytes::from(contenthash_of(deps.storage, &node)?).abi_encode(),
        ResolverCall::Text { key } => text_of(deps.storage, &node, &key)?.abi_encode(),
        ResolverCall::Data { key } => Bytes::from(data_of(deps.storage, &node, &key)?).abi_encode(),
        ResolverCall::Unsupported => Vec::new(),
    };
    Ok(ResolveResponse {
        data: Binary::from(encoded),
    })
}

pub fn supported_interfaces() -> [[u8; 4]; 7] {
    [
        IERC165::supportsInterfaceCall::SELECTOR,
        IExtendedResolver::resolveCall::SELECTOR,
        addr_0Call::SELECTOR,
        addr_1Call::SELECTOR,
        contenthashCall::SELECTOR,
        textCall::SELECTOR,
        dataCall::SELECTOR,
    ]
}

pub fn supports_interface(interface_id: Binary) -> SupportsInterfaceResponse {
    let supported = supported_interfaces()
        .iter()
        .any(|id| id.as_slice() == interface_id.as_slice());
    SupportsInterfaceResponse { supported }
}
