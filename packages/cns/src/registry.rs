use cosmwasm_std::{Addr, Binary};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct InstantiateMsg {
    /// Registry owner, defaults to the sender
    pub owner: Option<String>,
    /// Coin type answered by the legacy `addr(bytes32)` selector, defaults to 60
    pub default_coin_type: Option<u64>,
    /// Shortest accepted chain identifier in bytes, defaults to 7
    pub min_identifier_length: Option<u32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct RegisterItem {
    pub label: String,
    pub display_name: String,
    pub admin: String,
    pub chain_identifier: Binary,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    // Only registry owner
    Register {
        label: String,
        display_name: String,
        admin: String,
        chain_identifier: Binary,
    },
    BatchRegister {
        items: Vec<RegisterItem>,
    },
    RegisterAlias {
        alias: String,
        canonical: Binary,
    },
    RemoveAlias {
        alias: String,
    },
    /// `aliases[i]` points at `canonicals[i]`
    BatchRegisterAlias {
        aliases: Vec<String>,
        canonicals: Vec<Binary>,
    },
    BatchRemoveAlias {
        aliases: Vec<String>,
    },
    SetConfig {
        owner: String,
        default_coin_type: u64,
        min_identifier_length: u32,
    },

    // Label admin or operator
    SetChainAdmin {
        node: Binary,
        admin: String,
    },
    /// Coin type defaults to the configured default coin type
    SetAddr {
        node: Binary,
        coin_type: Option<u64>,
        address: Binary,
    },
    SetText {
        node: Binary,
        key: String,
        value: String,
    },
    SetData {
        node: Binary,
        key: String,
        data: Binary,
    },
    SetContenthash {
        node: Binary,
        hash: Binary,
    },

    // Any sender, scoped to the sender as admin
    SetOperator {
        operator: String,
        approved: bool,
    },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    /// ENSIP-10 wildcard resolution. `name` is DNS encoded, `data` is ABI calldata.
    Resolve { name: Binary, data: Binary },
    SupportsInterface { interface_id: Binary },

    ChainIdentifier { node: Binary },
    /// Reverse lookup by chain identifier
    DisplayName { chain_identifier: Binary },
    ChainAdmin { node: Binary },
    GetChain { node: Binary },
    GetCanonical { node: Binary },

    ChainCount {},
    ChainAtIndex { index: u64 },
    ListChains {
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    SupportedTextKeys { node: Binary },
    SupportedDataKeys { node: Binary },

    Addr { node: Binary, coin_type: Option<u64> },
    Text { node: Binary, key: String },
    Data { node: Binary, key: String },
    Contenthash { node: Binary },

    IsAuthorized { node: Binary, address: String },
    IsOperator { admin: String, operator: String },
    LabelHash { label: String },
    GetConfig {},
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct ResolveResponse {
    /// ABI encoded result, empty for unsupported selectors
    pub data: Binary,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct SupportsInterfaceResponse {
    pub supported: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct ChainIdentifierResponse {
    pub chain_identifier: Binary,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct DisplayNameResponse {
    pub display_name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct AdminResponse {
    pub admin: Option<Addr>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct ChainInfo {
    pub node: Binary,
    pub label: String,
    pub display_name: String,
    pub chain_identifier: Binary,
    pub admin: Addr,
    /// Position in the enumeration index
    pub index: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct ChainResponse {
    pub chain: Option<ChainInfo>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct CanonicalResponse {
    pub canonical: Option<Binary>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct CountResponse {
    pub count: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct ChainEntryResponse {
    pub label: String,
    pub display_name: String,
    pub chain_identifier: Binary,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct ChainsResponse {
    /// In registration order. Use the last `index` as `start_after` for the next page.
    pub chains: Vec<ChainInfo>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct KeysResponse {
    pub keys: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct AddressResponse {
    pub address: Binary,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct TextResponse {
    pub value: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct DataResponse {
    pub data: Binary,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct ContentHashResponse {
    pub hash: Binary,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct AuthorizedResponse {
    pub authorized: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct OperatorResponse {
    pub is_operator: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct LabelHashResponse {
    pub node: Binary,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct ConfigResponse {
    pub owner: Addr,
    pub default_coin_type: u64,
    pub min_identifier_length: u32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct MigrateMsg {}
