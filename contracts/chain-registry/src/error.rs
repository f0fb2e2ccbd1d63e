use cns::utils::NameError;
use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("NotOwner: Sender is {sender}, but owner is {owner}.")]
    NotOwner { sender: String, owner: String },

    #[error("NotAuthorized: Sender {sender} is neither admin nor operator of {node}.")]
    NotAuthorized { sender: String, node: String },

    #[error("ImmutableRecord: {key} can only be written by registration.")]
    ImmutableRecord { key: String },

    #[error("EmptyLabel")]
    EmptyLabel {},

    #[error("EmptyDisplayName")]
    EmptyDisplayName {},

    #[error("IdentifierTooShort: chain identifier is {length} bytes, minimum is {min_length}.")]
    IdentifierTooShort { length: usize, min_length: u32 },

    #[error("LengthMismatch: {aliases} aliases but {canonicals} canonical nodes.")]
    LengthMismatch { aliases: usize, canonicals: usize },

    #[error("InvalidNodeLength: node must be 32 bytes, got {length}.")]
    InvalidNodeLength { length: usize },

    #[error("CanonicalNotRegistered: {node} has no chain record.")]
    CanonicalNotRegistered { node: String },

    #[error("AliasToAlias: {node} would chain one alias onto another.")]
    AliasToAlias { node: String },

    #[error("AliasShadowsChain: {node} cannot be both an alias and a registered chain.")]
    AliasShadowsChain { node: String },

    #[error("IndexOutOfRange: index {index}, count {count}.")]
    IndexOutOfRange { index: u64, count: u64 },

    #[error("MalformedName: invalid encoding at offset {offset}.")]
    MalformedName { offset: usize },

    #[error("ReservedLabel: admin of {node} cannot be changed.")]
    ReservedLabel { node: String },
}

impl From<NameError> for ContractError {
    fn from(err: NameError) -> Self {
        match err {
            NameError::Malformed { offset } => ContractError::MalformedName { offset },
        }
    }
}
