mod auth;
pub mod contract;
mod error;
pub mod execute;
pub mod query;
pub mod resolve;
pub mod state;


pub use crate::error::ContractError;
