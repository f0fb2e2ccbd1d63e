pub mod registry;
pub mod utils;
