pub mod contract;
pub mod error;
pub mod state;

pub mod actions {
    pub mod execute;
    pub mod instantiate;
    pub mod migrate;
    pub mod query;
}

pub use crate::error::ContractError;
