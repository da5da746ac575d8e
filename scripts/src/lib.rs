//! Scripts for deploying the Gold token and its staking contracts.

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod artifacts;
pub mod cli;
mod commands;
pub mod constants;
pub mod deployer;
pub mod errors;
pub mod types;
pub mod utils;

pub use commands::{deploy_contract, deploy_staking};
