//! Type definitions used throughout the scripts

use std::fmt::{self, Display};

use alloy::{dyn_abi::DynSolValue, primitives::Address};
use clap::ValueEnum;

use crate::constants::{GOLD_CONTRACT_NAME, STAKING_CONTRACT_NAME, STAKING_RESERVE_CONTRACT_NAME};

/// The contracts of the staking suite, in deployment order
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum StakingContract {
    /// The Gold ERC20 token
    Gold,
    /// The staking contract, parameterized by the Gold token
    Staking,
    /// The reserve paying out staking rewards, parameterized by the
    /// Gold token and the staking contract
    StakingReserve,
}

impl StakingContract {
    /// The name of the contract in the compilation artifacts and the deployments file
    pub fn artifact_name(&self) -> &'static str {
        match self {
            StakingContract::Gold => GOLD_CONTRACT_NAME,
            StakingContract::Staking => STAKING_CONTRACT_NAME,
            StakingContract::StakingReserve => STAKING_RESERVE_CONTRACT_NAME,
        }
    }

    /// The name under which the deployed address is reported to the operator
    pub fn label(&self) -> &'static str {
        match self {
            StakingContract::Gold => "Gold",
            StakingContract::Staking => "Staking",
            StakingContract::StakingReserve => "Reserve",
        }
    }
}

impl Display for StakingContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StakingContract::Gold => write!(f, "gold"),
            StakingContract::Staking => write!(f, "staking"),
            StakingContract::StakingReserve => write!(f, "staking-reserve"),
        }
    }
}

/// The constructor arguments of a staking suite contract.
///
/// Every constructor in the suite takes only the addresses of
/// previously deployed contracts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConstructorArgs(Vec<Address>);

impl ConstructorArgs {
    /// Arguments for a constructor taking no parameters
    pub fn none() -> Self {
        Self::default()
    }

    /// Arguments for a constructor taking the given addresses, in order
    pub fn new(addresses: Vec<Address>) -> Self {
        Self(addresses)
    }

    /// The addresses passed to the constructor
    pub fn addresses(&self) -> &[Address] {
        &self.0
    }

    /// The number of constructor arguments
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the constructor takes no arguments
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// ABI-encode the arguments as they are appended to the creation bytecode
    pub fn abi_encode(&self) -> Vec<u8> {
        DynSolValue::Tuple(self.0.iter().copied().map(DynSolValue::Address).collect())
            .abi_encode_params()
    }
}

/// The addresses of a fully deployed staking suite
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StakingDeployment {
    /// The Gold token address
    pub gold: Address,
    /// The staking contract address
    pub staking: Address,
    /// The staking reserve address
    pub reserve: Address,
}
