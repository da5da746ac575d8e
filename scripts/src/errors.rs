//! Definitions of errors that can occur during deployment of the staking contracts

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Errors that can occur during the execution of the deploy scripts
#[derive(Debug)]
pub enum ScriptError {
    /// Error initializing the RPC client or the deployer wallet
    ClientInitialization(String),
    /// Error locating a compiled contract, or a compiled contract that
    /// cannot be deployed with the arguments it is given
    ArtifactResolution(String),
    /// Error parsing a Hardhat compilation artifact
    ArtifactParsing(String),
    /// Error constructing constructor calldata for a contract
    CalldataConstruction(String),
    /// Error submitting a deployment or awaiting its confirmation
    ContractDeployment(String),
    /// A deployment transaction was mined but the constructor reverted
    ConstructorReverted(String),
    /// Error reading the deployments file
    ReadDeployments(String),
    /// Error writing the deployments file
    WriteDeployments(String),
    /// Error reporting a deployed address to the operator
    Report(String),
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::ClientInitialization(s) => write!(f, "error initializing client: {}", s),
            ScriptError::ArtifactResolution(s) => write!(f, "error resolving artifact: {}", s),
            ScriptError::ArtifactParsing(s) => write!(f, "error parsing artifact: {}", s),
            ScriptError::CalldataConstruction(s) => write!(f, "error constructing calldata: {}", s),
            ScriptError::ContractDeployment(s) => write!(f, "error deploying contract: {}", s),
            ScriptError::ConstructorReverted(s) => write!(f, "constructor reverted: {}", s),
            ScriptError::ReadDeployments(s) => write!(f, "error reading deployments: {}", s),
            ScriptError::WriteDeployments(s) => write!(f, "error writing deployments: {}", s),
            ScriptError::Report(s) => write!(f, "error reporting deployment: {}", s),
        }
    }
}

impl Error for ScriptError {}
