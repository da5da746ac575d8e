//! Resolution of compiled contracts from Hardhat artifacts, and the
//! factories that turn them into deployment bytecode

use std::{
    fs,
    path::{Path, PathBuf},
};

use alloy::{
    json_abi::{JsonAbi, Param},
    primitives::Bytes,
};
use serde::Deserialize;

use crate::{
    constants::{ADDRESS_ABI_TYPE, CONTRACTS_ARTIFACTS_SUBDIR, JSON_EXTENSION, SOLIDITY_EXTENSION},
    errors::ScriptError,
    types::{ConstructorArgs, StakingContract},
};

/// The subset of a Hardhat compilation artifact needed for deployment
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractArtifact {
    /// The name of the compiled contract
    pub contract_name: String,
    /// The contract's ABI
    pub abi: JsonAbi,
    /// The contract's creation bytecode, without constructor arguments
    pub bytecode: Bytes,
}

impl ContractArtifact {
    /// Parse an artifact from its JSON representation
    pub fn from_json(json: &str) -> Result<Self, ScriptError> {
        serde_json::from_str(json).map_err(|e| ScriptError::ArtifactParsing(e.to_string()))
    }

    /// Read and parse the artifact at the given path
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let contents = fs::read_to_string(path).map_err(|e| {
            ScriptError::ArtifactResolution(format!("{}: {}", path.display(), e))
        })?;

        Self::from_json(&contents)
    }
}

/// The path of a contract's artifact, following Hardhat's
/// `contracts/<Name>.sol/<Name>.json` layout
pub fn artifact_path(artifacts_dir: &Path, contract_name: &str) -> PathBuf {
    artifacts_dir
        .join(CONTRACTS_ARTIFACTS_SUBDIR)
        .join(format!("{contract_name}.{SOLIDITY_EXTENSION}"))
        .join(format!("{contract_name}.{JSON_EXTENSION}"))
}

/// A handle able to construct one contract of the staking suite
#[derive(Clone, Debug)]
pub struct ContractFactory {
    /// The contract this factory deploys
    contract: StakingContract,
    /// The compiled contract
    artifact: ContractArtifact,
}

impl ContractFactory {
    /// Create a factory for the given contract, checking that the artifact
    /// is the one expected and that it is deployable
    pub fn new(contract: StakingContract, artifact: ContractArtifact) -> Result<Self, ScriptError> {
        if artifact.contract_name != contract.artifact_name() {
            return Err(ScriptError::ArtifactResolution(format!(
                "expected artifact for `{}`, found `{}`",
                contract.artifact_name(),
                artifact.contract_name
            )));
        }

        // Interfaces and abstract contracts compile to empty bytecode
        if artifact.bytecode.is_empty() {
            return Err(ScriptError::ArtifactResolution(format!(
                "`{}` has no creation bytecode",
                artifact.contract_name
            )));
        }

        Ok(Self { contract, artifact })
    }

    /// The contract this factory deploys
    pub fn contract(&self) -> StakingContract {
        self.contract
    }

    /// Build the payload of the contract creation transaction: the creation
    /// bytecode followed by the ABI-encoded constructor arguments
    pub fn deploy_code(&self, args: &ConstructorArgs) -> Result<Bytes, ScriptError> {
        self.check_constructor(args)?;

        let mut code = self.artifact.bytecode.to_vec();
        code.extend(args.abi_encode());
        Ok(code.into())
    }

    /// Check the artifact's constructor signature against the supplied arguments
    fn check_constructor(&self, args: &ConstructorArgs) -> Result<(), ScriptError> {
        let inputs: &[Param] = self
            .artifact
            .abi
            .constructor
            .as_ref()
            .map(|constructor| constructor.inputs.as_slice())
            .unwrap_or_default();

        if inputs.len() != args.len() {
            return Err(ScriptError::ArtifactResolution(format!(
                "`{}` constructor takes {} arguments, {} supplied",
                self.artifact.contract_name,
                inputs.len(),
                args.len()
            )));
        }

        if let Some(param) = inputs.iter().find(|param| param.ty != ADDRESS_ABI_TYPE) {
            return Err(ScriptError::ArtifactResolution(format!(
                "`{}` constructor parameter `{}` has type `{}`, expected `{}`",
                self.artifact.contract_name, param.name, param.ty, ADDRESS_ABI_TYPE
            )));
        }

        Ok(())
    }
}

/// Build an artifact for the given contract with a constructor matching the
/// one the staking suite expects
#[cfg(test)]
pub(crate) fn mock_artifact(contract: StakingContract) -> ContractArtifact {
    let params: &[&str] = match contract {
        StakingContract::Gold => &[],
        StakingContract::Staking => &["gold"],
        StakingContract::StakingReserve => &["gold", "staking"],
    };
    mock_artifact_with_params(contract.artifact_name(), params, "0x6080604052")
}

/// Build an artifact with the given name, address constructor params, and bytecode
#[cfg(test)]
pub(crate) fn mock_artifact_with_params(
    name: &str,
    params: &[&str],
    bytecode: &str,
) -> ContractArtifact {
    let inputs = params
        .iter()
        .map(|p| format!(r#"{{"name":"{p}","type":"address","internalType":"address"}}"#))
        .collect::<Vec<_>>()
        .join(",");

    let json = format!(
        r#"{{
            "_format": "hh-sol-artifact-1",
            "contractName": "{name}",
            "sourceName": "contracts/{name}.sol",
            "abi": [
                {{"type":"constructor","inputs":[{inputs}],"stateMutability":"nonpayable"}}
            ],
            "bytecode": "{bytecode}",
            "deployedBytecode": "0x",
            "linkReferences": {{}},
            "deployedLinkReferences": {{}}
        }}"#
    );

    ContractArtifact::from_json(&json).unwrap()
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use alloy::primitives::Address;

    use super::{artifact_path, mock_artifact, mock_artifact_with_params, ContractFactory};
    use crate::{
        errors::ScriptError,
        types::{ConstructorArgs, StakingContract},
    };

    #[test]
    fn test_artifact_path_follows_hardhat_layout() {
        let path = artifact_path(Path::new("artifacts"), "StakingReserve");
        assert_eq!(
            path,
            Path::new("artifacts/contracts/StakingReserve.sol/StakingReserve.json")
        );
    }

    #[test]
    fn test_deploy_code_appends_constructor_args() {
        let factory =
            ContractFactory::new(StakingContract::Staking, mock_artifact(StakingContract::Staking))
                .unwrap();
        let gold = Address::repeat_byte(0xaa);

        let code = factory.deploy_code(&ConstructorArgs::new(vec![gold])).unwrap();

        assert_eq!(&code[..5], &[0x60, 0x80, 0x60, 0x40, 0x52]);
        assert_eq!(code.len(), 5 + 32);
        assert_eq!(&code[code.len() - 20..], gold.as_slice());
    }

    #[test]
    fn test_wrong_argument_count_rejected() {
        let factory = ContractFactory::new(
            StakingContract::StakingReserve,
            mock_artifact(StakingContract::StakingReserve),
        )
        .unwrap();

        let res = factory.deploy_code(&ConstructorArgs::new(vec![Address::ZERO]));
        assert!(matches!(res, Err(ScriptError::ArtifactResolution(_))));
    }

    #[test]
    fn test_non_address_parameter_rejected() {
        let json = r#"{
            "contractName": "Staking",
            "abi": [{"type":"constructor","inputs":[{"name":"rate","type":"uint256"}],"stateMutability":"nonpayable"}],
            "bytecode": "0x6080"
        }"#;
        let artifact = super::ContractArtifact::from_json(json).unwrap();
        let factory = ContractFactory::new(StakingContract::Staking, artifact).unwrap();

        let res = factory.deploy_code(&ConstructorArgs::new(vec![Address::ZERO]));
        assert!(matches!(res, Err(ScriptError::ArtifactResolution(_))));
    }

    #[test]
    fn test_mismatched_artifact_name_rejected() {
        let res = ContractFactory::new(StakingContract::Gold, mock_artifact(StakingContract::Staking));
        assert!(matches!(res, Err(ScriptError::ArtifactResolution(_))));
    }

    #[test]
    fn test_empty_bytecode_rejected() {
        let artifact = mock_artifact_with_params("Gold", &[], "0x");
        let res = ContractFactory::new(StakingContract::Gold, artifact);
        assert!(matches!(res, Err(ScriptError::ArtifactResolution(_))));
    }

    #[test]
    fn test_malformed_artifact_is_a_parse_error() {
        let res = super::ContractArtifact::from_json(r#"{"contractName": "Gold"}"#);
        assert!(matches!(res, Err(ScriptError::ArtifactParsing(_))));
    }

    #[test]
    fn test_missing_artifact_is_a_resolution_error() {
        let path = artifact_path(Path::new("/nonexistent-artifacts"), "Gold");
        let res = super::ContractArtifact::load(&path);
        assert!(matches!(res, Err(ScriptError::ArtifactResolution(_))));
    }
}
