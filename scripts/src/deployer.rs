//! The network capability the deploy scripts are written against, and its
//! implementation over an RPC provider

use std::path::PathBuf;

use alloy::{
    network::TransactionBuilder,
    primitives::Address,
    providers::{DynProvider, Provider},
    rpc::types::TransactionRequest,
};
use async_trait::async_trait;
use tracing::{debug, info};

use crate::{
    artifacts::{artifact_path, ContractArtifact, ContractFactory},
    errors::ScriptError,
    types::{ConstructorArgs, StakingContract},
};

/// A client able to resolve contract factories and deploy contracts
#[async_trait]
pub trait DeployClient: Send + Sync {
    /// Resolve the factory for the given contract
    fn factory(&self, contract: StakingContract) -> Result<ContractFactory, ScriptError>;

    /// Deploy a contract from its factory with the given constructor arguments,
    /// returning its address once the deployment is confirmed
    async fn deploy(
        &self,
        factory: &ContractFactory,
        args: &ConstructorArgs,
    ) -> Result<Address, ScriptError>;
}

/// Deploys contracts from Hardhat artifacts on disk through a signing RPC provider
pub struct RpcDeployer {
    /// The provider, with the deployer's wallet attached
    provider: DynProvider,
    /// The root of the Hardhat compilation artifacts
    artifacts_dir: PathBuf,
    /// The number of confirmations to await on each deployment
    confirmations: u64,
}

impl RpcDeployer {
    /// Create a deployer over the given provider
    pub fn new(provider: DynProvider, artifacts_dir: PathBuf, confirmations: u64) -> Self {
        Self {
            provider,
            artifacts_dir,
            confirmations,
        }
    }
}

#[async_trait]
impl DeployClient for RpcDeployer {
    fn factory(&self, contract: StakingContract) -> Result<ContractFactory, ScriptError> {
        let path = artifact_path(&self.artifacts_dir, contract.artifact_name());
        debug!(%contract, path = %path.display(), "resolving contract artifact");

        let artifact = ContractArtifact::load(&path)?;
        ContractFactory::new(contract, artifact)
    }

    async fn deploy(
        &self,
        factory: &ContractFactory,
        args: &ConstructorArgs,
    ) -> Result<Address, ScriptError> {
        let contract = factory.contract();
        let tx = TransactionRequest::default().with_deploy_code(factory.deploy_code(args)?);

        let pending_tx = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;

        let tx_hash = *pending_tx.tx_hash();
        info!(%contract, %tx_hash, "deployment submitted, awaiting confirmation");

        // Only `watch` waits out the confirmation depth, `get_receipt` does not
        let tx_hash = pending_tx
            .with_required_confirmations(self.confirmations)
            .watch()
            .await
            .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;

        let receipt = self
            .provider
            .get_transaction_receipt(tx_hash)
            .await
            .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?
            .ok_or_else(|| {
                ScriptError::ContractDeployment(format!("no receipt for confirmed tx {}", tx_hash))
            })?;

        if !receipt.status() {
            return Err(ScriptError::ConstructorReverted(format!(
                "`{}` in tx {}",
                contract.artifact_name(),
                tx_hash
            )));
        }

        let address = receipt.contract_address.ok_or_else(|| {
            ScriptError::ConstructorReverted(format!(
                "no contract address in receipt of tx {}",
                tx_hash
            ))
        })?;

        info!(%contract, %address, gas_used = receipt.gas_used, "deployment confirmed");
        Ok(address)
    }
}
