//! Utilities for the deploy scripts.

use std::{fs, path::Path, str::FromStr};

use alloy::{
    network::EthereumWallet,
    primitives::Address,
    providers::{DynProvider, Provider, ProviderBuilder},
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};
use serde_json::{json, Value};
use tracing::info;

use crate::{constants::DEPLOYMENTS_KEY, errors::ScriptError};

/// Sets up a provider for the given RPC url which signs transactions
/// with the given private key
pub async fn setup_client(priv_key: &str, rpc_url: &str) -> Result<DynProvider, ScriptError> {
    let signer = PrivateKeySigner::from_str(priv_key)
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    let deployer = signer.address();

    let url = Url::parse(rpc_url).map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    let provider = ProviderBuilder::new()
        .wallet(EthereumWallet::from(signer))
        .on_http(url);

    let chain_id = provider
        .get_chain_id()
        .await
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    info!(chain_id, %deployer, rpc_url, "connected to network");

    Ok(DynProvider::new(provider))
}

/// Read and parse the JSON contents of a file
fn get_json_from_file(file_path: &Path) -> Result<Value, ScriptError> {
    let contents =
        fs::read_to_string(file_path).map_err(|e| ScriptError::ReadDeployments(e.to_string()))?;

    serde_json::from_str(&contents).map_err(|e| ScriptError::ReadDeployments(e.to_string()))
}

/// Read the address recorded for the given contract in the deployments file
pub fn read_deployment(file_path: &Path, contract_key: &str) -> Result<Address, ScriptError> {
    let parsed_json = get_json_from_file(file_path)?;

    let addr_str = parsed_json[DEPLOYMENTS_KEY][contract_key]
        .as_str()
        .ok_or_else(|| {
            ScriptError::ReadDeployments(format!(
                "no address for `{}` in {}",
                contract_key,
                file_path.display()
            ))
        })?;

    Address::from_str(addr_str).map_err(|e| ScriptError::ReadDeployments(e.to_string()))
}

/// Record the address of a deployed contract in the deployments file,
/// creating the file if it does not exist
pub fn write_deployed_address(
    file_path: &Path,
    contract_key: &str,
    address: Address,
) -> Result<(), ScriptError> {
    let mut parsed_json = if file_path.exists() {
        get_json_from_file(file_path)?
    } else {
        json!({})
    };

    // Indexing into anything but an object or null would panic
    let deployments_is_object = parsed_json
        .get(DEPLOYMENTS_KEY)
        .map_or(parsed_json.is_object(), Value::is_object);
    if !deployments_is_object {
        return Err(ScriptError::WriteDeployments(format!(
            "`{}` in {} is not a JSON object",
            DEPLOYMENTS_KEY,
            file_path.display()
        )));
    }

    parsed_json[DEPLOYMENTS_KEY][contract_key] = Value::String(format!("{address:#x}"));

    let contents = serde_json::to_string_pretty(&parsed_json)
        .map_err(|e| ScriptError::WriteDeployments(e.to_string()))?;
    fs::write(file_path, contents).map_err(|e| ScriptError::WriteDeployments(e.to_string()))
}

/// Helpers for tests that read or write a deployments file
#[cfg(test)]
pub(crate) mod test_helpers {
    use std::{
        env, fs,
        path::PathBuf,
        process,
        sync::atomic::{AtomicUsize, Ordering},
    };

    /// Distinguishes the deployments files of concurrently running tests
    static FILE_COUNTER: AtomicUsize = AtomicUsize::new(0);

    /// A fresh, not yet existing deployments file path under the OS temp dir
    pub(crate) fn temp_deployments_path() -> PathBuf {
        let n = FILE_COUNTER.fetch_add(1, Ordering::Relaxed);
        let path = env::temp_dir().join(format!("deployments-{}-{}.json", process::id(), n));
        let _ = fs::remove_file(&path);
        path
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use alloy::primitives::Address;
    use serde_json::Value;

    use super::{read_deployment, test_helpers::temp_deployments_path, write_deployed_address};
    use crate::errors::ScriptError;

    #[test]
    fn test_write_then_read_deployments() {
        let path = temp_deployments_path();
        let gold = Address::repeat_byte(0x01);
        let staking = Address::repeat_byte(0x02);

        write_deployed_address(&path, "Gold", gold).unwrap();
        write_deployed_address(&path, "Staking", staking).unwrap();

        assert_eq!(read_deployment(&path, "Gold").unwrap(), gold);
        assert_eq!(read_deployment(&path, "Staking").unwrap(), staking);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_preserves_unrelated_keys() {
        let path = temp_deployments_path();
        fs::write(&path, r#"{"network": "sepolia", "deployments": {"Other": "0x00"}}"#).unwrap();

        write_deployed_address(&path, "Gold", Address::repeat_byte(0x03)).unwrap();

        let json: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["network"], "sepolia");
        assert_eq!(json["deployments"]["Other"], "0x00");
        assert_eq!(
            json["deployments"]["Gold"],
            "0x0303030303030303030303030303030303030303"
        );
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_rejects_non_object_deployments() {
        let path = temp_deployments_path();
        fs::write(&path, r#"{"deployments": []}"#).unwrap();

        let res = write_deployed_address(&path, "Gold", Address::ZERO);
        assert!(matches!(res, Err(ScriptError::WriteDeployments(_))));
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_read_missing_key() {
        let path = temp_deployments_path();
        write_deployed_address(&path, "Gold", Address::ZERO).unwrap();

        let res = read_deployment(&path, "StakingReserve");
        assert!(matches!(res, Err(ScriptError::ReadDeployments(_))));
        fs::remove_file(&path).unwrap();
    }
}
