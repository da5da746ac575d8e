//! Implementations of the deploy scripts

use std::{io::Write, path::Path, str::FromStr};

use alloy::primitives::Address;
use tracing::{info, warn};

use crate::{
    cli::DeployContractArgs,
    deployer::DeployClient,
    errors::ScriptError,
    types::{ConstructorArgs, StakingContract, StakingDeployment},
    utils::write_deployed_address,
};

/// Deploy the full staking suite: the Gold token, then the staking contract
/// over it, then the reserve over both.
///
/// Each deployment is confirmed and reported to `out` before the next one is
/// started. A failure aborts the remaining deployments; contracts deployed
/// before it are left in place.
pub async fn deploy_staking(
    client: &impl DeployClient,
    deployments_path: Option<&Path>,
    out: &mut impl Write,
) -> Result<StakingDeployment, ScriptError> {
    let gold = deploy_and_report(
        client,
        StakingContract::Gold,
        ConstructorArgs::none(),
        deployments_path,
        out,
    )
    .await?;

    let staking = deploy_and_report(
        client,
        StakingContract::Staking,
        ConstructorArgs::new(vec![gold]),
        deployments_path,
        out,
    )
    .await?;

    let reserve = deploy_and_report(
        client,
        StakingContract::StakingReserve,
        ConstructorArgs::new(vec![gold, staking]),
        deployments_path,
        out,
    )
    .await?;

    Ok(StakingDeployment {
        gold,
        staking,
        reserve,
    })
}

/// Deploy a single contract of the staking suite against already-deployed
/// dependencies
pub async fn deploy_contract(
    args: DeployContractArgs,
    client: &impl DeployClient,
    deployments_path: Option<&Path>,
    out: &mut impl Write,
) -> Result<Address, ScriptError> {
    let constructor_args = constructor_args_for(&args)?;
    deploy_and_report(client, args.contract, constructor_args, deployments_path, out).await
}

/// Resolve, deploy, and report a single contract
async fn deploy_and_report(
    client: &impl DeployClient,
    contract: StakingContract,
    args: ConstructorArgs,
    deployments_path: Option<&Path>,
    out: &mut impl Write,
) -> Result<Address, ScriptError> {
    info!(%contract, args = ?args.addresses(), "deploying contract");

    let factory = client.factory(contract)?;
    let address = client.deploy(&factory, &args).await?;

    writeln!(out, "{} deployed to: {}", contract.label(), address)
        .map_err(|e| ScriptError::Report(e.to_string()))?;

    if let Some(path) = deployments_path {
        write_deployed_address(path, contract.artifact_name(), address)?;
    }

    Ok(address)
}

/// Build the constructor arguments of a single contract from the
/// dependency addresses given on the command line
fn constructor_args_for(args: &DeployContractArgs) -> Result<ConstructorArgs, ScriptError> {
    match args.contract {
        StakingContract::Gold => {
            if args.gold.is_some() || args.staking.is_some() {
                warn!("`gold` takes no constructor arguments, ignoring supplied addresses");
            }
            Ok(ConstructorArgs::none())
        }
        StakingContract::Staking => {
            let gold = parse_required_address("gold", args.gold.as_deref())?;
            Ok(ConstructorArgs::new(vec![gold]))
        }
        StakingContract::StakingReserve => {
            let gold = parse_required_address("gold", args.gold.as_deref())?;
            let staking = parse_required_address("staking", args.staking.as_deref())?;
            Ok(ConstructorArgs::new(vec![gold, staking]))
        }
    }
}

/// Parse a dependency address that must have been supplied
fn parse_required_address(name: &str, address: Option<&str>) -> Result<Address, ScriptError> {
    let address = address.ok_or_else(|| {
        ScriptError::CalldataConstruction(format!("missing `--{}` address", name))
    })?;

    Address::from_str(address).map_err(|e| ScriptError::CalldataConstruction(e.to_string()))
}
