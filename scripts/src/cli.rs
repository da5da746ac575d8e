//! Definitions of CLI arguments and commands for deploy scripts

use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

use clap::{Args, Parser, Subcommand};

use crate::{
    commands::{deploy_contract, deploy_staking},
    constants::{
        DEFAULT_ARTIFACTS_DIR, DEFAULT_NUM_DEPLOY_CONFIRMATIONS, DEFAULT_RPC_URL,
        FAILURE_EXIT_STATUS, SUCCESS_EXIT_STATUS,
    },
    deployer::DeployClient,
    errors::ScriptError,
    types::StakingContract,
};

/// Deploy the Gold staking contracts to an EVM chain
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Private key of the deployer
    #[arg(short, long, env = "PKEY")]
    pub priv_key: String,

    /// Network RPC URL
    #[arg(short, long, env = "RPC_URL", default_value = DEFAULT_RPC_URL)]
    pub rpc_url: String,

    /// Root of the Hardhat compilation artifacts
    #[arg(short, long, env = "ARTIFACTS_DIR", default_value = DEFAULT_ARTIFACTS_DIR)]
    pub artifacts_dir: PathBuf,

    /// Number of block confirmations to await on each deployment
    #[arg(
        short,
        long,
        env = "CONFIRMATIONS",
        default_value_t = DEFAULT_NUM_DEPLOY_CONFIRMATIONS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub confirmations: u64,

    /// Path to a JSON file in which to record deployed addresses
    #[arg(short, long, env = "DEPLOYMENTS_PATH")]
    pub deployments_path: Option<PathBuf>,

    /// The script to run
    #[command(subcommand)]
    pub command: Command,
}

/// The deploy scripts
#[derive(Subcommand)]
pub enum Command {
    /// Deploy the Gold token, the staking contract, and the staking reserve, in order
    DeployStaking,
    /// Deploy a single contract of the staking suite
    DeployContract(DeployContractArgs),
}

impl Command {
    /// Run the command against the given client, reporting deployed addresses on stdout
    pub async fn run(
        self,
        client: &impl DeployClient,
        deployments_path: Option<&Path>,
    ) -> Result<(), ScriptError> {
        let mut stdout = io::stdout();
        match self {
            Command::DeployStaking => {
                deploy_staking(client, deployments_path, &mut stdout).await?;
            }
            Command::DeployContract(args) => {
                deploy_contract(args, client, deployments_path, &mut stdout).await?;
            }
        }

        Ok(())
    }
}

/// Deploy one contract of the staking suite.
///
/// The staking contract requires the Gold token address; the staking
/// reserve requires both the Gold token and staking contract addresses.
#[derive(Args)]
pub struct DeployContractArgs {
    /// The contract to deploy
    #[arg(short, long)]
    pub contract: StakingContract,

    /// Gold token address in hex
    #[arg(short, long)]
    pub gold: Option<String>,

    /// Staking contract address in hex
    #[arg(short, long)]
    pub staking: Option<String>,
}

/// Report the outcome of a command on `err`, returning the process exit status
pub fn exit_status(result: Result<(), ScriptError>, err: &mut impl Write) -> u8 {
    match result {
        Ok(()) => SUCCESS_EXIT_STATUS,
        Err(e) => {
            // Nothing is left to report a failed write to
            let _ = writeln!(err, "{e}");
            FAILURE_EXIT_STATUS
        }
    }
}
