use std::{io, process::ExitCode};

use clap::Parser;
use staking_scripts::{
    cli::{exit_status, Cli},
    deployer::RpcDeployer,
    errors::ScriptError,
    utils::setup_client,
};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt().pretty().with_writer(io::stderr).init();

    let status = exit_status(run().await, &mut io::stderr());
    ExitCode::from(status)
}

async fn run() -> Result<(), ScriptError> {
    let Cli {
        priv_key,
        rpc_url,
        artifacts_dir,
        confirmations,
        deployments_path,
        command,
    } = Cli::parse();

    let provider = setup_client(&priv_key, &rpc_url).await?;
    let deployer = RpcDeployer::new(provider, artifacts_dir, confirmations);

    command.run(&deployer, deployments_path.as_deref()).await
}
