//! Constants used in the deploy scripts

/// The default RPC url, that of a local Hardhat or Anvil node
pub const DEFAULT_RPC_URL: &str = "http://localhost:8545";

/// The default root of the Hardhat compilation artifacts
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

/// The subdirectory of the artifacts root under which Hardhat places
/// the artifacts of the project's own sources
pub const CONTRACTS_ARTIFACTS_SUBDIR: &str = "contracts";

/// The extension of Solidity source files
pub const SOLIDITY_EXTENSION: &str = "sol";

/// The extension of compilation artifact files
pub const JSON_EXTENSION: &str = "json";

/// The default number of confirmations to wait for on each deployment transaction
pub const DEFAULT_NUM_DEPLOY_CONFIRMATIONS: u64 = 1;

/// The top-level key in the deployments file under which addresses are recorded
pub const DEPLOYMENTS_KEY: &str = "deployments";

/// The Solidity ABI type of every constructor parameter in the staking suite
pub const ADDRESS_ABI_TYPE: &str = "address";

/// The artifact name of the Gold token contract
pub const GOLD_CONTRACT_NAME: &str = "Gold";

/// The artifact name of the staking contract
pub const STAKING_CONTRACT_NAME: &str = "Staking";

/// The artifact name of the staking reserve contract
pub const STAKING_RESERVE_CONTRACT_NAME: &str = "StakingReserve";

/// The process exit status of a run in which every deployment succeeded
pub const SUCCESS_EXIT_STATUS: u8 = 0;

/// The process exit status of a run aborted by an error
pub const FAILURE_EXIT_STATUS: u8 = 1;
