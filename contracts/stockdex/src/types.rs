use soroban_sdk::{contracttype, Address, BytesN, String, Symbol, Vec};

use crate::permissions::Permissions;
use crate::signer_set::SignerSet;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    UpgradeAuthority,
    Perpetuals,
    Proposal(BytesN<32>),
}

/// Parameters of the one-time `Initialize` action.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitParams {
    pub permissions: Permissions,
    pub signers: Vec<Address>,
    pub min_signatures: u32,
    /// Maximum proposal age in seconds; `None` disables expiry.
    pub proposal_ttl: Option<u64>,
}

/// A privileged action that must reach quorum before it is applied.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Action {
    Initialize(InitParams),
    SetPermission(Symbol, bool),
    SetPermissions(Permissions),
    SetSignerSet(Vec<Address>, u32),
    /// Registers a liquidity pool by name.
    AddPool(String),
}

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ProposalStatus {
    Pending = 0,
    Executed = 1,
    Expired = 2,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub id: BytesN<32>,
    pub action: Action,
    pub nonce: u64,
    pub proposer: Address,
    pub approvals: Vec<Address>,
    pub status: ProposalStatus,
    pub created_at: u64,
    pub expires_at: Option<u64>,
    pub executed_at: Option<u64>,
}

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ExecutionOutcome {
    Executed = 0,
    /// Still collecting approvals; not an error.
    QuorumNotReached = 1,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SubmitReceipt {
    pub proposal_id: BytesN<32>,
    pub outcome: ExecutionOutcome,
    pub approvals: u32,
    pub min_signatures: u32,
}

/// Global protocol state.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Perpetuals {
    pub permissions: Permissions,
    pub signer_set: SignerSet,
    pub proposal_ttl: Option<u64>,
    pub pools: Vec<String>,
    pub inception_time: u64,
}
