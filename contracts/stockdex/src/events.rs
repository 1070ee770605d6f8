use soroban_sdk::{contractevent, Address, BytesN, String, Symbol};

use crate::permissions::Permissions;

#[contractevent(topics = ["Stockdex", "INIT"])]
pub struct Initialized {
    pub authority: Address,
    pub signers_count: u32,
    pub min_signatures: u32,
    pub timestamp: u64,
}

#[contractevent(topics = ["Stockdex", "PROPOSED"])]
pub struct ProposalCreated {
    pub proposal_id: BytesN<32>,
    pub proposer: Address,
    pub nonce: u64,
}

#[contractevent(topics = ["Stockdex", "APPROVED"])]
pub struct ProposalApproved {
    pub proposal_id: BytesN<32>,
    pub signer: Address,
    pub approval_count: u32,
}

#[contractevent(topics = ["Stockdex", "EXECUTED"])]
pub struct ProposalExecuted {
    pub proposal_id: BytesN<32>,
    pub approvals: u32,
    pub timestamp: u64,
}

#[contractevent(topics = ["Stockdex", "PERM_SET"])]
pub struct PermissionSet {
    pub action: Symbol,
    pub value: bool,
}

#[contractevent(topics = ["Stockdex", "PERMS_UPD"])]
pub struct PermissionsUpdated {
    pub permissions: Permissions,
}

#[contractevent(topics = ["Stockdex", "SIGNERS_UPD"])]
pub struct SignerSetUpdated {
    pub signers_count: u32,
    pub min_signatures: u32,
}

#[contractevent(topics = ["Stockdex", "POOL_ADD"])]
pub struct PoolAdded {
    pub name: String,
    pub pool_count: u32,
}
