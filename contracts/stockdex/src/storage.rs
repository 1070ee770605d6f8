//! Storage helpers. Protocol-wide records live in instance storage; one
//! proposal record per fingerprint lives in persistent storage.

use soroban_sdk::{Address, BytesN, Env};

use crate::types::{DataKey, Perpetuals, Proposal};

pub fn get_upgrade_authority(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::UpgradeAuthority)
}

pub fn set_upgrade_authority(env: &Env, authority: &Address) {
    env.storage().instance().set(&DataKey::UpgradeAuthority, authority);
}

pub fn has_perpetuals(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Perpetuals)
}

pub fn get_perpetuals(env: &Env) -> Option<Perpetuals> {
    env.storage().instance().get(&DataKey::Perpetuals)
}

pub fn set_perpetuals(env: &Env, perpetuals: &Perpetuals) {
    env.storage().instance().set(&DataKey::Perpetuals, perpetuals);
}

pub fn get_proposal(env: &Env, proposal_id: &BytesN<32>) -> Option<Proposal> {
    env.storage()
        .persistent()
        .get(&DataKey::Proposal(proposal_id.clone()))
}

pub fn set_proposal(env: &Env, proposal: &Proposal) {
    env.storage()
        .persistent()
        .set(&DataKey::Proposal(proposal.id.clone()), proposal);
}
