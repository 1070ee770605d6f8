//! Proposal state machine: `Absent -> Pending -> Executed`, or
//! `Pending -> Expired` once a proposal outlives its TTL.
//!
//! A failing contract call rolls back its writes, so `Expired` is never
//! persisted; it is derived from the ledger clock whenever a proposal is read.

use soroban_sdk::{log, xdr::ToXdr, Address, BytesN, Env, Vec};

use crate::errors::StockdexError;
use crate::events::{ProposalApproved, ProposalCreated};
use crate::signer_set::SignerSet;
use crate::storage;
use crate::types::{Action, ExecutionOutcome, Proposal, ProposalStatus};

/// Deterministic proposal id binding an action, its parameters and a
/// caller-chosen nonce.
pub fn fingerprint(env: &Env, action: &Action, nonce: u64) -> BytesN<32> {
    let payload = (action.clone(), nonce).to_xdr(env);
    env.crypto().sha256(&payload).to_bytes()
}

pub fn status_of(env: &Env, proposal: &Proposal) -> ProposalStatus {
    match (proposal.status, proposal.expires_at) {
        (ProposalStatus::Pending, Some(expires_at)) if env.ledger().timestamp() > expires_at => {
            ProposalStatus::Expired
        }
        (status, _) => status,
    }
}

fn ensure_pending(env: &Env, proposal: &Proposal) -> Result<(), StockdexError> {
    match status_of(env, proposal) {
        ProposalStatus::Pending => Ok(()),
        ProposalStatus::Executed => Err(StockdexError::AlreadyExecuted),
        ProposalStatus::Expired => Err(StockdexError::ProposalExpired),
    }
}

pub fn propose(
    env: &Env,
    signers: &SignerSet,
    proposal_id: &BytesN<32>,
    action: &Action,
    nonce: u64,
    caller: &Address,
    ttl: Option<u64>,
) -> Result<Proposal, StockdexError> {
    if !signers.contains(caller) {
        return Err(StockdexError::UnauthorizedSigner);
    }

    if let Some(existing) = storage::get_proposal(env, proposal_id) {
        ensure_pending(env, &existing)?;
        return Err(StockdexError::DuplicateProposal);
    }

    let created_at = env.ledger().timestamp();
    let mut approvals = Vec::new(env);
    approvals.push_back(caller.clone());

    let proposal = Proposal {
        id: proposal_id.clone(),
        action: action.clone(),
        nonce,
        proposer: caller.clone(),
        approvals,
        status: ProposalStatus::Pending,
        created_at,
        expires_at: ttl.map(|ttl| created_at + ttl),
        executed_at: None,
    };
    storage::set_proposal(env, &proposal);

    log!(env, "proposal created by {}", caller.clone());
    ProposalCreated {
        proposal_id: proposal_id.clone(),
        proposer: caller.clone(),
        nonce,
    }
    .publish(env);

    Ok(proposal)
}

/// Records `caller`'s approval. Approving twice leaves the proposal as is.
pub fn approve(
    env: &Env,
    signers: &SignerSet,
    proposal_id: &BytesN<32>,
    caller: &Address,
) -> Result<Proposal, StockdexError> {
    if !signers.contains(caller) {
        return Err(StockdexError::UnauthorizedSigner);
    }

    let mut proposal =
        storage::get_proposal(env, proposal_id).ok_or(StockdexError::NoSuchProposal)?;
    ensure_pending(env, &proposal)?;

    if proposal.approvals.contains(caller) {
        return Ok(proposal);
    }

    proposal.approvals.push_back(caller.clone());
    storage::set_proposal(env, &proposal);

    ProposalApproved {
        proposal_id: proposal_id.clone(),
        signer: caller.clone(),
        approval_count: signers.count_approvals(&proposal.approvals),
    }
    .publish(env);

    Ok(proposal)
}

/// Marks the proposal executed when approvals from the *current* signers
/// reach the threshold. The caller applies the action on `Executed`.
pub fn try_execute(
    env: &Env,
    signers: &SignerSet,
    proposal_id: &BytesN<32>,
) -> Result<(ExecutionOutcome, Proposal), StockdexError> {
    let mut proposal =
        storage::get_proposal(env, proposal_id).ok_or(StockdexError::NoSuchProposal)?;
    ensure_pending(env, &proposal)?;

    if !signers.has_quorum(&proposal.approvals) {
        return Ok((ExecutionOutcome::QuorumNotReached, proposal));
    }

    proposal.status = ProposalStatus::Executed;
    proposal.executed_at = Some(env.ledger().timestamp());
    storage::set_proposal(env, &proposal);

    Ok((ExecutionOutcome::Executed, proposal))
}
