use soroban_sdk::{contract, contractimpl, log, Address, BytesN, Env, String, Symbol, Vec};

use crate::errors::StockdexError;
use crate::events::{
    Initialized, PermissionSet, PermissionsUpdated, PoolAdded, ProposalExecuted, SignerSetUpdated,
};
use crate::multisig;
use crate::permissions::{Operation, Permissions};
use crate::signer_set::SignerSet;
use crate::storage;
use crate::types::{Action, ExecutionOutcome, InitParams, Perpetuals, Proposal, SubmitReceipt};

const MIN_PROPOSAL_TTL: u64 = 3600; // 1 hour
const MAX_PROPOSAL_TTL: u64 = 2_592_000; // 30 days
const MAX_POOL_NAME_LEN: u32 = 64;

#[contract]
pub struct Stockdex;

#[contractimpl]
impl Stockdex {
    pub fn __constructor(env: Env, upgrade_authority: Address) {
        storage::set_upgrade_authority(&env, &upgrade_authority);
    }

    /// Provisions the protocol. Equivalent to submitting
    /// `Action::Initialize(params)`; only the upgrade authority may call it.
    pub fn init(
        env: Env,
        caller: Address,
        params: InitParams,
        nonce: u64,
    ) -> Result<SubmitReceipt, StockdexError> {
        Self::submit(env, caller, Action::Initialize(params), nonce)
    }

    /// Single mutation path for privileged actions. The first submission of
    /// an `(action, nonce)` pair opens a proposal, later ones approve it, and
    /// every submission attempts execution.
    pub fn submit(
        env: Env,
        caller: Address,
        action: Action,
        nonce: u64,
    ) -> Result<SubmitReceipt, StockdexError> {
        caller.require_auth();

        let signers = Self::governing_set(&env, &action)?;
        Self::validate_action(&env, &action)?;

        let proposal_id = multisig::fingerprint(&env, &action, nonce);
        if storage::get_proposal(&env, &proposal_id).is_some() {
            multisig::approve(&env, &signers, &proposal_id, &caller)?;
        } else {
            let ttl = Self::proposal_ttl(&env, &action);
            multisig::propose(&env, &signers, &proposal_id, &action, nonce, &caller, ttl)?;
        }

        let (outcome, proposal) = Self::execute_with(&env, &signers, &proposal_id)?;
        Ok(SubmitReceipt {
            proposal_id,
            outcome,
            approvals: signers.count_approvals(&proposal.approvals),
            min_signatures: signers.min_signatures,
        })
    }

    /// Opens a proposal without attempting execution.
    pub fn propose(
        env: Env,
        caller: Address,
        action: Action,
        nonce: u64,
    ) -> Result<BytesN<32>, StockdexError> {
        caller.require_auth();

        let signers = Self::governing_set(&env, &action)?;
        Self::validate_action(&env, &action)?;

        let proposal_id = multisig::fingerprint(&env, &action, nonce);
        let ttl = Self::proposal_ttl(&env, &action);
        multisig::propose(&env, &signers, &proposal_id, &action, nonce, &caller, ttl)?;
        Ok(proposal_id)
    }

    /// Adds `caller`'s approval and returns the number of approvals that
    /// currently count towards quorum.
    pub fn approve(
        env: Env,
        caller: Address,
        proposal_id: BytesN<32>,
    ) -> Result<u32, StockdexError> {
        caller.require_auth();

        let action = storage::get_proposal(&env, &proposal_id)
            .ok_or(StockdexError::NoSuchProposal)?
            .action;
        let signers = Self::governing_set(&env, &action)?;
        let proposal = multisig::approve(&env, &signers, &proposal_id, &caller)?;
        Ok(signers.count_approvals(&proposal.approvals))
    }

    /// Executes the proposal if it has reached quorum. Anyone may call this;
    /// the approvals are what authorize the action.
    pub fn execute(env: Env, proposal_id: BytesN<32>) -> Result<ExecutionOutcome, StockdexError> {
        let action = storage::get_proposal(&env, &proposal_id)
            .ok_or(StockdexError::NoSuchProposal)?
            .action;
        let signers = Self::governing_set(&env, &action)?;
        let (outcome, _) = Self::execute_with(&env, &signers, &proposal_id)?;
        Ok(outcome)
    }

    pub fn proposal_id(env: Env, action: Action, nonce: u64) -> BytesN<32> {
        multisig::fingerprint(&env, &action, nonce)
    }

    /// Returns the proposal with its effective status, so a proposal past
    /// its TTL reads as `Expired`.
    pub fn get_proposal(env: Env, proposal_id: BytesN<32>) -> Result<Proposal, StockdexError> {
        let mut proposal =
            storage::get_proposal(&env, &proposal_id).ok_or(StockdexError::NoSuchProposal)?;
        proposal.status = multisig::status_of(&env, &proposal);
        Ok(proposal)
    }

    pub fn get_perpetuals(env: Env) -> Result<Perpetuals, StockdexError> {
        Self::perpetuals(&env)
    }

    pub fn get_permissions(env: Env) -> Result<Permissions, StockdexError> {
        Ok(Self::perpetuals(&env)?.permissions)
    }

    pub fn is_allowed(env: Env, action: Symbol) -> Result<bool, StockdexError> {
        Self::perpetuals(&env)?.permissions.get(&env, &action)
    }

    /// Guard for trading and withdrawal code: fails unless `action` is a
    /// known, enabled operation on an initialized protocol.
    pub fn require_allowed(env: Env, action: Symbol) -> Result<(), StockdexError> {
        if Self::perpetuals(&env)?.permissions.get(&env, &action)? {
            Ok(())
        } else {
            Err(StockdexError::ActionDisabled)
        }
    }

    pub fn get_pools(env: Env) -> Result<Vec<String>, StockdexError> {
        Ok(Self::perpetuals(&env)?.pools)
    }

    pub fn get_signers(env: Env) -> Result<Vec<Address>, StockdexError> {
        Ok(Self::perpetuals(&env)?.signer_set.signers)
    }

    pub fn min_signatures(env: Env) -> Result<u32, StockdexError> {
        Ok(Self::perpetuals(&env)?.signer_set.min_signatures)
    }

    pub fn is_signer(env: Env, identity: Address) -> bool {
        storage::get_perpetuals(&env)
            .map(|perpetuals| perpetuals.signer_set.contains(&identity))
            .unwrap_or(false)
    }

    pub fn upgrade_authority(env: Env) -> Result<Address, StockdexError> {
        Self::authority(&env)
    }
}

impl Stockdex {
    fn perpetuals(env: &Env) -> Result<Perpetuals, StockdexError> {
        storage::get_perpetuals(env).ok_or(StockdexError::NotInitialized)
    }

    fn authority(env: &Env) -> Result<Address, StockdexError> {
        storage::get_upgrade_authority(env).ok_or(StockdexError::NotInitialized)
    }

    /// Signer set whose quorum authorizes `action`. `Initialize` is governed
    /// by the upgrade authority alone and only until the protocol exists.
    fn governing_set(env: &Env, action: &Action) -> Result<SignerSet, StockdexError> {
        match action {
            Action::Initialize(_) => {
                if storage::has_perpetuals(env) {
                    return Err(StockdexError::AlreadyInitialized);
                }
                let authority = Self::authority(env)?;
                Ok(SignerSet::sole(env, authority))
            }
            _ => Ok(Self::perpetuals(env)?.signer_set),
        }
    }

    fn proposal_ttl(env: &Env, action: &Action) -> Option<u64> {
        match action {
            Action::Initialize(_) => None,
            _ => storage::get_perpetuals(env).and_then(|perpetuals| perpetuals.proposal_ttl),
        }
    }

    fn validate_action(env: &Env, action: &Action) -> Result<(), StockdexError> {
        match action {
            Action::Initialize(params) => {
                let signer_set =
                    SignerSet::validate(params.signers.clone(), params.min_signatures)?;
                let authority = Self::authority(env)?;
                if !signer_set.contains(&authority) {
                    return Err(StockdexError::AuthorityNotSigner);
                }
                if let Some(ttl) = params.proposal_ttl {
                    if !(MIN_PROPOSAL_TTL..=MAX_PROPOSAL_TTL).contains(&ttl) {
                        return Err(StockdexError::InvalidExpiryTime);
                    }
                }
                Ok(())
            }
            Action::SetPermission(name, _) => Operation::from_symbol(env, name).map(|_| ()),
            Action::SetPermissions(_) => Ok(()),
            Action::SetSignerSet(signers, min_signatures) => {
                SignerSet::validate(signers.clone(), *min_signatures).map(|_| ())
            }
            Action::AddPool(name) => Self::check_new_pool(&Self::perpetuals(env)?, name),
        }
    }

    fn check_new_pool(perpetuals: &Perpetuals, name: &String) -> Result<(), StockdexError> {
        if name.is_empty() || name.len() > MAX_POOL_NAME_LEN {
            return Err(StockdexError::InvalidPoolName);
        }
        if perpetuals.pools.contains(name) {
            return Err(StockdexError::PoolAlreadyExists);
        }
        Ok(())
    }

    fn execute_with(
        env: &Env,
        signers: &SignerSet,
        proposal_id: &BytesN<32>,
    ) -> Result<(ExecutionOutcome, Proposal), StockdexError> {
        let (outcome, proposal) = multisig::try_execute(env, signers, proposal_id)?;
        if outcome == ExecutionOutcome::Executed {
            Self::apply(env, &proposal.action)?;

            ProposalExecuted {
                proposal_id: proposal_id.clone(),
                approvals: signers.count_approvals(&proposal.approvals),
                timestamp: env.ledger().timestamp(),
            }
            .publish(env);
        }
        Ok((outcome, proposal))
    }

    fn apply(env: &Env, action: &Action) -> Result<(), StockdexError> {
        if let Action::Initialize(params) = action {
            if storage::has_perpetuals(env) {
                return Err(StockdexError::AlreadyInitialized);
            }
            let authority = Self::authority(env)?;
            let signer_set = SignerSet::validate(params.signers.clone(), params.min_signatures)?;
            let perpetuals = Perpetuals {
                permissions: params.permissions,
                signer_set,
                proposal_ttl: params.proposal_ttl,
                pools: Vec::new(env),
                inception_time: env.ledger().timestamp(),
            };
            storage::set_perpetuals(env, &perpetuals);

            log!(env, "stockdex initialized by {}", authority.clone());
            Initialized {
                authority,
                signers_count: perpetuals.signer_set.signers.len(),
                min_signatures: perpetuals.signer_set.min_signatures,
                timestamp: perpetuals.inception_time,
            }
            .publish(env);
            return Ok(());
        }

        let mut perpetuals = Self::perpetuals(env)?;
        match action {
            Action::SetPermission(name, value) => {
                let op = Operation::from_symbol(env, name)?;
                perpetuals.permissions = perpetuals.permissions.with_toggled(op, *value);
                PermissionSet {
                    action: name.clone(),
                    value: *value,
                }
                .publish(env);
            }
            Action::SetPermissions(permissions) => {
                perpetuals.permissions = *permissions;
                PermissionsUpdated {
                    permissions: *permissions,
                }
                .publish(env);
            }
            Action::SetSignerSet(signers, min_signatures) => {
                perpetuals.signer_set = SignerSet::validate(signers.clone(), *min_signatures)?;
                log!(env, "signer set replaced, min_signatures {}", *min_signatures);
                SignerSetUpdated {
                    signers_count: signers.len(),
                    min_signatures: *min_signatures,
                }
                .publish(env);
            }
            Action::AddPool(name) => {
                // Another proposal may have registered the name since this one was opened
                Self::check_new_pool(&perpetuals, name)?;
                perpetuals.pools.push_back(name.clone());
                log!(env, "pool added: {}", name.clone());
                PoolAdded {
                    name: name.clone(),
                    pool_count: perpetuals.pools.len(),
                }
                .publish(env);
            }
            Action::Initialize(_) => return Err(StockdexError::AlreadyInitialized),
        }
        storage::set_perpetuals(env, &perpetuals);
        Ok(())
    }
}
