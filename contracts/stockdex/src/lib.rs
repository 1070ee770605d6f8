#![no_std]

//! Stockdex governance: a multisig-gated registry of trading permissions.
//!
//! Every privileged change, from provisioning the protocol to registering a
//! pool or replacing the signer set, is submitted to the [`Stockdex`]
//! contract as an [`Action`]. The contract fingerprints the action, collects
//! approvals from the current signers and applies it exactly once when quorum
//! is reached.
//! Trading code calls `require_allowed` before acting.

mod errors;
mod events;
mod gateway;
mod multisig;
mod permissions;
mod signer_set;
mod storage;
mod types;

pub use errors::StockdexError;
pub use gateway::{Stockdex, StockdexClient};
pub use permissions::{Operation, Permissions};
pub use signer_set::SignerSet;
pub use types::{
    Action, ExecutionOutcome, InitParams, Perpetuals, Proposal, ProposalStatus, SubmitReceipt,
};
