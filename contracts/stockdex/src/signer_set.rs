use soroban_sdk::{contracttype, vec, Address, Env, Vec};

use crate::errors::StockdexError;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SignerSet {
    pub signers: Vec<Address>,
    pub min_signatures: u32,
}

impl SignerSet {
    pub fn validate(signers: Vec<Address>, min_signatures: u32) -> Result<Self, StockdexError> {
        if min_signatures == 0 || min_signatures > signers.len() {
            return Err(StockdexError::InvalidThreshold);
        }

        for i in 0..signers.len() {
            for j in (i + 1)..signers.len() {
                if signers.get_unchecked(i) == signers.get_unchecked(j) {
                    return Err(StockdexError::DuplicateSigner);
                }
            }
        }

        Ok(Self {
            signers,
            min_signatures,
        })
    }

    /// Single-signer set used to govern the bootstrap `Initialize` action.
    pub fn sole(env: &Env, signer: Address) -> Self {
        Self {
            signers: vec![env, signer],
            min_signatures: 1,
        }
    }

    pub fn contains(&self, identity: &Address) -> bool {
        self.signers.contains(identity)
    }

    /// Number of `approvals` cast by addresses that are signers right now.
    pub fn count_approvals(&self, approvals: &Vec<Address>) -> u32 {
        approvals
            .iter()
            .filter(|approver| self.contains(approver))
            .count() as u32
    }

    pub fn has_quorum(&self, approvals: &Vec<Address>) -> bool {
        self.count_approvals(approvals) >= self.min_signatures
    }
}
