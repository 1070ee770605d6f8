use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum StockdexError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    InvalidThreshold = 3,
    DuplicateSigner = 4,
    UnauthorizedSigner = 6,
    /// The initial signer list must include the upgrade authority.
    AuthorityNotSigner = 7,
    UnknownAction = 8,
    /// The protocol action is switched off in the permission registry.
    ActionDisabled = 9,
    NoSuchProposal = 10,
    DuplicateProposal = 11,
    AlreadyExecuted = 12,
    ProposalExpired = 13,
    InvalidExpiryTime = 14,
    /// Pool names must be non-empty and at most 64 bytes.
    InvalidPoolName = 15,
    PoolAlreadyExists = 16,
}
