use soroban_sdk::{contracterror, contracttype, Address, String};

/// Voting tokens granted to a member when the owner adds them
pub const INITIAL_TOKEN_ALLOTMENT: u128 = 100;

// Storage TTL, in ledgers (~5s each)
pub const DAY_IN_LEDGERS: u32 = 17280;
pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Membership record. `member_address` is `None` for the sentinel
/// (non-member) record, which always carries a zero balance.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Member {
    pub member_address: Option<Address>,
    pub token_balance: u128,
}

impl Member {
    pub fn sentinel() -> Self {
        Member {
            member_address: None,
            token_balance: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.member_address.is_some()
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub id: u32,
    pub proposer: Address,
    pub description: String,
    /// Kept for ABI compatibility; no operation updates it.
    pub vote_count: u128,
    pub yes_votes: u128,
    pub no_votes: u128,
    pub executed: bool,
    pub created_at: u64,
}

/// Which tally a vote is added to
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VoteChoice {
    Yes,
    No,
}

/// Storage keys for contract data
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owner,            // Contract owner (instance)
    ProposalCount,    // Next proposal id (instance)
    Member(Address),  // Address -> Member (persistent)
    Proposal(u32),    // Proposal id -> Proposal (persistent)
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // Initialization Errors
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    // Proposal Errors
    InvalidProposalId = 101,
    ProposalLimitReached = 102,
    // Voting Errors
    NotMember = 201,
    InsufficientTokens = 202,
    TallyOverflow = 203,
    // Execution Errors
    InsufficientVotes = 301,
    AlreadyExecuted = 302,
}

impl Error {
    /// Human-readable reason for the failure
    pub fn reason(&self) -> &'static str {
        match self {
            Error::NotInitialized => "Contract not initialized",
            Error::AlreadyInitialized => "Contract already initialized",
            Error::Unauthorized => "Caller is not authorized",
            Error::InvalidProposalId => "Proposal does not exist",
            Error::ProposalLimitReached => "Proposal id space exhausted",
            Error::NotMember => "Caller is not a member",
            Error::InsufficientTokens => "Not enough tokens to vote",
            Error::TallyOverflow => "Vote tally overflow",
            Error::InsufficientVotes => "Do not have enough votes",
            Error::AlreadyExecuted => "Proposal already executed",
        }
    }
}
