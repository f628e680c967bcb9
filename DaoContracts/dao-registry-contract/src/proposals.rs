use crate::types::{DataKey, Error, Proposal};
use crate::utils::{bump_instance, bump_persistent, reject};
use soroban_sdk::{log, symbol_short, Address, Env, String};

/// ProposalManager handles the append-only proposal sequence and the
/// execution transition of each proposal
pub struct ProposalManager;

impl ProposalManager {
    /// Create a new proposal at the end of the sequence
    ///
    /// Any authenticated address may propose; membership is not required.
    ///
    /// # Arguments
    /// * `env` - The environment object
    /// * `proposer` - The address creating the proposal
    /// * `description` - Free-form description of the proposal
    ///
    /// # Returns
    /// * `Result<u32, Error>` - The new proposal ID, `NotInitialized` or `ProposalLimitReached`
    pub fn create_proposal(
        env: &Env,
        proposer: &Address,
        description: String,
    ) -> Result<u32, Error> {
        proposer.require_auth();

        let proposal_id = Self::next_proposal_id(env)?;

        let proposal = Proposal {
            id: proposal_id,
            proposer: proposer.clone(),
            description,
            vote_count: 0,
            yes_votes: 0,
            no_votes: 0,
            executed: false,
            created_at: env.ledger().timestamp(),
        };
        Self::save(env, &proposal);

        log!(
            env,
            "dao Proposal created: id={}, proposer={}",
            proposal_id,
            proposer.clone()
        );
        env.events().publish(
            (symbol_short!("dao"), symbol_short!("prop_new")),
            (proposal_id, proposer.clone()),
        );

        Ok(proposal_id)
    }

    /// Mark a proposal as executed once yes votes strictly outweigh no votes
    ///
    /// # Arguments
    /// * `env` - The environment object
    /// * `executor` - The address triggering execution
    /// * `proposal_id` - The ID of the proposal to execute
    ///
    /// # Returns
    /// * `Result<(), Error>` - Success, `InvalidProposalId`, `AlreadyExecuted` or `InsufficientVotes`
    pub fn execute_proposal(env: &Env, executor: &Address, proposal_id: u32) -> Result<(), Error> {
        executor.require_auth();

        let mut proposal = Self::get_proposal(env, proposal_id)?;
        if proposal.executed {
            return Err(reject(env, Error::AlreadyExecuted));
        }
        if proposal.yes_votes <= proposal.no_votes {
            log!(
                env,
                "dao Execution refused: id={}, yes={}, no={}",
                proposal_id,
                proposal.yes_votes,
                proposal.no_votes
            );
            return Err(reject(env, Error::InsufficientVotes));
        }

        proposal.executed = true;
        Self::save(env, &proposal);
        bump_instance(env);

        log!(
            env,
            "dao Proposal executed: id={}, executor={}",
            proposal_id,
            executor.clone()
        );
        env.events().publish(
            (symbol_short!("dao"), symbol_short!("executed")),
            (proposal_id, executor.clone(), proposal.yes_votes, proposal.no_votes),
        );

        Ok(())
    }

    /// Get a proposal by ID
    pub fn get_proposal(env: &Env, proposal_id: u32) -> Result<Proposal, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::Proposal(proposal_id))
            .ok_or_else(|| reject(env, Error::InvalidProposalId))
    }

    /// Number of proposals ever created; also the next ID to be assigned
    pub fn proposal_count(env: &Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::ProposalCount)
            .unwrap_or(0)
    }

    pub fn save(env: &Env, proposal: &Proposal) {
        let key = DataKey::Proposal(proposal.id);
        env.storage().persistent().set(&key, proposal);
        bump_persistent(env, &key);
    }

    fn next_proposal_id(env: &Env) -> Result<u32, Error> {
        let proposal_id: u32 = env
            .storage()
            .instance()
            .get(&DataKey::ProposalCount)
            .ok_or(Error::NotInitialized)?;
        let next_id = proposal_id
            .checked_add(1)
            .ok_or_else(|| reject(env, Error::ProposalLimitReached))?;
        env.storage()
            .instance()
            .set(&DataKey::ProposalCount, &next_id);
        bump_instance(env);
        Ok(proposal_id)
    }
}
