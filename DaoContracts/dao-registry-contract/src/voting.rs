use crate::members::MemberLedger;
use crate::proposals::ProposalManager;
use crate::types::{Error, VoteChoice};
use crate::utils::{bump_instance, reject};
use soroban_sdk::{log, symbol_short, Address, Env};

/// VotingSystem moves voting tokens from a member's balance into a
/// proposal's yes or no tally
pub struct VotingSystem;

impl VotingSystem {
    /// Cast `amount` tokens of vote weight on a proposal
    ///
    /// The debit and the tally update are written together, after every
    /// check has passed. A zero amount is accepted and changes nothing.
    /// Executed proposals still accept votes; their `executed` flag never resets.
    ///
    /// # Arguments
    /// * `env` - The environment object
    /// * `voter` - The member casting the vote
    /// * `proposal_id` - The ID of the proposal being voted on
    /// * `choice` - Which tally receives the weight
    /// * `amount` - Tokens to spend from the voter's balance
    ///
    /// # Returns
    /// * `Result<(), Error>` - Success or an error
    pub fn cast_vote(
        env: &Env,
        voter: &Address,
        proposal_id: u32,
        choice: VoteChoice,
        amount: u128,
    ) -> Result<(), Error> {
        voter.require_auth();

        let mut proposal = ProposalManager::get_proposal(env, proposal_id)?;
        let member = MemberLedger::debited(env, voter, amount)?;

        let tally = match choice {
            VoteChoice::Yes => &mut proposal.yes_votes,
            VoteChoice::No => &mut proposal.no_votes,
        };
        *tally = tally
            .checked_add(amount)
            .ok_or_else(|| reject(env, Error::TallyOverflow))?;

        MemberLedger::save(env, voter, &member);
        ProposalManager::save(env, &proposal);
        bump_instance(env);

        log!(
            env,
            "dao Vote cast: voter={}, proposal_id={}, amount={}, yes={}, no={}, balance={}",
            voter.clone(),
            proposal_id,
            amount,
            proposal.yes_votes,
            proposal.no_votes,
            member.token_balance
        );
        env.events().publish(
            (symbol_short!("dao"), symbol_short!("vote")),
            (proposal_id, voter.clone(), choice, amount),
        );

        Ok(())
    }
}
