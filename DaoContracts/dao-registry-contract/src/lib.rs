#![no_std]
use soroban_sdk::{contract, contractimpl, Address, Env, String};

pub mod admin;
pub mod members;
pub mod proposals;
pub mod types;
pub mod utils;
pub mod voting;

use admin::{AdminModule, OwnerAuthority};
use members::MemberLedger;
use proposals::ProposalManager;
use types::{Error, Member, Proposal, VoteChoice};
use voting::VotingSystem;

/// Main contract trait defining all available functions
pub trait DaoRegistryTrait {
    // Owner functions
    fn init(env: Env, owner: Address) -> Result<(), Error>;
    fn owner(env: Env) -> Result<Address, Error>;

    // Membership
    fn add_member(env: Env, caller: Address, member: Address) -> Result<(), Error>;
    fn remove_member(env: Env, caller: Address, member: Address) -> Result<(), Error>;
    fn is_member(env: Env, member: Address) -> bool;
    fn get_member_info(env: Env, member: Address) -> Member;

    // Proposals
    fn create_proposal(env: Env, caller: Address, description: String) -> Result<u32, Error>;
    fn get_proposal(env: Env, proposal_id: u32) -> Result<Proposal, Error>;
    fn proposal_count(env: Env) -> u32;

    // Voting and execution
    fn vote_yes(env: Env, caller: Address, proposal_id: u32, amount: u128) -> Result<(), Error>;
    fn vote_no(env: Env, caller: Address, proposal_id: u32, amount: u128) -> Result<(), Error>;
    fn execute_proposal(env: Env, caller: Address, proposal_id: u32) -> Result<(), Error>;
}

#[contract]
pub struct DaoRegistry;

#[contractimpl]
impl DaoRegistryTrait for DaoRegistry {
    fn init(env: Env, owner: Address) -> Result<(), Error> {
        AdminModule::init(&env, &owner)
    }

    fn owner(env: Env) -> Result<Address, Error> {
        AdminModule::get_owner(&env)
    }

    fn add_member(env: Env, caller: Address, member: Address) -> Result<(), Error> {
        MemberLedger::add_member::<OwnerAuthority>(&env, &caller, &member)
    }

    fn remove_member(env: Env, caller: Address, member: Address) -> Result<(), Error> {
        MemberLedger::remove_member::<OwnerAuthority>(&env, &caller, &member)
    }

    fn is_member(env: Env, member: Address) -> bool {
        MemberLedger::is_member(&env, &member)
    }

    fn get_member_info(env: Env, member: Address) -> Member {
        MemberLedger::get_member_info(&env, &member)
    }

    fn create_proposal(env: Env, caller: Address, description: String) -> Result<u32, Error> {
        ProposalManager::create_proposal(&env, &caller, description)
    }

    fn get_proposal(env: Env, proposal_id: u32) -> Result<Proposal, Error> {
        ProposalManager::get_proposal(&env, proposal_id)
    }

    fn proposal_count(env: Env) -> u32 {
        ProposalManager::proposal_count(&env)
    }

    fn vote_yes(env: Env, caller: Address, proposal_id: u32, amount: u128) -> Result<(), Error> {
        VotingSystem::cast_vote(&env, &caller, proposal_id, VoteChoice::Yes, amount)
    }

    fn vote_no(env: Env, caller: Address, proposal_id: u32, amount: u128) -> Result<(), Error> {
        VotingSystem::cast_vote(&env, &caller, proposal_id, VoteChoice::No, amount)
    }

    fn execute_proposal(env: Env, caller: Address, proposal_id: u32) -> Result<(), Error> {
        ProposalManager::execute_proposal(&env, &caller, proposal_id)
    }
}
