use crate::admin::Authority;
use crate::types::{DataKey, Error, Member, INITIAL_TOKEN_ALLOTMENT};
use crate::utils::{bump_instance, bump_persistent, reject};
use soroban_sdk::{log, symbol_short, Address, Env};

/// MemberLedger owns membership records and the voting-token balances
/// attached to them
pub struct MemberLedger;

impl MemberLedger {
    /// Add (or re-add) a member with a fresh token allotment
    ///
    /// Re-adding an existing member resets the balance instead of topping it up.
    ///
    /// # Arguments
    /// * `env` - The environment object
    /// * `caller` - The address requesting the change, checked by `A`
    /// * `member` - The address being granted membership
    ///
    /// # Returns
    /// * `Result<(), Error>` - Success or `Unauthorized`
    pub fn add_member<A: Authority>(
        env: &Env,
        caller: &Address,
        member: &Address,
    ) -> Result<(), Error> {
        A::authorize(env, caller)?;

        let record = Member {
            member_address: Some(member.clone()),
            token_balance: INITIAL_TOKEN_ALLOTMENT,
        };
        Self::save(env, member, &record);
        bump_instance(env);

        log!(
            env,
            "dao Member added: member={}, balance={}",
            member.clone(),
            INITIAL_TOKEN_ALLOTMENT
        );
        env.events().publish(
            (symbol_short!("dao"), symbol_short!("mbr_add")),
            (member.clone(), INITIAL_TOKEN_ALLOTMENT),
        );

        Ok(())
    }

    /// Remove a member, leaving the sentinel record behind
    ///
    /// Removing an address that is not a member succeeds without changes.
    ///
    /// # Arguments
    /// * `env` - The environment object
    /// * `caller` - The address requesting the change, checked by `A`
    /// * `member` - The address losing membership
    ///
    /// # Returns
    /// * `Result<(), Error>` - Success or `Unauthorized`
    pub fn remove_member<A: Authority>(
        env: &Env,
        caller: &Address,
        member: &Address,
    ) -> Result<(), Error> {
        A::authorize(env, caller)?;

        let key = DataKey::Member(member.clone());
        if !env.storage().persistent().has(&key) {
            log!(env, "dao Remove skipped, not a member: {}", member.clone());
            return Ok(());
        }

        env.storage().persistent().remove(&key);
        bump_instance(env);

        log!(env, "dao Member removed: {}", member.clone());
        env.events().publish(
            (symbol_short!("dao"), symbol_short!("mbr_rm")),
            member.clone(),
        );

        Ok(())
    }

    pub fn is_member(env: &Env, member: &Address) -> bool {
        Self::get_member_info(env, member).is_active()
    }

    /// Membership record, or the sentinel for non-members
    pub fn get_member_info(env: &Env, member: &Address) -> Member {
        env.storage()
            .persistent()
            .get(&DataKey::Member(member.clone()))
            .unwrap_or_else(Member::sentinel)
    }

    /// Member record with `amount` voting tokens taken off, not yet stored
    ///
    /// Callers validate everything else they need and then `save` the record,
    /// so a rejected vote never touches storage.
    ///
    /// # Returns
    /// * `Result<Member, Error>` - The debited record, `NotMember` or `InsufficientTokens`
    pub fn debited(env: &Env, member: &Address, amount: u128) -> Result<Member, Error> {
        let mut record = Self::get_member_info(env, member);
        if !record.is_active() {
            return Err(reject(env, Error::NotMember));
        }
        if amount > record.token_balance {
            return Err(reject(env, Error::InsufficientTokens));
        }

        record.token_balance -= amount;
        Ok(record)
    }

    pub fn save(env: &Env, member: &Address, record: &Member) {
        let key = DataKey::Member(member.clone());
        env.storage().persistent().set(&key, record);
        bump_persistent(env, &key);
    }
}
