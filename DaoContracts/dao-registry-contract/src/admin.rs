use crate::types::{DataKey, Error};
use crate::utils::{bump_instance, reject};
use soroban_sdk::{log, symbol_short, Address, Env};

/// Decides whether a caller may mutate the member ledger.
///
/// The member ledger only ever asks this question, so a different policy
/// (several owners, role lookups) can be swapped in without touching
/// membership or voting code.
pub trait Authority {
    fn authorize(env: &Env, caller: &Address) -> Result<(), Error>;
}

/// Single-owner policy: the caller must sign and be the stored owner
pub struct OwnerAuthority;

impl Authority for OwnerAuthority {
    fn authorize(env: &Env, caller: &Address) -> Result<(), Error> {
        caller.require_auth();

        let owner = AdminModule::get_owner(env)?;
        if owner != *caller {
            return Err(reject(env, Error::Unauthorized));
        }

        Ok(())
    }
}

pub struct AdminModule;

impl AdminModule {
    /// Initialize the registry with its owner
    ///
    /// # Arguments
    /// * `env` - The environment object
    /// * `owner` - The address allowed to add and remove members
    ///
    /// # Returns
    /// * `Result<(), Error>` - Success or `AlreadyInitialized`
    pub fn init(env: &Env, owner: &Address) -> Result<(), Error> {
        // Prevent re-initialization
        if env.storage().instance().has(&DataKey::Owner) {
            return Err(reject(env, Error::AlreadyInitialized));
        }

        owner.require_auth();

        env.storage().instance().set(&DataKey::Owner, owner);
        env.storage().instance().set(&DataKey::ProposalCount, &0u32);
        bump_instance(env);

        log!(env, "dao Registry initialized: owner={}", owner.clone());
        env.events()
            .publish((symbol_short!("dao"), symbol_short!("init")), owner.clone());

        Ok(())
    }

    /// Get the registry owner
    pub fn get_owner(env: &Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Owner)
            .ok_or(Error::NotInitialized)
    }
}
