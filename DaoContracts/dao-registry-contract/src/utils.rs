use crate::types::{
    Error, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT,
    PERSISTENT_LIFETIME_THRESHOLD,
};
use soroban_sdk::{log, Env, IntoVal, String, Val};

/// Log a rejected operation and hand the error back for propagation
///
/// # Arguments
/// * `env` - The environment object
/// * `err` - The error the operation fails with
///
/// # Returns
/// * `Error` - The same error, so call sites can write `return Err(reject(env, e))`
pub fn reject(env: &Env, err: Error) -> Error {
    log!(
        env,
        "dao Operation rejected: code={}, reason={}",
        err as u32,
        String::from_str(env, err.reason())
    );
    err
}

/// Keep the contract instance (owner, counters) alive
pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// Keep a persistent entry alive after it has been written
pub fn bump_persistent<K>(env: &Env, key: &K)
where
    K: IntoVal<Env, Val>,
{
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}
