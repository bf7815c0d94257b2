use shared::errors::Error;
use soroban_sdk::Env;

use crate::storage::{is_locked, set_locked};

/// Runs `f` with the ledger's reentrancy lock held.
///
/// A nested entry while the lock is held fails with `Reentrant`. On error the
/// whole invocation is rolled back by the host, lock included.
pub fn non_reentrant<T>(env: &Env, f: impl FnOnce() -> Result<T, Error>) -> Result<T, Error> {
    if is_locked(env) {
        return Err(Error::Reentrant);
    }
    set_locked(env, true);
    let result = f()?;
    set_locked(env, false);
    Ok(result)
}
